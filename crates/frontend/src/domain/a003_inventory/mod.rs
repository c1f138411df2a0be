pub mod model;
pub mod rules;
pub mod ui;
