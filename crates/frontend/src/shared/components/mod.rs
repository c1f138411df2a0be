pub mod empty_state;
pub mod file_picker;
pub mod filter_panel;
pub mod pagination_controls;
pub mod search_input;
pub mod stepper;
pub mod ui;

pub use empty_state::EmptyState;
pub use file_picker::FilePicker;
pub use filter_panel::FilterPanel;
pub use pagination_controls::PaginationControls;
pub use search_input::SearchInput;
pub use stepper::Stepper;
