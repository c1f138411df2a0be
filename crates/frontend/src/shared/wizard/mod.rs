//! Generic multi-step form controller.
//!
//! Every resource wizard in the suite (deals, menu, inventory, events,
//! places, compliance) instantiates this one engine with its own draft DTO,
//! rule set and step definitions instead of re-implementing the provider
//! plumbing per module.

mod controller;
mod core;
mod flush;
mod schema;

pub use controller::{use_wizard, SubmitCtx, WizardController};
pub use core::WizardCore;
pub use flush::FlushRegistry;
pub use schema::{StepDefinition, WizardSchema};
