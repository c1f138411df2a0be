use contracts::domain::a004_event::aggregate::Event;
use leptos::prelude::*;

use crate::shared::data::PagedListState;

pub type EventListState = PagedListState<Event>;

pub fn create_state() -> RwSignal<EventListState> {
    RwSignal::new(EventListState::default())
}
