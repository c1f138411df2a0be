use contracts::domain::a005_place::aggregate::Place;
use leptos::prelude::*;

use crate::shared::data::PagedListState;

pub type PlaceListState = PagedListState<Place>;

pub fn create_state() -> RwSignal<PlaceListState> {
    RwSignal::new(PlaceListState::default())
}
