use contracts::domain::a002_menu_item::aggregate::MenuItem;
use leptos::prelude::*;

use crate::shared::data::PagedListState;

pub type MenuItemListState = PagedListState<MenuItem>;

pub fn create_state() -> RwSignal<MenuItemListState> {
    RwSignal::new(MenuItemListState::default())
}
