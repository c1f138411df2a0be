use contracts::domain::a003_inventory::aggregate::{Catalog, InventoryProduct};
use leptos::prelude::*;

use crate::shared::data::PagedListState;

pub type ProductListState = PagedListState<InventoryProduct>;
pub type CatalogListState = PagedListState<Catalog>;

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}

pub fn create_catalog_state() -> RwSignal<CatalogListState> {
    RwSignal::new(CatalogListState::default())
}
