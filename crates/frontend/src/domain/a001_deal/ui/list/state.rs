use contracts::domain::a001_deal::aggregate::{Campaign, Deal};
use leptos::prelude::*;

use crate::shared::data::PagedListState;

pub type DealListState = PagedListState<Deal>;
pub type CampaignListState = PagedListState<Campaign>;

pub fn create_state() -> RwSignal<DealListState> {
    RwSignal::new(DealListState::default())
}

pub fn create_campaign_state() -> RwSignal<CampaignListState> {
    RwSignal::new(CampaignListState::default())
}
