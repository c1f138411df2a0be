use leptos::prelude::*;

use super::sidebar::Sidebar;
use crate::domain::a001_deal::ui::list::DealList;
use crate::domain::a002_menu_item::ui::list::MenuItemList;
use crate::domain::a003_inventory::ui::list::InventoryPage;
use crate::domain::a004_event::ui::list::EventList;
use crate::domain::a005_place::ui::list::PlaceList;
use crate::domain::a006_kyc::ui::page::CompliancePage;
use crate::shared::modal_stack::ModalHost;
use crate::shared::toast::ToastHost;

/// Top-level sections of the suite, one per resource module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Deals,
    Menu,
    Inventory,
    Events,
    Places,
    Compliance,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Deals,
        Section::Menu,
        Section::Inventory,
        Section::Events,
        Section::Places,
        Section::Compliance,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Deals => "Deals",
            Section::Menu => "Menu",
            Section::Inventory => "Inventory",
            Section::Events => "Events",
            Section::Places => "Places",
            Section::Compliance => "Compliance",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Section::Deals => "deals",
            Section::Menu => "menu",
            Section::Inventory => "inventory",
            Section::Events => "events",
            Section::Places => "places",
            Section::Compliance => "compliance",
        }
    }
}

/// Main application shell: sidebar navigation plus the active section.
/// Also mounts the modal and toast hosts, exactly once.
#[component]
pub fn Shell() -> impl IntoView {
    let active = RwSignal::new(Section::Deals);

    view! {
        <div class="shell">
            <Sidebar active=active />
            <main class="shell__content">
                {move || match active.get() {
                    Section::Deals => view! { <DealList /> }.into_any(),
                    Section::Menu => view! { <MenuItemList /> }.into_any(),
                    Section::Inventory => view! { <InventoryPage /> }.into_any(),
                    Section::Events => view! { <EventList /> }.into_any(),
                    Section::Places => view! { <PlaceList /> }.into_any(),
                    Section::Compliance => view! { <CompliancePage /> }.into_any(),
                }}
            </main>
            <ModalHost />
            <ToastHost />
        </div>
    }
}
