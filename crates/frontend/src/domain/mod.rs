pub mod a001_deal;
pub mod a002_menu_item;
pub mod a003_inventory;
pub mod a004_event;
pub mod a005_place;
pub mod a006_kyc;
