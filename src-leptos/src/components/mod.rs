//! Reusable UI components

mod sidebar;
mod stats_card;
mod button;
mod modal;
mod campaign_card;
mod campaign_form_modal;
mod character_card;
mod character_form_modal;
pub mod select;

pub use sidebar::Sidebar;
pub use stats_card::StatsCard;
pub use button::{Button, ButtonVariant};
pub use modal::{Modal, ModalType};
pub use campaign_card::CampaignCard;
pub use campaign_form_modal::CampaignFormModal;
pub use character_card::CharacterCard;
pub use character_form_modal::CharacterFormModal;
pub use select::{Select, SelectOption, SelectValue, SelectionChange};
