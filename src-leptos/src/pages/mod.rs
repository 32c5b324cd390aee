//! Page components

mod campaigns;
mod characters;
mod dashboard;

pub use campaigns::Campaigns;
pub use characters::Characters;
pub use dashboard::Dashboard;
