//! UI Components for Al-Majlis.

mod greeting_grid;
mod hero_card;
mod share_panel;
mod vibe_panel;

pub use greeting_grid::GreetingGrid;
pub use hero_card::HeroCard;
pub use share_panel::SharePanel;
pub use vibe_panel::VibePanel;
