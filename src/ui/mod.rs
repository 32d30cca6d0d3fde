// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (header, drawer, content, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - header / drawer: Navigation chrome
// - home, directory, campsite_info, reservation, about, contact, favorites: Screens
// - card: Shared bordered card and collection placeholders
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar (backend, network, favorites)
// - dialogs: Renders prompts, the comment modal and the share sheet
// - toast: Renders toast notifications (brief pop-up messages)

pub mod about;
pub mod campsite_info;
pub mod card;
pub mod contact;
pub mod dialogs;
pub mod directory;
pub mod drawer;
pub mod favorites;
pub mod header;
pub mod home;
pub mod layout;
pub mod legend;
pub mod render;
pub mod reservation;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
