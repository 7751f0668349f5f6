//! Page sections and shared UI pieces

pub mod ai_chat;
pub mod contact;
pub mod editors;
pub mod hero;
pub mod language_switcher;
pub mod nav;
pub mod projects;
pub mod scroll_progress;
pub mod skills;
pub mod skills_radar;
pub mod timeline;
pub mod toast;
