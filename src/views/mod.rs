//! Full-screen views layered over the page

pub mod admin_panel;
