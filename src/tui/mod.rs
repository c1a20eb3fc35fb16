// src/tui/mod.rs — Full-screen chat view.
//
// Built with ratatui. Launch via `haqooq` or `haqooq chat`.

pub mod app;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::run_chat_view;
