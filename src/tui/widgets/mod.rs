// src/tui/widgets/mod.rs — Panels of the chat view.

pub mod banner;
pub mod input;
pub mod transcript;
pub mod welcome;
