// src/lib.rs — Library root for Haqooq

pub mod cli;
pub mod client;
pub mod infra;
pub mod landing;
pub mod session;
pub mod tui;
pub mod util;
