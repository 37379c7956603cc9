// Engine crate: all game rules live here, the binary is a thin front-end.

pub mod deck;
pub mod error;
pub mod picker;
pub mod solo;
pub mod state;
pub mod types;
