//! Quote sources available to the ticker.
//!
//! - `synthetic`: random-walk generator for demos without any data.
//! - `replay`: plays back quotes recorded in a JSON-lines file.

pub mod replay;
pub mod synthetic;
