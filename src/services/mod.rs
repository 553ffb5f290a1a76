//! Service layer containing side-effect helpers.
//!
//! ## Service map
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Keep command handling in `main.rs` thin; delegate here.

pub mod output;
