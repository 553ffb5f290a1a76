//! Shared data model layer (structs only).
//!
//! ## Purpose
//! - Keep report/output structs in one place.
//! - Make `--json` output schema changes explicit and reviewable.
//!
//! ## Rule of thumb
//! Domain types are data-only: no filesystem side effects.

pub mod models;
