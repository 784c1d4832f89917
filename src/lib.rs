//! Scaffolding for Next.js + React + Tailwind front-end projects.
//!
//! Two entry points live in [`actions`]: [`actions::generate_basics`] writes starter pages and
//! config files, [`actions::scaffold_project`] lays out the project's directory skeleton. Both
//! only write files that are missing unless overwrite is forced.
mod api;
pub mod content;
pub mod errors;
pub mod layout;
pub mod plan;
pub mod preview;
pub mod report;
pub mod writer;

// Public API
pub mod actions {
    pub use crate::api::{generate_basics, scaffold_project, ScaffoldError};
}
