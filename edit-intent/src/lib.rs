//! Prompt intent classification over a project manifest.
//!
//! Public API: [`classify`]. It matches a free-text prompt against an ordered
//! regex pattern table (Flutter-specific groups first, then general React
//! groups, then a low-confidence default), runs the matched group's file
//! resolver to pick target files, and returns an [`EditIntent`] with a
//! deterministic confidence score and the remaining manifest files as
//! suggested background context.
//!
//! Casing discipline: pattern matching runs on a lowercased copy of the
//! prompt, while resolvers receive the original-case prompt so that name
//! extraction keeps accurate casing.

mod classify;
mod model;
mod patterns;

pub mod resolvers;

pub use classify::classify;
pub use model::{EditIntent, EditType};
pub use resolvers::PubspecTarget;
