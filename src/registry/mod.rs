//! Source registry.
//!
//! A fixed, ordered set of named sources, each bound to a seed capability.
//! The set is decided at construction and never changes afterwards; the draw
//! operation lives in [`helpers`] as a free function over the registry.

pub mod entry;
pub mod helpers;

pub use entry::{SourceEntry, SourceKind, SourceRegistry};
pub use helpers::{draw, draw_from_seed};
