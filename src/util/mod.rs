//! Utility modules for scour.

pub mod intersect;
pub mod ordered_set;

// Re-export commonly used types
pub use intersect::intersect;
pub use ordered_set::OrderedSet;
