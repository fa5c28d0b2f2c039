//! Text analysis module for scour.
//!
//! Analysis is the two-step pipeline every field value and every query goes
//! through: a [`Tokenizer`] splits the text, then a [`Normalizer`] maps each
//! token to its index key.

pub mod normalizer;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use normalizer::*;
pub use token::*;
pub use tokenizer::*;
