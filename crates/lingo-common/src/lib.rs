//! # Lingo Common
//!
//! Shared error types, language-code utilities, and test helpers for the
//! lingo workspace.
//!
//! This crate provides the foundational types and utilities used across
//! all other crates in the lingo workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
pub use utils::*;
