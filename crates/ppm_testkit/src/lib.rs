//! # ppm Testkit
//!
//! Test utilities for ppm.
//!
//! This crate provides:
//! - Temporary store fixtures that clean up after themselves
//! - Property-based test generators using proptest
//! - A model-checking harness for store operations
//! - Known-answer vectors for the password file format
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ppm_testkit::prelude::*;
//!
//! #[test]
//! fn test_with_store() {
//!     with_temp_store(|store| {
//!         store.add("github", "pw1").unwrap();
//!     });
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod integration;
pub mod vectors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::integration::*;
    pub use crate::vectors::*;
}

pub use fixtures::*;
pub use generators::*;
pub use integration::*;
pub use vectors::*;
