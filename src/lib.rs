//! Core library for the easymap command line utility.
//!
//! The library exposes the three stages that power the command-line
//! interface as well as the tests. The modules are structured to keep
//! responsibilities narrow and composable: shared-link validation and path
//! derivation live in [`config`], the remote fetcher in [`fetch`], the
//! mapping loader in [`mapping`], and the row transformer in [`transform`].

pub mod config;
pub mod error;
pub mod fetch;
pub mod mapping;
pub mod transform;

pub use error::{MapError, Result};
