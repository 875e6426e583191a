//! OmicsDI Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared error handling and logging for the OmicsDI RDF workspace.
//!
//! # Overview
//!
//! - **Error Handling**: the [`OmicsError`] taxonomy and [`Result`] alias
//! - **Logging**: tracing subscriber setup driven by [`logging::LogConfig`]
//!
//! # Example
//!
//! ```no_run
//! use omicsdi_common::{OmicsError, Result};
//!
//! fn lookup(name: &str) -> Result<&'static str> {
//!     match name {
//!         "pride" => Ok("http://www.omicsdi.org/dataset/pride/"),
//!         other => Err(OmicsError::UnknownDatabase(other.to_string())),
//!     }
//! }
//! ```

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{OmicsError, Result};
