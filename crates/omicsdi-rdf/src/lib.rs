//! OmicsDI RDF Library
//!
//! Converts OmicsDI XML exports (ArrayExpress, PRIDE, MetaboLights, EGA, ...)
//! into RDF described with the `odio` ontology, serialized as Turtle.
//!
//! # Pipeline
//!
//! 1. [`document`]: parse the export into a permissive serde model
//! 2. [`transform`]: map the database and each entry onto triples using the
//!    lookup tables in [`registry`]
//! 3. [`turtle`]: write the triples with the fixed prefix table
//!
//! Nothing is written until the whole export converted successfully.
//!
//! # Example
//!
//! ```no_run
//! use omicsdi_rdf::{convert_file, registry::Registry};
//!
//! fn main() -> anyhow::Result<()> {
//!     let registry = Registry::builtin();
//!     let turtle = convert_file("PRIDE_EBEYE_1.xml", &registry)?;
//!     std::io::Write::write_all(&mut std::io::stdout(), &turtle)?;
//!     Ok(())
//! }
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod document;
pub mod graph;
pub mod registry;
pub mod transform;
pub mod turtle;
pub mod vocab;

use omicsdi_common::Result;
use std::path::Path;
use tracing::info;

pub use document::DatabaseDocument;
pub use graph::TripleBuffer;
pub use registry::Registry;

/// Convert XML text to Turtle
pub fn convert_str(xml: &str, registry: &Registry) -> Result<Vec<u8>> {
    let document = DatabaseDocument::parse(xml)?;
    let buffer = transform::transform(&document, registry)?;
    turtle::to_turtle(&buffer)
}

/// Convert an export file (plain or `.gz`) to Turtle
pub fn convert_file(path: impl AsRef<Path>, registry: &Registry) -> Result<Vec<u8>> {
    let path = path.as_ref();
    info!(input = %path.display(), "Reading export");

    let document = DatabaseDocument::from_file(path)?;
    let buffer = transform::transform(&document, registry)?;
    turtle::to_turtle(&buffer)
}
