//! Turtle serialization with the fixed prefix table

use omicsdi_common::{OmicsError, Result};
use oxigraph::io::{RdfFormat, RdfSerializer};

use crate::graph::TripleBuffer;
use crate::vocab::{dc, dct, odio, pav, rdf, rdfs, sio, skos};

/// Prefix bindings written at the top of every document
pub const PREFIXES: [(&str, &str); 8] = [
    ("rdf", rdf::NS),
    ("rdfs", rdfs::NS),
    ("dc", dc::NS),
    ("dct", dct::NS),
    ("skos", skos::NS),
    ("pav", pav::NS),
    ("sio", sio::NS),
    ("odio", odio::NS),
];

/// Serialize the buffer as Turtle, subjects grouped in first-seen order
pub fn to_turtle(buffer: &TripleBuffer) -> Result<Vec<u8>> {
    let mut serializer = RdfSerializer::from_format(RdfFormat::Turtle);
    for (prefix, namespace) in PREFIXES {
        serializer = serializer
            .with_prefix(prefix, namespace)
            .map_err(|e| OmicsError::InvalidIri(format!("prefix {prefix}: {e}")))?;
    }

    let mut writer = serializer.for_writer(Vec::new());
    for triple in buffer.grouped() {
        writer
            .serialize_triple(triple.as_ref())
            .map_err(|e| OmicsError::Serialization(e.to_string()))?;
    }

    writer
        .finish()
        .map_err(|e| OmicsError::Serialization(e.to_string()))
}
