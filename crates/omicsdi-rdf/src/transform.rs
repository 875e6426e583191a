//! Entry transformer: OmicsDI export → odio triples

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use omicsdi_common::{OmicsError, Result};
use oxigraph::model::vocab::xsd;
use oxigraph::model::{Literal, NamedNode, NamedOrBlankNode, Term, Triple};
use tracing::{debug, info, instrument};

use crate::document::{non_empty, CrossReference, DatabaseDocument, DateEvent, Entry, Field};
use crate::graph::TripleBuffer;
use crate::registry::{normalize_dbname, DateKind, Registry, SourceDatabase};
use crate::vocab::{dc, dct, odio, pav, rdf, rdfs, sio, skos};

/// Local name of the odio class typing every entry of `database`.
///
/// Only a leading lowercase `p` is capitalised: `pride` → `PrideEntry`,
/// `ArrayExpress` → `ArrayExpressEntry`, `gnps` → `gnpsEntry`.
pub fn entry_class_name(database: &str) -> String {
    match database.strip_prefix('p') {
        Some(rest) => format!("P{rest}Entry"),
        None => format!("{database}Entry"),
    }
}

/// Converts one parsed export into triples
pub struct Transformer<'r> {
    registry: &'r Registry,
    buffer: TripleBuffer,
}

impl<'r> Transformer<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            buffer: TripleBuffer::new(),
        }
    }

    /// Run the whole pass; the first fatal condition aborts it
    #[instrument(skip_all)]
    pub fn transform(mut self, document: &DatabaseDocument) -> Result<TripleBuffer> {
        let name = non_empty(&document.name)
            .ok_or_else(|| OmicsError::MissingElement("database/name".to_string()))?;
        let registry = self.registry;
        let database = registry.database(name)?;

        self.emit_database(name, database, document)?;

        let class = odio_term(&entry_class_name(name))?;
        for entry in document.entries() {
            self.emit_entry(database, &class, entry)?;
        }

        info!(
            database = name,
            entries = document.entries().len(),
            triples = self.buffer.len(),
            "Transformed export"
        );
        Ok(self.buffer)
    }

    fn emit_database(
        &mut self,
        name: &str,
        database: &SourceDatabase,
        document: &DatabaseDocument,
    ) -> Result<()> {
        let subject = iri(&database.homepage)?;

        self.add(subject.clone(), rdf::TYPE, sio::DATABASE);
        self.add(subject.clone(), rdfs::LABEL, Literal::new_simple_literal(name));

        if let Some(description) = non_empty(&document.description) {
            self.add(subject.clone(), dct::DESCRIPTION, Literal::new_simple_literal(description));
        }
        if let Some(release) = non_empty(&document.release) {
            self.add(subject.clone(), pav::VERSION, Literal::new_simple_literal(release));
        }

        let release_date = non_empty(&document.release_date)
            .ok_or_else(|| OmicsError::MissingElement("database/release_date".to_string()))?;
        self.add(subject.clone(), dct::AVAILABLE, Literal::new_simple_literal(release_date));

        Ok(())
    }

    fn emit_entry(
        &mut self,
        database: &SourceDatabase,
        class: &NamedNode,
        entry: &Entry,
    ) -> Result<()> {
        let id = non_empty(&entry.id).ok_or_else(|| OmicsError::missing_attribute("entry", "id"))?;
        let subject = iri(&format!("{}{}", database.entity_prefix, id))?;

        let title = non_empty(&entry.name)
            .ok_or_else(|| OmicsError::MissingElement(format!("entry[@id='{id}']/name")))?;

        self.add(subject.clone(), rdf::TYPE, class.as_ref());
        self.add(subject.clone(), dct::IDENTIFIER, Literal::new_simple_literal(id));
        self.add(subject.clone(), dct::TITLE, Literal::new_simple_literal(title));
        self.add(subject.clone(), rdfs::LABEL, Literal::new_simple_literal(title));

        let optional = [
            (dct::DESCRIPTION, &entry.description),
            (odio::AUTHORS, &entry.authors),
            (odio::KEYWORDS, &entry.keywords),
        ];
        for (predicate, text) in optional {
            if let Some(text) = non_empty(text) {
                self.add(subject.clone(), predicate, Literal::new_simple_literal(text));
            }
        }

        for date in &entry.dates.dates {
            self.emit_date(&subject, id, date)?;
        }

        debug!(entry = id, refs = entry.cross_references.refs.len(), "Cross-references");
        for reference in &entry.cross_references.refs {
            self.emit_cross_reference(&subject, id, reference)?;
        }

        for field in &entry.additional_fields.fields {
            self.emit_field(&subject, field)?;
        }

        Ok(())
    }

    fn emit_date(&mut self, subject: &NamedNode, id: &str, date: &DateEvent) -> Result<()> {
        let date_type = date
            .date_type
            .as_deref()
            .ok_or_else(|| OmicsError::missing_attribute("date", "type"))?;
        let kind = DateKind::from_attribute(date_type).ok_or_else(|| OmicsError::UnknownDateType {
            entry: id.to_string(),
            date_type: date_type.to_string(),
        })?;
        let value = non_empty(&date.value).ok_or_else(|| OmicsError::missing_attribute("date", "value"))?;
        let literal = date_literal(id, value)?;

        let event = self.buffer.blank_node("date");
        self.add(subject.clone(), dc::DATE, event.clone());
        self.add(event.clone(), rdf::TYPE, kind.class());
        self.add(event, dct::DATE, literal.clone());
        self.add(subject.clone(), kind.dublin_core_predicate(), literal);

        Ok(())
    }

    fn emit_cross_reference(
        &mut self,
        subject: &NamedNode,
        id: &str,
        reference: &CrossReference,
    ) -> Result<()> {
        let dbkey = non_empty(&reference.dbkey)
            .ok_or_else(|| OmicsError::missing_attribute("ref", "dbkey"))?;
        let dbname = non_empty(&reference.dbname)
            .ok_or_else(|| OmicsError::missing_attribute("ref", "dbname"))?;

        let resolved = normalize_dbname(dbname, dbkey);
        let registry = self.registry;
        let templates = registry.cross_reference(resolved).ok_or_else(|| {
            OmicsError::UnknownCrossReference {
                entry: id.to_string(),
                dbname: resolved.to_string(),
            }
        })?;

        let node = self.buffer.blank_node("ref");
        self.add(subject.clone(), odio::CROSS_REFERENCE, node.clone());
        self.add(node.clone(), rdf::TYPE, odio::REF);

        for template in templates.templates() {
            self.add(node.clone(), skos::EXACT_MATCH, join_iri(template, dbkey)?);
        }

        Ok(())
    }

    fn emit_field(&mut self, subject: &NamedNode, field: &Field) -> Result<()> {
        let Some(value) = non_empty(&field.value) else {
            return Ok(());
        };
        let name = non_empty(&field.name).ok_or_else(|| OmicsError::missing_attribute("field", "name"))?;

        self.add(subject.clone(), odio_term(name)?, Literal::new_simple_literal(value));
        Ok(())
    }

    fn add(
        &mut self,
        subject: impl Into<NamedOrBlankNode>,
        predicate: impl Into<NamedNode>,
        object: impl Into<Term>,
    ) {
        self.buffer.insert(Triple::new(subject, predicate, object));
    }
}

/// Convert a parsed export with the given registry
pub fn transform(document: &DatabaseDocument, registry: &Registry) -> Result<TripleBuffer> {
    Transformer::new(registry).transform(document)
}

fn iri(value: &str) -> Result<NamedNode> {
    NamedNode::new(value).map_err(|e| OmicsError::InvalidIri(format!("<{value}>: {e}")))
}

/// `base + suffix`, percent-encoding the suffix only when it is not valid IRI text
fn join_iri(base: &str, suffix: &str) -> Result<NamedNode> {
    NamedNode::new(format!("{base}{suffix}"))
        .or_else(|_| iri(&format!("{base}{}", urlencoding::encode(suffix))))
}

fn odio_term(local_name: &str) -> Result<NamedNode> {
    join_iri(odio::NS, local_name)
}

/// Date-time layouts whose date part is kept; the whole value must parse
const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// `xsd:date` literal from `YYYY-MM-DD`, a full date-time or an RFC 3339 timestamp
fn date_literal(id: &str, value: &str) -> Result<Literal> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|datetime| datetime.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|datetime| datetime.date_naive()))
        .ok_or_else(|| OmicsError::InvalidDate {
            entry: id.to_string(),
            value: value.to_string(),
        })?;

    Ok(Literal::new_typed_literal(date.format("%Y-%m-%d").to_string(), xsd::DATE))
}
