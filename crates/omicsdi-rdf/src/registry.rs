//! Lookup tables driving the conversion
//!
//! Three tables decide how an export is mapped:
//!
//! - **Source databases**: the database named in `database/name` → URI prefix
//!   for its entries and the homepage used as the database's own subject.
//! - **Date types**: the closed set of `date/@type` values, see [`DateKind`].
//! - **Cross-reference databases**: `ref/@dbname` → identifiers.org and native
//!   URL templates, either of which may be unknown.
//!
//! The built-in tables can be extended with a YAML mapping file:
//!
//! ```yaml
//! databases:
//!   BioModels:
//!     entity_prefix: http://www.omicsdi.org/dataset/biomodels/
//!     homepage: https://www.ebi.ac.uk/biomodels/
//! cross_references:
//!   PubChem:
//!     identifiers_org: http://identifiers.org/pubchem.compound/
//!     native: null
//! ```

use omicsdi_common::{OmicsError, Result};
use oxigraph::model::NamedNodeRef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::vocab::{dct, odio};

/// (name, entity prefix, homepage)
const SOURCE_DATABASES: &[(&str, &str, &str)] = &[
    (
        "ArrayExpress",
        "http://www.omicsdi.org/dataset/arrayexpress-repository/",
        "https://www.ebi.ac.uk/arrayexpress/",
    ),
    ("EGA", "http://www.omicsdi.org/dataset/ega/", "https://www.ebi.ac.uk/ega/"),
    (
        "ExpressionAtlas",
        "http://www.omicsdi.org/dataset/atlas-experiments/",
        "https://www.ebi.ac.uk/gxa/",
    ),
    ("GNPS", "http://www.omicsdi.org/dataset/gnps/", "https://gnps.ucsd.edu/"),
    ("GPMDB", "http://www.omicsdi.org/dataset/gpmdb/", "http://gpmdb.thegpm.org/"),
    ("Massive", "http://www.omicsdi.org/dataset/massive/", "https://massive.ucsd.edu/"),
    (
        "MetaboLights",
        "http://www.omicsdi.org/dataset/metabolights_dataset/",
        "http://www.ebi.ac.uk/metabolights/",
    ),
    (
        "MetabolomeExpress",
        "http://www.omicsdi.org/dataset/metabolome_express/",
        "https://www.metabolome-express.org/",
    ),
    (
        "MetabolomicsWorkbench",
        "http://www.omicsdi.org/dataset/metabolomics_workbench/",
        "http://www.metabolomicsworkbench.org/",
    ),
    (
        "PeptideAtlas",
        "http://www.omicsdi.org/dataset/peptide_atlas/",
        "http://www.peptideatlas.org/",
    ),
    (
        "pride",
        "http://www.omicsdi.org/dataset/pride/",
        "http://www.ebi.ac.uk/pride/archive/",
    ),
];

const TAXONOMY_BROWSER: &str = "http://www.ncbi.nlm.nih.gov/Taxonomy/Browser/wwwtax.cgi?mode=Info&id=";

/// (dbname, identifiers.org template, native template)
const CROSS_REFERENCE_DATABASES: &[(&str, Option<&str>, Option<&str>)] = &[
    // CHEBI:36927 on identifiers.org, CHEBI_36927 on obo
    (
        "ChEBI",
        Some("http://identifiers.org/chebi/"),
        Some("http://purl.obolibrary.org/obo/"),
    ),
    (
        "EGA",
        Some("http://identifiers.org/ega.dataset/"),
        Some("https://www.ebi.ac.uk/ega/datasets/"),
    ),
    (
        "Ensembl",
        Some("http://identifiers.org/ensembl/"),
        Some("http://www.ensembl.org/id/"),
    ),
    (
        "FlyBase",
        Some("http://identifiers.org/flybase/"),
        Some("http://flybase.org/reports/"),
    ),
    (
        "HMDB",
        Some("http://identifiers.org/hmdb/"),
        Some("http://www.hmdb.ca/metabolites/"),
    ),
    // deprecated upstream
    (
        "IPI",
        Some("http://identifiers.org/ipi/"),
        Some("http://www.ebi.ac.uk/Tools/dbfetch/dbfetch?db=ipi&id="),
    ),
    ("InsectBase", None, None),
    (
        "KEGG",
        Some("http://identifiers.org/kegg.compound/"),
        Some("http://www.kegg.jp/entry/"),
    ),
    (
        "MetaboLights",
        Some("http://identifiers.org/metabolights/"),
        Some("http://www.ebi.ac.uk/metabolights/"),
    ),
    (
        "NCBI",
        Some("http://identifiers.org/ncbiprotein/"),
        Some("https://www.ncbi.nlm.nih.gov/protein/"),
    ),
    ("PASS", None, Some("http://www.peptideatlas.org/PASS/")),
    (
        "PomBase",
        Some("http://identifiers.org/pombase/"),
        Some("https://www.pombase.org/spombe/result/"),
    ),
    ("TAXONOMY", Some("http://identifiers.org/taxonomy/"), Some(TAXONOMY_BROWSER)),
    (
        "UniProt",
        Some("http://identifiers.org/uniprot/"),
        Some("http://www.uniprot.org/uniprot/"),
    ),
    ("Unknown", None, None),
    (
        "arrayexpress",
        Some("http://identifiers.org/arrayexpress/"),
        Some("http://www.ebi.ac.uk/arrayexpress/experiments/"),
    ),
    (
        "ensembl",
        Some("http://identifiers.org/ensembl/"),
        Some("http://www.ensembl.org/id/"),
    ),
    (
        "pride",
        Some("http://identifiers.org/pride.project/"),
        Some("http://www.ebi.ac.uk/pride/archive/projects/"),
    ),
    (
        "pubmed",
        Some("http://identifiers.org/pubmed/"),
        Some("http://www.ncbi.nlm.nih.gov/pubmed/"),
    ),
    (
        "px",
        Some("http://identifiers.org/px/"),
        Some("http://proteomecentral.proteomexchange.org/dataset/"),
    ),
    ("taxonomy", Some("http://identifiers.org/taxonomy/"), Some(TAXONOMY_BROWSER)),
    (
        "uniprot",
        Some("http://identifiers.org/uniprot/"),
        Some("http://www.uniprot.org/uniprot/"),
    ),
];

/// A source database that publishes OmicsDI exports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceDatabase {
    /// Prefix joined with an entry id to build the entry IRI
    pub entity_prefix: String,
    /// IRI used as the subject for the database itself
    pub homepage: String,
}

/// URL templates for one external identifier authority
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrossReferenceTemplates {
    #[serde(default)]
    pub identifiers_org: Option<String>,
    #[serde(default)]
    pub native: Option<String>,
}

impl CrossReferenceTemplates {
    /// Known templates, identifiers.org first
    pub fn templates(&self) -> impl Iterator<Item = &str> {
        self.identifiers_org
            .as_deref()
            .into_iter()
            .chain(self.native.as_deref())
    }
}

/// Kind of dated event attached to an entry (`date/@type`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateKind {
    Creation,
    Export,
    LastModification,
    Output,
    Publication,
    Submission,
    Updated,
}

impl DateKind {
    pub const ALL: [DateKind; 7] = [
        DateKind::Creation,
        DateKind::Export,
        DateKind::LastModification,
        DateKind::Output,
        DateKind::Publication,
        DateKind::Submission,
        DateKind::Updated,
    ];

    /// Parse the XML attribute value; `None` for anything outside the table
    pub fn from_attribute(value: &str) -> Option<Self> {
        match value {
            "creation" => Some(DateKind::Creation),
            "export" => Some(DateKind::Export),
            "last_modification" => Some(DateKind::LastModification),
            "output" => Some(DateKind::Output),
            "publication" => Some(DateKind::Publication),
            "submission" => Some(DateKind::Submission),
            "updated" => Some(DateKind::Updated),
            _ => None,
        }
    }

    pub fn as_attribute(self) -> &'static str {
        match self {
            DateKind::Creation => "creation",
            DateKind::Export => "export",
            DateKind::LastModification => "last_modification",
            DateKind::Output => "output",
            DateKind::Publication => "publication",
            DateKind::Submission => "submission",
            DateKind::Updated => "updated",
        }
    }

    /// odio class typing the dated-event node
    pub fn class(self) -> NamedNodeRef<'static> {
        match self {
            DateKind::Creation => odio::CREATION,
            DateKind::Export => odio::EXPORT,
            DateKind::LastModification => odio::LAST_MODIFICATION,
            DateKind::Output => odio::OUTPUT,
            DateKind::Publication => odio::PUBLICATION,
            DateKind::Submission => odio::SUBMISSION,
            DateKind::Updated => odio::UPDATED,
        }
    }

    /// Dublin Core term carrying the same date directly on the entry
    pub fn dublin_core_predicate(self) -> NamedNodeRef<'static> {
        match self {
            DateKind::Creation => dct::CREATED,
            DateKind::Submission => dct::DATE_SUBMITTED,
            DateKind::Publication | DateKind::Output | DateKind::Export => dct::ISSUED,
            DateKind::LastModification | DateKind::Updated => dct::MODIFIED,
        }
    }
}

impl std::fmt::Display for DateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_attribute())
    }
}

/// Rewrite `Unknown` references whose accession reveals the real authority.
///
/// `RP...` keys are ProteomeXchange reprocessed datasets and `SP...` keys are
/// fission yeast systematic names.
pub fn normalize_dbname<'a>(dbname: &'a str, dbkey: &str) -> &'a str {
    if dbname != "Unknown" {
        return dbname;
    }

    if dbkey.starts_with("RP") {
        "px"
    } else if dbkey.starts_with("SP") {
        "PomBase"
    } else {
        dbname
    }
}

/// Extra rows merged over the built-in tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingOverlay {
    #[serde(default)]
    pub databases: BTreeMap<String, SourceDatabase>,
    #[serde(default)]
    pub cross_references: BTreeMap<String, CrossReferenceTemplates>,
}

impl MappingOverlay {
    /// Load an overlay from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| OmicsError::io(path, e))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| OmicsError::Mappings(e.to_string()))
    }
}

/// Immutable lookup tables for one conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    databases: BTreeMap<String, SourceDatabase>,
    cross_references: BTreeMap<String, CrossReferenceTemplates>,
}

impl Registry {
    /// Registry holding only the built-in tables
    pub fn builtin() -> Self {
        let databases = SOURCE_DATABASES
            .iter()
            .map(|&(name, prefix, homepage)| {
                (
                    name.to_string(),
                    SourceDatabase {
                        entity_prefix: prefix.to_string(),
                        homepage: homepage.to_string(),
                    },
                )
            })
            .collect();

        let cross_references = CROSS_REFERENCE_DATABASES
            .iter()
            .map(|&(name, identifiers_org, native)| {
                (
                    name.to_string(),
                    CrossReferenceTemplates {
                        identifiers_org: identifiers_org.map(str::to_string),
                        native: native.map(str::to_string),
                    },
                )
            })
            .collect();

        Self {
            databases,
            cross_references,
        }
    }

    /// Built-in tables, extended by the overlay file when one is given
    pub fn load(mappings: Option<&Path>) -> Result<Self> {
        let registry = Self::builtin();
        match mappings {
            Some(path) => {
                debug!(path = %path.display(), "Loading mapping overlay");
                Ok(registry.with_overlay(MappingOverlay::load(path)?))
            },
            None => Ok(registry),
        }
    }

    /// Merge overlay rows; a row with an existing name replaces it
    pub fn with_overlay(mut self, overlay: MappingOverlay) -> Self {
        for (name, database) in overlay.databases {
            if self.databases.insert(name.clone(), database).is_some() {
                debug!(database = %name, "Overlay replaces built-in source database");
            }
        }
        for (name, templates) in overlay.cross_references {
            if self.cross_references.insert(name.clone(), templates).is_some() {
                debug!(dbname = %name, "Overlay replaces built-in cross-reference database");
            }
        }
        self
    }

    /// Look up a source database; unknown names are fatal
    pub fn database(&self, name: &str) -> Result<&SourceDatabase> {
        self.databases
            .get(name)
            .ok_or_else(|| OmicsError::UnknownDatabase(name.to_string()))
    }

    pub fn cross_reference(&self, dbname: &str) -> Option<&CrossReferenceTemplates> {
        self.cross_references.get(dbname)
    }

    pub fn databases(&self) -> impl Iterator<Item = (&str, &SourceDatabase)> {
        self.databases.iter().map(|(name, db)| (name.as_str(), db))
    }

    pub fn cross_references(&self) -> impl Iterator<Item = (&str, &CrossReferenceTemplates)> {
        self.cross_references
            .iter()
            .map(|(name, templates)| (name.as_str(), templates))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
