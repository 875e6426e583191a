//! Namespaces and ontology terms emitted by the converter

macro_rules! n {
    ($iri:expr) => {
        oxigraph::model::NamedNodeRef::new_unchecked($iri)
    };
}

type N = oxigraph::model::NamedNodeRef<'static>;

pub mod rdf {
    use super::N;

    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const TYPE: N = n!("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
}

pub mod rdfs {
    use super::N;

    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const LABEL: N = n!("http://www.w3.org/2000/01/rdf-schema#label");
}

/// Dublin Core elements; `dc:date` has no declared range so it may point at a node.
pub mod dc {
    use super::N;

    pub const NS: &str = "http://purl.org/dc/elements/1.1/";
    pub const DATE: N = n!("http://purl.org/dc/elements/1.1/date");
}

pub mod dct {
    use super::N;

    pub const NS: &str = "http://purl.org/dc/terms/";
    pub const AVAILABLE: N = n!("http://purl.org/dc/terms/available");
    pub const CREATED: N = n!("http://purl.org/dc/terms/created");
    pub const DATE: N = n!("http://purl.org/dc/terms/date");
    pub const DATE_SUBMITTED: N = n!("http://purl.org/dc/terms/dateSubmitted");
    pub const DESCRIPTION: N = n!("http://purl.org/dc/terms/description");
    pub const IDENTIFIER: N = n!("http://purl.org/dc/terms/identifier");
    pub const ISSUED: N = n!("http://purl.org/dc/terms/issued");
    pub const MODIFIED: N = n!("http://purl.org/dc/terms/modified");
    pub const TITLE: N = n!("http://purl.org/dc/terms/title");
}

pub mod skos {
    use super::N;

    pub const NS: &str = "http://www.w3.org/2004/02/skos/core#";
    pub const EXACT_MATCH: N = n!("http://www.w3.org/2004/02/skos/core#exactMatch");
}

pub mod pav {
    use super::N;

    pub const NS: &str = "http://purl.org/pav/";
    pub const VERSION: N = n!("http://purl.org/pav/version");
}

pub mod sio {
    use super::N;

    pub const NS: &str = "http://semanticscience.org/resource/";
    /// database
    pub const DATABASE: N = n!("http://semanticscience.org/resource/SIO_000750");
}

pub mod odio {
    use super::N;

    pub const NS: &str = "https://raw.githubusercontent.com/OmicsDI-RDF/RDF/master/odio.owl#";

    pub const AUTHORS: N = n!("https://raw.githubusercontent.com/OmicsDI-RDF/RDF/master/odio.owl#authors");
    pub const KEYWORDS: N = n!("https://raw.githubusercontent.com/OmicsDI-RDF/RDF/master/odio.owl#keywords");
    pub const CROSS_REFERENCE: N =
        n!("https://raw.githubusercontent.com/OmicsDI-RDF/RDF/master/odio.owl#crossReference");
    pub const REF: N = n!("https://raw.githubusercontent.com/OmicsDI-RDF/RDF/master/odio.owl#Ref");

    pub const CREATION: N = n!("https://raw.githubusercontent.com/OmicsDI-RDF/RDF/master/odio.owl#Creation");
    pub const EXPORT: N = n!("https://raw.githubusercontent.com/OmicsDI-RDF/RDF/master/odio.owl#Export");
    pub const LAST_MODIFICATION: N =
        n!("https://raw.githubusercontent.com/OmicsDI-RDF/RDF/master/odio.owl#LastModification");
    pub const OUTPUT: N = n!("https://raw.githubusercontent.com/OmicsDI-RDF/RDF/master/odio.owl#Output");
    pub const PUBLICATION: N =
        n!("https://raw.githubusercontent.com/OmicsDI-RDF/RDF/master/odio.owl#Publication");
    pub const SUBMISSION: N =
        n!("https://raw.githubusercontent.com/OmicsDI-RDF/RDF/master/odio.owl#Submission");
    pub const UPDATED: N = n!("https://raw.githubusercontent.com/OmicsDI-RDF/RDF/master/odio.owl#Updated");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_live_in_their_namespace() {
        for term in [dct::CREATED, dct::ISSUED, dct::TITLE, dct::AVAILABLE] {
            assert!(term.as_str().starts_with(dct::NS));
        }
        for term in [odio::REF, odio::CROSS_REFERENCE, odio::UPDATED, odio::AUTHORS] {
            assert!(term.as_str().starts_with(odio::NS));
        }
        assert!(sio::DATABASE.as_str().starts_with(sio::NS));
        assert!(skos::EXACT_MATCH.as_str().starts_with(skos::NS));
        assert!(pav::VERSION.as_str().starts_with(pav::NS));
        assert!(dc::DATE.as_str().starts_with(dc::NS));
        assert!(rdfs::LABEL.as_str().starts_with(rdfs::NS));
        assert!(rdf::TYPE.as_str().starts_with(rdf::NS));
    }

    #[test]
    fn test_terms_are_valid_iris() {
        for term in [odio::LAST_MODIFICATION, dct::DATE_SUBMITTED, sio::DATABASE] {
            assert!(oxigraph::model::NamedNode::new(term.as_str()).is_ok());
        }
    }
}
