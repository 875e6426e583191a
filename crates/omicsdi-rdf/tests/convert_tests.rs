//! Integration tests for the export → Turtle conversion

use omicsdi_common::OmicsError;
use omicsdi_rdf::registry::{MappingOverlay, Registry};
use omicsdi_rdf::vocab::{dc, dct, odio, pav, rdf, rdfs, sio, skos};
use omicsdi_rdf::{convert_file, convert_str};
use oxigraph::io::{RdfFormat, RdfParser};
use oxigraph::model::vocab::xsd;
use oxigraph::model::{Graph, Literal, NamedNode, NamedNodeRef, Term, TermRef, Triple};
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn parse_turtle(turtle: &[u8]) -> Graph {
    let mut graph = Graph::new();
    for quad in RdfParser::from_format(RdfFormat::Turtle).for_reader(turtle) {
        let quad = quad.expect("converter output should be valid Turtle");
        graph.insert(&Triple::from(quad));
    }
    graph
}

fn convert_fixture(name: &str) -> Graph {
    let turtle = convert_file(fixture_path(name), &Registry::builtin())
        .expect("Failed to convert fixture");
    parse_turtle(&turtle)
}

fn node(iri: &str) -> NamedNode {
    NamedNode::new(iri).expect("valid IRI")
}

fn pride(id: &str) -> NamedNode {
    node(&format!("http://www.omicsdi.org/dataset/pride/{id}"))
}

fn odio(local: &str) -> NamedNode {
    node(&format!("{}{}", odio::NS, local))
}

fn text(value: &str) -> Literal {
    Literal::new_simple_literal(value)
}

fn date(value: &str) -> Literal {
    Literal::new_typed_literal(value, xsd::DATE)
}

fn has(graph: &Graph, subject: &NamedNode, predicate: NamedNodeRef<'_>, object: impl Into<Term>) -> bool {
    graph.contains(&Triple::new(subject.clone(), predicate, object))
}

fn count(graph: &Graph, subject: &NamedNode, predicate: NamedNodeRef<'_>) -> usize {
    graph
        .objects_for_subject_predicate(subject.as_ref(), predicate)
        .count()
}

/// exactMatch targets of each cross-reference node of `subject`
fn exact_matches(graph: &Graph, subject: &NamedNode) -> Vec<Vec<String>> {
    graph
        .objects_for_subject_predicate(subject.as_ref(), odio::CROSS_REFERENCE)
        .map(|object| match object {
            TermRef::BlankNode(reference) => {
                let mut targets: Vec<String> = graph
                    .objects_for_subject_predicate(reference, skos::EXACT_MATCH)
                    .map(|t| t.to_string())
                    .collect();
                targets.sort();
                targets
            },
            other => panic!("cross-reference should be a blank node, got {other}"),
        })
        .collect()
}

#[test]
fn test_pride_database_triples() {
    let graph = convert_fixture("PRIDE_EBEYE_sample.xml");
    let db = node("http://www.ebi.ac.uk/pride/archive/");

    assert!(has(&graph, &db, rdf::TYPE, sio::DATABASE));
    assert!(has(&graph, &db, rdfs::LABEL, text("pride")));
    assert!(has(&graph, &db, pav::VERSION, text("3")));
    assert!(has(&graph, &db, dct::AVAILABLE, text("2017-03-01")));
    assert_eq!(count(&graph, &db, dct::DESCRIPTION), 1);
}

#[test]
fn test_pride_entries() {
    let graph = convert_fixture("PRIDE_EBEYE_sample.xml");
    let first = pride("PXD000001");
    let second = pride("PXD000002");

    for subject in [&first, &second] {
        assert!(has(&graph, subject, rdf::TYPE, odio("PrideEntry")));
    }
    assert!(has(&graph, &first, dct::IDENTIFIER, text("PXD000001")));
    assert!(has(&graph, &second, dct::TITLE, text("Human saliva proteome")));
    assert!(has(&graph, &second, rdfs::LABEL, text("Human saliva proteome")));

    assert_eq!(count(&graph, &first, dct::DESCRIPTION), 1);
    assert_eq!(count(&graph, &second, dct::DESCRIPTION), 0);
    assert!(has(&graph, &first, odio::KEYWORDS, text("Tandem mass tags, TMT")));
    assert_eq!(count(&graph, &first, odio::AUTHORS), 0);
}

#[test]
fn test_pride_dates() {
    let graph = convert_fixture("PRIDE_EBEYE_sample.xml");
    let first = pride("PXD000001");
    let second = pride("PXD000002");

    assert_eq!(count(&graph, &first, dc::DATE), 2);
    assert!(has(&graph, &first, dct::DATE_SUBMITTED, date("2012-03-07")));
    assert!(has(&graph, &first, dct::ISSUED, date("2012-03-07")));
    assert!(has(&graph, &second, dct::MODIFIED, date("2013-10-21")));
    assert_eq!(count(&graph, &second, dct::CREATED), 0);

    let event = graph
        .object_for_subject_predicate(second.as_ref(), dc::DATE)
        .expect("date event node");
    let TermRef::BlankNode(event) = event else {
        panic!("date event should be a blank node");
    };
    let class: Vec<_> = graph.objects_for_subject_predicate(event, rdf::TYPE).collect();
    assert_eq!(class, vec![TermRef::from(odio::LAST_MODIFICATION)]);
    let value: Vec<_> = graph.objects_for_subject_predicate(event, dct::DATE).collect();
    assert_eq!(value, vec![TermRef::from(date("2013-10-21").as_ref())]);
}

#[test]
fn test_pride_cross_references() {
    let graph = convert_fixture("PRIDE_EBEYE_sample.xml");

    let first = exact_matches(&graph, &pride("PXD000001"));
    assert_eq!(first.len(), 4);
    assert!(first.contains(&vec![
        "<http://identifiers.org/pubmed/22948853>".to_string(),
        "<http://www.ncbi.nlm.nih.gov/pubmed/22948853>".to_string(),
    ]));
    assert!(first.contains(&vec![
        "<http://identifiers.org/uniprot/P62158>".to_string(),
        "<http://www.uniprot.org/uniprot/P62158>".to_string(),
    ]));
    assert!(first.contains(&vec![
        "<http://identifiers.org/px/RPXD000650>".to_string(),
        "<http://proteomecentral.proteomexchange.org/dataset/RPXD000650>".to_string(),
    ]));

    let second = exact_matches(&graph, &pride("PXD000002"));
    assert_eq!(second.len(), 2);
    assert!(second.contains(&Vec::new()));
    assert!(second.contains(&vec!["<http://www.peptideatlas.org/PASS/PASS00275>".to_string()]));
}

#[test]
fn test_pride_additional_fields() {
    let graph = convert_fixture("PRIDE_EBEYE_sample.xml");
    let first = pride("PXD000001");

    assert!(has(&graph, &first, odio("omics_type").as_ref(), text("Proteomics")));
    assert!(has(&graph, &first, odio("species").as_ref(), text("Erwinia carotovora")));
    assert!(has(
        &graph,
        &first,
        odio("instrument_platform").as_ref(),
        text("LTQ Orbitrap Velos")
    ));
    assert_eq!(count(&graph, &first, odio("submitter_keywords").as_ref()), 0);
}

#[test]
fn test_array_express_export() {
    let graph = convert_fixture("ARRAY_EXPRESS_EBE_sample.xml");
    let db = node("https://www.ebi.ac.uk/arrayexpress/");
    let entry = node("http://www.omicsdi.org/dataset/arrayexpress-repository/E-MEXP-1712");

    assert!(has(&graph, &db, rdf::TYPE, sio::DATABASE));
    assert_eq!(count(&graph, &db, pav::VERSION), 0);
    assert_eq!(count(&graph, &db, dct::DESCRIPTION), 0);

    assert!(has(&graph, &entry, rdf::TYPE, odio("ArrayExpressEntry")));
    assert!(has(&graph, &entry, dct::CREATED, date("2008-07-01")));
    assert!(has(&graph, &entry, dct::MODIFIED, date("2014-05-02")));
    assert_eq!(
        exact_matches(&graph, &entry),
        vec![vec![
            "<http://identifiers.org/ensembl/ENSG00000139618>".to_string(),
            "<http://www.ensembl.org/id/ENSG00000139618>".to_string(),
        ]]
    );
}

#[test]
fn test_gzipped_export_matches_plain() {
    let registry = Registry::builtin();
    let plain = convert_file(fixture_path("ARRAY_EXPRESS_EBE_sample.xml"), &registry).unwrap();
    let gzipped = convert_file(fixture_path("ARRAY_EXPRESS_EBE_sample.xml.gz"), &registry).unwrap();
    assert_eq!(plain, gzipped);
}

#[test]
fn test_output_is_byte_identical_across_runs() {
    let registry = Registry::builtin();
    let first = convert_file(fixture_path("PRIDE_EBEYE_sample.xml"), &registry).unwrap();
    let second = convert_file(fixture_path("PRIDE_EBEYE_sample.xml"), &registry).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unknown_cross_reference_database_fails() {
    let err = convert_file(fixture_path("unknown_xref.xml"), &Registry::builtin()).unwrap_err();
    match err {
        OmicsError::UnknownCrossReference { entry, dbname } => {
            assert_eq!(entry, "PXD000003");
            assert_eq!(dbname, "WormGene");
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_mapping_overlay_resolves_cross_reference() {
    let overlay = MappingOverlay::load(fixture_path("mappings.yml")).unwrap();
    let registry = Registry::builtin().with_overlay(overlay);

    let turtle = convert_file(fixture_path("unknown_xref.xml"), &registry).unwrap();
    let graph = parse_turtle(&turtle);

    assert_eq!(
        exact_matches(&graph, &pride("PXD000003")),
        vec![vec!["<http://identifiers.org/wb/WBGene00000001>".to_string()]]
    );
}

#[test]
fn test_minimal_document() {
    let xml = r#"<database>
        <name>pride</name>
        <release_date>2017-03-01</release_date>
        <entries>
          <entry id="X1">
            <name>Sample</name>
            <dates><date type="creation" value="2020-01-15"/></dates>
            <cross_references><ref dbname="uniprot" dbkey="P62158"/></cross_references>
          </entry>
        </entries>
      </database>"#;

    let turtle = convert_str(xml, &Registry::builtin()).unwrap();
    let text_output = String::from_utf8(turtle.clone()).unwrap();
    assert!(text_output.contains("@prefix odio: <https://raw.githubusercontent.com/OmicsDI-RDF/RDF/master/odio.owl#>"));

    let graph = parse_turtle(&turtle);
    let subject = pride("X1");

    assert!(has(&graph, &subject, rdf::TYPE, odio("PrideEntry")));
    assert!(has(&graph, &subject, dct::IDENTIFIER, text("X1")));
    assert!(has(&graph, &subject, dct::TITLE, text("Sample")));
    assert!(has(&graph, &subject, dct::CREATED, date("2020-01-15")));
    assert_eq!(
        exact_matches(&graph, &subject),
        vec![vec![
            "<http://identifiers.org/uniprot/P62158>".to_string(),
            "<http://www.uniprot.org/uniprot/P62158>".to_string(),
        ]]
    );
}

#[test]
fn test_malformed_xml_fails() {
    let err = convert_str("<database><name>pride</name>", &Registry::builtin()).unwrap_err();
    assert!(matches!(err, OmicsError::Xml(_)));
}

#[test]
fn test_hierarchical_fields_between_fields_are_skipped() {
    let xml = r#"<database>
        <name>pride</name>
        <release_date>2017-03-01</release_date>
        <entries>
          <entry id="X2">
            <name>Interleaved</name>
            <cross_references>
              <ref dbname="pubmed" dbkey="22948853"/>
              <hierarchical_ref dbname="GO"/>
              <ref dbname="TAXONOMY" dbkey="9606"/>
            </cross_references>
            <additional_fields>
              <field name="species">Homo sapiens</field>
              <hierarchical_field name="taxonomy"><root>Eukaryota</root></hierarchical_field>
              <field name="omics_type">Proteomics</field>
            </additional_fields>
          </entry>
        </entries>
      </database>"#;

    let graph = parse_turtle(&convert_str(xml, &Registry::builtin()).unwrap());
    let subject = pride("X2");

    assert!(has(&graph, &subject, odio("species").as_ref(), text("Homo sapiens")));
    assert!(has(&graph, &subject, odio("omics_type").as_ref(), text("Proteomics")));
    assert_eq!(count(&graph, &subject, odio("taxonomy").as_ref()), 0);
    assert_eq!(exact_matches(&graph, &subject).len(), 2);
}
