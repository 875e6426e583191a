//! Append-only triple accumulator

use oxigraph::model::{BlankNode, Graph, Triple};
use std::collections::HashMap;

/// Set of triples that remembers insertion order.
///
/// Duplicates are dropped on insert. [`TripleBuffer::grouped`] yields the
/// triples grouped by subject, subjects ordered by first appearance, which
/// keeps serialized output stable for identical input.
#[derive(Debug, Default)]
pub struct TripleBuffer {
    index: Graph,
    triples: Vec<Triple>,
    next_blank_node: u64,
}

impl TripleBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a triple; returns `false` if it was already present
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.index.insert(&triple) {
            self.triples.push(triple);
            true
        } else {
            false
        }
    }

    /// Fresh blank node labelled `<prefix><counter>`
    ///
    /// Labels are unique within the buffer and identical across runs.
    pub fn blank_node(&mut self, prefix: &str) -> BlankNode {
        let id = self.next_blank_node;
        self.next_blank_node += 1;
        BlankNode::new_unchecked(format!("{prefix}{id}"))
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.index.contains(triple)
    }

    /// Triples in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Triples grouped by subject, in order of first appearance
    pub fn grouped(&self) -> Vec<&Triple> {
        let mut first_seen: HashMap<String, usize> = HashMap::new();
        let mut keyed: Vec<(usize, &Triple)> = self
            .triples
            .iter()
            .map(|triple| {
                let next = first_seen.len();
                let rank = *first_seen.entry(triple.subject.to_string()).or_insert(next);
                (rank, triple)
            })
            .collect();

        // stable: keeps insertion order inside each subject
        keyed.sort_by_key(|(rank, _)| *rank);
        keyed.into_iter().map(|(_, triple)| triple).collect()
    }
}
