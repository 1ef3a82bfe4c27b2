#![allow(non_snake_case)]

use super::*;
use crate::graph::Graph;

#[cfg(feature = "serde")]
use serde::Serialize;

/// The kind of event or object a provenance node stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProvenanceKind {
    Bus,
    Clique,
    Merge,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ProvenanceNode {
    pub id: usize,
    pub kind: ProvenanceKind,
    pub label: String,
    pub size: usize,
    /// merge cost, for merge nodes only
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub cost: Option<isize>,
    /// generation column: 0 for buses, 1 for cliques, 2 + k for merge k
    #[cfg_attr(feature = "serde", serde(rename = "xPos"))]
    pub x_pos: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ProvenanceLink {
    pub source: usize,
    pub target: usize,
    pub value: usize,
}

/// Directed graph tracing every clique back to the network buses it was
/// built from.
///
/// Node ids `0..n` are the buses; the clique with history index `h` has
/// node id `n + h`, whether it is an original maximal clique or the result
/// of a merge.  Links point from a contributor to the node it contributed
/// to.  Serializes as node-link JSON.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ProvenanceGraph {
    nodes: Vec<ProvenanceNode>,
    links: Vec<ProvenanceLink>,
    #[cfg_attr(feature = "serde", serde(skip))]
    nbuses: usize,
}

impl ProvenanceGraph {
    /// Bus and clique layers for a graph and its maximal cliques
    pub fn new(G: &Graph, cliques: &[Clique]) -> Self {
        let nbuses = G.nnodes();
        let mut nodes = Vec::with_capacity(nbuses + cliques.len());
        let mut links = Vec::new();

        for v in 0..nbuses {
            let label = match G.label(v) {
                Some(label) => label.to_string(),
                None => format!("Bus {}", v + 1),
            };
            nodes.push(ProvenanceNode {
                id: v,
                kind: ProvenanceKind::Bus,
                label,
                size: 1,
                cost: None,
                x_pos: 0,
            });
        }

        for (c, clique) in cliques.iter().enumerate() {
            let id = nbuses + c;
            nodes.push(ProvenanceNode {
                id,
                kind: ProvenanceKind::Clique,
                label: format!("Clique {}", c + 1),
                size: clique.len(),
                cost: None,
                x_pos: 1,
            });
            links.extend(clique.iter().map(|v| ProvenanceLink {
                source: v,
                target: id,
                value: 1,
            }));
        }

        Self {
            nodes,
            links,
            nbuses,
        }
    }

    /// node id of the clique with history index `h`
    pub fn clique_node(&self, h: usize) -> usize {
        self.nbuses + h
    }

    /// Record merge number `k` of `first` and `second` into `merged`.
    /// All three are history indices.
    pub(crate) fn add_merge(
        &mut self,
        k: usize,
        (first, first_size): (usize, usize),
        (second, second_size): (usize, usize),
        merged: usize,
        size: usize,
        cost: isize,
    ) {
        let id = self.clique_node(merged);
        self.nodes.push(ProvenanceNode {
            id,
            kind: ProvenanceKind::Merge,
            label: format!("Merge {}", k + 1),
            size,
            cost: Some(cost),
            x_pos: 2 + k,
        });
        self.links.push(ProvenanceLink {
            source: self.clique_node(first),
            target: id,
            value: first_size,
        });
        self.links.push(ProvenanceLink {
            source: self.clique_node(second),
            target: id,
            value: second_size,
        });
    }

    pub fn nodes(&self) -> &[ProvenanceNode] {
        &self.nodes
    }

    pub fn links(&self) -> &[ProvenanceLink] {
        &self.links
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// node with the given id, if any.  Ids are dense and in insertion order.
    pub fn node(&self, id: usize) -> Option<&ProvenanceNode> {
        self.nodes.get(id)
    }

    /// links arriving at node `id`
    pub fn inputs(&self, id: usize) -> impl Iterator<Item = &ProvenanceLink> {
        self.links.iter().filter(move |l| l.target == id)
    }
}
