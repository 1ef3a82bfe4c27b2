#![allow(non_snake_case)]

mod common;

use chordmerge::chordal::*;
use chordmerge::graph::Graph;
use common::*;

fn test_graphs() -> Vec<(&'static str, Graph)> {
    let mut graphs = vec![
        ("cycle5", cycle(5)),
        ("cycle12", cycle(12)),
        ("grid3x4", grid(3, 4)),
        ("grid5x5", grid(5, 5)),
        ("complete6", complete(6)),
        ("path7", path(7)),
    ];
    for seed in 1..=6 {
        graphs.push(("random", random_connected(30, 25, seed)));
    }
    graphs
}

fn orderings() -> Vec<DecompositionSettings> {
    ["amd", "natural"]
        .iter()
        .map(|o| {
            DecompositionSettingsBuilder::default()
                .ordering(*o)
                .check_chordality(true)
                .build()
                .unwrap()
        })
        .collect()
}

#[test]
fn test_extension_is_chordal_supergraph() {
    for (name, G) in test_graphs() {
        for settings in orderings() {
            let ext = chordal_extension(&G, &settings).unwrap();
            assert!(ext.graph.is_chordal(), "{name} extension not chordal");
            assert!(ext.graph.is_supergraph_of(&G), "{name} lost edges");
            assert_eq!(ext.graph.nnodes(), G.nnodes());
            assert_eq!(ext.graph.nedges(), G.nedges() + ext.fill_in.len());
        }
    }
}

#[test]
fn test_clique_coverage() {
    for (name, G) in test_graphs() {
        let ext = chordal_extension(&G, &DecompositionSettings::default()).unwrap();
        let cliques = ext.maximal_cliques();

        // every node and every chordal edge lies in some clique
        for v in 0..G.nnodes() {
            assert!(cliques.iter().any(|c| c.contains(v)), "{name}: node {v}");
        }
        for (u, v) in ext.graph.edges() {
            assert!(
                cliques.iter().any(|c| c.contains(u) && c.contains(v)),
                "{name}: edge ({u},{v})"
            );
        }

        // no clique contains another
        for (i, a) in cliques.iter().enumerate() {
            for (j, b) in cliques.iter().enumerate() {
                if i != j {
                    assert!(!a.is_subset(b), "{name}: clique {i} inside {j}");
                }
            }
        }

        // and every clique really is a clique of the extension
        for c in cliques.iter() {
            let members: Vec<_> = c.iter().collect();
            for (k, &u) in members.iter().enumerate() {
                for &v in &members[k + 1..] {
                    assert!(ext.graph.has_edge(u, v));
                }
            }
        }
    }
}

#[test]
fn test_maximal_cliques_from_any_peo() {
    for (_, G) in test_graphs() {
        let ext = chordal_extension(&G, &DecompositionSettings::default()).unwrap();
        let peo = chordmerge::graph::perfect_elimination_ordering(&ext.graph).unwrap();
        let from_mcs = maximal_cliques(&ext.graph, &peo).unwrap();
        assert_eq!(from_mcs, ext.maximal_cliques());
    }
}

#[test]
fn test_linkage_length_and_final_clique() {
    for (name, G) in test_graphs() {
        let result = decompose(&G).unwrap();
        let m = result.initial_cliques().len();

        assert_eq!(result.linkage.len(), m - 1, "{name}");
        assert_eq!(result.cost_trace.len(), m, "{name}");
        assert_eq!(result.history.len(), 2 * m - 1);

        let everything = Clique::new(0..G.nnodes());
        assert_eq!(result.final_cliques(), vec![&everything], "{name}");
    }
}

#[test]
fn test_monotone_clique_count() {
    for (name, G) in test_graphs() {
        let result = decompose(&G).unwrap();
        let m = result.initial_cliques().len();

        for k in 0..=result.linkage.len() {
            let active = result.cliques_after(k).unwrap();
            assert_eq!(active.len(), m - k, "{name} after {k} merges");
        }

        // merged cliques are unions of their operands
        for (k, row) in result.linkage.iter().enumerate() {
            let merged = &result.history[m + k];
            assert_eq!(*merged, result.history[row.first].union(&result.history[row.second]));
            assert_eq!(row.size, merged.len());
            assert_eq!(
                row.cost,
                cost::merge_cost(&result.history[row.first], &result.history[row.second])
            );
        }
    }
}

#[test]
fn test_merge_cost_symmetry() {
    for (_, G) in test_graphs() {
        let result = decompose(&G).unwrap();
        let cliques: Vec<_> = result.history.iter().collect();
        for a in cliques.iter() {
            for b in cliques.iter() {
                assert_eq!(cost::merge_cost(a, b), cost::merge_cost(b, a));
            }
        }
    }
}

#[test]
fn test_deterministic() {
    for (_, G) in test_graphs() {
        let a = decompose(&G).unwrap();
        let b = decompose(&G).unwrap();
        assert_eq!(a.linkage, b.linkage);
        assert_eq!(a.cost_trace, b.cost_trace);
    }
}

#[test]
fn test_cost_trace_consistency() {
    for (name, G) in test_graphs() {
        let result = decompose(&G).unwrap();
        for (k, entry) in result.cost_trace.iter().enumerate() {
            let active = result.cliques_after(k).unwrap();
            let largest = active.iter().map(|c| c.len()).max().unwrap();
            assert_eq!(entry.largest_clique, largest, "{name} step {k}");

            let vars: isize = active.iter().map(|c| cost::nvars(c.len())).sum();
            assert!(entry.sdp_cost >= vars);
        }
        let last = result.cost_trace.last().unwrap();
        assert_eq!(last.linking_constraints, 0);
        assert_eq!(last.sdp_cost, cost::nvars(G.nnodes()));
    }
}
