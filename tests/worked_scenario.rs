#![allow(non_snake_case)]

mod common;

use chordmerge::chordal::*;
use common::path;

fn check_path_scenario(settings: DecompositionSettings) {
    let G = path(4);
    let result = CliqueDecomposer::new(settings).unwrap().decompose(&G).unwrap();

    // a tree is already chordal
    assert!(result.extension.fill_in.is_empty());
    assert_eq!(result.extension.graph, G);

    let cliques: Vec<Vec<usize>> = result
        .initial_cliques()
        .iter()
        .map(|c| c.iter().collect())
        .collect();
    assert_eq!(cliques, vec![vec![0, 1], vec![1, 2], vec![2, 3]]);

    // tie at cost -2 goes to the first tree edge, {0,1} + {1,2}
    assert_eq!(
        result.linkage[0],
        LinkageRow {
            first: 0,
            second: 1,
            cost: -2,
            size: 3
        }
    );
    assert_eq!(result.history[3], Clique::new([0, 1, 2]));

    // then {0,1,2} + {2,3}
    assert_eq!(
        result.linkage[1],
        LinkageRow {
            first: 3,
            second: 2,
            cost: 2,
            size: 4
        }
    );
    assert_eq!(result.linkage.len(), 2);
    assert_eq!(result.final_cliques(), vec![&Clique::new([0, 1, 2, 3])]);

    let trace: Vec<_> = result
        .cost_trace
        .iter()
        .map(|e| (e.sdp_cost, e.linking_constraints, e.largest_clique))
        .collect();
    assert_eq!(trace, vec![(36, 2, 2), (34, 1, 3), (36, 0, 4)]);
}

#[test]
fn test_path_scenario_natural_ordering() {
    let settings = DecompositionSettingsBuilder::default()
        .ordering("natural")
        .build()
        .unwrap();
    check_path_scenario(settings);
}

#[test]
fn test_path_scenario_amd_ordering() {
    check_path_scenario(DecompositionSettings::default());
}

#[test]
fn test_path_scenario_cost_values() {
    assert_eq!(cost::nvars(1), 3);
    assert_eq!(cost::nvars(2), 10);
    assert_eq!(cost::nvars(3), 21);
    assert_eq!(cost::nvars(4), 36);

    let a = Clique::new([0, 1]);
    let b = Clique::new([1, 2]);
    let c = Clique::new([2, 3]);
    assert_eq!(cost::merge_cost(&a, &b), -2);
    assert_eq!(cost::merge_cost(&b, &c), -2);
    assert_eq!(cost::merge_cost(&a.union(&b), &c), 2);
}

#[test]
fn test_path_scenario_dendrogram() {
    let result = decompose(&path(4)).unwrap();
    let z = result.linkage.to_dendrogram();
    assert_eq!(z, vec![[0.0, 1.0, -2.0, 2.0], [3.0, 2.0, 2.0, 3.0]]);
}
