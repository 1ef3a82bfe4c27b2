#![allow(dead_code)]

use chordmerge::graph::Graph;

pub fn path(n: usize) -> Graph {
    let edges: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
    Graph::from_edges(n, &edges).unwrap()
}

pub fn cycle(n: usize) -> Graph {
    let edges: Vec<_> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    Graph::from_edges(n, &edges).unwrap()
}

pub fn complete(n: usize) -> Graph {
    let mut G = Graph::new(n);
    for u in 0..n {
        for v in (u + 1)..n {
            G.add_edge(u, v).unwrap();
        }
    }
    G
}

pub fn grid(rows: usize, cols: usize) -> Graph {
    let mut G = Graph::new(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let v = r * cols + c;
            if c + 1 < cols {
                G.add_edge(v, v + 1).unwrap();
            }
            if r + 1 < rows {
                G.add_edge(v, v + cols).unwrap();
            }
        }
    }
    G
}

// small linear congruential generator, so that random graphs are
// reproducible without an rng dependency
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg(seed)
    }

    pub fn next_below(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) % bound as u64) as usize
    }
}

// connected random graph: a random spanning tree plus `extra` random edges
pub fn random_connected(n: usize, extra: usize, seed: u64) -> Graph {
    let mut rng = Lcg::new(seed);
    let mut G = Graph::new(n);
    for v in 1..n {
        let u = rng.next_below(v);
        G.add_edge(u, v).unwrap();
    }
    for _ in 0..extra {
        let u = rng.next_below(n);
        let v = rng.next_below(n);
        if u != v {
            G.add_edge(u, v).unwrap();
        }
    }
    G
}
