use super::Graph;

/// Maximum cardinality search.
///
/// Returns an elimination order (first entry eliminated first).  Nodes
/// are visited from the back of the order, each time taking the
/// unvisited node with the most visited neighbors, smallest index on
/// ties.  The order is a perfect elimination ordering iff the graph is
/// chordal (Tarjan & Yannakakis, 1984).
pub fn maximum_cardinality_search(G: &Graph) -> Vec<usize> {
    let n = G.nnodes();
    let mut weight = vec![0usize; n];
    let mut numbered = vec![false; n];
    let mut order = vec![0usize; n];

    for i in (0..n).rev() {
        let Some(v) = (0..n)
            .filter(|&v| !numbered[v])
            .max_by(|&a, &b| weight[a].cmp(&weight[b]).then(b.cmp(&a)))
        else {
            break;
        };

        order[i] = v;
        numbered[v] = true;
        for &w in G.neighbors(v) {
            if !numbered[w] {
                weight[w] += 1;
            }
        }
    }
    order
}

/// Check that `order` is a perfect elimination ordering of `G`, i.e. that
/// the neighbors of every node that are eliminated after it form a clique.
pub fn is_perfect_elimination_ordering(G: &Graph, order: &[usize]) -> bool {
    let n = G.nnodes();
    if order.len() != n {
        return false;
    }

    let mut position = vec![usize::MAX; n];
    for (k, &v) in order.iter().enumerate() {
        if v >= n || position[v] != usize::MAX {
            return false;
        }
        position[v] = k;
    }

    // it suffices to check that the later neighbors of v, other than
    // the earliest one u, are all adjacent to u
    order.iter().all(|&v| {
        let later: Vec<usize> = G
            .neighbors(v)
            .iter()
            .copied()
            .filter(|&w| position[w] > position[v])
            .collect();

        match later.iter().min_by_key(|&&w| position[w]) {
            None => true,
            Some(&u) => later.iter().all(|&w| w == u || G.has_edge(u, w)),
        }
    })
}

/// A perfect elimination ordering of `G`, or `None` if `G` is not chordal
pub fn perfect_elimination_ordering(G: &Graph) -> Option<Vec<usize>> {
    let order = maximum_cardinality_search(G);
    is_perfect_elimination_ordering(G, &order).then_some(order)
}
