//! SDP size model for clique decompositions.
//!
//! All counts are signed, since a merge can reduce the total.

use super::{Clique, CliqueHistory, SpanningTree};

/// Scalar variable count attributed to a `k`-node clique block.
pub fn nvars(k: usize) -> isize {
    let k = k as isize;
    k * (2 * k + 1)
}

/// Net change in primal and dual variables if `ci` and `ck` were merged.
///
/// The merged block grows with the union, while the two original blocks
/// and the linking constraints on their overlap disappear.  Symmetric in
/// its arguments.
pub fn merge_cost(ci: &Clique, ck: &Clique) -> isize {
    let di = ci.len();
    let dk = ck.len();
    let sik = ci.intersect_dim(ck);
    let dik = di + dk - sik;

    nvars(dik) - nvars(di) - nvars(dk) - nvars(sik)
}

/// Variables of every active clique plus linking constraints on every
/// spanning tree edge.
pub fn sdp_cost(history: &CliqueHistory, tree: &SpanningTree) -> isize {
    let vars_cost: isize = tree.nodes().iter().map(|&c| nvars(history[c].len())).sum();
    let link_cost: isize = tree.edges().iter().map(|e| nvars(e.overlap)).sum();
    vars_cost + link_cost
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nvars() {
        assert_eq!(nvars(0), 0);
        assert_eq!(nvars(1), 3);
        assert_eq!(nvars(2), 10);
        assert_eq!(nvars(3), 21);
        assert_eq!(nvars(4), 36);
    }

    #[test]
    fn test_merge_cost_sign() {
        // heavy overlap is rewarded
        let a = Clique::new([0, 1, 2]);
        let b = Clique::new([1, 2, 3]);
        assert_eq!(merge_cost(&a, &b), nvars(4) - 2 * nvars(3) - nvars(2));
        assert!(merge_cost(&a, &b) < 0);

        // small overlap between large cliques is penalised
        let c = Clique::new([0, 1, 2, 3]);
        let d = Clique::new([3, 4, 5, 6]);
        assert_eq!(merge_cost(&c, &d), nvars(7) - 2 * nvars(4) - nvars(1));
        assert!(merge_cost(&c, &d) > 0);
    }

    #[test]
    fn test_merge_cost_symmetry() {
        let cliques = [
            Clique::new([0, 1]),
            Clique::new([1, 2, 5]),
            Clique::new([2, 3, 4, 5]),
            Clique::new([7]),
        ];
        for a in &cliques {
            for b in &cliques {
                assert_eq!(merge_cost(a, b), merge_cost(b, a));
            }
        }
    }
}
