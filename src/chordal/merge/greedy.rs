use super::*;

// Greedy merging over the clique graph spanning tree.
//
// Each iteration builds a minimum weight spanning tree of the clique graph
// over the active cliques and records its cost.  Among the tree edges, the
// pair with the smallest merge cost is merged, with the first such edge in
// tree order winning ties.  No cost threshold is applied: merging carries
// on until a single clique remains, so the cost trace covers every stage
// of the sweep.

pub(crate) struct GreedyMergeStrategy {
    stop: bool, // a flag to indicate that merging should be stopped
    nmerges: usize,
}

impl GreedyMergeStrategy {
    pub(crate) fn new() -> Self {
        Self {
            stop: false,
            nmerges: 0,
        }
    }
}

impl MergeStrategy for GreedyMergeStrategy {
    fn initialise(&mut self, s: &mut CliqueMergeState) -> Result<(), ChordalError> {
        self.nmerges = 0;
        // nothing to merge or record for an empty graph
        self.stop = s.active.is_empty();
        Ok(())
    }

    fn is_done(&self) -> bool {
        self.stop
    }

    fn traverse(
        &mut self,
        s: &mut CliqueMergeState,
    ) -> Result<Option<MergeCandidate>, ChordalError> {
        let tree = s.record_trace()?;

        if s.active.len() <= 1 {
            self.stop = true;
            return Ok(None);
        }

        let mut best: Option<MergeCandidate> = None;
        for e in tree.edges() {
            let cost = cost::merge_cost(&s.history[e.first], &s.history[e.second]);
            if best.map_or(true, |b| cost < b.cost) {
                best = Some(MergeCandidate {
                    first: e.first,
                    second: e.second,
                    cost,
                });
            }
        }

        Ok(best)
    }

    fn evaluate(&mut self, _s: &CliqueMergeState, _cand: MergeCandidate) -> bool {
        // merges always proceed, whatever the sign of the cost
        true
    }

    fn merge_two_cliques(&self, s: &mut CliqueMergeState, cand: MergeCandidate) {
        let MergeCandidate {
            first,
            second,
            cost,
        } = cand;
        let (first_size, second_size) = (s.history[first].len(), s.history[second].len());

        let merged = merge_active_pair(s, first, second);
        let size = s.history[merged].len();

        s.linkage.push(LinkageRow {
            first,
            second,
            cost,
            size,
        });
        s.provenance.add_merge(
            self.nmerges,
            (first, first_size),
            (second, second_size),
            merged,
            size,
            cost,
        );
    }

    fn update_strategy(&mut self, _s: &CliqueMergeState, _cand: MergeCandidate, do_merge: bool) {
        if do_merge {
            self.nmerges += 1;
        }
    }

    fn post_process_merge(&mut self, _s: &mut CliqueMergeState) -> Result<(), ChordalError> {
        //no-op
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn state(cliques: &[&[usize]], n: usize) -> CliqueMergeState {
        let cliques: Vec<Clique> = cliques.iter().map(|c| Clique::new(c.iter().copied())).collect();
        let provenance = ProvenanceGraph::new(&Graph::new(n), &cliques);
        CliqueMergeState::new(cliques, provenance)
    }

    #[test]
    fn test_greedy_path() {
        let mut s = state(&[&[0, 1], &[1, 2], &[2, 3]], 4);
        GreedyMergeStrategy::new().merge_cliques(&mut s).unwrap();

        let rows: Vec<_> = s
            .linkage
            .iter()
            .map(|r| (r.first, r.second, r.cost, r.size))
            .collect();
        assert_eq!(rows, vec![(0, 1, -2, 3), (3, 2, 2, 4)]);
        assert_eq!(s.active, vec![4]);
        assert_eq!(s.history[4], Clique::new([0, 1, 2, 3]));
        assert_eq!(s.trace.len(), 3);
        assert_eq!(s.trace[0].sdp_cost, 3 * 10 + 2 * 3);
        assert_eq!(s.trace[2].linking_constraints, 0);
        assert_eq!(s.trace[2].largest_clique, 4);
    }

    #[test]
    fn test_nomerge_keeps_cliques() {
        let mut s = state(&[&[0, 1], &[1, 2]], 3);
        let mut strategy = MergeStrategyImpl::from_method("none");
        strategy.merge_cliques(&mut s).unwrap();
        assert!(s.linkage.is_empty());
        assert_eq!(s.active, vec![0, 1]);
        assert_eq!(s.trace.len(), 1);
    }

    #[test]
    fn test_greedy_empty() {
        let mut s = state(&[], 0);
        MergeStrategyImpl::from_method("greedy")
            .merge_cliques(&mut s)
            .unwrap();
        assert!(s.trace.is_empty());
        assert!(s.linkage.is_empty());
    }
}
