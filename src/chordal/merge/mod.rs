mod greedy;
mod nomerge;
use crate::chordal::*;
use enum_dispatch::*;
pub(crate) use greedy::*;
pub(crate) use nomerge::*;

// Working state shared by all merge strategies.  The history owns every
// clique; `active` holds history indices in ascending order.  The linkage,
// cost trace and provenance graph are written by the strategies and
// handed to the caller once merging is complete.

#[derive(Debug)]
pub(crate) struct CliqueMergeState {
    pub history: CliqueHistory,
    pub active: Vec<usize>,
    pub linkage: Linkage,
    pub trace: Vec<CostTraceEntry>,
    pub provenance: ProvenanceGraph,
}

impl CliqueMergeState {
    pub(crate) fn new(cliques: Vec<Clique>, provenance: ProvenanceGraph) -> Self {
        let ninitial = cliques.len();
        Self {
            history: CliqueHistory::new(cliques),
            active: (0..ninitial).collect(),
            linkage: Linkage::new(ninitial),
            trace: Vec::new(),
            provenance,
        }
    }

    // spanning tree over the active cliques and its cost trace entry
    pub(crate) fn record_trace(&mut self) -> Result<SpanningTree, ChordalError> {
        let tree = CliqueGraph::new(&self.history, &self.active).spanning_tree()?;
        self.trace.push(CostTraceEntry {
            sdp_cost: cost::sdp_cost(&self.history, &tree),
            linking_constraints: tree.linking_constraints(),
            largest_clique: tree.largest_clique(&self.history),
        });
        Ok(tree)
    }
}

// a pair of active cliques selected for merging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MergeCandidate {
    pub first: usize,
    pub second: usize,
    pub cost: isize,
}

// All merge strategies must implement the following trait.

#[enum_dispatch]
pub(crate) trait MergeStrategy {
    // default implementation for all strategies
    fn merge_cliques(&mut self, s: &mut CliqueMergeState) -> Result<(), ChordalError> {
        self.initialise(s)?;

        while !self.is_done() {
            // find merge candidates
            let Some(cand) = self.traverse(s)? else {
                break; //bail if no candidates
            };

            // evaluate whether to merge the candidates
            let do_merge = self.evaluate(s, cand);
            if do_merge {
                self.merge_two_cliques(s, cand);
            }

            // update strategy information after the merge
            self.update_strategy(s, cand, do_merge);
        }
        self.post_process_merge(s)
    }

    // initialise the strategy
    fn initialise(&mut self, s: &mut CliqueMergeState) -> Result<(), ChordalError>;

    // merging complete, so stop the merging process
    fn is_done(&self) -> bool;

    // find the next merge candidates
    fn traverse(&mut self, s: &mut CliqueMergeState)
        -> Result<Option<MergeCandidate>, ChordalError>;

    // evaluate whether to merge a candidate pair or not
    fn evaluate(&mut self, s: &CliqueMergeState, cand: MergeCandidate) -> bool;

    // execute a merge
    fn merge_two_cliques(&self, s: &mut CliqueMergeState, cand: MergeCandidate);

    // update the strategy after a merge decision
    fn update_strategy(&mut self, s: &CliqueMergeState, cand: MergeCandidate, do_merge: bool);

    // do any post-processing of the merge state
    fn post_process_merge(&mut self, s: &mut CliqueMergeState) -> Result<(), ChordalError>;
}

#[enum_dispatch(MergeStrategy)]
pub(crate) enum MergeStrategyImpl {
    GreedyMergeStrategy,
    NoMergeStrategy,
}

impl MergeStrategyImpl {
    // method strings are checked by settings validation
    pub(crate) fn from_method(method: &str) -> Self {
        match method {
            "greedy" => GreedyMergeStrategy::new().into(),
            "none" => NoMergeStrategy::new().into(),
            _ => unreachable!(),
        }
    }
}

// Replace the active cliques `first` and `second` by their union, which
// is appended to the history.  Returns the history index of the union.
pub(crate) fn merge_active_pair(s: &mut CliqueMergeState, first: usize, second: usize) -> usize {
    let merged = s.history[first].union(&s.history[second]);
    let idx = s.history.push(merged);

    s.active.retain(|&c| c != first && c != second);
    // idx is the largest index so far, so this keeps ascending order
    s.active.push(idx);
    idx
}
