use super::*;

// Keeps the maximal cliques as they are.  A single cost trace entry is
// recorded for the unmerged decomposition.

pub(crate) struct NoMergeStrategy;

impl NoMergeStrategy {
    pub(crate) fn new() -> Self {
        Self {}
    }
}

impl MergeStrategy for NoMergeStrategy {
    fn initialise(&mut self, s: &mut CliqueMergeState) -> Result<(), ChordalError> {
        if !s.active.is_empty() {
            s.record_trace()?;
        }
        Ok(())
    }

    fn is_done(&self) -> bool {
        true
    }

    fn traverse(
        &mut self,
        _s: &mut CliqueMergeState,
    ) -> Result<Option<MergeCandidate>, ChordalError> {
        unreachable!()
    }

    fn evaluate(&mut self, _s: &CliqueMergeState, _cand: MergeCandidate) -> bool {
        unreachable!()
    }

    fn merge_two_cliques(&self, _s: &mut CliqueMergeState, _cand: MergeCandidate) {
        unreachable!()
    }

    fn update_strategy(&mut self, _s: &CliqueMergeState, _cand: MergeCandidate, _do_merge: bool) {
        unreachable!()
    }

    fn post_process_merge(&mut self, _s: &mut CliqueMergeState) -> Result<(), ChordalError> {
        //no-op
        Ok(())
    }
}
