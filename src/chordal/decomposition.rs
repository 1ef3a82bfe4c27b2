#![allow(non_snake_case)]

use super::*;
use crate::graph::Graph;
use crate::io::PrintTarget;
use crate::timers::*;
use std::time::Duration;

/// Runs the full decomposition pipeline on network graphs:
/// chordal extension, maximal cliques and clique merging.
///
/// Verbose output goes to stdout unless redirected through the
/// [`ConfigurablePrintTarget`](crate::io::ConfigurablePrintTarget) methods.
#[derive(Debug)]
pub struct CliqueDecomposer {
    pub(crate) settings: DecompositionSettings,
    pub(crate) stream: PrintTarget,
    pub(crate) timers: Option<Timers>,
}

impl CliqueDecomposer {
    pub fn new(settings: DecompositionSettings) -> Result<Self, ChordalError> {
        settings.validate()?;
        Ok(Self {
            settings,
            stream: PrintTarget::default(),
            timers: None,
        })
    }

    pub fn settings(&self) -> &DecompositionSettings {
        &self.settings
    }

    /// stage timers of the most recent call to [`decompose`](Self::decompose)
    pub fn timers(&self) -> Option<&Timers> {
        self.timers.as_ref()
    }

    /// Decompose `G` into a merge history of cliques.
    ///
    /// Both the extension and the merge stage can fail; see
    /// [`ChordalError`].  No partial result is returned on failure.
    pub fn decompose(&mut self, G: &Graph) -> Result<DecompositionResult, ChordalError> {
        let mut timers = Timers::default();
        let extension;
        let cliques;
        let mut state;

        timeit! {timers => "extension"; {
            extension = chordal_extension(G, &self.settings)?;
        }}

        timeit! {timers => "cliques"; {
            cliques = extension.maximal_cliques();
        }}

        if self.settings.verbose {
            self.print_banner()?;
            self.print_configuration(G, &extension, &cliques)?;
        }

        timeit! {timers => "merge"; {
            let provenance = ProvenanceGraph::new(G, &cliques);
            state = CliqueMergeState::new(cliques, provenance);
            MergeStrategyImpl::from_method(&self.settings.merge_method).merge_cliques(&mut state)?;
        }}

        let result = DecompositionResult {
            extension,
            history: state.history,
            active: state.active,
            linkage: state.linkage,
            cost_trace: state.trace,
            provenance: state.provenance,
            timings: timers.entries().collect(),
        };

        if self.settings.verbose {
            self.print_merge_table(&result)?;
            self.print_footer(&timers)?;
        }

        self.timers = Some(timers);
        Ok(result)
    }
}

/// Decompose `G` with default settings.
pub fn decompose(G: &Graph) -> Result<DecompositionResult, ChordalError> {
    CliqueDecomposer::new(DecompositionSettings::default())?.decompose(G)
}

/// Everything produced by a decomposition run.
#[derive(Debug, Clone)]
pub struct DecompositionResult {
    /// chordal extension of the input graph
    pub extension: ChordalExtension,
    /// every clique created, originals first
    pub history: CliqueHistory,
    active: Vec<usize>,
    /// one row per merge
    pub linkage: Linkage,
    /// one entry per iteration, including the final state
    pub cost_trace: Vec<CostTraceEntry>,
    pub provenance: ProvenanceGraph,
    /// elapsed time of each pipeline stage
    pub timings: Vec<(&'static str, Duration)>,
}

impl DecompositionResult {
    /// maximal cliques of the chordal extension
    pub fn initial_cliques(&self) -> &[Clique] {
        self.history.initial()
    }

    /// cliques left active when merging stopped
    pub fn final_cliques(&self) -> Vec<&Clique> {
        self.active.iter().map(|&c| &self.history[c]).collect()
    }

    /// Active cliques after the first `k` merges, ordered by history
    /// index.  `None` if fewer than `k` merges were performed.
    pub fn cliques_after(&self, k: usize) -> Option<Vec<&Clique>> {
        if k > self.linkage.len() {
            return None;
        }
        let ninitial = self.history.ninitial();
        let mut active: Vec<usize> = (0..ninitial).collect();

        for (i, row) in self.linkage.iter().take(k).enumerate() {
            active.retain(|&c| c != row.first && c != row.second);
            active.push(ninitial + i);
        }
        Some(active.iter().map(|&c| &self.history[c]).collect())
    }

    /// The number of merges with the smallest recorded SDP cost, earliest
    /// on ties.  `None` if no cost was recorded.
    pub fn best_step(&self) -> Option<usize> {
        self.cost_trace
            .iter()
            .enumerate()
            .min_by(|(i, a), (j, b)| a.sdp_cost.cmp(&b.sdp_cost).then(i.cmp(j)))
            .map(|(k, _)| k)
    }

    /// elapsed time of a pipeline stage
    pub fn stage_time(&self, stage: &str) -> Option<Duration> {
        self.timings
            .iter()
            .find(|(key, _)| *key == stage)
            .map(|(_, t)| *t)
    }
}
