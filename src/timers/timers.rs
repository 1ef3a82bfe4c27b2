use indexmap::IndexMap;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct StageTimer {
    start: Option<Instant>,
    elapsed: Duration,
}

/// Named stage timers.
///
/// Stages are reported in the order they were first started.  Starting
/// a stage again accumulates into its previous total.
#[derive(Default, Debug)]
pub struct Timers {
    stack: Vec<&'static str>,
    stages: IndexMap<&'static str, StageTimer>,
}

impl Timers {
    pub fn start_as_current(&mut self, key: &'static str) {
        self.stages.entry(key).or_default().start = Some(Instant::now());
        self.stack.push(key);
    }

    /// stops the most recently started stage, if any
    pub fn stop_current(&mut self) {
        let Some(key) = self.stack.pop() else {
            return;
        };
        if let Some(stage) = self.stages.get_mut(key) {
            if let Some(instant) = stage.start.take() {
                stage.elapsed += instant.elapsed();
            }
        }
    }

    /// sum over all stages
    pub fn total_time(&self) -> Duration {
        self.stages.values().map(|t| t.elapsed).sum()
    }

    /// stages and their elapsed times, in start order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, Duration)> + '_ {
        self.stages.iter().map(|(k, t)| (*k, t.elapsed))
    }
}

macro_rules! timeit {
    ($timer:ident => $key:literal; $($tt:tt)+) => {

        $timer.start_as_current($key);
        $(
            $tt
        )+
        $timer.stop_current();
    }
}
pub(crate) use timeit;

#[test]
fn test_timer_order() {
    let mut timers = Timers::default();

    timers.start_as_current("extension");
    timers.stop_current();
    timers.start_as_current("cliques");
    timers.stop_current();
    timers.start_as_current("merge");
    timers.stop_current();
    timers.start_as_current("extension");
    timers.stop_current();

    let entries: Vec<_> = timers.entries().collect();
    let keys: Vec<_> = entries.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec!["extension", "cliques", "merge"]);

    let sum: Duration = entries.iter().map(|(_, t)| *t).sum();
    assert_eq!(timers.total_time(), sum);

    // stopping with nothing running is harmless
    timers.stop_current();
    assert_eq!(timers.entries().count(), 3);
}
