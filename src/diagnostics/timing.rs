use serde::Serialize;
use std::time::Instant;

/// Wall-clock time spent in one ranking stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: &'static str,
    pub elapsed_ms: f64,
}

/// Per-stage timings of one resolution. Stages that were not reached are
/// absent.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Run `stage`, recording its elapsed time under `label`.
    pub fn time<T>(&mut self, label: &'static str, stage: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = stage();
        self.stages.push(StageTiming {
            label,
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        });
        out
    }

    pub fn stage_ms(&self, label: &str) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.elapsed_ms)
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.label).collect()
    }
}
