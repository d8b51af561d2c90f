//! Per-stage counts of one validation run.

use serde::Serialize;

use crate::checks::Stage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageCount {
    pub stage: Stage,
    pub input: usize,
    pub kept: usize,
}

impl StageCount {
    pub fn dropped(&self) -> usize {
        self.input - self.kept
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub stages: Vec<StageCount>,
    /// Records skipped by projection for having too few fields.
    pub malformed: usize,
}

impl ValidationReport {
    pub fn input_count(&self) -> usize {
        self.stages.first().map_or(0, |count| count.input)
    }

    pub fn kept_count(&self) -> usize {
        self.stages.last().map_or(0, |count| count.kept)
    }

    pub fn stage(&self, stage: Stage) -> Option<&StageCount> {
        self.stages.iter().find(|count| count.stage == stage)
    }
}
