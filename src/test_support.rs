use crate::services::random_process::AdSampler;

// A sampler that cycles through fixed gaps and durations
pub struct ScriptedSampler {
    gaps: Vec<f64>,
    durations: Vec<f64>,
    next_gap: usize,
    next_duration: usize,
}

impl ScriptedSampler {
    pub fn new(gaps: Vec<f64>, durations: Vec<f64>) -> Self {
        assert!(!gaps.is_empty() && !durations.is_empty());
        Self {
            gaps,
            durations,
            next_gap: 0,
            next_duration: 0,
        }
    }
}

impl AdSampler for ScriptedSampler {
    fn next_interarrival(&mut self) -> f64 {
        let gap = self.gaps[self.next_gap % self.gaps.len()];
        self.next_gap += 1;
        gap
    }

    fn next_duration(&mut self) -> f64 {
        let duration = self.durations[self.next_duration % self.durations.len()];
        self.next_duration += 1;
        duration
    }
}
