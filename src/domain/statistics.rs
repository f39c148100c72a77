use std::ops::AddAssign;

use serde::Serialize;

/// Placement counters of one simulated day or year.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementStats {
    pub not_added: u64,
    pub immediately_added: u64,
    pub not_immediately_added: u64,
    pub full_addition: u64,
    pub partial_addition: u64,
}

impl PlacementStats {
    pub fn scaled(&self, factor: u64) -> Self {
        Self {
            not_added: self.not_added * factor,
            immediately_added: self.immediately_added * factor,
            not_immediately_added: self.not_immediately_added * factor,
            full_addition: self.full_addition * factor,
            partial_addition: self.partial_addition * factor,
        }
    }

    pub fn added(&self) -> u64 {
        self.full_addition + self.partial_addition
    }
}

impl AddAssign for PlacementStats {
    fn add_assign(&mut self, other: Self) {
        self.not_added += other.not_added;
        self.immediately_added += other.immediately_added;
        self.not_immediately_added += other.not_immediately_added;
        self.full_addition += other.full_addition;
        self.partial_addition += other.partial_addition;
    }
}

/// Per-counter arithmetic mean over several yearly estimates.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct AveragePlacementStats {
    pub not_added: f64,
    pub immediately_added: f64,
    pub not_immediately_added: f64,
    pub full_addition: f64,
    pub partial_addition: f64,
}

impl AveragePlacementStats {
    pub fn mean_of(stats: &[PlacementStats]) -> Self {
        if stats.is_empty() {
            return Self::default();
        }
        let n = stats.len() as f64;
        let mean = |field: fn(&PlacementStats) -> u64| {
            stats.iter().map(|s| field(s) as f64).sum::<f64>() / n
        };
        Self {
            not_added: mean(|s: &PlacementStats| s.not_added),
            immediately_added: mean(|s: &PlacementStats| s.immediately_added),
            not_immediately_added: mean(|s: &PlacementStats| s.not_immediately_added),
            full_addition: mean(|s: &PlacementStats| s.full_addition),
            partial_addition: mean(|s: &PlacementStats| s.partial_addition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(value: u64) -> PlacementStats {
        PlacementStats {
            not_added: value,
            immediately_added: value + 1,
            not_immediately_added: value + 2,
            full_addition: value + 3,
            partial_addition: value + 4,
        }
    }

    #[test]
    fn scaled_multiplies_every_counter() {
        let yearly = stats(1).scaled(365);
        assert_eq!(yearly.not_added, 365);
        assert_eq!(yearly.immediately_added, 730);
        assert_eq!(yearly.not_immediately_added, 1095);
        assert_eq!(yearly.full_addition, 1460);
        assert_eq!(yearly.partial_addition, 1825);
    }

    #[test]
    fn add_assign_sums_counters() {
        let mut total = PlacementStats::default();
        total += stats(1);
        total += stats(2);
        assert_eq!(total.not_added, 3);
        assert_eq!(total.partial_addition, 11);
        assert_eq!(total.added(), 9 + 11);
    }

    #[test]
    fn mean_of_averages_each_counter() {
        let average = AveragePlacementStats::mean_of(&[stats(1), stats(4)]);
        assert_eq!(average.not_added, 2.5);
        assert_eq!(average.full_addition, 5.5);
        assert_eq!(AveragePlacementStats::mean_of(&[]), AveragePlacementStats::default());
    }
}
