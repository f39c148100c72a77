use thiserror::Error;

use crate::domain::break_window::{BreakWindow, Placement};
use crate::domain::parameters::MINUTES_PER_HOUR;
use crate::domain::statistics::PlacementStats;

#[derive(Error, Debug, PartialEq)]
pub enum ScheduleError {
    #[error("number of breaks must be greater than zero")]
    InvalidBreakCount,
    #[error("session length must be positive and finite, got {0} hours")]
    InvalidSessionLength(f64),
    #[error("break capacity must not be negative, got {0} minutes")]
    NegativeCapacity(f64),
    #[error("interval between breaks must be positive, got {0} minutes")]
    NonPositiveInterval(f64),
}

/// The break windows of one simulated day, in chronological order.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakSchedule {
    pub windows: Vec<BreakWindow>,
}

impl BreakSchedule {
    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.windows.iter().flat_map(|window| window.placements())
    }

    pub fn placed_minutes(&self) -> f64 {
        self.placements().map(|p| p.duration).sum()
    }

    /// Counts placements by kind. Rejections are not visible in the schedule,
    /// so the caller supplies them.
    pub fn tally(&self, not_added: u64) -> PlacementStats {
        let mut stats = PlacementStats {
            not_added,
            ..PlacementStats::default()
        };
        for placement in self.placements() {
            if placement.immediately_added {
                stats.immediately_added += 1;
            } else {
                stats.not_immediately_added += 1;
            }
            if placement.full_addition {
                stats.full_addition += 1;
            } else {
                stats.partial_addition += 1;
            }
        }
        stats
    }
}

/// Spreads `num_breaks` equal breaks over the session with equal gaps before,
/// between and after them.
pub fn create_breaks(
    session_hours: f64,
    break_fraction: f64,
    num_breaks: usize,
) -> Result<BreakSchedule, ScheduleError> {
    if num_breaks == 0 {
        return Err(ScheduleError::InvalidBreakCount);
    }
    if !(session_hours.is_finite() && session_hours > 0.0) {
        return Err(ScheduleError::InvalidSessionLength(session_hours));
    }

    let total_minutes = session_hours * MINUTES_PER_HOUR;
    let break_minutes = session_hours * break_fraction * MINUTES_PER_HOUR;
    let capacity = break_minutes / num_breaks as f64;
    let interval = (total_minutes - break_minutes) / (num_breaks + 1) as f64;

    if capacity.is_nan() || capacity < 0.0 {
        return Err(ScheduleError::NegativeCapacity(capacity));
    }
    if interval.is_nan() || interval <= 0.0 {
        return Err(ScheduleError::NonPositiveInterval(interval));
    }

    let windows = (0..num_breaks)
        .map(|i| BreakWindow::new(i, interval * (i + 1) as f64, capacity))
        .collect();
    Ok(BreakSchedule { windows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::advertisement::Advertisement;

    #[test]
    fn three_breaks_in_a_sixteen_hour_session() {
        let schedule = create_breaks(16.0, 0.10, 3).unwrap();

        assert_eq!(schedule.windows.len(), 3);
        let first = &schedule.windows[0];
        assert!((first.capacity - 32.0).abs() < 1e-9);
        assert!((first.start - 216.0).abs() < 1e-9);
        assert!((first.end - 248.0).abs() < 1e-9);
        assert!((schedule.windows[1].start - 432.0).abs() < 1e-9);
        assert!((schedule.windows[2].start - 648.0).abs() < 1e-9);
        assert!(schedule.windows.iter().all(|w| w.cursor() == w.start));
    }

    #[test]
    fn create_breaks_is_deterministic() {
        for num_breaks in 1..=10 {
            assert_eq!(
                create_breaks(16.0, 0.1, num_breaks).unwrap(),
                create_breaks(16.0, 0.1, num_breaks).unwrap()
            );
        }
    }

    #[test]
    fn breaks_never_overlap_and_fit_the_session() {
        let schedule = create_breaks(3.0, 0.25, 7).unwrap();
        assert!(schedule.windows.windows(2).all(|w| w[0].end < w[1].start));
        assert!(schedule.windows.last().unwrap().end < 180.0);
    }

    #[test]
    fn zero_breaks_is_a_configuration_error() {
        assert_eq!(
            create_breaks(16.0, 0.1, 0).unwrap_err(),
            ScheduleError::InvalidBreakCount
        );
    }

    #[test]
    fn break_fraction_of_one_or_more_leaves_no_interval() {
        assert!(matches!(
            create_breaks(16.0, 1.0, 2),
            Err(ScheduleError::NonPositiveInterval(_))
        ));
        assert!(matches!(
            create_breaks(16.0, 1.5, 2),
            Err(ScheduleError::NonPositiveInterval(_))
        ));
    }

    #[test]
    fn negative_break_fraction_is_rejected() {
        assert!(matches!(
            create_breaks(16.0, -0.1, 2),
            Err(ScheduleError::NegativeCapacity(_))
        ));
    }

    #[test]
    fn non_positive_session_is_rejected() {
        assert_eq!(
            create_breaks(0.0, 0.1, 2).unwrap_err(),
            ScheduleError::InvalidSessionLength(0.0)
        );
    }

    #[test]
    fn tally_counts_placements_by_kind() {
        let mut schedule = create_breaks(16.0, 0.1, 2).unwrap();
        let ad = Advertisement::new(0, 200.0, 3.0);
        schedule.windows[0].accept(&ad, 3.0, true, false);
        schedule.windows[1].accept(&ad, 1.5, false, true);

        let stats = schedule.tally(4);

        assert_eq!(
            stats,
            PlacementStats {
                not_added: 4,
                immediately_added: 1,
                not_immediately_added: 1,
                full_addition: 1,
                partial_addition: 1,
            }
        );
        assert_eq!(schedule.placed_minutes(), 4.5);
    }
}
