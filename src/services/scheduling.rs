use crate::domain::advertisement::Advertisement;
use crate::services::break_schedule::BreakSchedule;

/// An advertisement may only air within this many minutes of its arrival.
pub const ACCEPTANCE_WINDOW_MINUTES: f64 = 240.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    Full,
    Partial,
    Rejected,
}

impl PlacementOutcome {
    pub fn is_full(self) -> bool {
        self == PlacementOutcome::Full
    }

    pub fn is_rejected(self) -> bool {
        self == PlacementOutcome::Rejected
    }
}

/// Greedily places `ad` into the first break whose cursor lets the whole
/// request start and end inside the acceptance window.
///
/// The first such break is the only candidate: if it has no capacity left the
/// advertisement is rejected rather than offered to a later break. A break
/// with less room than requested takes a partial placement.
pub fn place_advertisement(ad: &Advertisement, schedule: &mut BreakSchedule) -> PlacementOutcome {
    let window_start = ad.arrival_time;
    let window_end = ad.arrival_time + ACCEPTANCE_WINDOW_MINUTES;

    let Some(window) = schedule.windows.iter_mut().find(|window| {
        let proposed_start = window.cursor();
        let proposed_end = proposed_start + ad.duration;
        (window_start..window_end).contains(&proposed_start)
            && window_start < proposed_end
            && proposed_end <= window_end
    }) else {
        log::trace!("Ad {} rejected: no break inside its window", ad.index);
        return PlacementOutcome::Rejected;
    };

    let available = window.available();
    if available <= 0.0 {
        log::trace!("Ad {} rejected: break {} is full", ad.index, window.index);
        return PlacementOutcome::Rejected;
    }

    let time_to_add = ad.duration.min(available);
    let full_addition = time_to_add == ad.duration;
    let immediately_added = ad.arrival_time.floor() == window.cursor().floor();
    let break_start = window.start;
    let placement = window.accept(ad, time_to_add, full_addition, immediately_added);
    log::trace!(
        "Ad {} placed in break starting at {:.2} for {:.2} minutes (full: {}, immediate: {})",
        placement.ad_index,
        break_start,
        placement.duration,
        placement.full_addition,
        placement.immediately_added
    );

    if full_addition {
        PlacementOutcome::Full
    } else {
        PlacementOutcome::Partial
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::break_schedule::create_breaks;

    fn three_breaks() -> BreakSchedule {
        // breaks at [216, 248], [432, 464], [648, 680]
        create_breaks(16.0, 0.10, 3).unwrap()
    }

    #[test]
    fn early_ad_lands_in_the_first_break_as_a_late_full_addition() {
        let mut schedule = three_breaks();
        let ad = Advertisement::new(0, 20.0, 3.0);

        let outcome = place_advertisement(&ad, &mut schedule);

        assert_eq!(outcome, PlacementOutcome::Full);
        let placement = &schedule.windows[0].placements()[0];
        assert_eq!(placement.ad_index, 0);
        assert_eq!(placement.duration, 3.0);
        assert!(placement.full_addition);
        assert!(!placement.immediately_added);
        assert!((schedule.windows[0].cursor() - 219.0).abs() < 1e-9);
    }

    #[test]
    fn ad_arriving_in_the_same_minute_as_the_cursor_is_immediate() {
        let mut schedule = three_breaks();
        let ad = Advertisement::new(0, 216.0, 2.0);

        place_advertisement(&ad, &mut schedule);

        assert!(schedule.windows[0].placements()[0].immediately_added);
    }

    #[test]
    fn ad_arriving_after_a_cursor_skips_to_the_next_eligible_break() {
        let mut schedule = three_breaks();
        let ad = Advertisement::new(0, 300.0, 3.0);

        place_advertisement(&ad, &mut schedule);

        assert!(schedule.windows[0].placements().is_empty());
        assert_eq!(schedule.windows[1].placements().len(), 1);
    }

    #[test]
    fn ad_arriving_after_the_last_break_is_rejected() {
        let mut schedule = three_breaks();
        let ad = Advertisement::new(0, 700.0, 3.0);

        assert_eq!(place_advertisement(&ad, &mut schedule), PlacementOutcome::Rejected);
        assert!(schedule.placements().next().is_none());
    }

    #[test]
    fn ad_whose_full_request_would_end_outside_the_window_is_rejected() {
        let mut schedule = three_breaks();
        // window [0, 240); break 0 cursor 216 + 30 = 246 > 240
        let ad = Advertisement::new(0, 0.0, 30.0);

        assert_eq!(place_advertisement(&ad, &mut schedule), PlacementOutcome::Rejected);
        assert!(schedule.placements().next().is_none());
    }

    #[test]
    fn nearly_full_break_takes_a_partial_placement() {
        let mut schedule = create_breaks(1.0, 0.05, 1).unwrap(); // capacity 3, starts at 28.5
        let first = Advertisement::new(0, 28.0, 2.0);
        let second = Advertisement::new(1, 28.2, 2.0);

        assert_eq!(place_advertisement(&first, &mut schedule), PlacementOutcome::Full);
        assert_eq!(place_advertisement(&second, &mut schedule), PlacementOutcome::Partial);

        let window = &schedule.windows[0];
        let partial = &window.placements()[1];
        assert!((partial.duration - 1.0).abs() < 1e-9);
        assert!(!partial.full_addition);
        assert!((window.used() - window.capacity).abs() < 1e-9);
        assert!((window.cursor() - window.end).abs() < 1e-9);
    }

    #[test]
    fn full_break_rejects_instead_of_trying_a_later_break() {
        let mut schedule = create_breaks(2.0, 0.05, 2).unwrap(); // capacity 3, breaks at 38 and 76
        let filler = Advertisement::new(0, 30.0, 3.0);
        let late = Advertisement::new(1, 30.0, 1.0);

        assert_eq!(place_advertisement(&filler, &mut schedule), PlacementOutcome::Full);
        // break 0 cursor is now 41, inside [30, 270), and it has no room left
        assert_eq!(place_advertisement(&late, &mut schedule), PlacementOutcome::Rejected);
        assert!(schedule.windows[1].placements().is_empty());
    }

    #[test]
    fn placements_never_overfill_any_break() {
        let mut schedule = create_breaks(16.0, 0.10, 4).unwrap();
        let mut rejected = 0;
        for i in 0..400 {
            let ad = Advertisement::new(i, i as f64 * 2.3, 1.0 + (i % 5) as f64 * 0.7);
            let outcome = place_advertisement(&ad, &mut schedule);
            if outcome.is_rejected() {
                rejected += 1;
            }
        }

        assert!(rejected > 0);
        for window in &schedule.windows {
            assert!(window.used() <= window.capacity + 1e-9);
            let expected_cursor = window.start + window.used();
            assert!((window.cursor() - expected_cursor).abs() < 1e-9);
        }
        let placed: Vec<usize> = schedule.placements().map(|p| p.ad_index).collect();
        let mut unique = placed.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(placed.len(), unique.len());
    }
}
