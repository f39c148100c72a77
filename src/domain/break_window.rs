use crate::domain::advertisement::Advertisement;

/// An advertisement accepted into a break.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub ad_index: usize,
    pub arrival_time: f64,
    /// Accepted air time, never more than the requested duration.
    pub duration: f64,
    pub full_addition: bool,
    pub immediately_added: bool,
}

/// A fixed-capacity slot of the session reserved for advertisements.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakWindow {
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub capacity: f64,
    cursor: f64,
    placements: Vec<Placement>,
}

impl BreakWindow {
    pub fn new(index: usize, start: f64, capacity: f64) -> Self {
        Self {
            index,
            start,
            end: start + capacity,
            capacity,
            cursor: start,
            placements: Vec::new(),
        }
    }

    /// Time at which the next accepted advertisement would start airing.
    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn used(&self) -> f64 {
        self.placements.iter().map(|p| p.duration).sum()
    }

    pub fn available(&self) -> f64 {
        self.capacity - self.used()
    }

    /// Appends a placement of `duration` minutes for `ad` and moves the cursor
    /// by the same amount. The caller checks capacity first.
    pub(crate) fn accept(
        &mut self,
        ad: &Advertisement,
        duration: f64,
        full_addition: bool,
        immediately_added: bool,
    ) -> &Placement {
        self.placements.push(Placement {
            ad_index: ad.index,
            arrival_time: ad.arrival_time,
            duration,
            full_addition,
            immediately_added,
        });
        self.cursor += duration;
        &self.placements[self.placements.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_new_window_starts_empty_with_cursor_at_start() {
        let window = BreakWindow::new(0, 216.0, 32.0);
        assert_eq!(window.end, 248.0);
        assert_eq!(window.cursor(), 216.0);
        assert_eq!(window.available(), 32.0);
        assert!(window.placements().is_empty());
    }

    #[test]
    fn accepting_moves_cursor_by_the_placed_duration() {
        let mut window = BreakWindow::new(1, 100.0, 10.0);
        let ad = Advertisement::new(4, 95.5, 3.0);

        let placement = window.accept(&ad, 3.0, true, false).clone();

        assert_eq!(placement.ad_index, 4);
        assert_eq!(placement.arrival_time, 95.5);
        assert_eq!(window.cursor(), 103.0);
        assert_eq!(window.used(), 3.0);
        assert_eq!(window.available(), 7.0);
    }
}
