#[derive(Debug, Clone, PartialEq)]
pub struct Advertisement {
    /// Position of the request within its day.
    pub index: usize,
    /// Minutes from session start.
    pub arrival_time: f64,
    /// Requested air time in minutes.
    pub duration: f64,
}

impl Advertisement {
    pub fn new(index: usize, arrival_time: f64, duration: f64) -> Self {
        Self {
            index,
            arrival_time,
            duration,
        }
    }
}
