use crate::domain::break_window::Placement;
use crate::domain::parameters::SimulationParameters;

/// Money earned by one placement: its minutes at the base rate, discounted
/// once for a partial placement and once for a delayed one.
pub fn placement_revenue(placement: &Placement, params: &SimulationParameters) -> f64 {
    let mut money = placement.duration * params.price_per_min;
    if !placement.full_addition {
        money *= params.partial_addition_coefficient;
    }
    if !placement.immediately_added {
        money *= params.late_addition_coefficient;
    }
    money
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(full_addition: bool, immediately_added: bool) -> Placement {
        Placement {
            ad_index: 0,
            arrival_time: 20.0,
            duration: 3.0,
            full_addition,
            immediately_added,
        }
    }

    #[test]
    fn partial_immediate_placement_gets_only_the_partial_discount() {
        let params = SimulationParameters::default();
        let revenue = placement_revenue(&placement(false, true), &params);
        assert!((revenue - 810.0).abs() < 1e-9);
    }

    #[test]
    fn discounts_multiply() {
        let params = SimulationParameters::default();
        assert!((placement_revenue(&placement(true, true), &params) - 900.0).abs() < 1e-9);
        assert!((placement_revenue(&placement(true, false), &params) - 630.0).abs() < 1e-9);
        assert!((placement_revenue(&placement(false, false), &params) - 567.0).abs() < 1e-9);
    }

    #[test]
    fn revenue_grows_with_price_and_shrinks_with_discounts() {
        let cheap = SimulationParameters {
            price_per_min: 100.0,
            ..SimulationParameters::default()
        };
        let expensive = SimulationParameters {
            price_per_min: 150.0,
            ..SimulationParameters::default()
        };

        for (full, immediate) in [(true, true), (true, false), (false, true), (false, false)] {
            let p = placement(full, immediate);
            assert!(placement_revenue(&p, &expensive) >= placement_revenue(&p, &cheap));
            assert!(placement_revenue(&p, &cheap) <= placement_revenue(&placement(true, true), &cheap));
        }
    }
}
