//! Derived fuel metrics for a completed week.

use crate::model::{EfficiencyRating, PerformanceSummary, WeeklyFuelLog};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const HIGH_EFFICIENCY_KM: f64 = 15.0;
const STANDARD_EFFICIENCY_KM: f64 = 10.0;

/// Average daily expense over the fixed five-day week, exact decimal division.
pub fn average_daily_expense(total_fuel_spent: Decimal) -> Decimal {
    total_fuel_spent / Decimal::from(5)
}

/// Kilometres per currency unit spent on fuel; 0 when nothing positive was spent.
pub fn km_per_unit_fuel(total_distance_km: f64, total_fuel_spent: Decimal) -> f64 {
    let total = total_fuel_spent.to_f64().unwrap_or(0.0);
    if total > 0.0 {
        total_distance_km / total
    } else {
        0.0
    }
}

/// Band a km-per-unit figure. The high threshold is strict, the standard one inclusive.
pub fn efficiency_rating(km_per_unit_fuel: f64) -> EfficiencyRating {
    if km_per_unit_fuel > HIGH_EFFICIENCY_KM {
        EfficiencyRating::High
    } else if km_per_unit_fuel >= STANDARD_EFFICIENCY_KM {
        EfficiencyRating::Standard
    } else {
        EfficiencyRating::Low
    }
}

/// Spending exactly the budget still counts as staying under it.
pub fn stayed_under_budget(total_fuel_spent: Decimal, weekly_fuel_budget: Decimal) -> bool {
    total_fuel_spent <= weekly_fuel_budget
}

/// Compute every derived metric for the week.
pub fn compute_performance(
    log: &WeeklyFuelLog,
    total_distance_km: f64,
    weekly_fuel_budget: Decimal,
) -> PerformanceSummary {
    let total_fuel_spent = log.total_fuel_spent;
    let km_per_unit_fuel = km_per_unit_fuel(total_distance_km, total_fuel_spent);
    PerformanceSummary {
        total_fuel_spent,
        average_daily_fuel_expense: average_daily_expense(total_fuel_spent),
        km_per_unit_fuel,
        efficiency_rating: efficiency_rating(km_per_unit_fuel),
        stayed_under_budget: stayed_under_budget(total_fuel_spent, weekly_fuel_budget),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn log_of(costs: [Decimal; 5]) -> WeeklyFuelLog {
        let mut log = WeeklyFuelLog::default();
        for (i, cost) in costs.into_iter().enumerate() {
            log.record(i, cost).unwrap();
        }
        log
    }

    #[test]
    fn average_is_exact() {
        assert_eq!(average_daily_expense(dec!(250.75)), dec!(50.15));
        assert_eq!(average_daily_expense(dec!(0.1)), dec!(0.02));
        let avg = average_daily_expense(dec!(0.03));
        assert_eq!(avg, dec!(0.006));
        assert_eq!(avg * dec!(5), dec!(0.03));
    }

    #[test]
    fn rating_boundaries() {
        assert_eq!(efficiency_rating(15.0), EfficiencyRating::Standard);
        assert_eq!(efficiency_rating(15.0001), EfficiencyRating::High);
        assert_eq!(efficiency_rating(10.0), EfficiencyRating::Standard);
        assert_eq!(efficiency_rating(9.9999), EfficiencyRating::Low);
        assert_eq!(efficiency_rating(0.0), EfficiencyRating::Low);
    }

    #[test]
    fn zero_spend_gives_zero_efficiency() {
        assert_eq!(km_per_unit_fuel(4000.0, Decimal::ZERO), 0.0);
        assert_eq!(km_per_unit_fuel(4000.0, dec!(-20)), 0.0);
    }

    #[test]
    fn budget_boundary_is_inclusive() {
        assert!(stayed_under_budget(dec!(300.00), dec!(300)));
        assert!(stayed_under_budget(dec!(299.99), dec!(300)));
        assert!(!stayed_under_budget(dec!(300.01), dec!(300)));
    }

    #[test]
    fn low_efficiency_week_under_budget() {
        let log = log_of([dec!(50.00), dec!(45.50), dec!(60.00), dec!(55.25), dec!(40.00)]);
        let summary = compute_performance(&log, 1200.5, dec!(300.00));

        assert_eq!(summary.total_fuel_spent, dec!(250.75));
        assert_eq!(summary.average_daily_fuel_expense, dec!(50.15));
        assert!((summary.km_per_unit_fuel - 4.7876).abs() < 0.001);
        assert_eq!(summary.efficiency_rating, EfficiencyRating::Low);
        assert!(summary.stayed_under_budget);
    }

    #[test]
    fn high_efficiency_week() {
        let log = log_of([dec!(40), dec!(40), dec!(40), dec!(40), dec!(40)]);
        let summary = compute_performance(&log, 4000.0, dec!(300.00));

        assert_eq!(summary.total_fuel_spent, dec!(200.00));
        assert_eq!(summary.km_per_unit_fuel, 20.0);
        assert_eq!(summary.efficiency_rating, EfficiencyRating::High);
    }

    #[test]
    fn zero_costs_rate_low() {
        let log = log_of([Decimal::ZERO; 5]);
        let summary = compute_performance(&log, 1.0, Decimal::ZERO);

        assert_eq!(summary.km_per_unit_fuel, 0.0);
        assert_eq!(summary.efficiency_rating, EfficiencyRating::Low);
        assert!(summary.stayed_under_budget);
    }
}
