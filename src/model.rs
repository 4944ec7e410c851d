use crate::input::{InputError, InputResult};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;

/// Number of working days covered by one audit.
pub const WORK_DAYS: usize = 5;

/// Inclusive bounds for the weekly distance, in kilometres.
pub const MIN_DISTANCE_KM: f64 = 1.0;
pub const MAX_DISTANCE_KM: f64 = 5000.0;

/// Driver identity and the constraints entered before the week's costs.
#[derive(Debug, Clone, Serialize)]
pub struct DriverProfile {
    pub driver_name: String,
    pub weekly_fuel_budget: Decimal,
    pub total_distance_km: f64,
}

/// Fuel cost per working day, Day 1 first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WeeklyFuelLog {
    pub daily_costs: [Decimal; WORK_DAYS],
    pub total_fuel_spent: Decimal,
}

impl WeeklyFuelLog {
    /// Store the cost for a zero-based day index and add it to the running total.
    /// Fails without touching the log if the total would leave the decimal range.
    pub fn record(&mut self, day_index: usize, cost: Decimal) -> InputResult<()> {
        let total = self
            .total_fuel_spent
            .checked_add(cost)
            .ok_or(InputError::TotalOverflow {
                field: "total fuel spent",
            })?;
        self.daily_costs[day_index] = cost;
        self.total_fuel_spent = total;
        Ok(())
    }

    /// Iterate over `(day_number, cost)` pairs, day numbers starting at 1.
    pub fn days(&self) -> impl Iterator<Item = (usize, Decimal)> + '_ {
        self.daily_costs
            .iter()
            .enumerate()
            .map(|(i, cost)| (i + 1, *cost))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EfficiencyRating {
    High,
    Standard,
    Low,
}

impl EfficiencyRating {
    pub fn as_str(self) -> &'static str {
        match self {
            EfficiencyRating::High => "High Efficiency",
            EfficiencyRating::Standard => "Standard Efficiency",
            EfficiencyRating::Low => "Low Efficiency / Maintenance Required",
        }
    }
}

impl fmt::Display for EfficiencyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Serialized as the report text so JSON consumers see the same label.
impl Serialize for EfficiencyRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Metrics derived once every input has been collected.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceSummary {
    pub total_fuel_spent: Decimal,
    pub average_daily_fuel_expense: Decimal,
    pub km_per_unit_fuel: f64,
    pub efficiency_rating: EfficiencyRating,
    pub stayed_under_budget: bool,
}

/// Everything the audit report needs, in text or JSON form.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub generated_at_utc: String,
    pub profile: DriverProfile,
    pub fuel_log: WeeklyFuelLog,
    pub summary: PerformanceSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn record_fills_slot_and_accumulates_total() {
        let mut log = WeeklyFuelLog::default();
        log.record(0, dec!(50.00)).unwrap();
        log.record(4, dec!(-5.25)).unwrap();

        assert_eq!(log.daily_costs[0], dec!(50.00));
        assert_eq!(log.daily_costs[4], dec!(-5.25));
        assert_eq!(log.total_fuel_spent, dec!(44.75));
    }

    #[test]
    fn record_rejects_total_past_decimal_range() {
        let mut log = WeeklyFuelLog::default();
        log.record(0, Decimal::MAX).unwrap();
        let err = log.record(1, Decimal::MAX).unwrap_err();

        assert!(matches!(err, InputError::TotalOverflow { .. }));
        assert_eq!(log.daily_costs[1], Decimal::ZERO);
        assert_eq!(log.total_fuel_spent, Decimal::MAX);
    }

    #[test]
    fn days_are_numbered_from_one() {
        let mut log = WeeklyFuelLog::default();
        log.record(2, dec!(12.5)).unwrap();
        let days: Vec<_> = log.days().collect();

        assert_eq!(days.len(), WORK_DAYS);
        assert_eq!(days[0].0, 1);
        assert_eq!(days[2], (3, dec!(12.5)));
        assert_eq!(days[4].0, 5);
    }

    #[test]
    fn rating_serializes_as_label() {
        let json = serde_json::to_string(&EfficiencyRating::Low).unwrap();
        assert_eq!(json, "\"Low Efficiency / Maintenance Required\"");
    }
}
