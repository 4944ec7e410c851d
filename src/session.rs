//! One driver session: profile, five days of fuel costs, analysis.

use crate::input::{InputResult, Prompter};
use crate::metrics;
use crate::model::{AuditReport, DriverProfile, WeeklyFuelLog, WORK_DAYS};
use std::io::{BufRead, Write};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

pub const BANNER: &str = "=== Codac Logistics - Fuel & Performance Tracker ===";

/// Collect every input through `prompter` and derive the audit report.
pub fn collect_report<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> InputResult<AuditReport> {
    prompter.say(BANNER)?;
    prompter.say("")?;

    let profile = read_profile(prompter)?;
    tracing::debug!(
        driver = %profile.driver_name,
        budget = %profile.weekly_fuel_budget,
        distance_km = profile.total_distance_km,
        "profile collected"
    );

    let fuel_log = read_fuel_log(prompter)?;
    tracing::debug!(total = %fuel_log.total_fuel_spent, "fuel expenses collected");

    let summary = metrics::compute_performance(
        &fuel_log,
        profile.total_distance_km,
        profile.weekly_fuel_budget,
    );
    tracing::debug!(
        km_per_unit_fuel = summary.km_per_unit_fuel,
        rating = %summary.efficiency_rating,
        under_budget = summary.stayed_under_budget,
        "performance analysed"
    );

    Ok(AuditReport {
        generated_at_utc: timestamp_utc(),
        profile,
        fuel_log,
        summary,
    })
}

fn read_profile<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> InputResult<DriverProfile> {
    let driver_name = prompter.read_text("Enter Driver's Full Name: ")?;
    let weekly_fuel_budget = prompter.read_decimal(
        "Enter Weekly Fuel Budget (e.g. 2500.00): ",
        "weekly fuel budget",
    )?;
    let total_distance_km = prompter.read_distance()?;

    Ok(DriverProfile {
        driver_name,
        weekly_fuel_budget,
        total_distance_km,
    })
}

fn read_fuel_log<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> InputResult<WeeklyFuelLog> {
    let mut log = WeeklyFuelLog::default();
    for day_index in 0..WORK_DAYS {
        let prompt = format!("Enter fuel cost for Day {}: ", day_index + 1);
        let cost = prompter.read_decimal(&prompt, "daily fuel cost")?;
        log.record(day_index, cost)?;
    }
    Ok(log)
}

fn timestamp_utc() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}
