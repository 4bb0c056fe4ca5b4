//! Daily log aggregation: packs legs into calendar days.

use chrono::{Days, NaiveDate};

use crate::error::PlanError;
use crate::itinerary::{round2, DailyLog, Leg, LegKind};

/// Hours available in one calendar day.
pub const DAILY_CAPACITY_HOURS: f64 = 24.0;

/// On-duty window used to derive off-duty hours.
pub const ON_DUTY_WINDOW_HOURS: f64 = 14.0;

/// Roll legs up into one log per day, starting at `start_date`.
///
/// Legs are packed greedily in order. A leg that would push the current day
/// past 24 hours starts the next day instead; legs are never split. A leg that
/// exceeds 24 hours on its own still gets a day to itself.
pub fn aggregate_daily_logs(legs: &[Leg], start_date: NaiveDate) -> Result<Vec<DailyLog>, PlanError> {
    let mut logs = Vec::new();
    let mut bucket: Vec<&Leg> = Vec::new();
    let mut bucket_hours = 0.0;
    let mut day_number = 1;
    let mut date = start_date;

    for leg in legs {
        if bucket.is_empty() || bucket_hours + leg.duration_hours <= DAILY_CAPACITY_HOURS {
            bucket.push(leg);
            bucket_hours += leg.duration_hours;
            continue;
        }

        logs.push(close_day(&bucket, day_number, date));
        day_number += 1;
        date = date
            .checked_add_days(Days::new(1))
            .ok_or_else(|| PlanError::InvalidInput(format!("date out of range after {}", date)))?;
        bucket = vec![leg];
        bucket_hours = leg.duration_hours;
    }

    if !bucket.is_empty() {
        logs.push(close_day(&bucket, day_number, date));
    }

    Ok(logs)
}

fn close_day(bucket: &[&Leg], day_number: u32, date: NaiveDate) -> DailyLog {
    let hours_of = |kind: LegKind| -> f64 {
        bucket
            .iter()
            .filter(|leg| leg.kind == kind)
            .map(|leg| leg.duration_hours)
            .sum()
    };

    let driving_hours = hours_of(LegKind::Driving);
    let rest_hours = hours_of(LegKind::Rest);
    let fueling_hours = hours_of(LegKind::Fueling);
    let total_hours = driving_hours + rest_hours + fueling_hours;
    let off_duty_hours = (ON_DUTY_WINDOW_HOURS - total_hours).max(0.0);

    DailyLog {
        day_number,
        date,
        total_hours: round2(total_hours),
        driving_hours: round2(driving_hours),
        off_duty_hours: round2(off_duty_hours),
        sleeper_berth_hours: round2(rest_hours),
    }
}
