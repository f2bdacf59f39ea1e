// Pricing of billable time.

use std::collections::{BTreeMap, HashMap};

use crate::modules::invoicing::core::model::BillableLine;
use crate::modules::time_entries::core::duration::format_decimal_hours;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;

const MINUTES_PER_HOUR: i128 = 60;

/// `minutes × rate / 60`, rounded half up to whole cents.
pub fn amount_cents(minutes: u64, hourly_rate_cents: i64) -> i64 {
    let exact = i128::from(minutes) * i128::from(hourly_rate_cents);
    let rounded = (exact + MINUTES_PER_HOUR / 2).div_euclid(MINUTES_PER_HOUR);
    i64::try_from(rounded).unwrap_or(i64::MAX)
}

/// Billable minutes per project, ordered by project id. Unassigned and
/// deleted entries are not billed.
pub fn billable_minutes_by_project(entries: &[TimeEntryView]) -> BTreeMap<String, u64> {
    let mut minutes = BTreeMap::new();
    for entry in entries {
        let Some(project_id) = &entry.project_id else {
            continue;
        };
        if !entry.billable || entry.deleted_at.is_some() {
            continue;
        }
        *minutes.entry(project_id.clone()).or_insert(0) += u64::from(entry.duration_minutes);
    }
    minutes
}

/// Prices each project at the user's rate; a project without a rate bills at 0.
pub fn price_lines(
    minutes_by_project: BTreeMap<String, u64>,
    rates: &HashMap<String, i64>,
) -> Vec<BillableLine> {
    minutes_by_project
        .into_iter()
        .map(|(project_id, minutes)| {
            let hourly_rate_cents = rates.get(&project_id).copied().unwrap_or(0);
            BillableLine {
                decimal_hours: format_decimal_hours(minutes),
                amount_cents: amount_cents(minutes, hourly_rate_cents),
                project_id,
                minutes,
                hourly_rate_cents,
            }
        })
        .collect()
}
