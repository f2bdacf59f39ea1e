// Finds an existing entry for the same project and calendar day, so a second
// entry for that pair is never created by accident.

use crate::shared::core::calendar_date::same_calendar_day;
use crate::shared::core::primitives::EpochMillis;

/// The fields of a stored entry that decide uniqueness.
pub trait DatedEntry {
    fn time_entry_id(&self) -> &str;
    fn project_id(&self) -> Option<&str>;
    /// Stored UTC-midnight instant of the entry's calendar day.
    fn date(&self) -> EpochMillis;
    fn is_deleted(&self) -> bool {
        false
    }
}

/// First live entry with the same project (unassigned matches unassigned)
/// on the same calendar day, skipping the entry currently being edited.
pub fn find_collision<'a, E: DatedEntry>(
    project_id: Option<&str>,
    date: EpochMillis,
    editing_id: Option<&str>,
    entries: &'a [E],
) -> Option<&'a E> {
    entries.iter().find(|entry| {
        !entry.is_deleted()
            && entry.project_id() == project_id
            && same_calendar_day(entry.date(), date)
            && Some(entry.time_entry_id()) != editing_id
    })
}

#[cfg(test)]
mod collision_tests {
    use super::*;
    use crate::shared::core::calendar_date::to_stored_millis;
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    #[derive(Debug, PartialEq)]
    struct Entry {
        id: &'static str,
        project: Option<&'static str>,
        date: EpochMillis,
        deleted: bool,
    }

    impl DatedEntry for Entry {
        fn time_entry_id(&self) -> &str {
            self.id
        }
        fn project_id(&self) -> Option<&str> {
            self.project
        }
        fn date(&self) -> EpochMillis {
            self.date
        }
        fn is_deleted(&self) -> bool {
            self.deleted
        }
    }

    fn day(d: u32) -> EpochMillis {
        to_stored_millis(NaiveDate::from_ymd_opt(2024, 3, d).unwrap())
    }

    #[fixture]
    fn entries() -> Vec<Entry> {
        vec![
            Entry { id: "te-1", project: Some("p-1"), date: day(15), deleted: false },
            Entry { id: "te-2", project: Some("p-2"), date: day(15), deleted: false },
            Entry { id: "te-3", project: None, date: day(16), deleted: false },
            Entry { id: "te-4", project: Some("p-1"), date: day(17), deleted: true },
        ]
    }

    #[rstest]
    fn it_should_find_an_entry_for_the_same_project_and_day(entries: Vec<Entry>) {
        let found = find_collision(Some("p-1"), day(15), None, &entries);
        assert_eq!(found.map(|e| e.id), Some("te-1"));
    }

    #[rstest]
    fn it_should_never_collide_with_the_entry_being_edited(entries: Vec<Entry>) {
        assert_eq!(find_collision(Some("p-1"), day(15), Some("te-1"), &entries), None);
    }

    #[rstest]
    fn it_should_report_another_entry_while_editing(entries: Vec<Entry>) {
        let found = find_collision(Some("p-2"), day(15), Some("te-1"), &entries);
        assert_eq!(found.map(|e| e.id), Some("te-2"));
    }

    #[rstest]
    #[case(Some("p-1"), 16)]
    #[case(Some("p-3"), 15)]
    #[case(Some("p-1"), 17)]
    fn it_should_not_collide_on_other_days_projects_or_deleted_entries(
        entries: Vec<Entry>,
        #[case] project: Option<&str>,
        #[case] d: u32,
    ) {
        assert_eq!(find_collision(project, day(d), None, &entries), None);
    }

    #[rstest]
    fn it_should_treat_unassigned_time_as_one_project(entries: Vec<Entry>) {
        let found = find_collision(None, day(16), None, &entries);
        assert_eq!(found.map(|e| e.id), Some("te-3"));
    }

    #[rstest]
    fn it_should_compare_calendar_days_not_raw_instants(entries: Vec<Entry>) {
        let later_same_day = day(15) + 13 * 3_600_000;
        let found = find_collision(Some("p-1"), later_same_day, None, &entries);
        assert_eq!(found.map(|e| e.id), Some("te-1"));
    }
}
