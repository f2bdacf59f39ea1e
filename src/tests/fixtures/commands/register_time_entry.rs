use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::time_entries::core::duration::DurationInput;
use crate::modules::time_entries::use_cases::register_time_entry::command::RegisterTimeEntry;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterTimeEntryDto {
    pub time_entry_id: String,
    pub project_id: Option<String>,
    pub date: NaiveDate,
    pub duration: DurationInput,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: String,
    pub billable: bool,
}

pub struct RegisterTimeEntryBuilder {
    inner: RegisterTimeEntry,
}

impl Default for RegisterTimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterTimeEntryBuilder {
    pub fn new() -> Self {
        let dto: RegisterTimeEntryDto =
            serde_json::from_str(include_str!("json/register_time_entry.json")).unwrap();

        Self {
            inner: RegisterTimeEntry {
                time_entry_id: dto.time_entry_id,
                project_id: dto.project_id,
                date: dto.date,
                duration: dto.duration,
                start_time: dto.start_time,
                end_time: dto.end_time,
                description: dto.description,
                billable: dto.billable,
                requested_at: 1_700_000_000_000,
            },
        }
    }

    pub fn time_entry_id(mut self, v: impl Into<String>) -> Self {
        self.inner.time_entry_id = v.into();
        self
    }

    pub fn project_id(mut self, v: Option<&str>) -> Self {
        self.inner.project_id = v.map(str::to_string);
        self
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    pub fn duration(mut self, v: DurationInput) -> Self {
        self.inner.duration = v;
        self
    }

    pub fn start_time(mut self, v: Option<&str>) -> Self {
        self.inner.start_time = v.map(str::to_string);
        self
    }

    pub fn end_time(mut self, v: Option<&str>) -> Self {
        self.inner.end_time = v.map(str::to_string);
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn billable(mut self, v: bool) -> Self {
        self.inner.billable = v;
        self
    }

    pub fn requested_at(mut self, v: i64) -> Self {
        self.inner.requested_at = v;
        self
    }

    pub fn build(self) -> RegisterTimeEntry {
        self.inner
    }
}

#[cfg(test)]
mod time_entry_register_time_entry_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RegisterTimeEntryBuilder::default().build();
        assert_eq!(built.time_entry_id, "te-fixed-0001");
        assert_eq!(built.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(built.duration, DurationInput::Text("1h 30m".into()));
        assert_eq!(built.start_time.as_deref(), Some("09:00"));
        assert_eq!(built.description, "Sprint planning session");
        assert!(built.billable);
        assert_eq!(built.requested_at, 1_700_000_000_000i64);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = RegisterTimeEntryBuilder::new()
            .time_entry_id("tid-123")
            .project_id(None)
            .date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
            .duration(DurationInput::Minutes(15))
            .start_time(None)
            .end_time(None)
            .description("desc")
            .billable(false)
            .requested_at(3333)
            .build();

        assert_eq!(custom.time_entry_id, "tid-123");
        assert_eq!(custom.project_id, None);
        assert_eq!(custom.duration, DurationInput::Minutes(15));
        assert_eq!(custom.start_time, None);
        assert_eq!(custom.end_time, None);
        assert_eq!(custom.description, "desc");
        assert!(!custom.billable);
        assert_eq!(custom.requested_at, 3333);
    }
}
