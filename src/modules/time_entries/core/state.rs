use crate::modules::access::core::policy::Owned;

/// A registered entry as folded from its stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredTimeEntry {
    pub time_entry_id: String,
    pub tenant_id: String,
    pub user_id: String,
    pub project_id: Option<String>,
    pub date: i64,
    pub duration_minutes: u32,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: String,
    pub billable: bool,
    pub created_at: i64,
    pub created_by: String,
    pub updated_at: i64,
    pub updated_by: String,
    pub deleted_at: Option<i64>,
}

impl RegisteredTimeEntry {
    pub fn ownership(&self) -> Owned<'_> {
        Owned {
            tenant_id: &self.tenant_id,
            owner_id: &self.user_id,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeEntryState {
    None,
    Registered(RegisteredTimeEntry),
}
