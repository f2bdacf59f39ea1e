use async_trait::async_trait;

use crate::modules::catalog::core::model::{Client, Project, ProjectMember};

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn insert_client(&self, client: Client) -> anyhow::Result<()>;
    async fn list_clients(&self, tenant_id: &str) -> anyhow::Result<Vec<Client>>;
    async fn get_client(&self, tenant_id: &str, client_id: &str) -> anyhow::Result<Option<Client>>;

    async fn insert_project(&self, project: Project) -> anyhow::Result<()>;
    async fn list_projects(&self, tenant_id: &str) -> anyhow::Result<Vec<Project>>;
    async fn get_project(
        &self,
        tenant_id: &str,
        project_id: &str,
    ) -> anyhow::Result<Option<Project>>;

    /// Inserts the member, or replaces the rate of an existing one.
    async fn upsert_member(&self, member: ProjectMember) -> anyhow::Result<()>;
    /// Returns whether a membership was removed.
    async fn remove_member(&self, project_id: &str, user_id: &str) -> anyhow::Result<bool>;
    async fn list_members(&self, project_id: &str) -> anyhow::Result<Vec<ProjectMember>>;
    async fn get_member(
        &self,
        project_id: &str,
        user_id: &str,
    ) -> anyhow::Result<Option<ProjectMember>>;
}

/// How a user relates to the project a time entry points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectMembership {
    Unassigned,
    UnknownProject,
    NotMember,
    Member { hourly_rate_cents: i64 },
}

impl ProjectMembership {
    /// `None` for unassigned time, otherwise whether the user is a member.
    pub fn is_member(&self) -> Option<bool> {
        match self {
            ProjectMembership::Unassigned => None,
            ProjectMembership::Member { .. } => Some(true),
            ProjectMembership::UnknownProject | ProjectMembership::NotMember => Some(false),
        }
    }
}

#[async_trait]
pub trait ProjectDirectory: Send + Sync {
    async fn membership(
        &self,
        tenant_id: &str,
        project_id: Option<&str>,
        user_id: &str,
    ) -> anyhow::Result<ProjectMembership>;
}

#[async_trait]
impl<T> ProjectDirectory for T
where
    T: CatalogRepository + ?Sized,
{
    async fn membership(
        &self,
        tenant_id: &str,
        project_id: Option<&str>,
        user_id: &str,
    ) -> anyhow::Result<ProjectMembership> {
        let Some(project_id) = project_id else {
            return Ok(ProjectMembership::Unassigned);
        };
        if self.get_project(tenant_id, project_id).await?.is_none() {
            return Ok(ProjectMembership::UnknownProject);
        }
        Ok(match self.get_member(project_id, user_id).await? {
            Some(member) => ProjectMembership::Member {
                hourly_rate_cents: member.hourly_rate_cents,
            },
            None => ProjectMembership::NotMember,
        })
    }
}
