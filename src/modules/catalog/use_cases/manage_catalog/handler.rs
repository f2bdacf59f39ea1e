use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::modules::access::core::policy::{Action, Actor, PolicyError, authorize};
use crate::modules::catalog::core::model::{Client, Project, ProjectMember};
use crate::modules::catalog::core::ports::CatalogRepository;
use crate::shared::core::primitives::{new_id, now_millis};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("not allowed: {0}")]
    Forbidden(#[from] PolicyError),

    #[error("invalid: {0}")]
    Invalid(&'static str),

    #[error("a client named {0:?} already exists")]
    DuplicateClient(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewClient {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewProject {
    pub name: String,
    pub client_id: Option<String>,
}

/// Clients, projects and who may log time to them. Writes are admin only.
pub struct CatalogHandler {
    repository: Arc<dyn CatalogRepository>,
}

impl CatalogHandler {
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_client(
        &self,
        actor: &Actor,
        new_client: NewClient,
    ) -> Result<Client, CatalogError> {
        authorize(actor, Action::ManageCatalog)?;
        let name = non_blank(&new_client.name, "client name is required")?;
        let taken = self
            .repository
            .list_clients(&actor.tenant_id)
            .await?
            .iter()
            .any(|client| client.name.to_lowercase() == name.to_lowercase());
        if taken {
            return Err(CatalogError::DuplicateClient(name));
        }
        let client = Client {
            client_id: new_id(),
            tenant_id: actor.tenant_id.clone(),
            name,
            created_at: now_millis(),
        };
        self.repository.insert_client(client.clone()).await?;
        tracing::info!(client_id = %client.client_id, tenant_id = %client.tenant_id, "client created");
        Ok(client)
    }

    pub async fn list_clients(&self, actor: &Actor) -> Result<Vec<Client>, CatalogError> {
        authorize(actor, Action::ViewCatalog)?;
        Ok(self.repository.list_clients(&actor.tenant_id).await?)
    }

    pub async fn create_project(
        &self,
        actor: &Actor,
        new_project: NewProject,
    ) -> Result<Project, CatalogError> {
        authorize(actor, Action::ManageCatalog)?;
        let name = non_blank(&new_project.name, "project name is required")?;
        if let Some(client_id) = &new_project.client_id {
            if self
                .repository
                .get_client(&actor.tenant_id, client_id)
                .await?
                .is_none()
            {
                return Err(CatalogError::NotFound("client"));
            }
        }
        let project = Project {
            project_id: new_id(),
            tenant_id: actor.tenant_id.clone(),
            client_id: new_project.client_id,
            name,
            created_at: now_millis(),
        };
        self.repository.insert_project(project.clone()).await?;
        tracing::info!(project_id = %project.project_id, tenant_id = %project.tenant_id, "project created");
        Ok(project)
    }

    /// Admins see every project of the tenant, members only their own.
    pub async fn list_projects(&self, actor: &Actor) -> Result<Vec<Project>, CatalogError> {
        authorize(actor, Action::ViewCatalog)?;
        let projects = self.repository.list_projects(&actor.tenant_id).await?;
        if actor.is_admin() {
            return Ok(projects);
        }
        let mut visible = Vec::with_capacity(projects.len());
        for project in projects {
            if self
                .repository
                .get_member(&project.project_id, &actor.user_id)
                .await?
                .is_some()
            {
                visible.push(project);
            }
        }
        Ok(visible)
    }

    /// Adds the user to the project, or changes their rate if already a member.
    pub async fn add_member(
        &self,
        actor: &Actor,
        project_id: &str,
        user_id: &str,
        hourly_rate_cents: i64,
    ) -> Result<ProjectMember, CatalogError> {
        authorize(actor, Action::ManageCatalog)?;
        if hourly_rate_cents < 0 {
            return Err(CatalogError::Invalid("hourly rate cannot be negative"));
        }
        let user_id = non_blank(user_id, "user id is required")?;
        self.existing_project(actor, project_id).await?;
        let member = ProjectMember {
            project_id: project_id.to_string(),
            user_id,
            hourly_rate_cents,
        };
        self.repository.upsert_member(member.clone()).await?;
        Ok(member)
    }

    pub async fn remove_member(
        &self,
        actor: &Actor,
        project_id: &str,
        user_id: &str,
    ) -> Result<(), CatalogError> {
        authorize(actor, Action::ManageCatalog)?;
        self.existing_project(actor, project_id).await?;
        if !self.repository.remove_member(project_id, user_id).await? {
            return Err(CatalogError::NotFound("member"));
        }
        Ok(())
    }

    pub async fn list_members(
        &self,
        actor: &Actor,
        project_id: &str,
    ) -> Result<Vec<ProjectMember>, CatalogError> {
        authorize(actor, Action::ManageCatalog)?;
        self.existing_project(actor, project_id).await?;
        Ok(self.repository.list_members(project_id).await?)
    }

    async fn existing_project(&self, actor: &Actor, project_id: &str) -> Result<Project, CatalogError> {
        self.repository
            .get_project(&actor.tenant_id, project_id)
            .await?
            .ok_or(CatalogError::NotFound("project"))
    }
}

fn non_blank(value: &str, message: &'static str) -> Result<String, CatalogError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::Invalid(message));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod manage_catalog_handler_tests {
    use super::*;
    use crate::tests::fixtures::actors;
    use crate::tests::fixtures::catalog::{PROJECT_ID, seeded_catalog};
    use rstest::{fixture, rstest};

    #[fixture]
    async fn handler() -> CatalogHandler {
        CatalogHandler::new(Arc::new(seeded_catalog().await))
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_only_let_admins_create_clients(#[future] handler: CatalogHandler) {
        let handler = handler.await;
        let result = handler
            .create_client(
                &actors::owner(),
                NewClient {
                    name: "Globex".into(),
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(CatalogError::Forbidden(PolicyError::AdminOnly))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_client_name_that_differs_only_in_case(
        #[future] handler: CatalogHandler,
    ) {
        let handler = handler.await;
        let result = handler
            .create_client(
                &actors::admin(),
                NewClient {
                    name: "  ACME ".into(),
                },
            )
            .await;
        assert!(matches!(result, Err(CatalogError::DuplicateClient(name)) if name == "ACME"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_require_an_existing_client_for_a_project(#[future] handler: CatalogHandler) {
        let handler = handler.await;
        let result = handler
            .create_project(
                &actors::admin(),
                NewProject {
                    name: "Intranet".into(),
                    client_id: Some("client-missing".into()),
                },
            )
            .await;
        assert!(matches!(result, Err(CatalogError::NotFound("client"))));

        let project = handler
            .create_project(
                &actors::admin(),
                NewProject {
                    name: "Intranet".into(),
                    client_id: Some("client-fixed-0001".into()),
                },
            )
            .await
            .unwrap();
        assert_eq!(project.tenant_id, actors::TENANT_ID);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_show_members_only_their_own_projects(#[future] handler: CatalogHandler) {
        let handler = handler.await;
        handler
            .create_project(
                &actors::admin(),
                NewProject {
                    name: "Internal tooling".into(),
                    client_id: None,
                },
            )
            .await
            .unwrap();

        let admin_view = handler.list_projects(&actors::admin()).await.unwrap();
        let owner_view = handler.list_projects(&actors::owner()).await.unwrap();
        let colleague_view = handler.list_projects(&actors::colleague()).await.unwrap();

        assert_eq!(admin_view.len(), 2);
        assert_eq!(owner_view.len(), 1);
        assert_eq!(owner_view[0].project_id, PROJECT_ID);
        assert!(colleague_view.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_manage_memberships(#[future] handler: CatalogHandler) {
        let handler = handler.await;
        let admin = actors::admin();
        assert!(matches!(
            handler.add_member(&admin, PROJECT_ID, "user-fixed-0002", -1).await,
            Err(CatalogError::Invalid(_))
        ));
        handler
            .add_member(&admin, PROJECT_ID, "user-fixed-0002", 7_500)
            .await
            .unwrap();
        assert_eq!(handler.list_members(&admin, PROJECT_ID).await.unwrap().len(), 2);

        handler
            .remove_member(&admin, PROJECT_ID, "user-fixed-0002")
            .await
            .unwrap();
        assert!(matches!(
            handler.remove_member(&admin, PROJECT_ID, "user-fixed-0002").await,
            Err(CatalogError::NotFound("member"))
        ));
        assert!(matches!(
            handler.list_members(&admin, "project-missing").await,
            Err(CatalogError::NotFound("project"))
        ));
    }
}
