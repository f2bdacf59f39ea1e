use crate::modules::catalog::core::model::{Client, Project, ProjectMember};
use crate::modules::catalog::core::ports::CatalogRepository;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryCatalog {
    clients: RwLock<HashMap<String, Client>>,
    projects: RwLock<HashMap<String, Project>>,
    members: RwLock<HashMap<(String, String), ProjectMember>>,
    is_offline: bool,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            anyhow::bail!("Catalog repository offline");
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn insert_client(&self, client: Client) -> anyhow::Result<()> {
        self.ensure_online()?;
        self.clients
            .write()
            .await
            .insert(client.client_id.clone(), client);
        Ok(())
    }

    async fn list_clients(&self, tenant_id: &str) -> anyhow::Result<Vec<Client>> {
        self.ensure_online()?;
        let mut clients: Vec<Client> = self
            .clients
            .read()
            .await
            .values()
            .filter(|c| c.tenant_id == tenant_id)
            .cloned()
            .collect();
        clients.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(clients)
    }

    async fn get_client(&self, tenant_id: &str, client_id: &str) -> anyhow::Result<Option<Client>> {
        self.ensure_online()?;
        Ok(self
            .clients
            .read()
            .await
            .get(client_id)
            .filter(|c| c.tenant_id == tenant_id)
            .cloned())
    }

    async fn insert_project(&self, project: Project) -> anyhow::Result<()> {
        self.ensure_online()?;
        self.projects
            .write()
            .await
            .insert(project.project_id.clone(), project);
        Ok(())
    }

    async fn list_projects(&self, tenant_id: &str) -> anyhow::Result<Vec<Project>> {
        self.ensure_online()?;
        let mut projects: Vec<Project> = self
            .projects
            .read()
            .await
            .values()
            .filter(|p| p.tenant_id == tenant_id)
            .cloned()
            .collect();
        projects.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(projects)
    }

    async fn get_project(
        &self,
        tenant_id: &str,
        project_id: &str,
    ) -> anyhow::Result<Option<Project>> {
        self.ensure_online()?;
        Ok(self
            .projects
            .read()
            .await
            .get(project_id)
            .filter(|p| p.tenant_id == tenant_id)
            .cloned())
    }

    async fn upsert_member(&self, member: ProjectMember) -> anyhow::Result<()> {
        self.ensure_online()?;
        self.members.write().await.insert(
            (member.project_id.clone(), member.user_id.clone()),
            member,
        );
        Ok(())
    }

    async fn remove_member(&self, project_id: &str, user_id: &str) -> anyhow::Result<bool> {
        self.ensure_online()?;
        Ok(self
            .members
            .write()
            .await
            .remove(&(project_id.to_string(), user_id.to_string()))
            .is_some())
    }

    async fn list_members(&self, project_id: &str) -> anyhow::Result<Vec<ProjectMember>> {
        self.ensure_online()?;
        let mut members: Vec<ProjectMember> = self
            .members
            .read()
            .await
            .values()
            .filter(|m| m.project_id == project_id)
            .cloned()
            .collect();
        members.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        Ok(members)
    }

    async fn get_member(
        &self,
        project_id: &str,
        user_id: &str,
    ) -> anyhow::Result<Option<ProjectMember>> {
        self.ensure_online()?;
        Ok(self
            .members
            .read()
            .await
            .get(&(project_id.to_string(), user_id.to_string()))
            .cloned())
    }
}

#[cfg(test)]
mod in_memory_catalog_tests {
    use super::*;
    use crate::modules::catalog::core::ports::{ProjectDirectory, ProjectMembership};
    use rstest::{fixture, rstest};

    fn project(project_id: &str, tenant_id: &str) -> Project {
        Project {
            project_id: project_id.into(),
            tenant_id: tenant_id.into(),
            client_id: None,
            name: format!("Project {project_id}"),
            created_at: 0,
        }
    }

    #[fixture]
    async fn catalog() -> InMemoryCatalog {
        let catalog = InMemoryCatalog::new();
        catalog.insert_project(project("p-1", "tenant-1")).await.unwrap();
        catalog
            .upsert_member(ProjectMember {
                project_id: "p-1".into(),
                user_id: "user-1".into(),
                hourly_rate_cents: 9_000,
            })
            .await
            .unwrap();
        catalog
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_scope_projects_to_their_tenant(#[future] catalog: InMemoryCatalog) {
        let catalog = catalog.await;
        assert!(catalog.get_project("tenant-1", "p-1").await.unwrap().is_some());
        assert!(catalog.get_project("tenant-2", "p-1").await.unwrap().is_none());
    }

    #[rstest]
    #[case(None, "user-1", ProjectMembership::Unassigned)]
    #[case(Some("p-1"), "user-1", ProjectMembership::Member { hourly_rate_cents: 9_000 })]
    #[case(Some("p-1"), "user-2", ProjectMembership::NotMember)]
    #[case(Some("p-9"), "user-1", ProjectMembership::UnknownProject)]
    #[tokio::test]
    async fn it_should_resolve_project_membership(
        #[future] catalog: InMemoryCatalog,
        #[case] project_id: Option<&str>,
        #[case] user_id: &str,
        #[case] expected: ProjectMembership,
    ) {
        let catalog = catalog.await;
        assert_eq!(
            catalog
                .membership("tenant-1", project_id, user_id)
                .await
                .unwrap(),
            expected
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_replace_the_rate_of_an_existing_member(#[future] catalog: InMemoryCatalog) {
        let catalog = catalog.await;
        catalog
            .upsert_member(ProjectMember {
                project_id: "p-1".into(),
                user_id: "user-1".into(),
                hourly_rate_cents: 12_000,
            })
            .await
            .unwrap();
        let members = catalog.list_members("p-1").await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].hourly_rate_cents, 12_000);
        assert!(catalog.remove_member("p-1", "user-1").await.unwrap());
        assert!(!catalog.remove_member("p-1", "user-1").await.unwrap());
    }
}
