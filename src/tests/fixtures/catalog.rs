use crate::modules::catalog::adapters::outbound::catalog_in_memory::InMemoryCatalog;
use crate::modules::catalog::core::model::{Client, Project, ProjectMember};
use crate::modules::catalog::core::ports::CatalogRepository;
use crate::tests::fixtures::actors::{TENANT_ID, USER_ID};

pub const PROJECT_ID: &str = "project-fixed-0001";
pub const HOURLY_RATE_CENTS: i64 = 10_000;

/// One client with one project the fixture owner is a member of.
pub async fn seeded_catalog() -> InMemoryCatalog {
    let catalog = InMemoryCatalog::new();
    catalog
        .insert_client(Client {
            client_id: "client-fixed-0001".into(),
            tenant_id: TENANT_ID.into(),
            name: "Acme".into(),
            created_at: 1_700_000_000_000,
        })
        .await
        .unwrap();
    catalog
        .insert_project(Project {
            project_id: PROJECT_ID.into(),
            tenant_id: TENANT_ID.into(),
            client_id: Some("client-fixed-0001".into()),
            name: "Website relaunch".into(),
            created_at: 1_700_000_000_000,
        })
        .await
        .unwrap();
    catalog
        .upsert_member(ProjectMember {
            project_id: PROJECT_ID.into(),
            user_id: USER_ID.into(),
            hourly_rate_cents: HOURLY_RATE_CENTS,
        })
        .await
        .unwrap();
    catalog
}
