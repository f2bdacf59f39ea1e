use async_trait::async_trait;

use crate::modules::invoicing::core::model::InvoiceItem;

#[async_trait]
pub trait InvoiceItemRepository: Send + Sync {
    async fn insert(&self, item: InvoiceItem) -> anyhow::Result<()>;
    /// Items of one user, oldest first.
    async fn list_by_user(&self, tenant_id: &str, user_id: &str)
    -> anyhow::Result<Vec<InvoiceItem>>;
    async fn get(&self, tenant_id: &str, invoice_item_id: &str)
    -> anyhow::Result<Option<InvoiceItem>>;
    async fn delete(&self, invoice_item_id: &str) -> anyhow::Result<bool>;
}
