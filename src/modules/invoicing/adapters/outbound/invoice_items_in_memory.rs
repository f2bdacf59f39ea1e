use crate::modules::invoicing::core::model::InvoiceItem;
use crate::modules::invoicing::core::ports::InvoiceItemRepository;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryInvoiceItems {
    items: RwLock<HashMap<String, InvoiceItem>>,
    is_offline: bool,
}

impl InMemoryInvoiceItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            anyhow::bail!("Invoice item repository offline");
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl InvoiceItemRepository for InMemoryInvoiceItems {
    async fn insert(&self, item: InvoiceItem) -> anyhow::Result<()> {
        self.ensure_online()?;
        self.items
            .write()
            .await
            .insert(item.invoice_item_id.clone(), item);
        Ok(())
    }

    async fn list_by_user(
        &self,
        tenant_id: &str,
        user_id: &str,
    ) -> anyhow::Result<Vec<InvoiceItem>> {
        self.ensure_online()?;
        let mut items: Vec<InvoiceItem> = self
            .items
            .read()
            .await
            .values()
            .filter(|item| item.tenant_id == tenant_id && item.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            (a.created_at, &a.invoice_item_id).cmp(&(b.created_at, &b.invoice_item_id))
        });
        Ok(items)
    }

    async fn get(
        &self,
        tenant_id: &str,
        invoice_item_id: &str,
    ) -> anyhow::Result<Option<InvoiceItem>> {
        self.ensure_online()?;
        Ok(self
            .items
            .read()
            .await
            .get(invoice_item_id)
            .filter(|item| item.tenant_id == tenant_id)
            .cloned())
    }

    async fn delete(&self, invoice_item_id: &str) -> anyhow::Result<bool> {
        self.ensure_online()?;
        Ok(self.items.write().await.remove(invoice_item_id).is_some())
    }
}
