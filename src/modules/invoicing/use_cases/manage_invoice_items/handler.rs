use std::sync::Arc;

use serde::Deserialize;

use crate::modules::access::core::policy::{Action, Actor, Owned, authorize};
use crate::modules::invoicing::core::billing::amount_cents;
use crate::modules::invoicing::core::model::InvoiceItem;
use crate::modules::invoicing::core::ports::InvoiceItemRepository;
use crate::modules::invoicing::use_cases::errors::InvoicingError;
use crate::shared::core::primitives::{new_id, now_millis};

#[derive(Debug, Clone, Deserialize)]
pub struct NewInvoiceItem {
    /// Defaults to the acting user.
    pub user_id: Option<String>,
    pub project_id: Option<String>,
    pub description: String,
    pub minutes: u64,
    pub hourly_rate_cents: i64,
}

pub struct InvoiceItemsHandler {
    repository: Arc<dyn InvoiceItemRepository>,
}

impl InvoiceItemsHandler {
    pub fn new(repository: Arc<dyn InvoiceItemRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(
        &self,
        actor: &Actor,
        new_item: NewInvoiceItem,
    ) -> Result<InvoiceItem, InvoicingError> {
        let user_id = new_item.user_id.unwrap_or_else(|| actor.user_id.clone());
        authorize(
            actor,
            Action::ManageInvoiceItems(Owned {
                tenant_id: &actor.tenant_id,
                owner_id: &user_id,
            }),
        )?;
        let description = new_item.description.trim();
        if description.is_empty() {
            return Err(InvoicingError::Invalid("description is required"));
        }
        if new_item.minutes < 1 {
            return Err(InvoicingError::Invalid("minutes must be at least 1"));
        }
        if new_item.hourly_rate_cents < 0 {
            return Err(InvoicingError::Invalid("hourly rate cannot be negative"));
        }
        let item = InvoiceItem {
            invoice_item_id: new_id(),
            tenant_id: actor.tenant_id.clone(),
            user_id,
            project_id: new_item.project_id,
            description: description.to_string(),
            minutes: new_item.minutes,
            hourly_rate_cents: new_item.hourly_rate_cents,
            amount_cents: amount_cents(new_item.minutes, new_item.hourly_rate_cents),
            created_at: now_millis(),
        };
        self.repository.insert(item.clone()).await?;
        tracing::info!(invoice_item_id = %item.invoice_item_id, user_id = %item.user_id, "invoice item created");
        Ok(item)
    }

    pub async fn list(
        &self,
        actor: &Actor,
        user_id: &str,
    ) -> Result<Vec<InvoiceItem>, InvoicingError> {
        authorize(
            actor,
            Action::ManageInvoiceItems(Owned {
                tenant_id: &actor.tenant_id,
                owner_id: user_id,
            }),
        )?;
        Ok(self
            .repository
            .list_by_user(&actor.tenant_id, user_id)
            .await?)
    }

    pub async fn delete(&self, actor: &Actor, invoice_item_id: &str) -> Result<(), InvoicingError> {
        let item = self
            .repository
            .get(&actor.tenant_id, invoice_item_id)
            .await?
            .ok_or(InvoicingError::NotFound)?;
        authorize(
            actor,
            Action::ManageInvoiceItems(Owned {
                tenant_id: &item.tenant_id,
                owner_id: &item.user_id,
            }),
        )?;
        if !self.repository.delete(invoice_item_id).await? {
            return Err(InvoicingError::NotFound);
        }
        Ok(())
    }
}
