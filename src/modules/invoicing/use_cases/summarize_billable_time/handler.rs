use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::modules::access::core::policy::{Action, Actor, Owned, authorize};
use crate::modules::catalog::core::ports::CatalogRepository;
use crate::modules::invoicing::core::billing::{billable_minutes_by_project, price_lines};
use crate::modules::invoicing::core::model::{BillingSummary, InvoiceItem};
use crate::modules::invoicing::core::ports::InvoiceItemRepository;
use crate::modules::invoicing::use_cases::errors::InvoicingError;
use crate::modules::time_entries::core::duration::format_decimal_hours;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TimeEntryQueries;
use crate::shared::core::calendar_date::to_stored_millis;
use crate::shared::core::primitives::{new_id, now_millis};

pub struct BillingHandler {
    queries: Arc<dyn TimeEntryQueries>,
    catalog: Arc<dyn CatalogRepository>,
    invoice_items: Arc<dyn InvoiceItemRepository>,
}

impl BillingHandler {
    pub fn new(
        queries: Arc<dyn TimeEntryQueries>,
        catalog: Arc<dyn CatalogRepository>,
        invoice_items: Arc<dyn InvoiceItemRepository>,
    ) -> Self {
        Self {
            queries,
            catalog,
            invoice_items,
        }
    }

    /// Billable time of `user_id` between `from` and `to` (both inclusive),
    /// per project, priced at the user's project rate.
    pub async fn summarize(
        &self,
        actor: &Actor,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<BillingSummary, InvoicingError> {
        authorize(
            actor,
            Action::ViewBilling(Owned {
                tenant_id: &actor.tenant_id,
                owner_id: user_id,
            }),
        )?;
        self.build_summary(&actor.tenant_id, user_id, from, to).await
    }

    /// One invoice item per summary line, stored for the user.
    pub async fn draft_invoice_items(
        &self,
        actor: &Actor,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<InvoiceItem>, InvoicingError> {
        authorize(
            actor,
            Action::ManageInvoiceItems(Owned {
                tenant_id: &actor.tenant_id,
                owner_id: user_id,
            }),
        )?;
        let summary = self
            .build_summary(&actor.tenant_id, user_id, from, to)
            .await?;
        let created_at = now_millis();
        let mut drafted = Vec::with_capacity(summary.lines.len());
        for line in summary.lines {
            let project_name = self
                .catalog
                .get_project(&actor.tenant_id, &line.project_id)
                .await?
                .map(|project| project.name)
                .unwrap_or_else(|| line.project_id.clone());
            let item = InvoiceItem {
                invoice_item_id: new_id(),
                tenant_id: actor.tenant_id.clone(),
                user_id: user_id.to_string(),
                description: format!("{project_name} ({from} to {to})"),
                project_id: Some(line.project_id),
                minutes: line.minutes,
                hourly_rate_cents: line.hourly_rate_cents,
                amount_cents: line.amount_cents,
                created_at,
            };
            self.invoice_items.insert(item.clone()).await?;
            drafted.push(item);
        }
        tracing::info!(user_id, items = drafted.len(), "invoice items drafted");
        Ok(drafted)
    }

    async fn build_summary(
        &self,
        tenant_id: &str,
        user_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<BillingSummary, InvoicingError> {
        if from > to {
            return Err(InvoicingError::Invalid("from must not be after to"));
        }
        let entries = self
            .queries
            .list_by_user_between(tenant_id, user_id, to_stored_millis(from), to_stored_millis(to))
            .await?;
        let minutes_by_project = billable_minutes_by_project(&entries);

        let mut rates = HashMap::new();
        for project_id in minutes_by_project.keys() {
            if let Some(member) = self.catalog.get_member(project_id, user_id).await? {
                rates.insert(project_id.clone(), member.hourly_rate_cents);
            }
        }
        let lines = price_lines(minutes_by_project, &rates);

        let total_minutes: u64 = lines.iter().map(|line| line.minutes).sum();
        Ok(BillingSummary {
            user_id: user_id.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            total_decimal_hours: format_decimal_hours(total_minutes),
            total_amount_cents: lines.iter().map(|line| line.amount_cents).sum(),
            total_minutes,
            lines,
        })
    }
}
