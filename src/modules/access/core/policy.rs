// Single authorization policy consulted by every handler before it touches
// state. Handlers describe what they are about to do as an `Action`; the
// policy answers allow or deny.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
}

impl FromStr for Role {
    type Err = PolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "member" => Ok(Role::Member),
            other => Err(PolicyError::UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => f.write_str("admin"),
            Role::Member => f.write_str("member"),
        }
    }
}

/// The caller, as established by the authentication collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub tenant_id: String,
    pub user_id: String,
    pub role: Role,
}

impl Actor {
    pub fn new(tenant_id: impl Into<String>, user_id: impl Into<String>, role: Role) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            user_id: user_id.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// A resource owned by one user inside one tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Owned<'a> {
    pub tenant_id: &'a str,
    pub owner_id: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    ManageCatalog,
    ViewCatalog,
    /// `is_project_member` is `None` for unassigned time.
    LogTime { is_project_member: Option<bool> },
    ModifyTimeEntry(Owned<'a>),
    ViewTimeEntries(Owned<'a>),
    ViewBilling(Owned<'a>),
    ManageInvoiceItems(Owned<'a>),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("resource belongs to another tenant")]
    TenantMismatch,

    #[error("only the owner may perform this action")]
    NotOwner,

    #[error("only admins may perform this action")]
    AdminOnly,

    #[error("not a member of the project")]
    NotProjectMember,

    #[error("unknown role: {0}")]
    UnknownRole(String),
}

pub fn authorize(actor: &Actor, action: Action<'_>) -> Result<(), PolicyError> {
    match action {
        Action::ManageCatalog if actor.is_admin() => Ok(()),
        Action::ManageCatalog => Err(PolicyError::AdminOnly),
        Action::ViewCatalog => Ok(()),
        Action::LogTime {
            is_project_member: Some(false),
        } if !actor.is_admin() => Err(PolicyError::NotProjectMember),
        Action::LogTime { .. } => Ok(()),
        Action::ModifyTimeEntry(resource) => {
            same_tenant(actor, resource)?;
            owner_only(actor, resource)
        }
        Action::ViewTimeEntries(resource)
        | Action::ViewBilling(resource)
        | Action::ManageInvoiceItems(resource) => {
            same_tenant(actor, resource)?;
            if actor.is_admin() {
                return Ok(());
            }
            owner_only(actor, resource)
        }
    }
}

fn same_tenant(actor: &Actor, resource: Owned<'_>) -> Result<(), PolicyError> {
    if actor.tenant_id != resource.tenant_id {
        return Err(PolicyError::TenantMismatch);
    }
    Ok(())
}

fn owner_only(actor: &Actor, resource: Owned<'_>) -> Result<(), PolicyError> {
    if actor.user_id != resource.owner_id {
        return Err(PolicyError::NotOwner);
    }
    Ok(())
}
