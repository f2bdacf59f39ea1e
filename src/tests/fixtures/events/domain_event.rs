use serde::Serialize;

/// Minimal event used to exercise the generic infrastructure.
#[derive(Debug, Clone, Serialize)]
pub struct DomainEvent<'a> {
    pub name: &'a str,
}
