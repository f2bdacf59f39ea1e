use crate::modules::access::core::policy::{Actor, Role};

pub const TENANT_ID: &str = "tenant-fixed-0001";
pub const USER_ID: &str = "user-fixed-0001";

/// The member who owns every fixture entry.
pub fn owner() -> Actor {
    Actor::new(TENANT_ID, USER_ID, Role::Member)
}

pub fn colleague() -> Actor {
    Actor::new(TENANT_ID, "user-fixed-0002", Role::Member)
}

pub fn admin() -> Actor {
    Actor::new(TENANT_ID, "admin-fixed-0001", Role::Admin)
}

pub fn outsider() -> Actor {
    Actor::new("tenant-other-0001", USER_ID, Role::Member)
}
