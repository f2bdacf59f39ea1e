// Shared test fixtures, compiled into the crate only under cfg(test).

pub mod actors;
pub mod catalog;
pub mod rows;

pub mod commands {
    pub mod register_time_entry;
    pub mod update_time_entry;
}

pub mod events {
    pub mod domain_event;
    pub mod time_entry_registered_v1;
}
