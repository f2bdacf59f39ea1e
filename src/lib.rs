pub mod shared {
    pub mod core {
        pub mod calendar_date;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod event_store;
        pub mod intent_outbox;
    }
    pub mod inbound {
        pub mod http_error;
    }
}

pub mod modules {
    pub mod access {
        pub mod core {
            pub mod policy;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod actor;
            }
        }
    }

    pub mod time_entries {
        pub mod core {
            pub mod collision;
            pub mod decision;
            pub mod duration;
            pub mod entry_form;
            pub mod events;
            pub mod evolve;
            pub mod intents;
            pub mod projections;
            pub mod reconcile;
            pub mod state;
            pub mod validation;
            pub mod wall_clock;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod register_time_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_time_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_time_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_time_entries_by_user {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
                pub mod queries_port;
            }
            pub mod reconcile_time_fields {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod intent_outbox;
                pub mod projections;
                pub mod projections_in_memory;
            }
        }
    }

    pub mod catalog {
        pub mod core {
            pub mod model;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod manage_catalog {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod catalog_in_memory;
            }
        }
    }

    pub mod invoicing {
        pub mod core {
            pub mod billing;
            pub mod model;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod manage_invoice_items {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod summarize_billable_time {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod invoice_items_in_memory;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;

    pub mod e2e {
        pub mod entry_form_session_tests;
        pub mod list_time_entries_by_user_tests;
    }
}
