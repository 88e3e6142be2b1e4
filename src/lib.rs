pub mod shared {
    pub mod core {
        pub mod errors;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod record_store;
    }
}

pub mod modules {
    pub mod lookups {
        pub mod core {
            pub mod entry;
        }
        pub mod use_cases {
            pub mod create_lookup_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_lookup_entries {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_lookup_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_lookup_entry {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod lookup_table;
                pub mod lookup_table_in_memory;
            }
        }
    }

    pub mod seized_items {
        pub mod core {
            pub mod record;
            pub mod returned_fields;
            pub mod status;
        }
        pub mod use_cases {
            pub mod sync_returned_fields {
                pub mod handler;
            }
            pub mod register_seized_item {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_seized_item {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_seized_items {
                pub mod filter;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
                pub mod queries_port;
            }
            pub mod get_seized_item {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_seized_item {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod seized_item_store;
                pub mod seized_item_store_in_memory;
            }
        }
    }
}

pub mod shell;
