pub mod shared {
    pub mod core {
        pub mod form_values;
        pub mod notification;
        pub mod user_context;
    }
    pub mod forms {
        pub mod definition;
        pub mod field_errors;
        pub mod validate;
    }
    pub mod infrastructure {
        pub mod notifier;
        pub mod submitter;
    }
}

pub mod modules {
    pub mod forms {
        pub mod core {
            pub mod session;
            pub mod submission_result;
            pub mod submit_state;
        }
        pub mod use_cases {
            pub mod submit_form {
                pub mod decide;
                pub mod decision;
                pub mod flow;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod describe_form {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod booking {
        pub mod flow;
    }
    pub mod registration {
        pub mod flow;
    }
    pub mod profile {
        pub mod change_password;
        pub mod update_profile;
        pub mod adapters {
            pub mod in_memory_profile_store;
        }
    }
}

pub mod shell;
