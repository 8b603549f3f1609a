pub mod application {
    pub mod auth {
        pub mod check_status;
        pub mod login;
        pub mod register;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod delete_all;
        pub mod find_one;
        pub mod get_all;
        pub mod update;
    }
    pub mod seed {
        pub mod data;
        pub mod run;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod delete_all;
            pub mod find_one;
            pub mod get_all;
            pub mod update;
        }
    }
    pub mod seed {
        pub mod errors;
        pub mod use_cases {
            pub mod run;
        }
    }
    pub mod shared {
        pub mod pagination;
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod check_status;
            pub mod login;
            pub mod register;
        }
    }
}
