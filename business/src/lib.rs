pub mod application {
    pub mod catalog {
        pub mod browse;
    }
    pub mod checkout {
        pub mod place_order;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod storage {
        pub mod key_value;
        pub mod persisted;
    }
    pub mod catalog {
        pub mod errors;
        pub mod filters;
        pub mod model;
        pub mod source;
        pub mod value_objects;
        pub mod use_cases {
            pub mod browse;
        }
    }
    pub mod cart {
        pub mod model;
        pub mod store;
    }
    pub mod wishlist {
        pub mod model;
        pub mod store;
    }
    pub mod checkout {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod shipping;
        pub mod use_cases {
            pub mod place_order;
        }
    }
}
