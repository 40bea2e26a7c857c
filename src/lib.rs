//! Pairwise debt ledger with netting and monthly CSV transaction logs.
//!
//! Balances live in memory and are rebuilt at startup by replaying the
//! current month's log segment.

pub mod app;
pub mod config;

pub mod common {
    pub mod error;
    pub mod money;
    pub mod user;
}

pub mod domain {
    pub mod balance;
    pub mod ledger;
    pub mod transaction;
}

pub mod io {
    pub mod journal;
    pub mod reader;
    pub mod segment;
    pub mod writer;
}

pub mod worker {
    pub mod handlers {
        pub mod add;
        pub mod args;
        pub mod clear;
        pub mod help;
        pub mod summary;
    }
    pub mod netting;
    pub mod processor;
    pub mod tracker;
}
