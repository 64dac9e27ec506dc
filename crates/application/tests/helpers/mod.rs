#![allow(dead_code)]

mod mock_exchange;

pub use mock_exchange::{authoritative, not_authoritative, MockBehavior, MockNotifyExchange};
