#![allow(dead_code)]

mod notify_server_mock;

pub use notify_server_mock::{MockNotifyServer, MockReply};
