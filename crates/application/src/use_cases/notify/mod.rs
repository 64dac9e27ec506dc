mod send_notify;

pub use send_notify::{NotifyOptions, SendNotifyUseCase};
