pub mod notify;

// Re-export use cases
pub use notify::{NotifyOptions, SendNotifyUseCase};
