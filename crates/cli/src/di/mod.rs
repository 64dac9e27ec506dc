mod notify;

pub use notify::NotifyServices;
