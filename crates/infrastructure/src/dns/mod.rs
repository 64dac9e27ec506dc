pub mod exchange;
pub mod notify;
pub mod transport;

pub use exchange::HickoryNotifyExchange;
pub use notify::{MessageBuilder, NotifyReply, ResponseParser};
