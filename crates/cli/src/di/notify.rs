use dns_notify_application::use_cases::SendNotifyUseCase;
use dns_notify_domain::Config;
use dns_notify_infrastructure::dns::HickoryNotifyExchange;
use std::sync::Arc;
use tracing::debug;

pub struct NotifyServices {
    pub send_notify: Arc<SendNotifyUseCase>,
}

impl NotifyServices {
    pub fn new(config: &Config) -> Self {
        debug!(
            transport = %config.notify.transport,
            timeout_ms = config.notify.timeout_ms,
            "Initializing notify services"
        );

        let exchange = Arc::new(HickoryNotifyExchange::new(config.notify.transport));

        Self {
            send_notify: Arc::new(SendNotifyUseCase::new(exchange)),
        }
    }
}
