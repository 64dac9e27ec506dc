use async_trait::async_trait;
use dns_notify_application::ports::NotifyExchange;
use dns_notify_domain::{DomainError, ExchangeResponse, NotifyQuery};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum MockBehavior {
    Respond(ExchangeResponse),
    RespondAfter(Duration, ExchangeResponse),
    Fail(DomainError),
    /// Waits out the timeout it was given, then reports a timeout.
    TimeOut,
    /// Never completes; only the dispatcher's own bound ends it.
    Hang,
    Panic,
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub query: NotifyQuery,
    pub target: String,
    pub timeout: Duration,
    pub started: Instant,
    pub finished: Option<Instant>,
}

#[derive(Clone, Default)]
pub struct MockNotifyExchange {
    behaviors: Arc<Mutex<HashMap<String, MockBehavior>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockNotifyExchange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_behavior(&self, target: &str, behavior: MockBehavior) {
        self.behaviors
            .lock()
            .unwrap()
            .insert(target.to_string(), behavior);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn called_targets(&self) -> Vec<String> {
        let mut targets: Vec<String> = self.calls().into_iter().map(|c| c.target).collect();
        targets.sort();
        targets
    }

    pub fn finished_at(&self, target: &str) -> Option<Instant> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.target == target)
            .and_then(|c| c.finished)
    }

    fn mark_finished(&self, index: usize) {
        if let Some(call) = self.calls.lock().unwrap().get_mut(index) {
            call.finished = Some(Instant::now());
        }
    }
}

pub fn authoritative(rtt_ms: u64) -> ExchangeResponse {
    ExchangeResponse::new(true, 0, Duration::from_millis(rtt_ms))
}

pub fn not_authoritative(rcode: u16) -> ExchangeResponse {
    ExchangeResponse::new(false, rcode, Duration::from_millis(1))
}

#[async_trait]
impl NotifyExchange for MockNotifyExchange {
    async fn exchange(
        &self,
        query: &NotifyQuery,
        target: &str,
        timeout: Duration,
    ) -> Result<ExchangeResponse, DomainError> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(RecordedCall {
                query: query.clone(),
                target: target.to_string(),
                timeout,
                started: Instant::now(),
                finished: None,
            });
            calls.len() - 1
        };

        let behavior = self
            .behaviors
            .lock()
            .unwrap()
            .get(target)
            .cloned()
            .unwrap_or(MockBehavior::Respond(authoritative(1)));

        let result = match behavior {
            MockBehavior::Respond(response) => Ok(response),
            MockBehavior::RespondAfter(delay, response) => {
                tokio::time::sleep(delay).await;
                Ok(response)
            }
            MockBehavior::Fail(error) => Err(error),
            MockBehavior::TimeOut => {
                tokio::time::sleep(timeout).await;
                Err(DomainError::TransportTimeout {
                    server: target.to_string(),
                })
            }
            MockBehavior::Hang => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            MockBehavior::Panic => panic!("mock exchange panicked for {}", target),
        };

        self.mark_finished(index);
        result
    }
}
