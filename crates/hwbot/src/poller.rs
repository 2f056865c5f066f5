//! The fetch, validate, notify, sleep loop.

use crate::api::HomeworkApi;
use crate::notifier::{ChatSender, Notifier};
use crate::response::check_response;
use crate::status::parse_status;
use hwbot_common::{format_timestamp, now_from_date, FromDate, HwbotError, Result};
use hwbot_i18n::MessageCatalog;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// What one poll cycle did.
#[derive(Debug)]
pub enum CycleOutcome {
    /// A status change was sent to the chat.
    Notified(String),
    /// The API reported no updated homeworks.
    NoUpdates,
    /// The cycle stopped early; the error has been logged.
    Failed(HwbotError),
}

impl CycleOutcome {
    /// Whether the cycle ended in an error.
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Polls the API on a fixed period and forwards the latest status change.
pub struct Poller<A, S> {
    api: A,
    notifier: Notifier<S>,
    catalog: &'static MessageCatalog,
    retry_period: Duration,
}

impl<A, S> Poller<A, S>
where
    A: HomeworkApi,
    S: ChatSender,
{
    /// Creates a poller.
    pub const fn new(
        api: A,
        notifier: Notifier<S>,
        catalog: &'static MessageCatalog,
        retry_period: Duration,
    ) -> Self {
        Self {
            api,
            notifier,
            catalog,
            retry_period,
        }
    }

    /// Pause between cycles.
    pub const fn retry_period(&self) -> Duration {
        self.retry_period
    }

    /// Polls forever. Every cycle asks for updates since the moment it
    /// started, then sleeps for the retry period whatever the outcome.
    pub async fn run(&self) {
        info!(
            retry_period_secs = self.retry_period.as_secs(),
            chat = %self.notifier.chat(),
            "Polling started"
        );

        loop {
            let from_date = now_from_date();
            self.run_cycle(from_date).await;
            tokio::time::sleep(self.retry_period).await;
        }
    }

    /// Runs one cycle. Errors are logged and returned in the outcome, never
    /// propagated.
    #[instrument(skip_all, fields(from_date = %from_date))]
    pub async fn run_cycle(&self, from_date: FromDate) -> CycleOutcome {
        debug!(since = %format_timestamp(from_date), "Polling for homework updates");

        match self.poll(from_date).await {
            Ok(Some(message)) => {
                info!("Status change forwarded to chat");
                CycleOutcome::Notified(message)
            }
            Ok(None) => {
                debug!("No updates");
                CycleOutcome::NoUpdates
            }
            Err(e) => {
                error!(kind = e.kind(), error = %e.report(), "Poll cycle failed");
                CycleOutcome::Failed(e)
            }
        }
    }

    async fn poll(&self, from_date: FromDate) -> Result<Option<String>> {
        let response = self.api.fetch(from_date).await?;
        let homeworks = check_response(&response)?;

        let Some(latest) = homeworks.first() else {
            return Ok(None);
        };

        let message = parse_status(self.catalog, latest)?;
        self.notifier.notify(&message).await?;
        Ok(Some(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hwbot_common::test_utils::api_fixtures::{empty_payload, homework, payload_with};
    use hwbot_common::ChatTarget;
    use hwbot_i18n::catalog;
    use mockall::{mock, predicate::eq};
    use serde_json::Value;

    mock! {
        Api {}

        #[async_trait]
        impl HomeworkApi for Api {
            async fn fetch(&self, from_date: FromDate) -> Result<Value>;
        }
    }

    mock! {
        Sender {}

        #[async_trait]
        impl ChatSender for Sender {
            async fn send_message(&self, chat: &ChatTarget, text: &str) -> Result<()>;
        }
    }

    fn poller(api: MockApi, sender: MockSender) -> Poller<MockApi, MockSender> {
        Poller::new(
            api,
            Notifier::new(sender, ChatTarget::Id(7)),
            catalog().unwrap(),
            Duration::from_secs(600),
        )
    }

    fn api_returning(payload: Value) -> MockApi {
        let mut api = MockApi::new();
        api.expect_fetch()
            .times(1)
            .returning(move |_| Ok(payload.clone()));
        api
    }

    #[tokio::test]
    async fn test_from_date_is_passed_through() {
        let mut api = MockApi::new();
        api.expect_fetch()
            .with(eq(FromDate(1_704_110_400)))
            .times(1)
            .returning(|_| Ok(empty_payload()));
        let mut sender = MockSender::new();
        sender.expect_send_message().never();

        let outcome = poller(api, sender).run_cycle(FromDate(1_704_110_400)).await;
        assert!(matches!(outcome, CycleOutcome::NoUpdates));
    }

    #[tokio::test]
    async fn test_only_first_homework_is_reported() {
        let api = api_returning(payload_with(vec![
            homework("first", "rejected"),
            homework("second", "approved"),
        ]));
        let mut sender = MockSender::new();
        sender
            .expect_send_message()
            .withf(|chat, text| {
                *chat == ChatTarget::Id(7)
                    && text == "Изменился статус проверки работы \"first\". Работа проверена: у ревьюера есть замечания."
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let outcome = poller(api, sender).run_cycle(FromDate(0)).await;
        assert!(matches!(outcome, CycleOutcome::Notified(ref text) if text.contains("first")));
    }

    #[tokio::test]
    async fn test_schema_error_skips_notification() {
        let api = api_returning(serde_json::json!({"current_date": 0}));
        let mut sender = MockSender::new();
        sender.expect_send_message().never();

        let outcome = poller(api, sender).run_cycle(FromDate(0)).await;
        assert!(matches!(outcome, CycleOutcome::Failed(HwbotError::Schema { .. })));
    }

    #[tokio::test]
    async fn test_unknown_verdict_skips_notification() {
        let api = api_returning(payload_with(vec![homework("hw1", "on_hold")]));
        let mut sender = MockSender::new();
        sender.expect_send_message().never();

        let outcome = poller(api, sender).run_cycle(FromDate(0)).await;
        assert!(matches!(outcome, CycleOutcome::Failed(HwbotError::UnknownVerdict { .. })));
    }

    #[tokio::test]
    async fn test_unexpected_status_is_not_fatal() {
        let mut api = MockApi::new();
        api.expect_fetch()
            .returning(|_| Err(HwbotError::unexpected_status(502)));
        let mut sender = MockSender::new();
        sender.expect_send_message().never();

        let outcome = poller(api, sender).run_cycle(FromDate(0)).await;
        assert!(outcome.is_failure());
        assert!(matches!(
            outcome,
            CycleOutcome::Failed(HwbotError::UnexpectedStatus { status: 502 })
        ));
    }

    #[tokio::test]
    async fn test_delivery_failure_is_reported_in_outcome() {
        let api = api_returning(payload_with(vec![homework("hw1", "reviewing")]));
        let mut sender = MockSender::new();
        sender
            .expect_send_message()
            .times(1)
            .returning(|_, _| {
                Err(HwbotError::delivery_with_source(
                    "Telegram rejected the message",
                    std::io::Error::new(
                        std::io::ErrorKind::Other,
                        "Forbidden: bot was blocked by the user",
                    ),
                ))
            });

        let outcome = poller(api, sender).run_cycle(FromDate(0)).await;
        match outcome {
            CycleOutcome::Failed(e @ HwbotError::Delivery { .. }) => assert_eq!(
                e.report(),
                "Delivery error: Telegram rejected the message: Forbidden: bot was blocked by the user"
            ),
            other => panic!("expected delivery failure, got {other:?}"),
        }
    }
}
