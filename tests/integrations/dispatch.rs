//! Integration tests for formatting and dispatching reports.

use async_trait::async_trait;
use logdispatch::core::{DeliveryChannel, DeliveryError, DeliveryReceipt, LogRow, Recipient, Report};
use logdispatch::formatting::{PlainTextFormatter, ReportFormatter};
use logdispatch::notification::{ChannelRegistry, EmailChannel, SocialMessageChannel};
use logdispatch::ReportDispatcher;
use std::sync::{Arc, Mutex};

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::mock_channel::{FailingChannel, RecordingChannel};
use helpers::mock_transport::{
    RecordingMailTransport, RecordingSocialTransport, UnavailableSocialTransport,
};
use helpers::sample_rows;

#[tokio::test]
async fn test_email_dispatch_single_row() {
    let transport = RecordingMailTransport::default();
    let channel = Arc::new(EmailChannel::new(
        Arc::new(transport.clone()),
        "Activity report",
    ));
    let dispatcher = ReportDispatcher::new(channel);
    let rows = vec![LogRow::new("alice", "login", "T1")];

    let receipt = dispatcher
        .dispatch(&rows, &Recipient::with_email("alice@example.com"))
        .await
        .unwrap();

    assert_eq!(
        receipt,
        DeliveryReceipt {
            channel: "email".to_string(),
            recipient: "alice@example.com".to_string(),
            lines: 1,
        }
    );
    let sent = transport.get_sent();
    assert_eq!(sent.len(), 1, "Expected exactly one mail");
    assert_eq!(sent[0].to, "alice@example.com");
    assert_eq!(sent[0].body, "[T1] User: alice action login");
}

#[tokio::test]
async fn test_dispatch_delivers_formatted_report_once() {
    let channel = RecordingChannel::new("recording");
    let dispatcher = ReportDispatcher::new(Arc::new(channel.clone()));
    let recipient = Recipient::with_email("ops@example.com");

    let all = sample_rows();
    for n in 0..=all.len() {
        let rows = &all[..n];
        channel.calls.lock().unwrap().clear();

        let receipt = dispatcher.dispatch(rows, &recipient).await.unwrap();

        let calls = channel.get_calls();
        assert_eq!(calls.len(), 1, "Expected one delivery for {} rows", n);
        assert_eq!(calls[0].0, PlainTextFormatter.format(rows));
        assert_eq!(calls[0].0.line_count(), n);
        assert_eq!(calls[0].1, recipient);
        assert_eq!(receipt.lines, n);
    }
}

#[tokio::test]
async fn test_dispatch_via_overrides_default_channel() {
    let default = RecordingChannel::new("default");
    let other = RecordingChannel::new("other");
    let dispatcher = ReportDispatcher::new(Arc::new(default.clone()));

    let receipt = dispatcher
        .dispatch_via(&sample_rows(), &Recipient::with_social_id("u1"), &other)
        .await
        .unwrap();

    assert_eq!(receipt.channel, "other");
    assert!(default.get_calls().is_empty());
    assert_eq!(other.get_calls().len(), 1);
}

// A channel the library knows nothing about.
#[derive(Default)]
struct CarrierPigeonChannel {
    scrolls: Mutex<Vec<String>>,
}

#[async_trait]
impl DeliveryChannel for CarrierPigeonChannel {
    fn name(&self) -> &str {
        "pigeon"
    }

    async fn deliver(
        &self,
        report: &Report,
        _recipient: &Recipient,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        self.scrolls.lock().unwrap().push(report.to_string());
        Ok(DeliveryReceipt {
            channel: "pigeon".to_string(),
            recipient: "rooftop".to_string(),
            lines: report.line_count(),
        })
    }
}

#[tokio::test]
async fn test_new_channel_needs_no_dispatcher_change() {
    let pigeon = Arc::new(CarrierPigeonChannel::default());
    let dispatcher = ReportDispatcher::new(pigeon.clone());

    let receipt = dispatcher
        .dispatch(&sample_rows(), &Recipient::default())
        .await
        .unwrap();

    assert_eq!(receipt.channel, "pigeon");
    assert_eq!(receipt.lines, 3);
    assert_eq!(
        pigeon.scrolls.lock().unwrap()[0],
        PlainTextFormatter.format(&sample_rows()).to_string()
    );
}

#[tokio::test]
async fn test_dispatch_propagates_channel_error_unchanged() {
    let error = DeliveryError::Transport {
        channel: "failing_mock".to_string(),
        message: "mailbox full".to_string(),
    };
    let failing = FailingChannel::new(error.clone());
    let dispatcher = ReportDispatcher::new(Arc::new(failing.clone()));

    let result = dispatcher
        .dispatch(&sample_rows(), &Recipient::with_email("alice@example.com"))
        .await;

    assert_eq!(result, Err(error));
    assert_eq!(failing.attempts(), 1, "Dispatcher must not retry");
}

#[tokio::test]
async fn test_invalid_recipient_surfaces_from_email_channel() {
    let transport = RecordingMailTransport::default();
    let dispatcher = ReportDispatcher::new(Arc::new(EmailChannel::new(
        Arc::new(transport.clone()),
        "s",
    )));

    let err = dispatcher
        .dispatch(&sample_rows(), &Recipient::with_email("not-an-address"))
        .await
        .unwrap_err();

    assert!(matches!(err, DeliveryError::InvalidRecipient { .. }));
    assert!(transport.get_sent().is_empty());
}

#[tokio::test]
async fn test_registry_selects_social_channel() {
    let mail = RecordingMailTransport::default();
    let social = RecordingSocialTransport::default();
    let mut registry = ChannelRegistry::new();
    registry
        .register(Arc::new(EmailChannel::new(Arc::new(mail.clone()), "s")))
        .register(Arc::new(SocialMessageChannel::new(Arc::new(social.clone()))));

    let dispatcher = ReportDispatcher::new(registry.get("email").unwrap());
    let channel = registry.get("social").unwrap();
    let recipient = Recipient {
        email: Some("alice@example.com".to_string()),
        social_id: Some("id12345".to_string()),
    };

    let receipt = dispatcher
        .dispatch_via(&sample_rows(), &recipient, channel.as_ref())
        .await
        .unwrap();

    assert_eq!(receipt.recipient, "id12345");
    assert!(mail.get_sent().is_empty());
    let posts = social.get_sent();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].to, "id12345");
    assert_eq!(posts[0].body.lines().count(), 3);
}

#[tokio::test]
async fn test_social_transport_failure_is_reported() {
    let dispatcher = ReportDispatcher::new(Arc::new(SocialMessageChannel::new(Arc::new(
        UnavailableSocialTransport,
    ))));

    let err = dispatcher
        .dispatch(&sample_rows(), &Recipient::with_social_id("id1"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        DeliveryError::Transport {
            channel: "social".to_string(),
            message: "service unavailable".to_string(),
        }
    );
}

#[tokio::test]
async fn test_unknown_channel_lookup() {
    let registry = ChannelRegistry::new();
    assert_eq!(
        registry.get("telegram").err(),
        Some(DeliveryError::UnknownChannel("telegram".to_string()))
    );
}
