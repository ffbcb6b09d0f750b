//! Mock transports for testing the built-in channels end to end.
#![allow(dead_code)]

use async_trait::async_trait;
use logdispatch::notification::{MailTransport, SocialTransport};
use std::sync::{Arc, Mutex};

/// A message captured by a recording transport.
#[derive(Clone, Debug, PartialEq)]
pub struct SentMessage {
    pub to: String,
    pub subject: Option<String>,
    pub body: String,
}

/// Records mail instead of sending it.
#[derive(Clone, Debug, Default)]
pub struct RecordingMailTransport {
    pub sent: Arc<Mutex<Vec<SentMessage>>>,
}

impl RecordingMailTransport {
    pub fn get_sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for RecordingMailTransport {
    async fn send_mail(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(SentMessage {
            to: to.to_string(),
            subject: Some(subject.to_string()),
            body: body.to_string(),
        });
        Ok(())
    }
}

/// Records social posts instead of sending them.
#[derive(Clone, Debug, Default)]
pub struct RecordingSocialTransport {
    pub sent: Arc<Mutex<Vec<SentMessage>>>,
}

impl RecordingSocialTransport {
    pub fn get_sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl SocialTransport for RecordingSocialTransport {
    async fn post_message(&self, user_id: &str, body: &str) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(SentMessage {
            to: user_id.to_string(),
            subject: None,
            body: body.to_string(),
        });
        Ok(())
    }
}

/// A social transport whose platform is always down.
#[derive(Clone, Debug, Default)]
pub struct UnavailableSocialTransport;

#[async_trait]
impl SocialTransport for UnavailableSocialTransport {
    async fn post_message(&self, _user_id: &str, _body: &str) -> anyhow::Result<()> {
        anyhow::bail!("service unavailable")
    }
}
