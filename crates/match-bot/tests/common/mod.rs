//! Common test utilities for integration tests.

use async_trait::async_trait;
use match_bot::{Dispatcher, Replier};
use match_client::MatchClient;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wechat_client::{Contact, IncomingMessage, WechatError};
use wiremock::MockServer;

/// Start a mock match record server.
pub async fn mock_match_server() -> MockServer {
    MockServer::start().await
}

/// Create a dispatcher whose queries go to the given server.
pub fn test_dispatcher(mock_server: &MockServer) -> Dispatcher {
    let client = MatchClient::new(mock_server.uri(), Some(Duration::from_secs(5))).unwrap();
    Dispatcher::new(Arc::new(client))
}

/// A direct message from a fixed talker.
pub fn message(text: &str) -> IncomingMessage {
    IncomingMessage {
        id: "msg-1".into(),
        talker: Contact {
            id: "wxid_talker".into(),
            name: "Talker".into(),
        },
        room: None,
        text: text.into(),
    }
}

/// Keeps every reply in the order it was sent.
#[derive(Default)]
pub struct RecordingReplier {
    sent: Mutex<Vec<String>>,
}

impl RecordingReplier {
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Replier for RecordingReplier {
    async fn reply(&self, _original: &IncomingMessage, text: &str) -> Result<(), WechatError> {
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Dispatch one message, wait for every handler, and return what was sent.
pub async fn replies_to(dispatcher: &Dispatcher, text: &str) -> Vec<String> {
    let recorder = Arc::new(RecordingReplier::default());
    let replier: Arc<dyn Replier> = recorder.clone();

    for task in dispatcher.dispatch(&message(text), &replier).await {
        task.await.unwrap();
    }

    recorder.sent()
}
