//! Turns gateway polling into a stream of events.

use crate::client::WechatClient;
use crate::types::ChatEvent;
use std::time::Duration;
use tokio::time::sleep;
use tokio_stream::Stream;
use tracing::{debug, error};

/// Pause after a failed poll unless overridden.
pub const DEFAULT_ERROR_BACKOFF: Duration = Duration::from_secs(5);

/// Polls `/v1/events` forever and yields what it gets, in order.
pub struct EventReceiver {
    client: WechatClient,
    poll_interval: Duration,
    error_backoff: Duration,
}

impl EventReceiver {
    pub fn new(client: WechatClient, poll_interval: Duration) -> Self {
        Self {
            client,
            poll_interval,
            error_backoff: DEFAULT_ERROR_BACKOFF,
        }
    }

    pub fn with_error_backoff(mut self, error_backoff: Duration) -> Self {
        self.error_backoff = error_backoff;
        self
    }

    /// One poll: the events received and how long to wait before the next.
    async fn poll_once(&self) -> (Vec<ChatEvent>, Duration) {
        match self.client.events().await {
            Ok(events) => (events, self.poll_interval),
            Err(e) => {
                error!(backoff = ?self.error_backoff, "Event poll failed: {}", e);
                (Vec::new(), self.error_backoff)
            }
        }
    }

    /// The endless event stream. Poll failures never end it.
    pub fn stream(self) -> impl Stream<Item = ChatEvent> {
        async_stream::stream! {
            loop {
                let (events, pause) = self.poll_once().await;
                for event in events {
                    if let ChatEvent::Message(msg) = &event {
                        debug!(talker = %msg.talker.id, "Received: {}", preview(&msg.text));
                    }
                    yield event;
                }
                sleep(pause).await;
            }
        }
    }
}

fn preview(text: &str) -> String {
    text.chars().take(50).collect()
}
