//! Maps inbound message text to zero or more replies.

use crate::commands::{CommandHandler, PraiseHandler, QueryHandler, RetortHandler};
use async_trait::async_trait;
use match_client::MatchClient;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error};
use wechat_client::{IncomingMessage, WechatClient, WechatError};

/// Sends a reply back to where a message came from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Replier: Send + Sync {
    async fn reply(&self, original: &IncomingMessage, text: &str) -> Result<(), WechatError>;
}

#[async_trait]
impl Replier for WechatClient {
    async fn reply(&self, original: &IncomingMessage, text: &str) -> Result<(), WechatError> {
        WechatClient::reply(self, original, text).await
    }
}

/// Runs every matching handler, in registration order, against a message.
///
/// Handlers are not exclusive: one message can trigger several replies. Each
/// reply is sent as soon as its handler finishes. Detached handlers run on
/// their own task, so a slow one never holds back the others.
pub struct Dispatcher {
    handlers: Vec<Arc<dyn CommandHandler>>,
}

impl Dispatcher {
    /// The standard handler set: query, then praise, then retort.
    pub fn new(matches: Arc<MatchClient>) -> Self {
        Self::with_handlers(vec![
            Arc::new(QueryHandler::new(matches)),
            Arc::new(PraiseHandler::new()),
            Arc::new(RetortHandler::new()),
        ])
    }

    pub fn with_handlers(handlers: Vec<Arc<dyn CommandHandler>>) -> Self {
        Self { handlers }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run the matching handlers for one message and send their replies.
    ///
    /// Inline handlers have replied by the time this returns. Detached ones
    /// are still running; their tasks are returned so the caller can wait on
    /// them. A failing handler is logged and sends nothing.
    pub async fn dispatch(
        &self,
        message: &IncomingMessage,
        replier: &Arc<dyn Replier>,
    ) -> Vec<JoinHandle<()>> {
        let mut pending = Vec::new();

        for handler in self.handlers.iter().filter(|h| h.matches(message)) {
            debug!("Handler '{}' matched", handler.name());

            if handler.detached() {
                let handler = Arc::clone(handler);
                let replier = Arc::clone(replier);
                let message = message.clone();
                pending.push(tokio::spawn(async move {
                    run(handler.as_ref(), &message, replier.as_ref()).await;
                }));
            } else {
                run(handler.as_ref(), message, replier.as_ref()).await;
            }
        }

        pending
    }
}

async fn run(handler: &dyn CommandHandler, message: &IncomingMessage, replier: &dyn Replier) {
    let reply = match handler.execute(message).await {
        Ok(reply) => reply,
        Err(e) => {
            error!("Handler '{}' failed: {}", handler.name(), e);
            return;
        }
    };

    if let Err(e) = replier.reply(message, &reply).await {
        error!("Failed to send reply: {}", e);
    }
}
