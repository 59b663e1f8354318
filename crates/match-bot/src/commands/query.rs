//! Query command - fetches a player's latest match record.

use crate::commands::{is_addressed, Command, CommandHandler};
use crate::error::AppResult;
use async_trait::async_trait;
use match_client::MatchClient;
use std::sync::Arc;
use tracing::info;
use wechat_client::IncomingMessage;

/// Handles `@bot q <account_id>`.
pub struct QueryHandler {
    matches: Arc<MatchClient>,
}

impl QueryHandler {
    pub fn new(matches: Arc<MatchClient>) -> Self {
        Self { matches }
    }
}

#[async_trait]
impl CommandHandler for QueryHandler {
    fn name(&self) -> &str {
        "q"
    }

    fn matches(&self, message: &IncomingMessage) -> bool {
        is_addressed(&message.text) && Command::parse(&message.text).name == self.name()
    }

    fn detached(&self) -> bool {
        true
    }

    async fn execute(&self, message: &IncomingMessage) -> AppResult<String> {
        let command = Command::parse(&message.text);
        let account_id = command.arg(0);

        info!(
            "Latest match requested by {} for account {:?}",
            message.talker.id, account_id
        );

        Ok(self.matches.latest_match(account_id).await?)
    }
}
