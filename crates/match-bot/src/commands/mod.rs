//! Bot command handlers.

mod query;
mod reactions;

pub use query::QueryHandler;
pub use reactions::{PraiseHandler, RetortHandler};

use crate::error::AppResult;
use async_trait::async_trait;
use wechat_client::IncomingMessage;

/// Marker that addresses a message to the bot.
pub const BOT_PREFIX: &str = "@bot";

/// Whether the message text is addressed to the bot.
pub fn is_addressed(text: &str) -> bool {
    text.starts_with(BOT_PREFIX)
}

/// Command handler trait.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command name (e.g., "q").
    fn name(&self) -> &str;

    /// Check if this handler matches the message.
    fn matches(&self, message: &IncomingMessage) -> bool;

    /// Whether this handler runs on its own task, off the dispatch path.
    /// Handlers that wait on the network should say yes.
    fn detached(&self) -> bool {
        false
    }

    /// Execute the command, producing the reply text.
    async fn execute(&self, message: &IncomingMessage) -> AppResult<String>;
}

/// A command word and its arguments, tokenized from message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub args: Vec<String>,
}

impl Command {
    /// Tokenize starting at the first `'q'` in the text, splitting on single
    /// spaces. Without a `'q'` the whole text is tokenized.
    ///
    /// Known defect: any `'q'` before the command word wins, so
    /// `"@bot faq 1"` parses as `q 1`.
    pub fn parse(text: &str) -> Self {
        let start = text.find('q').unwrap_or(0);
        let mut tokens = text[start..].split(' ').map(String::from);
        let name = tokens.next().unwrap_or_default();

        Self {
            name,
            args: tokens.collect(),
        }
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}
