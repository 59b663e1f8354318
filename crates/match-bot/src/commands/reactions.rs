//! Canned replies triggered by keywords.

use crate::commands::{is_addressed, CommandHandler};
use crate::error::AppResult;
use async_trait::async_trait;
use wechat_client::IncomingMessage;

const PRAISE: char = '牛';
const RETORT_TRIGGER: &str = "没办法";
const RETORT: &str = "装模作样";

/// Echoes "牛" when an addressed message ends with it.
pub struct PraiseHandler;

impl PraiseHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PraiseHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandHandler for PraiseHandler {
    fn name(&self) -> &str {
        "praise"
    }

    fn matches(&self, message: &IncomingMessage) -> bool {
        is_addressed(&message.text) && message.text.ends_with(PRAISE)
    }

    async fn execute(&self, _message: &IncomingMessage) -> AppResult<String> {
        Ok(PRAISE.to_string())
    }
}

/// Answers any message mentioning "没办法", addressed or not.
pub struct RetortHandler;

impl RetortHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RetortHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandHandler for RetortHandler {
    fn name(&self) -> &str {
        "retort"
    }

    fn matches(&self, message: &IncomingMessage) -> bool {
        message.text.contains(RETORT_TRIGGER)
    }

    async fn execute(&self, _message: &IncomingMessage) -> AppResult<String> {
        Ok(RETORT.into())
    }
}
