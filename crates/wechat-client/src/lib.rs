//! Client for an HTTP gateway fronting a WeChat session.

mod client;
mod error;
mod receiver;
mod types;

pub use client::WechatClient;
pub use error::WechatError;
pub use receiver::{EventReceiver, DEFAULT_ERROR_BACKOFF};
pub use types::*;
