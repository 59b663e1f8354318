//! Routes gateway events to their handlers.

use crate::dispatcher::{Dispatcher, Replier};
use std::sync::Arc;
use tracing::{error, info};
use wechat_client::{ChatEvent, Contact, IncomingMessage, ScanStatus, QRCODE_VIEWER_URL};

/// Link to a page rendering the pairing code as a scannable image.
pub fn qrcode_image_url(qrcode: &str) -> String {
    format!("{}{}", QRCODE_VIEWER_URL, urlencoding::encode(qrcode))
}

/// The bot: one handler per gateway event kind.
#[derive(Clone)]
pub struct Bot {
    replier: Arc<dyn Replier>,
    dispatcher: Arc<Dispatcher>,
}

impl Bot {
    pub fn new(replier: Arc<dyn Replier>, dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            replier,
            dispatcher,
        }
    }

    pub async fn handle_event(&self, event: ChatEvent) {
        match event {
            ChatEvent::Scan { qrcode, status } => on_scan(&qrcode, status),
            ChatEvent::Login { user } => on_login(&user),
            ChatEvent::Logout { user, reason } => on_logout(&user, reason.as_deref()),
            ChatEvent::Message(message) => self.on_message(&message).await,
            ChatEvent::Error { message } => error!("Gateway error: {}", message),
        }
    }

    pub async fn on_message(&self, message: &IncomingMessage) {
        info!("{}", message);

        for task in self.dispatcher.dispatch(message, &self.replier).await {
            if let Err(e) = task.await {
                error!("Reply task failed: {}", e);
            }
        }
    }
}

fn on_scan(qrcode: &str, status: ScanStatus) {
    if status.needs_scan() {
        info!("onScan: {} - {}", status, qrcode_image_url(qrcode));
    } else {
        info!("onScan: {}", status);
    }
}

fn on_login(user: &Contact) {
    info!("{} login", user);
}

fn on_logout(user: &Contact, reason: Option<&str>) {
    match reason {
        Some(reason) => info!("{} logout: {}", user, reason),
        None => info!("{} logout", user),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{PraiseHandler, RetortHandler};
    use crate::dispatcher::MockReplier;
    use wechat_client::WechatError;

    fn message(text: &str) -> IncomingMessage {
        IncomingMessage {
            id: "1".into(),
            talker: Contact {
                id: "wxid_a".into(),
                name: "A".into(),
            },
            room: None,
            text: text.into(),
        }
    }

    fn offline_dispatcher() -> Arc<Dispatcher> {
        Arc::new(Dispatcher::with_handlers(vec![
            Arc::new(PraiseHandler::new()),
            Arc::new(RetortHandler::new()),
        ]))
    }

    #[test]
    fn test_qrcode_image_url_is_encoded() {
        assert_eq!(
            qrcode_image_url("https://login.weixin.qq.com/l/a b"),
            "https://wechaty.js.org/qrcode/https%3A%2F%2Flogin.weixin.qq.com%2Fl%2Fa%20b"
        );
    }

    #[tokio::test]
    async fn test_message_replies_in_order() {
        let mut replier = MockReplier::new();
        let mut seq = mockall::Sequence::new();
        replier
            .expect_reply()
            .withf(|_, text| text == "牛")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        replier
            .expect_reply()
            .withf(|_, text| text == "装模作样")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let bot = Bot::new(Arc::new(replier), offline_dispatcher());
        bot.handle_event(ChatEvent::Message(message("@bot 没办法，真牛")))
            .await;
    }

    #[tokio::test]
    async fn test_send_failure_does_not_stop_other_replies() {
        let mut replier = MockReplier::new();
        replier
            .expect_reply()
            .withf(|_, text| text == "牛")
            .times(1)
            .returning(|_, _| Err(WechatError::SendFailed("offline".into())));
        replier
            .expect_reply()
            .withf(|_, text| text == "装模作样")
            .times(1)
            .returning(|_, _| Ok(()));

        let bot = Bot::new(Arc::new(replier), offline_dispatcher());
        bot.on_message(&message("@bot 没办法牛")).await;
    }

    #[tokio::test]
    async fn test_unmatched_message_sends_nothing() {
        let mut replier = MockReplier::new();
        replier.expect_reply().never();

        let bot = Bot::new(Arc::new(replier), offline_dispatcher());
        bot.handle_event(ChatEvent::Message(message("hello"))).await;
    }

    #[tokio::test]
    async fn test_lifecycle_events_send_nothing() {
        let mut replier = MockReplier::new();
        replier.expect_reply().never();

        let bot = Bot::new(Arc::new(replier), offline_dispatcher());
        let user = Contact {
            id: "wxid_bot".into(),
            name: "Bot".into(),
        };

        bot.handle_event(ChatEvent::Scan {
            qrcode: "https://login.weixin.qq.com/l/abc".into(),
            status: ScanStatus::Waiting,
        })
        .await;
        bot.handle_event(ChatEvent::Scan {
            qrcode: String::new(),
            status: ScanStatus::Confirmed,
        })
        .await;
        bot.handle_event(ChatEvent::Login { user: user.clone() }).await;
        bot.handle_event(ChatEvent::Logout {
            user,
            reason: Some("kicked".into()),
        })
        .await;
        bot.handle_event(ChatEvent::Error {
            message: "socket closed".into(),
        })
        .await;
    }

    #[tokio::test]
    async fn test_reply_goes_to_original_message() {
        let mut replier = MockReplier::new();
        replier
            .expect_reply()
            .withf(|original, text| original.reply_target() == "wxid_a" && text == "牛")
            .times(1)
            .returning(|_, _| Ok(()));

        let bot = Bot::new(Arc::new(replier), offline_dispatcher());
        bot.on_message(&message("@bot 牛")).await;
    }
}
