//! Gateway wire types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Companion web page that renders a pairing code as a scannable image.
pub const QRCODE_VIEWER_URL: &str = "https://wechaty.js.org/qrcode/";

/// Event pushed by the gateway, one per entry of `GET /v1/events`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChatEvent {
    /// A device-pairing code is waiting to be scanned.
    Scan { qrcode: String, status: ScanStatus },
    Login { user: Contact },
    Logout {
        user: Contact,
        #[serde(default)]
        reason: Option<String>,
    },
    Message(IncomingMessage),
    /// The gateway's own error channel (transport or login failures).
    Error { message: String },
}

/// Progress of the QR-code pairing handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
pub enum ScanStatus {
    Unknown,
    Cancel,
    Waiting,
    Scanned,
    Confirmed,
    Timeout,
}

impl ScanStatus {
    /// Whether the operator still has to scan a fresh code.
    pub fn needs_scan(self) -> bool {
        matches!(self, ScanStatus::Waiting | ScanStatus::Timeout)
    }

    pub fn code(self) -> u8 {
        match self {
            ScanStatus::Unknown => 0,
            ScanStatus::Cancel => 1,
            ScanStatus::Waiting => 2,
            ScanStatus::Scanned => 3,
            ScanStatus::Confirmed => 4,
            ScanStatus::Timeout => 5,
        }
    }
}

impl TryFrom<u8> for ScanStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ScanStatus::Unknown),
            1 => Ok(ScanStatus::Cancel),
            2 => Ok(ScanStatus::Waiting),
            3 => Ok(ScanStatus::Scanned),
            4 => Ok(ScanStatus::Confirmed),
            5 => Ok(ScanStatus::Timeout),
            other => Err(format!("unknown scan status: {}", other)),
        }
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScanStatus::Unknown => "Unknown",
            ScanStatus::Cancel => "Cancel",
            ScanStatus::Waiting => "Waiting",
            ScanStatus::Scanned => "Scanned",
            ScanStatus::Confirmed => "Confirmed",
            ScanStatus::Timeout => "Timeout",
        };
        write!(f, "{}({})", name, self.code())
    }
}

/// A WeChat user. The id is opaque and only echoed back to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Contact {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact<{}>", self.name)
    }
}

/// A group chat.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Room {
    pub id: String,
    #[serde(default)]
    pub topic: String,
}

/// Inbound chat message.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    #[serde(default)]
    pub id: String,
    /// Who sent the message.
    pub talker: Contact,
    /// Set when the message was posted in a group chat.
    #[serde(default)]
    pub room: Option<Room>,
    #[serde(default)]
    pub text: String,
}

impl IncomingMessage {
    /// Get the reply target (room ID or talker ID).
    pub fn reply_target(&self) -> &str {
        self.room
            .as_ref()
            .map(|r| r.id.as_str())
            .unwrap_or(&self.talker.id)
    }
}

impl fmt::Display for IncomingMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.room {
            Some(room) => write!(f, "Message[{}@Room<{}>] {}", self.talker, room.topic, self.text),
            None => write!(f, "Message[{}] {}", self.talker, self.text),
        }
    }
}

/// Options for `POST /v1/start`.
#[derive(Debug, Clone, Serialize)]
pub struct StartOptions {
    /// Session name the gateway stores the login under.
    pub name: String,
    /// Use the UOS desktop protocol; WeChat web login requires it.
    pub uos: bool,
}

/// Outgoing message request.
#[derive(Debug, Clone, Serialize)]
pub struct SayRequest {
    pub conversation_id: String,
    pub text: String,
}
