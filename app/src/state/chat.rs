//! Chat screen state: the local message list and the simulated reply cycle.
//!
//! DESIGN
//! ======
//! Every submission appends exactly one user message; `awaiting_reply`
//! blocks further sends until the single delayed assistant reply lands.
//! Replies are canned — there is no model behind this screen.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Delay before the simulated assistant reply, in milliseconds.
pub const REPLY_DELAY_MS: u64 = 800;

/// Delay between acknowledging an upload and starting the scan.
pub const SCAN_HANDOFF_MS: u64 = 500;

/// Assistant greeting seeded into every fresh chat.
pub const WELCOME_TEXT: &str = "Welcome back! What can I help you with today?";

/// The one canned reply to free-form input.
pub const CANNED_REPLY: &str =
    "I can help you with that! Would you like to scan a document, translate text, or view your files?";

/// Reply to the View My Files quick action.
pub const FILES_REPLY: &str = "Here are your recent documents:";

/// Document card attached to the files reply.
pub const FILES_DOC_TITLE: &str = "Q4 Planning Notes.pdf";
pub const FILES_DOC_PREVIEW: &str = "Scan files like handwritten meeting agenda...";

/// Suggested prompts shown under the welcome message.
pub const SUGGESTED_PROMPTS: [&str; 3] = [
    "Summarize these handwritten notes for key action items",
    "Convert this receipt into a structured JSON file",
    "Generate flashcards from my study material",
];

/// Who sent a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

/// Summary of a document attached to an assistant message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentPreview {
    pub title: String,
    pub preview: String,
}

/// One chat message. Discarded with the rest of the list when the chat
/// screen unmounts.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    /// Unique message identifier (UUID string).
    pub id: String,
    pub author: Author,
    pub body: String,
    /// Wall-clock send time in milliseconds (0.0 off the browser).
    pub sent_at_ms: f64,
    /// Attached document summary, if the reply carries one.
    pub document: Option<DocumentPreview>,
}

/// Message list plus the pending-reply flag.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatState {
    pub messages: Vec<Message>,
    /// True between a user send and the simulated assistant reply.
    pub awaiting_reply: bool,
}

impl ChatState {
    /// Fresh chat seeded with the welcome message.
    #[must_use]
    pub fn welcome(now_ms: f64) -> Self {
        Self {
            messages: vec![Message {
                id: uuid::Uuid::new_v4().to_string(),
                author: Author::Assistant,
                body: WELCOME_TEXT.to_owned(),
                sent_at_ms: now_ms,
                document: None,
            }],
            awaiting_reply: false,
        }
    }

    /// Append a user message and arm the reply cycle.
    ///
    /// Returns `false` without appending when `body` is blank or a reply is
    /// already pending, so each send produces exactly one reply.
    pub fn push_user(&mut self, body: &str, now_ms: f64) -> bool {
        let body = body.trim();
        if body.is_empty() || self.awaiting_reply {
            return false;
        }
        self.messages.push(Message {
            id: uuid::Uuid::new_v4().to_string(),
            author: Author::User,
            body: body.to_owned(),
            sent_at_ms: now_ms,
            document: None,
        });
        self.awaiting_reply = true;
        true
    }

    /// Append the upload acknowledgement without arming the reply cycle;
    /// the scan handoff takes the place of a reply.
    pub fn push_upload(&mut self, filename: &str, now_ms: f64) {
        self.messages.push(Message {
            id: uuid::Uuid::new_v4().to_string(),
            author: Author::User,
            body: format!("Uploaded: {filename}"),
            sent_at_ms: now_ms,
            document: None,
        });
    }

    /// Append the assistant reply and disarm the cycle.
    pub fn push_assistant(&mut self, body: &str, now_ms: f64) {
        self.push_assistant_with(body, None, now_ms);
    }

    /// Append an assistant reply carrying a document card.
    pub fn push_assistant_document(&mut self, body: &str, document: DocumentPreview, now_ms: f64) {
        self.push_assistant_with(body, Some(document), now_ms);
    }

    fn push_assistant_with(&mut self, body: &str, document: Option<DocumentPreview>, now_ms: f64) {
        self.messages.push(Message {
            id: uuid::Uuid::new_v4().to_string(),
            author: Author::Assistant,
            body: body.to_owned(),
            sent_at_ms: now_ms,
            document,
        });
        self.awaiting_reply = false;
    }

    /// Count of messages from the given author.
    #[must_use]
    pub fn count_from(&self, author: Author) -> usize {
        self.messages.iter().filter(|m| m.author == author).count()
    }
}
