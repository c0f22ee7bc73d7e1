//! Draft types and the in-session variant store
//!
//! An [`EmailDraft`] is one generated subject+body pair together with its
//! rewrite history. Drafts live in a [`VariantStore`] owned by exactly one
//! session; nothing here is persisted or shared across sessions.

mod parser;
mod store;

pub use parser::{ParsedReply, parse};
pub use store::{StoreError, VariantStore};

use chrono::{DateTime, Local};

/// One generated subject+body pair with its rewrite history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
    /// Prior versions, oldest first. Entries are snapshots taken before a
    /// rewrite overwrote the current content and are never mutated after
    /// insertion.
    pub history: Vec<DraftRevision>,
}

/// Snapshot of a draft's content immediately before a rewrite replaced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRevision {
    pub subject: String,
    pub body: String,
    pub revised_at: DateTime<Local>,
}

impl EmailDraft {
    pub fn new(subject: String, body: String) -> Self {
        Self {
            subject,
            body,
            history: Vec::new(),
        }
    }

    /// Formatted text for the copy/export action.
    pub fn clipboard_text(&self) -> String {
        format!("件名：{}\n\n本文：\n{}", self.subject, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_text_format() {
        let draft = EmailDraft::new("ご提案".to_string(), "本文です。".to_string());
        assert_eq!(draft.clipboard_text(), "件名：ご提案\n\n本文：\n本文です。");
    }
}
