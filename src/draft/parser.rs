//! Tolerant parsing of model replies into subject/body pairs
//!
//! The model is instructed to answer with a `件名：` line followed by a
//! `本文：` section. Replies that drop either label are still accepted: the
//! whole trimmed reply becomes the body and the caller substitutes the
//! placeholder subject. That fallback is a deliberate contract, not an
//! error, but it is surfaced as a tagged variant so tests can tell the two
//! outcomes apart.

use crate::constants::{BODY_MARKER, FALLBACK_SUBJECT, SUBJECT_MARKER};

use super::EmailDraft;

/// Outcome of parsing one raw model reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedReply {
    /// Both labels were present and produced a clean split.
    Structured { subject: String, body: String },
    /// Labels missing or incomplete; the whole trimmed reply is the body.
    Fallback { body: String },
}

impl ParsedReply {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ParsedReply::Fallback { .. })
    }

    /// Convert into a fresh draft (empty history), substituting the
    /// placeholder subject on fallback.
    pub fn into_draft(self) -> EmailDraft {
        match self {
            ParsedReply::Structured { subject, body } => EmailDraft::new(subject, body),
            ParsedReply::Fallback { body } => {
                EmailDraft::new(FALLBACK_SUBJECT.to_string(), body)
            }
        }
    }
}

/// Extract a subject/body pair from a raw model reply.
///
/// Splits at the first occurrence of the subject label, then at the first
/// body label in the remainder. Text before the subject label is discarded.
/// A subject label without a following body label must not produce a split;
/// the reply falls back whole.
pub fn parse(raw: &str) -> ParsedReply {
    let trimmed = raw.trim();

    let Some((_, after_subject)) = trimmed.split_once(SUBJECT_MARKER) else {
        return ParsedReply::Fallback {
            body: trimmed.to_string(),
        };
    };

    let Some((subject, body)) = after_subject.split_once(BODY_MARKER) else {
        return ParsedReply::Fallback {
            body: trimmed.to_string(),
        };
    };

    ParsedReply::Structured {
        subject: subject.trim().to_string(),
        body: body.trim().to_string(),
    }
}
