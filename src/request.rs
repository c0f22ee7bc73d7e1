//! Generation request types
//!
//! The structured field values collected for one generation action. Requests
//! are transient: built per button press, validated, then discarded.

use thiserror::Error;

use crate::constants::{DEFAULT_LENGTH, LENGTH_MAX, LENGTH_MIN, LENGTH_STEP};

/// Tone (文体) of the generated mail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Polite,
    Business,
    Frank,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Polite, Tone::Business, Tone::Frank];

    /// Label shown in the UI and embedded into the prompt.
    pub fn label(self) -> &'static str {
        match self {
            Tone::Polite => "丁寧",
            Tone::Business => "ビジネスライク",
            Tone::Frank => "フランク",
        }
    }
}

/// Industry template reflected into the generated mail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndustryTemplate {
    #[default]
    ItSaas,
    Manufacturing,
    Healthcare,
    RetailEc,
    Education,
}

impl IndustryTemplate {
    pub const ALL: [IndustryTemplate; 5] = [
        IndustryTemplate::ItSaas,
        IndustryTemplate::Manufacturing,
        IndustryTemplate::Healthcare,
        IndustryTemplate::RetailEc,
        IndustryTemplate::Education,
    ];

    pub fn label(self) -> &'static str {
        match self {
            IndustryTemplate::ItSaas => "IT / SaaS",
            IndustryTemplate::Manufacturing => "製造業",
            IndustryTemplate::Healthcare => "医療・ヘルスケア",
            IndustryTemplate::RetailEc => "小売・EC",
            IndustryTemplate::Education => "教育",
        }
    }
}

/// Rewrite style for restyling an existing draft.
///
/// Each variant carries both its prompt descriptor and its action label so
/// the pairing is a single static table, not parallel positional lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteStyle {
    Polite,
    Concise,
    Frank,
}

impl RewriteStyle {
    pub const ALL: [RewriteStyle; 3] =
        [RewriteStyle::Polite, RewriteStyle::Concise, RewriteStyle::Frank];

    /// Style descriptor embedded into the rewrite prompt.
    pub fn descriptor(self) -> &'static str {
        match self {
            RewriteStyle::Polite => "丁寧",
            RewriteStyle::Concise => "簡潔",
            RewriteStyle::Frank => "フランク",
        }
    }

    /// Action label shown on the rewrite button.
    pub fn action_label(self) -> &'static str {
        match self {
            RewriteStyle::Polite => "もっと丁寧に",
            RewriteStyle::Concise => "簡潔に",
            RewriteStyle::Frank => "フランクに変更",
        }
    }
}

/// Body-length hint in characters.
///
/// Hint-only: the range is embedded into the prompt but never enforced on
/// the generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    min: u32,
    max: u32,
}

impl LengthRange {
    /// Build a range clamped to the supported bounds and snapped to the
    /// selection step. Reversed inputs are swapped.
    pub fn new(min: u32, max: u32) -> Self {
        let mut min = snap(min.clamp(LENGTH_MIN, LENGTH_MAX));
        let mut max = snap(max.clamp(LENGTH_MIN, LENGTH_MAX));
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Length instruction embedded into the prompt, e.g. `200〜300文字程度`.
    pub fn hint(&self) -> String {
        format!("{}〜{}文字程度", self.min, self.max)
    }
}

impl Default for LengthRange {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH.0, DEFAULT_LENGTH.1)
    }
}

fn snap(value: u32) -> u32 {
    value / LENGTH_STEP * LENGTH_STEP
}

/// Sender identity appended to the mail as the signature.
#[derive(Debug, Clone, Default)]
pub struct Signature {
    pub company: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// All field values for one generation action.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    pub company: String,
    pub person: String,
    pub industry: String,
    pub service: String,
    pub tone: Tone,
    pub length: LengthRange,
    pub template: IndustryTemplate,
    pub signature: Signature,
}

/// One or more required fields were blank at submission time.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("missing required fields: {}", missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
}

impl GenerationRequest {
    /// Check that every required field is filled in.
    ///
    /// Must pass before any prompt is built; a failed check aborts the
    /// action without touching session state.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields: [(&'static str, &str); 8] = [
            ("company", &self.company),
            ("person", &self.person),
            ("industry", &self.industry),
            ("service", &self.service),
            ("signature.company", &self.signature.company),
            ("signature.name", &self.signature.name),
            ("signature.email", &self.signature.email),
            ("signature.phone", &self.signature.phone),
        ];

        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_request() -> GenerationRequest {
        GenerationRequest {
            company: "アクミ株式会社".to_string(),
            person: "田中様".to_string(),
            industry: "小売".to_string(),
            service: "在庫管理SaaS".to_string(),
            tone: Tone::Polite,
            length: LengthRange::default(),
            template: IndustryTemplate::RetailEc,
            signature: Signature {
                company: "自社株式会社".to_string(),
                name: "山田太郎".to_string(),
                email: "yamada@example.com".to_string(),
                phone: "03-1234-5678".to_string(),
            },
        }
    }

    #[test]
    fn test_validate_accepts_filled_request() {
        assert!(filled_request().validate().is_ok());
    }

    #[test]
    fn test_validate_reports_single_blank_field() {
        let mut request = filled_request();
        request.person = String::new();

        let err = request.validate().unwrap_err();
        assert_eq!(err.missing, vec!["person"]);
    }

    #[test]
    fn test_validate_treats_whitespace_as_blank() {
        let mut request = filled_request();
        request.signature.phone = "   ".to_string();

        let err = request.validate().unwrap_err();
        assert_eq!(err.missing, vec!["signature.phone"]);
    }

    #[test]
    fn test_validate_reports_all_blank_fields() {
        let mut request = filled_request();
        request.company = String::new();
        request.signature.email = String::new();

        let err = request.validate().unwrap_err();
        assert_eq!(err.missing, vec!["company", "signature.email"]);
    }

    #[test]
    fn test_length_range_defaults() {
        let range = LengthRange::default();
        assert_eq!(range.min(), 200);
        assert_eq!(range.max(), 300);
        assert_eq!(range.hint(), "200〜300文字程度");
    }

    #[test]
    fn test_length_range_clamps_and_snaps() {
        let range = LengthRange::new(13, 9999);
        assert_eq!(range.min(), 50);
        assert_eq!(range.max(), 600);

        let range = LengthRange::new(127, 254);
        assert_eq!(range.min(), 120);
        assert_eq!(range.max(), 250);
    }

    #[test]
    fn test_length_range_swaps_reversed_bounds() {
        let range = LengthRange::new(400, 100);
        assert_eq!(range.min(), 100);
        assert_eq!(range.max(), 400);
    }

    #[test]
    fn test_rewrite_style_table_is_consistent() {
        // Descriptor and action label come from the same variant, so the
        // pairing cannot drift the way parallel lists could.
        for style in RewriteStyle::ALL {
            assert!(!style.descriptor().is_empty());
            assert!(!style.action_label().is_empty());
        }
        assert_eq!(RewriteStyle::Concise.action_label(), "簡潔に");
        assert_eq!(RewriteStyle::Concise.descriptor(), "簡潔");
    }
}
