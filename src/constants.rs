//! Application-wide constants for tuning and configuration
//!
//! Centralizes magic numbers to make them discoverable and configurable.

/// Number of draft variants produced per generation batch.
pub const DEFAULT_VARIANT_COUNT: usize = 3;

/// Subject label the model is instructed to emit before the subject line.
pub const SUBJECT_MARKER: &str = "件名：";

/// Body label the model is instructed to emit before the body text.
pub const BODY_MARKER: &str = "本文：";

/// Placeholder subject substituted when a reply lacks the expected labels.
pub const FALLBACK_SUBJECT: &str = "営業メール";

/// Lower bound for the body-length hint, in characters.
pub const LENGTH_MIN: u32 = 50;

/// Upper bound for the body-length hint, in characters.
pub const LENGTH_MAX: u32 = 600;

/// Granularity of the body-length hint, in characters.
pub const LENGTH_STEP: u32 = 10;

/// Default body-length hint range (min, max) in characters.
pub const DEFAULT_LENGTH: (u32, u32) = (200, 300);

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
