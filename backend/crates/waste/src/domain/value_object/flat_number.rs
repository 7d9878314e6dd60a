//! Flat Number Value Object
//!
//! Identifies a resident unit WITHIN an apartment ("12A", "B-204", "3/1").
//! Uniqueness is scoped: the same flat number may exist in two different
//! apartments, never twice in one.
//!
//! ## Invariants
//! - Length: 1-16 characters
//! - ASCII letters, digits, `-` and `/` only (no whitespace)
//! - At least one alphanumeric character
//!
//! ## Storage
//! - `original`: the registered form (trimmed, case kept)
//! - `canonical`: UPPERCASE form - the per-apartment uniqueness key

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Maximum length for a flat number (in characters)
pub const FLAT_NUMBER_MAX_LENGTH: usize = 16;

/// Allowed special characters in a flat number
const ALLOWED_SPECIAL_CHARS: &[char] = &['-', '/'];

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when flat number validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlatNumberError {
    /// Flat number is empty after normalization
    Empty,

    /// Flat number is too long
    TooLong { length: usize, max: usize },

    /// Flat number contains invalid character
    InvalidCharacter { char: char, position: usize },

    /// Flat number contains no alphanumeric characters
    NoAlphanumeric,
}

impl fmt::Display for FlatNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Flat number cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "Flat number is too long ({length} chars, maximum {max})")
            }
            Self::InvalidCharacter { char, position } => {
                write!(
                    f,
                    "Invalid character '{char}' at position {position}. Only letters, digits, - and / are allowed"
                )
            }
            Self::NoAlphanumeric => {
                write!(f, "Flat number must contain at least one letter or digit")
            }
        }
    }
}

impl std::error::Error for FlatNumberError {}

// ============================================================================
// FlatNumber Value Object
// ============================================================================

/// Validated, normalized flat number
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FlatNumber {
    /// Original input (preserves case)
    original: String,
    /// Canonical form (uppercase) for uniqueness within an apartment
    canonical: String,
}

impl FlatNumber {
    /// Create a new FlatNumber from raw input
    pub fn new(input: impl AsRef<str>) -> Result<Self, FlatNumberError> {
        let original = input.as_ref().nfkc().collect::<String>().trim().to_string();
        let canonical = original.to_uppercase();
        Self::validate(&canonical)?;
        Ok(Self {
            original,
            canonical,
        })
    }

    /// Get the original flat number (preserves case)
    #[inline]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Get the canonical (uppercase) flat number
    #[inline]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Create from database values (assumes already validated)
    pub fn from_db(original: &str) -> Result<Self, FlatNumberError> {
        Ok(Self {
            original: original.to_string(),
            canonical: original.to_uppercase(),
        })
    }

    /// Validate the canonical form
    fn validate(canonical: &str) -> Result<(), FlatNumberError> {
        if canonical.is_empty() {
            return Err(FlatNumberError::Empty);
        }

        let length = canonical.chars().count();
        if length > FLAT_NUMBER_MAX_LENGTH {
            return Err(FlatNumberError::TooLong {
                length,
                max: FLAT_NUMBER_MAX_LENGTH,
            });
        }

        for (pos, ch) in canonical.chars().enumerate() {
            if !Self::is_valid_char(ch) {
                return Err(FlatNumberError::InvalidCharacter {
                    char: ch,
                    position: pos,
                });
            }
        }

        if !canonical.chars().any(|c| c.is_ascii_alphanumeric()) {
            return Err(FlatNumberError::NoAlphanumeric);
        }

        Ok(())
    }

    #[inline]
    fn is_valid_char(c: char) -> bool {
        c.is_ascii_uppercase() || c.is_ascii_digit() || ALLOWED_SPECIAL_CHARS.contains(&c)
    }
}

impl fmt::Debug for FlatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatNumber")
            .field("original", &self.original)
            .field("canonical", &self.canonical)
            .finish()
    }
}

impl fmt::Display for FlatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl AsRef<str> for FlatNumber {
    fn as_ref(&self) -> &str {
        &self.canonical
    }
}

impl TryFrom<String> for FlatNumber {
    type Error = FlatNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for FlatNumber {
    type Error = FlatNumberError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FlatNumber> for String {
    fn from(flat: FlatNumber) -> Self {
        flat.original
    }
}

// ============================================================================
// Tests
// ============================================================================
