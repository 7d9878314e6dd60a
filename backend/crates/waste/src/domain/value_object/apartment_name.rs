//! Apartment Name Value Object
//!
//! The apartment name is the public identifier of a tenant complex and the
//! key residents use to address it at registration and login.
//!
//! ## Invariants
//! - Length: 3-64 characters (after normalization)
//! - ASCII letters, digits, spaces and `- ' . &` only
//! - At least one alphanumeric character
//!
//! ## Storage
//! - `original`: the registered form (trimmed, NFKC normalized, case kept)
//! - `canonical`: lowercase form - the GLOBAL uniqueness key

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

// ============================================================================
// Constants
// ============================================================================

/// Minimum length for apartment name (in characters)
pub const APARTMENT_NAME_MIN_LENGTH: usize = 3;

/// Maximum length for apartment name (in characters)
pub const APARTMENT_NAME_MAX_LENGTH: usize = 64;

/// Allowed special characters in apartment name
const ALLOWED_SPECIAL_CHARS: &[char] = &[' ', '-', '\'', '.', '&'];

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when apartment name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApartmentNameError {
    /// Name is empty after normalization
    Empty,

    /// Name is too short
    TooShort { length: usize, min: usize },

    /// Name is too long
    TooLong { length: usize, max: usize },

    /// Name contains invalid character
    InvalidCharacter { char: char, position: usize },

    /// Name contains no alphanumeric characters
    NoAlphanumeric,
}

impl fmt::Display for ApartmentNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Apartment name cannot be empty"),
            Self::TooShort { length, min } => {
                write!(
                    f,
                    "Apartment name is too short ({length} chars, minimum {min})"
                )
            }
            Self::TooLong { length, max } => {
                write!(
                    f,
                    "Apartment name is too long ({length} chars, maximum {max})"
                )
            }
            Self::InvalidCharacter { char, position } => {
                write!(
                    f,
                    "Invalid character '{char}' at position {position}. Only letters, digits, spaces, -, ', ., & are allowed"
                )
            }
            Self::NoAlphanumeric => {
                write!(f, "Apartment name must contain at least one letter or digit")
            }
        }
    }
}

impl std::error::Error for ApartmentNameError {}

// ============================================================================
// ApartmentName Value Object
// ============================================================================

/// Validated, normalized apartment name
///
/// # Storage
/// - `original`: The registered input (trimmed, NFKC normalized, preserves case)
/// - `canonical`: Lowercase form for the global uniqueness check
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApartmentName {
    /// Original input (preserves case)
    original: String,
    /// Canonical form (lowercase) for uniqueness
    canonical: String,
}

impl ApartmentName {
    /// Create a new ApartmentName from raw input
    ///
    /// Applies normalization (NFKC, trim) and validates.
    pub fn new(input: impl AsRef<str>) -> Result<Self, ApartmentNameError> {
        let original = Self::normalize(input.as_ref());
        let canonical = original.to_lowercase();
        Self::validate(&canonical)?;
        Ok(Self {
            original,
            canonical,
        })
    }

    /// Get the original apartment name (preserves case)
    #[inline]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Get the canonical (lowercase) apartment name
    #[inline]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Create from database values (assumes already validated)
    pub fn from_db(original: &str) -> Result<Self, ApartmentNameError> {
        let canonical = original.to_lowercase();
        Ok(Self {
            original: original.to_string(),
            canonical,
        })
    }

    /// Normalize input string (trim and NFKC, preserve case)
    fn normalize(input: &str) -> String {
        input.nfkc().collect::<String>().trim().to_string()
    }

    /// Validate the canonical form
    fn validate(canonical: &str) -> Result<(), ApartmentNameError> {
        if canonical.is_empty() {
            return Err(ApartmentNameError::Empty);
        }

        let length = canonical.chars().count();
        if length < APARTMENT_NAME_MIN_LENGTH {
            return Err(ApartmentNameError::TooShort {
                length,
                min: APARTMENT_NAME_MIN_LENGTH,
            });
        }
        if length > APARTMENT_NAME_MAX_LENGTH {
            return Err(ApartmentNameError::TooLong {
                length,
                max: APARTMENT_NAME_MAX_LENGTH,
            });
        }

        for (pos, ch) in canonical.chars().enumerate() {
            if !Self::is_valid_char(ch) {
                return Err(ApartmentNameError::InvalidCharacter {
                    char: ch,
                    position: pos,
                });
            }
        }

        if !canonical.chars().any(|c| c.is_ascii_alphanumeric()) {
            return Err(ApartmentNameError::NoAlphanumeric);
        }

        Ok(())
    }

    /// Check if character is valid in an apartment name
    #[inline]
    fn is_valid_char(c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_digit() || ALLOWED_SPECIAL_CHARS.contains(&c)
    }
}

impl fmt::Debug for ApartmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApartmentName")
            .field("original", &self.original)
            .field("canonical", &self.canonical)
            .finish()
    }
}

impl fmt::Display for ApartmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl AsRef<str> for ApartmentName {
    fn as_ref(&self) -> &str {
        &self.canonical
    }
}

impl TryFrom<String> for ApartmentName {
    type Error = ApartmentNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ApartmentName {
    type Error = ApartmentNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ApartmentName> for String {
    fn from(name: ApartmentName) -> Self {
        name.original
    }
}

// ============================================================================
// Tests
// ============================================================================
