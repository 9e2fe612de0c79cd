//! Invite codes: the six-character handle players share to join a room.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Number of characters in an invite code.
pub const INVITE_CODE_LEN: usize = 6;

/// Characters an invite code is drawn from.
pub const INVITE_CODE_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A validated invite code (`[A-Z0-9]{6}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InviteCode(String);

impl InviteCode {
    /// Parse user input leniently: surrounding whitespace is trimmed and
    /// letters are upper-cased before validation.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let normalized = input.trim().to_ascii_uppercase();
        if Self::is_valid(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(AppError::validation(format!(
                "Invalid invite code '{input}': expected {INVITE_CODE_LEN} characters of A-Z or 0-9"
            )))
        }
    }

    /// Whether `s` is already in canonical invite-code form.
    pub fn is_valid(s: &str) -> bool {
        s.len() == INVITE_CODE_LEN && s.bytes().all(|b| INVITE_CODE_ALPHABET.contains(&b))
    }

    /// Build a code by picking each character from [`INVITE_CODE_ALPHABET`]
    /// (indices wrap around the alphabet length).
    pub fn from_indices(indices: [usize; INVITE_CODE_LEN]) -> Self {
        Self(
            indices
                .iter()
                .map(|&i| INVITE_CODE_ALPHABET[i % INVITE_CODE_ALPHABET.len()] as char)
                .collect(),
        )
    }

    /// Borrow the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InviteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for InviteCode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for InviteCode {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<InviteCode> for String {
    fn from(code: InviteCode) -> Self {
        code.0
    }
}
