//! Field-type tags
//!
//! A [`FieldKind`] declares what kind of sensitive data a column holds and
//! selects the masking rule applied to it. The set is closed and known at
//! build time; dispatch happens through [`FieldKind::mask`](crate::masking::rules)
//! rather than an open registry, so every declared tag has an implemented
//! rule by construction.

use crate::domain::errors::AssignmentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field-type tag selecting a masking rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Personal names
    Name,
    /// Email addresses
    Email,
    /// Telephone numbers
    Phone,
    /// National identity numbers (SSN, Aadhaar, ...)
    #[serde(alias = "ssn", alias = "aadhaar")]
    NationalId,
    /// Payment card numbers
    CreditCard,
    /// Postal addresses
    Address,
    /// Calendar dates in `YYYY-MM-DD` form
    Date,
}

impl FieldKind {
    /// Every declared field kind, in a stable order
    pub const ALL: [FieldKind; 7] = [
        FieldKind::Name,
        FieldKind::Email,
        FieldKind::Phone,
        FieldKind::NationalId,
        FieldKind::CreditCard,
        FieldKind::Address,
        FieldKind::Date,
    ];

    /// Canonical tag spelling, as accepted on the command line
    pub fn tag(&self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::Email => "email",
            FieldKind::Phone => "phone",
            FieldKind::NationalId => "national_id",
            FieldKind::CreditCard => "credit_card",
            FieldKind::Address => "address",
            FieldKind::Date => "date",
        }
    }

    /// One-line description of the transform, for `veil rules`
    pub fn describe(&self) -> &'static str {
        match self {
            FieldKind::Name => "random uppercase letters, same length",
            FieldKind::Email => "random lowercase+digit local part, domain kept",
            FieldKind::Phone => "random digits, same length",
            FieldKind::NationalId => "XXXX-XXXX- prefix, last 4 characters kept",
            FieldKind::CreditCard => "XXXX-XXXX-XXXX- prefix, last 4 characters kept",
            FieldKind::Address => "random letters/digits/spaces, same length",
            FieldKind::Date => "random 0-365 day offset, YYYY-MM-DD kept",
        }
    }

    /// Parse a tag, treating `ssn` and `aadhaar` as aliases of `national_id`
    fn parse_tag(tag: &str) -> Option<Self> {
        match tag {
            "name" => Some(FieldKind::Name),
            "email" => Some(FieldKind::Email),
            "phone" => Some(FieldKind::Phone),
            "national_id" | "ssn" | "aadhaar" | "aadhar" => Some(FieldKind::NationalId),
            "credit_card" => Some(FieldKind::CreditCard),
            "address" => Some(FieldKind::Address),
            "date" => Some(FieldKind::Date),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FieldKind {
    type Err = AssignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        FieldKind::parse_tag(&tag).ok_or(AssignmentError::UnknownFieldKind {
            pair: s.to_string(),
            tag,
        })
    }
}
