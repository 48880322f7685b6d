//! Masking rule implementations
//!
//! Each [`FieldKind`] has exactly one transform, dispatched through
//! [`FieldKind::mask`]. Rules are pure: a single string in, a
//! [`MaskOutcome`] out, with the caller-supplied randomness source as the
//! only shared state. Rules that can structurally fail (email without a
//! separator, unparseable date) report a [`MaskFailure`] instead of an
//! error; the caller decides whether to pass the original through or abort.

use crate::masking::FieldKind;
use chrono::{Duration, NaiveDate};
use rand::Rng;
use thiserror::Error;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE_DIGITS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const DIGITS: &[u8] = b"0123456789";
const LETTERS_DIGITS_SPACE: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789 ";

const DATE_FORMAT: &str = "%Y-%m-%d";
const MAX_DATE_OFFSET_DAYS: i64 = 365;

/// Outcome of applying a masking rule to a single value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskOutcome {
    /// The value was transformed
    Masked(String),
    /// The rule could not safely transform the value; the original should be
    /// kept (best-effort masking)
    Passthrough(MaskFailure),
}

impl MaskOutcome {
    /// True if the value was transformed
    pub fn is_masked(&self) -> bool {
        matches!(self, MaskOutcome::Masked(_))
    }
}

/// Structural conditions under which a rule declines to transform a value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskFailure {
    /// Email rule: the value contains no `@` separator
    #[error("value contains no '@' separator")]
    MissingEmailSeparator,

    /// Date rule: the value is not a `YYYY-MM-DD` date
    #[error("value is not a YYYY-MM-DD date: {0}")]
    UnparseableDate(String),
}

impl FieldKind {
    /// Apply this field kind's masking rule to a single value
    ///
    /// Length-preserving rules count characters, not bytes, so multi-byte
    /// input keeps its character length.
    pub fn mask<R: Rng + ?Sized>(&self, value: &str, rng: &mut R) -> MaskOutcome {
        match self {
            FieldKind::Name => MaskOutcome::Masked(random_string(rng, UPPERCASE, char_len(value))),
            FieldKind::Email => mask_email(value, rng),
            FieldKind::Phone => MaskOutcome::Masked(random_string(rng, DIGITS, char_len(value))),
            FieldKind::NationalId => MaskOutcome::Masked(keep_last4(value, "XXXX-XXXX-")),
            FieldKind::CreditCard => MaskOutcome::Masked(keep_last4(value, "XXXX-XXXX-XXXX-")),
            FieldKind::Address => {
                MaskOutcome::Masked(random_string(rng, LETTERS_DIGITS_SPACE, char_len(value)))
            }
            FieldKind::Date => mask_date(value, rng),
        }
    }
}

/// Replace the local part with same-length random lowercase+digits, keeping
/// the domain after the last `@` unchanged
fn mask_email<R: Rng + ?Sized>(value: &str, rng: &mut R) -> MaskOutcome {
    let Some((local, domain)) = value.rsplit_once('@') else {
        return MaskOutcome::Passthrough(MaskFailure::MissingEmailSeparator);
    };
    let masked_local = random_string(rng, LOWERCASE_DIGITS, char_len(local));
    MaskOutcome::Masked(format!("{masked_local}@{domain}"))
}

/// Shift a `YYYY-MM-DD` date forward by a random 0-365 day offset
fn mask_date<R: Rng + ?Sized>(value: &str, rng: &mut R) -> MaskOutcome {
    let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) else {
        return MaskOutcome::Passthrough(MaskFailure::UnparseableDate(value.to_string()));
    };
    let offset = rng.gen_range(0..=MAX_DATE_OFFSET_DAYS);
    let shifted = date + Duration::days(offset);
    MaskOutcome::Masked(shifted.format(DATE_FORMAT).to_string())
}

/// Fixed prefix plus the last four characters of the input
///
/// Inputs shorter than four characters keep the whole input after the
/// prefix, matching trailing-slice semantics.
fn keep_last4(value: &str, prefix: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let start = chars.len().saturating_sub(4);
    let suffix: String = chars[start..].iter().collect();
    format!("{prefix}{suffix}")
}

/// Random string of `len` characters drawn uniformly from `alphabet`
fn random_string<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], len: usize) -> String {
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}
