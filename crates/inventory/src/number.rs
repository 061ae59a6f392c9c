//! Item numbering: `PREFIX/MM/YYYY/SEQ`, with the sequence restarting every
//! calendar month.

use core::str::FromStr;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use stockbook_core::{DomainError, DomainResult, ValueObject};

/// Width the sequence part is zero-padded to.
pub const SEQUENCE_WIDTH: usize = 3;

/// Parsed form of an item number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemNumber {
    prefix: String,
    month: u32,
    year: i32,
    sequence: u32,
}

impl ValueObject for ItemNumber {}

impl ItemNumber {
    pub fn new(
        prefix: impl Into<String>,
        month: u32,
        year: i32,
        sequence: u32,
    ) -> Result<Self, DomainError> {
        let prefix = prefix.into();
        validate_prefix(&prefix)?;
        if !(1..=12).contains(&month) {
            return Err(DomainError::validation(format!("month out of range: {month}")));
        }
        if !(0..=9999).contains(&year) {
            return Err(DomainError::validation(format!("year out of range: {year}")));
        }
        if sequence == 0 {
            return Err(DomainError::validation("sequence starts at 1"));
        }
        Ok(Self {
            prefix,
            month,
            year,
            sequence,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    /// The `PREFIX/MM/YYYY/` part shared by every number of the same month.
    pub fn month_prefix(&self) -> String {
        format!("{}/{:02}/{:04}/", self.prefix, self.month, self.year)
    }
}

impl core::fmt::Display for ItemNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}{:0width$}",
            self.month_prefix(),
            self.sequence,
            width = SEQUENCE_WIDTH
        )
    }
}

impl FromStr for ItemNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DomainError::validation(format!("malformed item number: {s:?}"));

        let mut parts = s.split('/');
        let (Some(prefix), Some(month), Some(year), Some(sequence), None) = (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) else {
            return Err(malformed());
        };

        if !is_digits(month) || !is_digits(year) || !is_digits(sequence) {
            return Err(malformed());
        }
        if month.len() != 2 || year.len() != 4 || sequence.len() < SEQUENCE_WIDTH {
            return Err(malformed());
        }
        // Only the padded width may carry leading zeros; `0001` is not canonical.
        if sequence.len() > SEQUENCE_WIDTH && sequence.starts_with('0') {
            return Err(malformed());
        }
        let month = month.parse().map_err(|_| malformed())?;
        let year = year.parse().map_err(|_| malformed())?;
        let sequence = sequence.parse().map_err(|_| malformed())?;

        ItemNumber::new(prefix, month, year, sequence)
    }
}

fn is_digits(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

/// A prefix must be a non-empty run of ASCII letters and digits.
pub fn validate_prefix(prefix: &str) -> Result<(), DomainError> {
    if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(DomainError::validation(format!(
            "item number prefix must be ASCII alphanumeric: {prefix:?}"
        )));
    }
    Ok(())
}

/// Render `PREFIX/MM/YYYY/` for the month containing `at` (UTC).
pub fn month_prefix(prefix: &str, at: DateTime<Utc>) -> DomainResult<String> {
    Ok(ItemNumber::new(prefix, at.month(), at.year(), 1)?.month_prefix())
}

/// Compute the number the next item created at `at` would receive.
///
/// The result depends only on `numbers` and `at`: calling this twice without
/// inserting in between returns the same value both times. Callers that show
/// the value as a preview must insert before asking again, or two items end up
/// sharing a number.
pub fn next_item_number<'a, I>(
    numbers: I,
    prefix: &str,
    at: DateTime<Utc>,
) -> DomainResult<ItemNumber>
where
    I: IntoIterator<Item = &'a str>,
{
    let month = month_prefix(prefix, at)?;
    let taken = numbers
        .into_iter()
        .filter(|number| number.starts_with(month.as_str()))
        .count();
    let sequence = u32::try_from(taken + 1)
        .map_err(|_| DomainError::validation("item number sequence exhausted"))?;

    ItemNumber::new(prefix, at.month(), at.year(), sequence)
}
