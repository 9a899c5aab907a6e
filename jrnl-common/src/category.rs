//! Category codec
//!
//! Each calendar day owns exactly one journal entry in the remote store, keyed
//! by a category string of the form `journal/YYYY/MM/DD` (4-digit year,
//! zero-padded month and day). This module converts between dates and keys and
//! generates the newest-first date ranges used for multi-day lookups.

use chrono::{Datelike, Days, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Leading path segment shared by every journal category
pub const CATEGORY_ROOT: &str = "journal";

// ASCII classes only: `\d` would also accept non-ASCII digits.
static CATEGORY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^journal/([0-9]{4})/([0-9]{2})/([0-9]{2})$").expect("category pattern compiles")
});

/// Validated `journal/YYYY/MM/DD` key
///
/// Can only be constructed through the codec, so every instance matches the
/// strict pattern and names a real calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryKey {
    key: String,
    date: NaiveDate,
}

impl CategoryKey {
    /// Parse a category string with strict validation
    pub fn parse(s: &str) -> Result<Self> {
        let date = date_of(s)?;
        Ok(Self {
            key: s.to_string(),
            date,
        })
    }

    /// Key as it appears in the remote store
    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// Calendar day this key identifies
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

impl AsRef<str> for CategoryKey {
    fn as_ref(&self) -> &str {
        &self.key
    }
}

impl FromStr for CategoryKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CategoryKey {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        let date = date_of(&s)?;
        Ok(Self { key: s, date })
    }
}

impl From<CategoryKey> for String {
    fn from(key: CategoryKey) -> Self {
        key.key
    }
}

/// Build the category key for a calendar date
///
/// Month and day are zero-padded; output does not depend on locale. Years
/// outside `0..=9999` cannot be written with four digits and are rejected.
pub fn category_of(date: NaiveDate) -> Result<CategoryKey> {
    let year = date.year();
    if !(0..=9999).contains(&year) {
        return Err(Error::InvalidArgument(format!(
            "year {} cannot be encoded as a category",
            year
        )));
    }

    Ok(CategoryKey {
        key: format!(
            "{}/{:04}/{:02}/{:02}",
            CATEGORY_ROOT,
            year,
            date.month(),
            date.day()
        ),
        date,
    })
}

/// Decode a category string into its calendar date
///
/// Rejects anything that is not exactly `journal/YYYY/MM/DD`: weekday
/// suffixes, alternate separators, single-digit month or day, and
/// impossible dates such as `journal/2024/02/30`.
pub fn date_of(key: &str) -> Result<NaiveDate> {
    let caps = CATEGORY_PATTERN
        .captures(key)
        .ok_or_else(|| Error::InvalidArgument(format!("invalid category format: {:?}", key)))?;

    // Pattern guarantees ASCII digits of bounded width, so these parses cannot overflow
    let year: i32 = caps[1].parse().unwrap_or_default();
    let month: u32 = caps[2].parse().unwrap_or_default();
    let day: u32 = caps[3].parse().unwrap_or_default();

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| Error::InvalidArgument(format!("category names no calendar day: {:?}", key)))
}

/// Build a category from a plain `YYYY-MM-DD` string by splitting on `-`
///
/// Deliberately more permissive than [`date_of`]: unpadded month and day
/// (`2024-6-5`) are accepted and padded. The result still satisfies the
/// strict pattern.
pub fn category_of_date_str(date: &str) -> Result<CategoryKey> {
    let parts: Vec<&str> = date.trim().split('-').collect();
    let [year, month, day] = parts[..] else {
        return Err(Error::InvalidArgument(format!(
            "expected YYYY-MM-DD, got {:?}",
            date
        )));
    };

    let numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !numeric(year) || !numeric(month) || !numeric(day) {
        return Err(Error::InvalidArgument(format!(
            "expected YYYY-MM-DD, got {:?}",
            date
        )));
    }

    CategoryKey::parse(&format!(
        "{}/{}/{:0>2}/{:0>2}",
        CATEGORY_ROOT, year, month, day
    ))
}

/// Keys for the `n` days strictly before `base`, newest first
pub fn range_before(n: u32, base: NaiveDate) -> Result<Vec<CategoryKey>> {
    (1..=u64::from(n))
        .map(|offset| {
            let day = base.checked_sub_days(Days::new(offset)).ok_or_else(|| {
                Error::InvalidArgument(format!("{} days before {} is out of range", offset, base))
            })?;
            category_of(day)
        })
        .collect()
}

/// Keys for every day from `end` back to `start` inclusive, newest first
///
/// Returns a single key when `start == end`.
pub fn range_between(start: NaiveDate, end: NaiveDate) -> Result<Vec<CategoryKey>> {
    if start > end {
        return Err(Error::InvalidArgument(format!(
            "range start {} is after end {}",
            start, end
        )));
    }

    let mut keys = Vec::with_capacity((end - start).num_days() as usize + 1);
    let mut day = end;
    loop {
        keys.push(category_of(day)?);
        if day == start {
            break;
        }
        day = day
            .pred_opt()
            .ok_or_else(|| Error::InvalidArgument(format!("no day before {}", day)))?;
    }

    Ok(keys)
}

/// Pattern test for category strings; never fails
pub fn is_valid_category(s: &str) -> bool {
    date_of(s).is_ok()
}
