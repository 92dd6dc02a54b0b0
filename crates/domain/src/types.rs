// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::slot::find_slot;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Calendar date format used throughout the system (`YYYY-MM-DD`).
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// An opaque reference to a client.
///
/// Ownership of the referenced client record lies with an external
/// collaborator; the booking engine only compares and stores the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new client reference.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidClientId` if the value is empty.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::InvalidClientId(String::from(
                "Client id cannot be empty",
            )));
        }
        Ok(Self(value.to_string()))
    }

    /// Returns the underlying reference value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// An opaque reference to a photographer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhotographerId(String);

impl PhotographerId {
    /// Creates a new photographer reference.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPhotographerId` if the value is empty.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::InvalidPhotographerId(String::from(
                "Photographer id cannot be empty",
            )));
        }
        Ok(Self(value.to_string()))
    }

    /// Returns the underlying reference value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// A validated calendar date with no time-of-day component.
///
/// Dates are exchanged and persisted as `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventDate(Date);

impl EventDate {
    /// Parses an event date from its `YYYY-MM-DD` representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateParseError` if the string is not a valid
    /// calendar date.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        Date::parse(value, DATE_FORMAT)
            .map(Self)
            .map_err(|e| DomainError::DateParseError {
                date_string: value.to_string(),
                error: e.to_string(),
            })
    }

    /// Returns the underlying calendar date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.0
    }
}

impl std::fmt::Display for EventDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl FromStr for EventDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A time-of-day value drawn from the slot catalog (e.g. `"10:00 AM"`).
///
/// Construction validates catalog membership, so a `SlotTime` always names
/// a bookable slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotTime(String);

impl SlotTime {
    /// Parses a slot time, validating it against the catalog.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownSlotTime` if the value does not match
    /// any catalog entry.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if find_slot(value).is_none() {
            return Err(DomainError::UnknownSlotTime(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    /// Returns the time value (e.g. `"10:00 AM"`).
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SlotTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SlotTime {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
