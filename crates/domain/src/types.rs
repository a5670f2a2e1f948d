// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::macros::format_description;

/// Represents a barber identifier.
///
/// Barbers are sourced from the catalog and immutable within a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BarberId {
    /// The identifier value.
    value: String,
}

impl BarberId {
    /// Creates a new `BarberId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for BarberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a service identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceId {
    /// The identifier value.
    value: String,
}

impl ServiceId {
    /// Creates a new `ServiceId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for ServiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents an appointment identifier.
///
/// Identifiers are assigned by the appointment store at creation time and
/// are unique within a store. The numeric ordering provides the
/// deterministic tie-break for appointments sharing the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AppointmentId {
    /// The identifier value.
    value: i64,
}

impl AppointmentId {
    /// Creates a new `AppointmentId`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self { value }
    }

    /// Returns the identifier value.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }
}

impl std::fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A barber's average rating, stored in tenths to keep the type `Eq`.
///
/// Valid range is 0.0 to 5.0 (0 to 50 tenths).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rating {
    /// The rating value in tenths (48 means 4.8).
    tenths: u8,
}

impl Rating {
    /// Creates a new `Rating` from a value in tenths.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAverageRating` if the value exceeds 50.
    pub const fn from_tenths(tenths: u8) -> Result<Self, DomainError> {
        if tenths > 50 {
            return Err(DomainError::InvalidAverageRating { tenths });
        }
        Ok(Self { tenths })
    }

    /// Returns the rating value in tenths.
    #[must_use]
    pub const fn tenths(&self) -> u8 {
        self.tenths
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.tenths / 10, self.tenths % 10)
    }
}

/// A client's rating for a completed appointment.
///
/// Valid range is the whole numbers 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceRating {
    /// The rating value.
    value: u8,
}

impl ServiceRating {
    /// Creates a new `ServiceRating`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRating` if the value is not 1-5.
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if !(1..=5).contains(&value) {
            return Err(DomainError::InvalidRating { value });
        }
        Ok(Self { value })
    }

    /// Returns the rating value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }
}

/// A non-negative price, stored in integer cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price {
    /// The price value in cents.
    cents: u32,
}

impl Price {
    /// Creates a new `Price` from a value in cents.
    #[must_use]
    pub const fn from_cents(cents: u32) -> Self {
        Self { cents }
    }

    /// Returns the price value in cents.
    #[must_use]
    pub const fn cents(&self) -> u32 {
        self.cents
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

/// A bookable wall-clock time of day, minute granularity.
///
/// The canonical string form is `HH:MM` (24-hour), which is also the wire
/// form used by the providers and the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay {
    /// The underlying time value. Seconds are always zero.
    value: time::Time,
}

impl TimeOfDay {
    /// Creates a `TimeOfDay` from hour and minute components.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TimeParseError` if the components are out of
    /// range.
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self, DomainError> {
        let value: time::Time =
            time::Time::from_hms(hour, minute, 0).map_err(|e| DomainError::TimeParseError {
                time_string: format!("{hour:02}:{minute:02}"),
                error: e.to_string(),
            })?;
        Ok(Self { value })
    }

    /// Creates a `TimeOfDay` from whole minutes past midnight.
    ///
    /// Returns `None` if the value does not fall within a single day.
    #[must_use]
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        if minutes >= 24 * 60 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        let value: time::Time = time::Time::from_hms((minutes / 60) as u8, (minutes % 60) as u8, 0).ok()?;
        Some(Self { value })
    }

    /// Returns the number of whole minutes past midnight.
    #[must_use]
    pub fn minutes_from_midnight(&self) -> u16 {
        u16::from(self.value.hour()) * 60 + u16::from(self.value.minute())
    }

    /// Returns the underlying `time::Time` value.
    #[must_use]
    pub const fn as_time(&self) -> time::Time {
        self.value
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.value.hour(), self.value.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format = format_description!("[hour]:[minute]");
        let value: time::Time =
            time::Time::parse(s, &format).map_err(|e| DomainError::TimeParseError {
                time_string: s.to_string(),
                error: e.to_string(),
            })?;
        Ok(Self { value })
    }
}

/// Parses a calendar date from its `YYYY-MM-DD` wire form.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_date(s: &str) -> Result<time::Date, DomainError> {
    let format = format_description!("[year]-[month]-[day]");
    time::Date::parse(s, &format).map_err(|e| DomainError::DateParseError {
        date_string: s.to_string(),
        error: e.to_string(),
    })
}

/// A barber offered by the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Barber {
    /// The barber's identifier.
    pub id: BarberId,
    /// The barber's display name.
    pub name: String,
    /// The barber's average rating.
    pub rating: Rating,
    /// Optional avatar image reference.
    pub avatar: Option<String>,
}

impl Barber {
    /// Creates a new `Barber`.
    #[must_use]
    pub const fn new(id: BarberId, name: String, rating: Rating, avatar: Option<String>) -> Self {
        Self {
            id,
            name,
            rating,
            avatar,
        }
    }
}

/// A service offered by the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// The service's identifier.
    pub id: ServiceId,
    /// The service's display name.
    pub name: String,
    /// A short description of the service.
    pub description: String,
    /// The service's price.
    pub price: Price,
    /// The service's duration in minutes.
    pub duration_minutes: u32,
}

impl Service {
    /// Creates a new `Service`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidServiceDuration` if the duration is zero.
    pub fn new(
        id: ServiceId,
        name: String,
        description: String,
        price: Price,
        duration_minutes: u32,
    ) -> Result<Self, DomainError> {
        if duration_minutes == 0 {
            return Err(DomainError::InvalidServiceDuration {
                minutes: duration_minutes,
            });
        }
        Ok(Self {
            id,
            name,
            description,
            price,
            duration_minutes,
        })
    }
}

/// A client's contact details, used for booking prefill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientContact {
    /// The client's full name.
    pub name: String,
    /// The client's phone number.
    pub phone: String,
}

impl ClientContact {
    /// Creates a new `ClientContact`.
    #[must_use]
    pub const fn new(name: String, phone: String) -> Self {
        Self { name, phone }
    }
}

/// The payload handed to the confirmation sink after a successful booking.
///
/// The core only constructs this value; formatting and transport belong to
/// the consuming collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationPayload {
    /// The booked barber's display name.
    pub barber_name: String,
    /// The booked service's display name.
    pub service_name: String,
    /// The appointment date.
    pub date: time::Date,
    /// The appointment time.
    pub time: TimeOfDay,
    /// The client's full name.
    pub client_name: String,
    /// The client's phone number.
    pub client_phone: String,
}
