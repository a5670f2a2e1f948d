// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shop operating hours.
//!
//! The schedule distinguishes weekday hours from Saturday hours; the shop
//! is closed on Sundays. The slot granularity is an external policy value
//! carried alongside the schedule, never computed from it.

use crate::error::DomainError;
use crate::types::TimeOfDay;
use time::Weekday;

/// A contiguous open interval within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHours {
    /// When the shop opens.
    open: TimeOfDay,
    /// When the shop closes. Always after `open`.
    close: TimeOfDay,
}

impl OpeningHours {
    /// Creates new `OpeningHours`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidOpeningHours` if the closing time is not
    /// after the opening time.
    pub fn new(open: TimeOfDay, close: TimeOfDay) -> Result<Self, DomainError> {
        if close <= open {
            return Err(DomainError::InvalidOpeningHours { open, close });
        }
        Ok(Self { open, close })
    }

    /// Returns the opening time.
    #[must_use]
    pub const fn open(&self) -> TimeOfDay {
        self.open
    }

    /// Returns the closing time.
    #[must_use]
    pub const fn close(&self) -> TimeOfDay {
        self.close
    }
}

/// The shop's weekly operating schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopSchedule {
    /// Monday through Friday hours.
    weekdays: OpeningHours,
    /// Saturday hours.
    saturday: OpeningHours,
    /// Whether the shop is currently taking bookings at all.
    is_open: bool,
}

impl ShopSchedule {
    /// Creates a new `ShopSchedule`.
    #[must_use]
    pub const fn new(weekdays: OpeningHours, saturday: OpeningHours, is_open: bool) -> Self {
        Self {
            weekdays,
            saturday,
            is_open,
        }
    }

    /// Returns the Monday-Friday hours.
    #[must_use]
    pub const fn weekdays(&self) -> OpeningHours {
        self.weekdays
    }

    /// Returns the Saturday hours.
    #[must_use]
    pub const fn saturday(&self) -> OpeningHours {
        self.saturday
    }

    /// Returns whether the shop is taking bookings.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Returns the hours for the given weekday, or `None` when closed.
    ///
    /// The shop never opens on Sundays.
    #[must_use]
    pub const fn hours_for(&self, weekday: Weekday) -> Option<OpeningHours> {
        match weekday {
            Weekday::Sunday => None,
            Weekday::Saturday => Some(self.saturday),
            Weekday::Monday
            | Weekday::Tuesday
            | Weekday::Wednesday
            | Weekday::Thursday
            | Weekday::Friday => Some(self.weekdays),
        }
    }
}

/// The spacing between candidate booking slots, in minutes.
///
/// This is a policy value supplied by the caller; 30 and 60 minutes are the
/// values used in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotGranularity {
    /// The step in minutes.
    minutes: u16,
}

impl SlotGranularity {
    /// Thirty-minute slots.
    pub const THIRTY_MINUTES: Self = Self { minutes: 30 };

    /// Hourly slots.
    pub const ONE_HOUR: Self = Self { minutes: 60 };

    /// Creates a new `SlotGranularity`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSlotGranularity` if the step is zero or
    /// longer than half a day.
    pub fn new(minutes: u16) -> Result<Self, DomainError> {
        if !(1..=720).contains(&minutes) {
            return Err(DomainError::InvalidSlotGranularity { minutes });
        }
        Ok(Self { minutes })
    }

    /// Returns the step in minutes.
    #[must_use]
    pub const fn minutes(&self) -> u16 {
        self.minutes
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn hours(open: (u8, u8), close: (u8, u8)) -> OpeningHours {
        OpeningHours::new(
            TimeOfDay::from_hm(open.0, open.1).unwrap(),
            TimeOfDay::from_hm(close.0, close.1).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_opening_hours_reject_inverted_interval() {
        let open = TimeOfDay::from_hm(19, 0).unwrap();
        let close = TimeOfDay::from_hm(8, 0).unwrap();
        assert!(matches!(
            OpeningHours::new(open, close),
            Err(DomainError::InvalidOpeningHours { .. })
        ));
    }

    #[test]
    fn test_sunday_is_closed() {
        let schedule = ShopSchedule::new(hours((8, 0), (19, 0)), hours((8, 0), (17, 0)), true);
        assert!(schedule.hours_for(Weekday::Sunday).is_none());
    }

    #[test]
    fn test_saturday_uses_saturday_hours() {
        let schedule = ShopSchedule::new(hours((8, 0), (19, 0)), hours((8, 0), (17, 0)), true);
        let saturday = schedule.hours_for(Weekday::Saturday).unwrap();
        assert_eq!(saturday.close(), TimeOfDay::from_hm(17, 0).unwrap());
    }

    #[test]
    fn test_granularity_bounds() {
        assert!(SlotGranularity::new(0).is_err());
        assert!(SlotGranularity::new(721).is_err());
        assert_eq!(SlotGranularity::new(30).unwrap(), SlotGranularity::THIRTY_MINUTES);
    }
}
