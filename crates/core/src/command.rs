// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use navalha_domain::{BarberId, ServiceId, TimeOfDay};
use time::Date;

/// A command represents user intent as data only.
///
/// Commands are the only way to advance the booking wizard. Submission is
/// not a command: it has side effects and lives at the flow boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardCommand {
    /// Choose a barber. Valid only in the barber selection step.
    SelectBarber {
        /// The chosen barber.
        barber_id: BarberId,
    },
    /// Choose a service. Valid only in the service selection step.
    SelectService {
        /// The chosen service.
        service_id: ServiceId,
    },
    /// Choose a date. Valid only in the date/time step.
    ///
    /// Choosing a different date discards a previously chosen time, since
    /// the available slots are date-dependent.
    SelectDate {
        /// The chosen date.
        date: Date,
    },
    /// Choose a time slot. Valid only in the date/time step, after a date.
    SelectTime {
        /// The chosen time.
        time: TimeOfDay,
    },
    /// Enter the client's contact details. Valid only in the contact step.
    SetContact {
        /// The client's full name.
        name: String,
        /// The client's phone number.
        phone: String,
    },
    /// Advance to the next step if the current step's fields are filled.
    ///
    /// A no-op otherwise.
    Continue,
    /// Return to the previous step without clearing any fields.
    ///
    /// A no-op at the initial step.
    Back,
    /// Abandon the flow, discarding the draft.
    Abort,
}

impl WizardCommand {
    /// Returns the command's name, used in error reporting.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectBarber { .. } => "select_barber",
            Self::SelectService { .. } => "select_service",
            Self::SelectDate { .. } => "select_date",
            Self::SelectTime { .. } => "select_time",
            Self::SetContact { .. } => "set_contact",
            Self::Continue => "continue",
            Self::Back => "back",
            Self::Abort => "abort",
        }
    }
}
