// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::WizardCommand;
use crate::error::CoreError;
use crate::state::{BookingDraft, WizardState, WizardStep};

/// Applies a command to the current wizard state, producing a new state.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects. Field-setting commands are accepted only in their own
/// step; `Continue` is a guarded no-op, `Back` never clears downstream
/// fields, and `Abort` discards the draft.
///
/// # Arguments
///
/// * `state` - The current wizard state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(WizardState)` containing the new state
/// * `Err(CoreError)` if the command is invalid in the current step
///
/// # Errors
///
/// Returns an error if:
/// - The wizard is in a terminal step
/// - A field-setting command arrives outside its step
/// - A time is chosen before a date
pub fn apply(state: &WizardState, command: WizardCommand) -> Result<WizardState, CoreError> {
    if state.step.is_terminal() {
        return Err(CoreError::CommandNotAllowed {
            step: state.step,
            command: command.name(),
        });
    }

    match command {
        WizardCommand::SelectBarber { barber_id } => {
            if state.step != WizardStep::SelectBarber {
                return Err(CoreError::CommandNotAllowed {
                    step: state.step,
                    command: "select_barber",
                });
            }
            let mut next: WizardState = state.clone();
            next.draft.barber_id = Some(barber_id);
            Ok(next)
        }
        WizardCommand::SelectService { service_id } => {
            if state.step != WizardStep::SelectService {
                return Err(CoreError::CommandNotAllowed {
                    step: state.step,
                    command: "select_service",
                });
            }
            let mut next: WizardState = state.clone();
            next.draft.service_id = Some(service_id);
            Ok(next)
        }
        WizardCommand::SelectDate { date } => {
            if state.step != WizardStep::SelectDateTime {
                return Err(CoreError::CommandNotAllowed {
                    step: state.step,
                    command: "select_date",
                });
            }
            let mut next: WizardState = state.clone();
            // A time picked for another date is meaningless; drop it.
            if next.draft.date != Some(date) {
                next.draft.time = None;
            }
            next.draft.date = Some(date);
            Ok(next)
        }
        WizardCommand::SelectTime { time } => {
            if state.step != WizardStep::SelectDateTime || state.draft.date.is_none() {
                return Err(CoreError::CommandNotAllowed {
                    step: state.step,
                    command: "select_time",
                });
            }
            let mut next: WizardState = state.clone();
            next.draft.time = Some(time);
            Ok(next)
        }
        WizardCommand::SetContact { name, phone } => {
            if state.step != WizardStep::EnterContact {
                return Err(CoreError::CommandNotAllowed {
                    step: state.step,
                    command: "set_contact",
                });
            }
            let mut next: WizardState = state.clone();
            next.draft.client_name = name;
            next.draft.client_phone = phone;
            Ok(next)
        }
        WizardCommand::Continue => {
            if !state.can_continue() {
                // The UI disables the action; a stray command is a no-op.
                return Ok(state.clone());
            }
            let mut next: WizardState = state.clone();
            next.step = match state.step {
                WizardStep::SelectBarber => WizardStep::SelectService,
                WizardStep::SelectService => WizardStep::SelectDateTime,
                WizardStep::SelectDateTime => WizardStep::EnterContact,
                WizardStep::EnterContact => WizardStep::Confirm,
                WizardStep::Confirm
                | WizardStep::Submitted
                | WizardStep::Cancelled => state.step,
            };
            Ok(next)
        }
        WizardCommand::Back => {
            if state.step == state.initial_step() {
                return Ok(state.clone());
            }
            let mut next: WizardState = state.clone();
            next.step = match state.step {
                WizardStep::SelectService => WizardStep::SelectBarber,
                WizardStep::SelectDateTime => WizardStep::SelectService,
                WizardStep::EnterContact => WizardStep::SelectDateTime,
                WizardStep::Confirm => WizardStep::EnterContact,
                WizardStep::SelectBarber
                | WizardStep::Submitted
                | WizardStep::Cancelled => state.step,
            };
            Ok(next)
        }
        WizardCommand::Abort => {
            let mut next: WizardState = state.clone();
            next.step = WizardStep::Cancelled;
            next.draft = BookingDraft::empty();
            Ok(next)
        }
    }
}
