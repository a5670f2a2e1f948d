// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::WizardStep;
use navalha_domain::DomainError;

/// Errors that can occur during wizard transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The command is not valid in the wizard's current step.
    CommandNotAllowed {
        /// The wizard's current step.
        step: WizardStep,
        /// The rejected command's name.
        command: &'static str,
    },
    /// Submission was attempted outside the confirmation step.
    SubmitNotAllowed {
        /// The wizard's current step.
        step: WizardStep,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::CommandNotAllowed { step, command } => {
                write!(f, "Command '{command}' is not allowed in step '{step}'")
            }
            Self::SubmitNotAllowed { step } => {
                write!(f, "Cannot submit from step '{step}'")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
