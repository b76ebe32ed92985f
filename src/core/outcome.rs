//! Tagged result returned by every validator.

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Either a computed value or the list of reasons the input was rejected.
///
/// A failure always carries at least one reason. Independent checks (for
/// example username and age) each contribute their own reason, so one
/// failure may describe several problems at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum Outcome<T> {
    /// All checks passed.
    Success(T),
    /// One or more checks failed.
    Failure(Vec<ValidationError>),
}

impl<T> Outcome<T> {
    /// Build a failure from a single reason.
    pub fn fail(reason: ValidationError) -> Self {
        Outcome::Failure(vec![reason])
    }

    /// Combine the result of a check run with the value to return on success.
    pub fn from_checks(
        checks: Result<(), Vec<ValidationError>>,
        on_success: impl FnOnce() -> T,
    ) -> Self {
        match checks {
            Ok(()) => Outcome::Success(on_success()),
            Err(reasons) => Outcome::Failure(reasons),
        }
    }

    /// Whether all checks passed.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Whether any check failed.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The success value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(v) => Some(v),
            Outcome::Failure(_) => None,
        }
    }

    /// The failure reasons (empty on success).
    pub fn reasons(&self) -> &[ValidationError] {
        match self {
            Outcome::Success(_) => &[],
            Outcome::Failure(reasons) => reasons,
        }
    }

    /// Transform the success value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(v) => Outcome::Success(f(v)),
            Outcome::Failure(reasons) => Outcome::Failure(reasons),
        }
    }

    /// Convert into a standard `Result`.
    pub fn into_result(self) -> Result<T, Vec<ValidationError>> {
        match self {
            Outcome::Success(v) => Ok(v),
            Outcome::Failure(reasons) => Err(reasons),
        }
    }

    /// Join the failure messages with `", "`.
    pub fn failure_message(&self) -> Option<String> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(reasons) => Some(
                reasons
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }
}

impl<T: fmt::Display> Outcome<T> {
    /// Render as the single string legacy consumers match against.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(v) => write!(f, "{}", v),
            Outcome::Failure(_) => {
                write!(f, "{}", self.failure_message().unwrap_or_default())
            }
        }
    }
}

impl<T> From<Result<T, ValidationError>> for Outcome<T> {
    fn from(result: Result<T, ValidationError>) -> Self {
        match result {
            Ok(v) => Outcome::Success(v),
            Err(reason) => Outcome::fail(reason),
        }
    }
}

impl<T> From<Result<T, Vec<ValidationError>>> for Outcome<T> {
    fn from(result: Result<T, Vec<ValidationError>>) -> Self {
        match result {
            Ok(v) => Outcome::Success(v),
            Err(reasons) => Outcome::Failure(reasons),
        }
    }
}
