//! Username and user-input checks.

use crate::config::{Settings, UserInputRules, UsernameRules};
use crate::core::error::Field;
use crate::core::outcome::Outcome;
use crate::core::types::Value;
use crate::validation::constraint::Constraint;
use crate::validation::pipeline::ValidationPipeline;

/// Message carried by a successful user-input check.
pub const SUCCESS_MESSAGE: &str = "Validation successful";

impl UsernameRules {
    /// True if `username` is a string within the length bounds.
    /// Never fails; wrong types are simply rejected.
    pub fn accepts(&self, username: &Value) -> bool {
        ValidationPipeline::fail_fast()
            .stage(
                Field::Username,
                username,
                [Constraint::LengthBetween {
                    min: self.min_length,
                    max: self.max_length,
                }],
            )
            .is_valid()
    }
}

impl UserInputRules {
    /// Check username and age independently and report every failure.
    pub fn validate(&self, username: &Value, age: &Value) -> Outcome<String> {
        let checks = ValidationPipeline::accumulating()
            .stage(
                Field::Username,
                username,
                [
                    Constraint::Text,
                    Constraint::LengthBetween {
                        min: self.min_username_length,
                        max: self.max_username_length,
                    },
                ],
            )
            .stage(
                Field::Age,
                age,
                [Constraint::Numeric, Constraint::AtLeast(self.min_age)],
            )
            .validate();

        Outcome::from_checks(checks, || SUCCESS_MESSAGE.to_string())
    }
}

/// Check a username against the process-wide bounds.
pub fn is_valid_username(username: impl Into<Value>) -> bool {
    Settings::global().is_valid_username(&username.into())
}

/// Run the composite user-input check with the process-wide thresholds.
pub fn validate_user_input(username: impl Into<Value>, age: impl Into<Value>) -> Outcome<String> {
    Settings::global().validate_user_input(&username.into(), &age.into())
}
