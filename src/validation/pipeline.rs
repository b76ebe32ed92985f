//! Validation pipeline implementation.

use crate::core::error::{Field, ValidationError};
use crate::core::types::Value;
use crate::validation::constraint::Constraint;

/// One input value and the constraints it must satisfy, checked in order.
#[derive(Debug, Clone)]
pub struct Stage<'a> {
    /// Field being checked.
    pub field: Field,
    /// Value being checked.
    pub value: &'a Value,
    /// Constraints applied in order; the first failure ends the stage.
    pub constraints: Vec<Constraint>,
}

impl Stage<'_> {
    fn check(&self) -> Result<(), ValidationError> {
        for constraint in &self.constraints {
            constraint.check(self.field, self.value)?;
        }
        Ok(())
    }
}

/// Multi-stage validation pipeline.
///
/// In accumulating mode every stage runs and each failing stage adds one
/// reason. In fail-fast mode the first failing stage ends the run.
#[derive(Debug, Clone)]
pub struct ValidationPipeline<'a> {
    stages: Vec<Stage<'a>>,
    fail_fast: bool,
}

impl<'a> ValidationPipeline<'a> {
    /// Pipeline that reports every failing stage.
    pub fn accumulating() -> Self {
        Self {
            stages: Vec::new(),
            fail_fast: false,
        }
    }

    /// Pipeline that stops at the first failing stage.
    pub fn fail_fast() -> Self {
        Self {
            stages: Vec::new(),
            fail_fast: true,
        }
    }

    /// Add a stage (builder style).
    pub fn stage(
        mut self,
        field: Field,
        value: &'a Value,
        constraints: impl Into<Vec<Constraint>>,
    ) -> Self {
        self.add_stage(Stage {
            field,
            value,
            constraints: constraints.into(),
        });
        self
    }

    /// Add a stage.
    pub fn add_stage(&mut self, stage: Stage<'a>) {
        self.stages.push(stage);
    }

    /// Run all stages.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for stage in &self.stages {
            if let Err(error) = stage.check() {
                log::debug!("{} check failed: {}", stage.field, error);
                errors.push(error);

                if self.fail_fast {
                    break;
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Quick check - true if every stage passes.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_every_failing_stage() {
        let username = Value::from("");
        let age = Value::from(0);

        let errors = ValidationPipeline::accumulating()
            .stage(Field::Username, &username, [Constraint::LengthBetween { min: 3, max: 255 }])
            .stage(Field::Age, &age, [Constraint::Numeric, Constraint::AtLeast(18.0)])
            .validate()
            .unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field(), Field::Username);
        assert_eq!(errors[1].field(), Field::Age);
    }

    #[test]
    fn test_fail_fast_stops_at_first_stage() {
        let price = Value::from(-10);
        let code = Value::from(10);

        let errors = ValidationPipeline::fail_fast()
            .stage(Field::Price, &price, [Constraint::Numeric, Constraint::NonNegative])
            .stage(Field::DiscountCode, &code, [Constraint::Text])
            .validate()
            .unwrap_err();

        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ValidationError::Negative { .. }));
    }

    #[test]
    fn test_constraints_within_stage_short_circuit() {
        let age = Value::from("20");
        let errors = ValidationPipeline::accumulating()
            .stage(Field::Age, &age, [Constraint::Numeric, Constraint::AtLeast(18.0)])
            .validate()
            .unwrap_err();

        assert_eq!(errors.len(), 1);
        assert!(errors[0].is_type_error());
    }

    #[test]
    fn test_empty_pipeline_passes() {
        assert!(ValidationPipeline::accumulating().is_valid());
        assert!(ValidationPipeline::fail_fast().is_valid());
    }
}
