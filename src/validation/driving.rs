//! Driving eligibility.

use crate::config::{DrivingRules, Settings};
use crate::core::error::{Field, ValidationError};
use crate::core::outcome::Outcome;
use crate::core::types::Value;
use crate::validation::constraint::{expect_number, expect_string, Constraint};
use crate::validation::pipeline::ValidationPipeline;

impl DrivingRules {
    /// Decide whether a person of `age` may drive in `country_code`.
    ///
    /// The age type and the country code are checked independently; when
    /// both are wrong both reasons are reported.
    pub fn can_drive(&self, age: &Value, country_code: &Value) -> Outcome<bool> {
        ValidationPipeline::accumulating()
            .stage(Field::Age, age, [Constraint::Numeric])
            .stage(
                Field::CountryCode,
                country_code,
                [Constraint::Text, Constraint::OneOf(self.countries())],
            )
            .validate()
            .and_then(|()| {
                let age = expect_number(Field::Age, age).map_err(|e| vec![e])?;
                let code = expect_string(Field::CountryCode, country_code).map_err(|e| vec![e])?;
                let minimum = self.minimum_age(code).ok_or_else(|| {
                    vec![ValidationError::NotRecognized {
                        field: Field::CountryCode,
                        value: code.to_string(),
                    }]
                })?;

                Ok(age >= f64::from(minimum))
            })
            .into()
    }
}

/// Decide driving eligibility with the process-wide table.
pub fn can_drive(age: impl Into<Value>, country_code: impl Into<Value>) -> Outcome<bool> {
    Settings::global().can_drive(&age.into(), &country_code.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_ages() {
        // (age, country, expected)
        let cases = [
            (15, "US", false),
            (16, "US", true),
            (17, "US", true),
            (15, "UK", false),
            (17, "UK", true),
            (18, "UK", true),
        ];
        for (age, country, expected) in cases {
            assert_eq!(
                can_drive(age, country),
                Outcome::Success(expected),
                "{} in {}",
                age,
                country
            );
        }
    }

    #[test]
    fn test_young_drivers_rejected() {
        assert_eq!(can_drive(12, "US"), Outcome::Success(false));
        assert_eq!(can_drive(10, "UK"), Outcome::Success(false));
        assert_eq!(can_drive(16.5, "UK"), Outcome::Success(false));
    }

    #[test]
    fn test_invalid_country_code() {
        let outcome = can_drive(16, "USA");
        assert!(outcome.render().to_lowercase().contains("invalid"));
        assert!(can_drive(16, "us").is_failure());
        assert!(can_drive(16, 1).is_failure());
    }

    #[test]
    fn test_invalid_age_type() {
        let outcome = can_drive("12", "US");
        assert!(outcome.render().to_lowercase().contains("invalid"));
        assert_eq!(outcome.reasons()[0].field(), Field::Age);
    }

    #[test]
    fn test_both_inputs_invalid() {
        let outcome = can_drive("12", "USA");
        let fields: Vec<Field> = outcome.reasons().iter().map(ValidationError::field).collect();
        assert_eq!(fields, vec![Field::Age, Field::CountryCode]);
    }

    #[test]
    fn test_custom_table() {
        let mut rules = DrivingRules::default();
        rules.minimum_ages.insert("NZ".to_string(), 16);

        assert_eq!(
            rules.can_drive(&Value::from(16), &Value::from("NZ")),
            Outcome::Success(true)
        );
        assert!(can_drive(16, "NZ").is_failure());
    }
}
