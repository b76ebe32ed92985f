//! Thresholds, configuration file loading and process-wide settings.

pub mod loader;
pub mod rules;
pub mod settings;

pub use loader::Config;
pub use rules::{DrivingRules, Rules, UserInputRules, UsernameRules};
pub use settings::Settings;
