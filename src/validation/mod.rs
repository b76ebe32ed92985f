//! Input validators.
//!
//! Each validator checks the type of its inputs first, then the business
//! rule, and returns an [`Outcome`](crate::core::Outcome). Failures are
//! values, never panics or `Err`s.

pub mod constraint;
pub mod driving;
pub mod pipeline;
pub mod pricing;
pub mod username;

pub use constraint::Constraint;
pub use driving::can_drive;
pub use pipeline::{Stage, ValidationPipeline};
pub use pricing::{calculate_discount, is_price_in_range};
pub use username::{is_valid_username, validate_user_input, SUCCESS_MESSAGE};
