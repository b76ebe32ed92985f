//! Container types.

pub mod stack;

pub use stack::Stack;
