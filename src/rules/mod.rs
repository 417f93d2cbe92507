//! Move legality rules.

pub mod validator;

pub use validator::{move_for_variant, validate_move};
