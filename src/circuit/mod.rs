//! Circuit parameters and their validation.
//!
//! A series RLC circuit is fully described by five positive scalars.
//! [`CircuitParameters`] holds them after validation; the element models
//! built from them live in [`crate::components`].

mod types;
mod validate;

pub use types::*;
pub use validate::validate_parameter;
