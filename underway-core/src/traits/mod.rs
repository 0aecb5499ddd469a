//! Core Traits and Abstractions for Underway
//!
//! ## Module Organization
//!
//! - [`stream`] - Pull-based record streams
//! - [`validator`] - Range validation of governing quantities
//! - [`record`] - Per-kind record behaviour (layout, validation, contribution)
//!
//! The merge engine is written against these traits only. A new input source
//! implements [`Stream`]; a new acceptance rule implements [`Validator`].

pub mod record;
pub mod stream;
pub mod validator;

pub use record::SurveyRecord;
pub use stream::Stream;
pub use validator::{Validatable, Validator, ValidatorConstraints};
