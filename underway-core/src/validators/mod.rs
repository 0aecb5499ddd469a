//! Range Validators for Underway Sensors
//!
//! ## Overview
//!
//! Each sensor family with a governing quantity has a validator:
//!
//! | Validator            | Quantity          | Default range (inclusive) |
//! |----------------------|-------------------|---------------------------|
//! | `DepthValidator`     | corrected depth   | 0 – 99999 m               |
//! | `MagneticsValidator` | total field 1     | 9999 – 80000 nT           |
//! | `GravityValidator`   | observed gravity  | 970000 – 990000 mGal      |
//!
//! Validation never rejects a row. A failed check replaces the governing
//! quantity and everything derived from it with the missing sentinel; time and
//! position are always kept so the sample still lands in the merged output.
//!
//! Calibration beyond these bounds is out of scope.
//!
//! ## Usage Example
//!
//! ```rust
//! use underway_core::validators::{DepthValidator, MagneticsValidator};
//! use underway_core::Validator;
//!
//! let depth = DepthValidator::default();
//! assert!(depth.validate(5790.45).is_ok());
//! assert!(depth.validate(150000.0).is_err());
//!
//! // Tighter limits for a shelf survey
//! let shelf = DepthValidator::new_with_limits(0.0, 500.0);
//! assert!(shelf.validate(800.0).is_err());
//!
//! let mag = MagneticsValidator::default();
//! assert!(mag.validate(35925.875).is_ok());
//! ```

mod depth;
mod gravity;
mod magnetics;
pub mod utils;

pub use depth::DepthValidator;
pub use gravity::GravityValidator;
pub use magnetics::MagneticsValidator;
