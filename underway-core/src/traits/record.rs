//! Per-kind record behaviour

use crate::{
    composite::Row,
    config::ValidationLimits,
    errors::{ParseError, ValidationError},
    records::{Fields, Fix, StreamKind},
};

/// Behaviour every stream kind's record type provides
///
/// Each kind owns three things the merge engine must not need to know about:
///
/// 1. its column layout (`parse`)
/// 2. which fields fall together when the governing quantity is out of
///    range (`sanitize`)
/// 3. which merged-row fields it writes (`contribute`)
pub trait SurveyRecord: Sized {
    /// Stream kind this record type is read from
    const KIND: StreamKind;

    /// Read one line's columns
    fn parse(fields: &mut Fields<'_>) -> Result<Self, ParseError>;

    /// Timestamp and position
    fn fix(&self) -> &Fix;

    /// Apply range validation, replacing the affected field group with the
    /// missing sentinel. Returns the violation that triggered it, if any.
    ///
    /// Kinds without a governing quantity keep the default.
    fn sanitize(&mut self, _limits: &ValidationLimits) -> Option<ValidationError> {
        None
    }

    /// Overwrite the row's shared time/position fields and write this kind's
    /// own fields
    fn contribute(&self, row: &mut Row);
}
