//! Navigation fixes (POS-MV and similar)

use crate::{
    composite::Row,
    errors::ParseError,
    traits::SurveyRecord,
};

use super::{Fields, Fix, StreamKind};

/// A position fix with no further readings
///
/// Layout: `epoch source-tag latitude longitude ...`. The source tag
/// (`*gpo`, `*gga`, ...) and any quality columns after the longitude are not
/// carried into the merged row.
#[derive(Debug, Clone, Copy)]
pub struct NavFix {
    /// Timestamp and position
    pub fix: Fix,
}

impl SurveyRecord for NavFix {
    const KIND: StreamKind = StreamKind::Navigation;

    fn parse(fields: &mut Fields<'_>) -> Result<Self, ParseError> {
        let epoch = fields.epoch()?;
        fields.skip("source tag")?;
        let fix = Fix::parse_position(epoch, fields)?;
        Ok(Self { fix })
    }

    fn fix(&self) -> &Fix {
        &self.fix
    }

    fn contribute(&self, row: &mut Row) {
        self.fix.contribute(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_posmv_line() {
        let line = "2016 342 00 00 00 496 *gpo  -7.032306 -175.930304  0.80 11.80 291.50 11 2 297.35  0.50  1.02  0.55";
        let nav = NavFix::parse(&mut Fields::new(line)).unwrap();

        assert_eq!(nav.fix.latitude, -7.032306);
        assert_eq!(nav.fix.longitude, -175.930304);
        assert!((nav.fix.epoch.second - 0.496).abs() < 1e-12);
    }

    #[test]
    fn missing_tag_is_an_error() {
        let result = NavFix::parse(&mut Fields::new("2016 342 00 00 00 496"));
        assert_eq!(result.unwrap_err(), ParseError::MissingField { field: "source tag" });
    }
}
