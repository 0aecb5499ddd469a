//! Whitespace column reader shared by every record layout

use core::str::{FromStr, SplitWhitespace};

use crate::errors::ParseError;
use crate::time::Epoch;

/// Typed, named access to the whitespace-separated columns of one line
///
/// Columns are consumed left to right. Each read names the column it expects
/// so a short or garbled line reports exactly what was missing.
pub struct Fields<'a> {
    tokens: SplitWhitespace<'a>,
}

impl<'a> Fields<'a> {
    /// Start reading a line
    pub fn new(line: &'a str) -> Self {
        Self { tokens: line.split_whitespace() }
    }

    /// Next column, parsed as `T`
    pub fn next<T: FromStr>(&mut self, field: &'static str) -> Result<T, ParseError> {
        let token = self.tokens.next().ok_or(ParseError::MissingField { field })?;
        token.parse().map_err(|_| ParseError::InvalidField {
            field,
            value: token.to_string(),
        })
    }

    /// Next column if the line has one
    pub fn optional<T: FromStr>(&mut self, field: &'static str) -> Result<Option<T>, ParseError> {
        match self.tokens.next() {
            None => Ok(None),
            Some(token) => token.parse().map(Some).map_err(|_| ParseError::InvalidField {
                field,
                value: token.to_string(),
            }),
        }
    }

    /// Step over a column whose content is not used
    pub fn skip(&mut self, field: &'static str) -> Result<(), ParseError> {
        self.tokens.next().map(|_| ()).ok_or(ParseError::MissingField { field })
    }

    /// The six leading timestamp columns: year, day, hour, minute, seconds, milliseconds
    pub fn epoch(&mut self) -> Result<Epoch, ParseError> {
        let year = self.next("year")?;
        let day = self.next("day")?;
        let hour = self.next("hour")?;
        let minute = self.next("minute")?;
        let seconds: f64 = self.next("seconds")?;
        if !seconds.is_finite() {
            return Err(ParseError::InvalidField { field: "seconds", value: seconds.to_string() });
        }
        let millis = self.next("milliseconds")?;

        Ok(Epoch::from_parts(year, day, hour, minute, seconds, millis))
    }
}
