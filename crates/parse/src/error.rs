use core::{
	error::Error as CoreError,
	fmt::{Display, Formatter, Result as FmtResult},
};

use super::Radix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
	Empty,
	InvalidNumberFormat { position: usize, found: char },
	MissingDigits { radix: Radix },
	Overflow,
	Negative,
}

impl Display for ParseError {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		match self {
			Self::Empty => f.write_str("no number was given"),
			Self::InvalidNumberFormat { position, found } => {
				f.write_str("invalid character ")?;
				Display::fmt(&found.escape_debug(), f)?;
				f.write_str(" at position ")?;
				Display::fmt(position, f)
			}
			Self::MissingDigits { radix } => {
				Display::fmt(radix, f)?;
				f.write_str(" prefix is not followed by any digits")
			}
			Self::Overflow => f.write_str("number does not fit in 64 bits"),
			Self::Negative => f.write_str("negative numbers are not supported"),
		}
	}
}

impl CoreError for ParseError {}
