#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![no_std]

mod error;
mod radix;

use tracing::{debug, warn};

pub use self::{error::*, radix::*};

/// What to do with input that isn't a well-formed number.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ParsePolicy {
	/// Parse the longest valid prefix like `strtoull(s, NULL, 0)`, falling back to 0.
	#[default]
	Lenient,
	/// Reject anything that isn't entirely a number.
	Strict,
}

#[derive(Debug, Clone, Copy)]
pub struct Parser<'source> {
	source: &'source str,
	policy: ParsePolicy,
}

impl<'source> Parser<'source> {
	#[must_use]
	pub const fn new(source: &'source str) -> Self {
		Self {
			source,
			policy: ParsePolicy::Lenient,
		}
	}

	#[must_use]
	pub const fn with_policy(mut self, policy: ParsePolicy) -> Self {
		self.policy = policy;
		self
	}

	pub fn parse(self) -> Result<u64, ParseError> {
		debug!(source = self.source, policy = ?self.policy, "parsing number");

		match self.policy {
			ParsePolicy::Lenient => Ok(self.parse_lenient()),
			ParsePolicy::Strict => self.parse_strict(),
		}
	}

	fn parse_lenient(self) -> u64 {
		let trimmed = self.source.trim_start_matches(is_c_space);
		let (negative, unsigned) = split_sign(trimmed);
		let (radix, digits) = Radix::detect(unsigned);

		// "0x" without a hex digit after it is just the digit 0
		if matches!(radix, Radix::Hexadecimal)
			&& !digits
				.chars()
				.next()
				.is_some_and(|c| radix.digit(c).is_some())
		{
			if unsigned.len() > 1 {
				warn!(source = self.source, "ignoring trailing characters after 0");
			}

			return 0;
		}

		debug!("reading {radix} literal");

		let mut value = 0u64;
		let mut consumed = 0;
		let mut saturated = false;

		for c in digits.chars() {
			let Some(digit) = radix.digit(c) else {
				break;
			};

			consumed += c.len_utf8();

			if let Some(next) = radix.accumulate(value, digit) {
				value = next;
			} else {
				saturated = true;
			}
		}

		if consumed == 0 {
			warn!(source = self.source, "no digits found, using 0");
			return 0;
		}

		if consumed < digits.len() {
			warn!(
				source = self.source,
				ignored = &digits[consumed..],
				"ignoring trailing characters"
			);
		}

		if saturated {
			warn!(source = self.source, "number does not fit in 64 bits, using the maximum");
			return u64::MAX;
		}

		if negative { value.wrapping_neg() } else { value }
	}

	fn parse_strict(self) -> Result<u64, ParseError> {
		let (negative, unsigned) = split_sign(self.source);

		if unsigned.is_empty() {
			return Err(ParseError::Empty);
		}

		if negative {
			return Err(ParseError::Negative);
		}

		let (radix, digits) = Radix::detect(unsigned);

		if digits.is_empty() {
			return Err(ParseError::MissingDigits { radix });
		}

		debug!("reading {radix} literal");

		let offset = self.source.len() - digits.len();

		digits.char_indices().try_fold(0u64, |value, (i, c)| {
			let digit = radix
				.digit(c)
				.ok_or(ParseError::InvalidNumberFormat {
					position: offset + i,
					found: c,
				})?;

			radix.accumulate(value, digit).ok_or(ParseError::Overflow)
		})
	}
}

/// Parses `source` as a C-style integer literal under `policy`.
pub fn parse(source: &str, policy: ParsePolicy) -> Result<u64, ParseError> {
	Parser::new(source).with_policy(policy).parse()
}

const fn is_c_space(c: char) -> bool {
	matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

fn split_sign(source: &str) -> (bool, &str) {
	if let Some(rest) = source.strip_prefix('-') {
		(true, rest)
	} else {
		(false, source.strip_prefix('+').unwrap_or(source))
	}
}

#[cfg(test)]
mod tests {
	use super::{ParseError, ParsePolicy, Parser, Radix, parse};

	fn lenient(source: &str) -> u64 {
		match Parser::new(source).parse() {
			Ok(v) => v,
			Err(e) => panic!("lenient parsing failed for {source:?}: {e}"),
		}
	}

	#[test]
	fn decimal() -> Result<(), ParseError> {
		assert_eq!(parse("5", ParsePolicy::Strict)?, 5);
		assert_eq!(parse("4294967296", ParsePolicy::Strict)?, 1 << 32);
		assert_eq!(parse("18446744073709551615", ParsePolicy::Strict)?, u64::MAX);

		Ok(())
	}

	#[test]
	fn prefixed() -> Result<(), ParseError> {
		assert_eq!(parse("0xff", ParsePolicy::Strict)?, 0xff);
		assert_eq!(parse("0XDeadBeef", ParsePolicy::Strict)?, 0xdead_beef);
		assert_eq!(parse("010", ParsePolicy::Strict)?, 8);
		assert_eq!(parse("0", ParsePolicy::Strict)?, 0);
		assert_eq!(parse("+7", ParsePolicy::Strict)?, 7);

		Ok(())
	}

	#[test]
	fn lenient_takes_longest_prefix() {
		assert_eq!(lenient("12abc"), 12);
		assert_eq!(lenient("0x1fz"), 0x1f);
		assert_eq!(lenient("0778"), 0o77);
		assert_eq!(lenient("  \t42"), 42);
	}

	#[test]
	fn lenient_falls_back_to_zero() {
		assert_eq!(lenient(""), 0);
		assert_eq!(lenient("hello"), 0);
		assert_eq!(lenient("08"), 0);
		assert_eq!(lenient("0x"), 0);
		assert_eq!(lenient("0xg"), 0);
		assert_eq!(lenient("-"), 0);
	}

	#[test]
	fn lenient_wraps_negative_and_saturates() {
		assert_eq!(lenient("-1"), u64::MAX);
		assert_eq!(lenient("-0x10"), 0u64.wrapping_sub(0x10));
		assert_eq!(lenient("18446744073709551616"), u64::MAX);
		assert_eq!(lenient("0x1ffffffffffffffff"), u64::MAX);
	}

	#[test]
	fn strict_rejects_garbage() {
		assert_eq!(parse("", ParsePolicy::Strict), Err(ParseError::Empty));
		assert_eq!(parse("+", ParsePolicy::Strict), Err(ParseError::Empty));
		assert_eq!(parse("-1", ParsePolicy::Strict), Err(ParseError::Negative));
		assert_eq!(
			parse("0x", ParsePolicy::Strict),
			Err(ParseError::MissingDigits {
				radix: Radix::Hexadecimal
			})
		);
		assert_eq!(
			parse("08", ParsePolicy::Strict),
			Err(ParseError::InvalidNumberFormat {
				position: 1,
				found: '8'
			})
		);
		assert_eq!(
			parse("0x1g", ParsePolicy::Strict),
			Err(ParseError::InvalidNumberFormat {
				position: 3,
				found: 'g'
			})
		);
		assert_eq!(
			parse(" 1", ParsePolicy::Strict),
			Err(ParseError::InvalidNumberFormat {
				position: 0,
				found: ' '
			})
		);
		assert_eq!(
			parse("18446744073709551616", ParsePolicy::Strict),
			Err(ParseError::Overflow)
		);
	}
}
