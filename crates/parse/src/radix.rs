use core::fmt::{Display, Formatter, Result as FmtResult};

/// The base of a numeric literal, picked from its prefix the same way C does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
	/// `0x` or `0X` prefix.
	Hexadecimal,
	/// A leading `0`.
	Octal,
	/// Anything else.
	Decimal,
}

impl Radix {
	/// Splits `literal` into its radix and the digits that follow the prefix.
	///
	/// The hex prefix is stripped, octal literals keep their leading `0` since
	/// it is a valid octal digit on its own.
	#[must_use]
	pub fn detect(literal: &str) -> (Self, &str) {
		if let Some(digits) = literal
			.strip_prefix("0x")
			.or_else(|| literal.strip_prefix("0X"))
		{
			(Self::Hexadecimal, digits)
		} else if literal.starts_with('0') {
			(Self::Octal, literal)
		} else {
			(Self::Decimal, literal)
		}
	}

	#[must_use]
	pub const fn value(self) -> u32 {
		match self {
			Self::Hexadecimal => 16,
			Self::Octal => 8,
			Self::Decimal => 10,
		}
	}

	pub(crate) fn digit(self, c: char) -> Option<u64> {
		c.to_digit(self.value()).map(u64::from)
	}

	pub(crate) fn accumulate(self, value: u64, digit: u64) -> Option<u64> {
		value
			.checked_mul(u64::from(self.value()))
			.and_then(|v| v.checked_add(digit))
	}
}

impl Display for Radix {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		f.write_str(match self {
			Self::Hexadecimal => "hexadecimal",
			Self::Octal => "octal",
			Self::Decimal => "decimal",
		})
	}
}

#[cfg(test)]
mod tests {
	use super::Radix;

	#[test]
	fn hex_prefix_is_stripped() {
		assert_eq!(Radix::detect("0xff"), (Radix::Hexadecimal, "ff"));
		assert_eq!(Radix::detect("0XfF"), (Radix::Hexadecimal, "fF"));
		assert_eq!(Radix::detect("0x"), (Radix::Hexadecimal, ""));
	}

	#[test]
	fn octal_keeps_leading_zero() {
		assert_eq!(Radix::detect("0"), (Radix::Octal, "0"));
		assert_eq!(Radix::detect("017"), (Radix::Octal, "017"));
	}

	#[test]
	fn everything_else_is_decimal() {
		assert_eq!(Radix::detect("42"), (Radix::Decimal, "42"));
		assert_eq!(Radix::detect("abc"), (Radix::Decimal, "abc"));
		assert_eq!(Radix::detect(""), (Radix::Decimal, ""));
	}

	#[test]
	fn accumulate_detects_overflow() {
		assert_eq!(Radix::Decimal.accumulate(12, 3), Some(123));
		assert_eq!(Radix::Hexadecimal.accumulate(u64::MAX >> 4, 0xf), Some(u64::MAX));
		assert_eq!(Radix::Hexadecimal.accumulate(u64::MAX >> 4, 0x10), None);
		assert_eq!(Radix::Octal.accumulate(u64::MAX, 0), None);
	}
}
