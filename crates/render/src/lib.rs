#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![no_std]

#[cfg(test)]
extern crate alloc;

mod width;

use core::fmt::{Display, Formatter, Result as FmtResult, Write as _};

use tracing::{debug, instrument};

pub use self::width::*;

/// Whether bit `position` of `value` is set. Positions past 63 never are.
#[must_use]
pub const fn is_bit_set(value: u64, position: u32) -> bool {
	match 1u64.checked_shl(position) {
		Some(mask) => value & mask != 0,
		None => false,
	}
}

/// The bordered table of bit positions and their values.
///
/// Formatting it writes the whole diagram, starting with the value in hex and
/// ending with a newline after the bottom border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagram {
	value: u64,
	width: DisplayWidth,
}

impl Diagram {
	#[instrument(level = "debug")]
	#[must_use]
	pub fn new(value: u64) -> Self {
		let width = DisplayWidth::for_value(value);

		debug!("rendering {width} diagram");

		Self { value, width }
	}

	#[must_use]
	pub const fn value(self) -> u64 {
		self.value
	}

	#[must_use]
	pub const fn width(self) -> DisplayWidth {
		self.width
	}

	fn border(self, f: &mut Formatter<'_>, open: char, close: char) -> FmtResult {
		f.write_char(open)?;

		for _ in 1..self.width.bits() {
			f.write_str("---")?;
		}

		f.write_str("--")?;
		f.write_char(close)?;
		f.write_char('\n')
	}

	fn row(self, f: &mut Formatter<'_>, cell: impl Fn(u32) -> u32) -> FmtResult {
		for position in self.width.positions().rev() {
			write!(f, "|{:2}", cell(position))?;
		}

		f.write_str("|\n")
	}
}

impl Display for Diagram {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		writeln!(f, "{:#x}", self.value)?;

		self.border(f, '/', '\\')?;
		self.row(f, |position| position)?;

		for _ in self.width.positions() {
			f.write_str("|--")?;
		}

		f.write_str("|\n")?;

		self.row(f, |position| u32::from(is_bit_set(self.value, position)))?;
		self.border(f, '\\', '/')
	}
}
