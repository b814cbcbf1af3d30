use core::{
	fmt::{Display, Formatter, Result as FmtResult},
	ops::Range,
};

/// How many bits a [`Diagram`](crate::Diagram) shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DisplayWidth {
	Narrow,
	Wide,
}

impl DisplayWidth {
	/// Values that fit in a `u32` get 32 columns, everything else gets 64.
	#[must_use]
	pub const fn for_value(value: u64) -> Self {
		if value > u32::MAX as u64 {
			Self::Wide
		} else {
			Self::Narrow
		}
	}

	#[must_use]
	pub const fn bits(self) -> u32 {
		match self {
			Self::Narrow => u32::BITS,
			Self::Wide => u64::BITS,
		}
	}

	/// Every bit position covered by this width, least significant first.
	#[must_use]
	pub const fn positions(self) -> Range<u32> {
		0..self.bits()
	}
}

impl Display for DisplayWidth {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		Display::fmt(&self.bits(), f)?;
		f.write_str("-bit")
	}
}
