use bitlayout_parse::ParsePolicy;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
	/// Decimal, `0x`-prefixed hexadecimal, or `0`-prefixed octal.
	#[arg(allow_negative_numbers = true)]
	pub number: String,
	/// Fail on input that isn't entirely a number instead of treating it as 0.
	#[arg(short, long)]
	pub strict: bool,
}

impl Args {
	pub const fn policy(&self) -> ParsePolicy {
		if self.strict {
			ParsePolicy::Strict
		} else {
			ParsePolicy::Lenient
		}
	}
}
