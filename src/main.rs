mod args;

use std::{
	io::{self, prelude::*},
	process::ExitCode,
};

use bitlayout_parse::parse;
use bitlayout_render::Diagram;
use clap::Parser;
use color_eyre::{Result, eyre::WrapErr as _};
use tracing::{debug, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use self::args::Args;

fn main() -> Result<ExitCode> {
	install_tracing()?;
	color_eyre::install()?;

	let args = match Args::try_parse() {
		Ok(a) => a,
		Err(e) => {
			e.print()?;

			return Ok(if e.use_stderr() {
				ExitCode::FAILURE
			} else {
				ExitCode::SUCCESS
			});
		}
	};

	let value = parse(&args.number, args.policy())
		.wrap_err_with(|| format!("could not read {:?} as a number", args.number))?;

	info!(value, "parsed input");

	match write_diagram(Diagram::new(value)) {
		Err(e) if matches!(e.kind(), io::ErrorKind::BrokenPipe) => {
			debug!("stdout closed before the diagram was written");
		}
		result => result?,
	}

	Ok(ExitCode::SUCCESS)
}

fn write_diagram(diagram: Diagram) -> io::Result<()> {
	let mut stdout = io::stdout().lock();

	write!(stdout, "{diagram}")?;
	stdout.flush()
}

fn install_tracing() -> Result<()> {
	let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("error"))?;

	let fmt_layer = fmt::layer()
		.with_target(false)
		.with_writer(io::stderr)
		.with_filter(filter_layer);

	tracing_subscriber::registry()
		.with(fmt_layer)
		.with(ErrorLayer::default())
		.try_init()?;

	Ok(())
}
