/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::import::importer;
use crate::parsing::filesystem::Filesystem;
use anyhow::{bail, Error};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod error;
mod gl;
mod import;
mod parsing;
mod reports;
mod session;
mod util;

#[derive(Parser)]
#[command(
	name = "budgr",
	version = "0.1",
	about = "Classify a bank export into budget categories"
)]
pub struct Cli {
	// ----------------
	// -- POSITIONAL --
	// ----------------
	/// The command to execute
	command: Directive,

	/// The description to look up for the Classify command
	#[arg(required = false)]
	term: Option<String>,

	// -----------
	// -- FLAGS --
	// -----------
	/// Specifies the bank export to import
	#[arg(short, long)]
	file: Option<String>,

	/// Keyword file (default: ~/.config/budgr/keywords.json)
	#[arg(short, long)]
	keywords: Option<String>,

	/// Append the finished statement to this CSV file
	#[arg(short, long)]
	output: Option<String>,

	/// Custom config file location (default: ~/.config/budgr/config.toml)
	#[arg(long)]
	config: Option<String>,

	/// Skip the interactive edit loop after reconciliation
	#[arg(long)]
	no_edit: bool,

	/// Enable debug logging on stderr
	#[arg(short, long)]
	verbose: bool,
}

impl Cli {
	/// Extra validations on top of what clap does
	fn validate(&self) -> Result<(), Error> {
		match self.command {
			Directive::Import if self.file.is_none() => {
				bail!("Import requires an input file (-f)")
			},
			Directive::Classify if self.term.is_none() => {
				bail!("No description specified")
			},
			_ => Ok(()),
		}
	}
}

#[derive(ValueEnum, Clone, PartialEq)]
enum Directive {
	Import,   // reconcile a bank export into a statement
	Check,    // validate the keyword configuration
	Classify, // look up the category for one description
}

fn main() -> Result<(), Error> {
	let args = Cli::parse();
	args.validate()?;

	// RUST_LOG wins over --verbose; logs stay off stdout, which is the dialogue
	let filter = if std::env::var("RUST_LOG").is_ok() {
		EnvFilter::from_default_env()
	} else if args.verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::new("warn")
	};
	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_target(false)
				.compact()
				.with_writer(std::io::stderr),
		)
		.init();

	let fs = Filesystem::new();
	let config = fs.get_config(args.config.as_ref())?;

	match args.command {
		Directive::Import => importer::import(&fs, config, &args)?,
		Directive::Check => {
			let keywords = importer::load_keyword_map(&fs, &config, &args)?;
			print!("{}", importer::keyword_summary(&keywords));
		},
		Directive::Classify => {
			let keywords = importer::load_keyword_map(&fs, &config, &args)?;
			if let Some(term) = &args.term {
				println!("{}", importer::classify(&keywords, term));
			}
		},
	}

	Ok(())
}
