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
use crate::config::config_file::Config;
use crate::import::keywords::KeywordMap;
use crate::import::normalizer::BankRecord;
use crate::import::reconciler::Reconciler;
use crate::import::sink::CsvSink;
use crate::parsing::filesystem::Filesystem;
use crate::reports::statement_reporter::StatementReporter;
use crate::reports::table::Table;
use crate::session::console::{Console, Terminal};
use crate::session::editor::Editor;
use crate::session::prompts::DEFAULT_CATEGORY_ATTEMPTS;
use crate::Cli;
use anyhow::{bail, Error};

/// Entry point for the import pipeline: read the export, classify, let the
/// user resolve and edit, then hand the statement to the sink.
pub fn import(fs: &Filesystem, config: Config, args: &Cli) -> Result<(), Error> {
	let Some(file) = &args.file else {
		bail!("Import requires an input file (-f)");
	};

	let keywords = load_keyword_map(fs, &config, args)?;
	let records = fs.read_statement(file)?;

	let import_config = config.import.unwrap_or_default();
	let output = args.output.clone().or(import_config.output);
	let sink = output.as_deref().map(CsvSink::open).transpose()?;
	let attempts = import_config
		.category_attempts
		.unwrap_or(DEFAULT_CATEGORY_ATTEMPTS);

	let mut console = Console::stdio();
	run(&records, &keywords, attempts, !args.no_edit, sink, &mut console)
}

pub fn run<R: BankRecord>(
	records: &[R],
	keywords: &KeywordMap,
	category_attempts: u32,
	edit: bool,
	sink: Option<CsvSink>,
	term: &mut dyn Terminal,
) -> Result<(), Error> {
	let reconciler = Reconciler::new(keywords, category_attempts);
	let mut statement = reconciler.reconcile(records, term)?;

	if edit {
		Editor::new(category_attempts).run(&mut statement, term)?;
	}

	match sink {
		Some(_) if statement.is_empty() => {
			term.say("No transactions to append.")?;
		},
		Some(sink) => {
			sink.append(&statement.raw_data())?;
			term.say(&format!("Appended {} transaction(s).", statement.len()))?;
		},
		None => {
			term.say("Full revised statement:")?;
			term.say(&StatementReporter::new(&statement).render())?;
		},
	}

	Ok(())
}

pub fn load_keyword_map(
	fs: &Filesystem,
	config: &Config,
	args: &Cli,
) -> Result<KeywordMap, Error> {
	let keyword_config = fs.load_keywords(args.keywords.as_ref(), config)?;
	Ok(KeywordMap::build(&keyword_config)?)
}

/// Summarizes a keyword map as a per-category count table.
pub fn keyword_summary(keywords: &KeywordMap) -> String {
	let mut table = Table::new(2);
	table.right_align(vec![1]);
	table.add_header(vec!["Category", "Keywords"]);
	table.add_separator();
	for (class, count) in keywords.counts() {
		table.add_row(vec![class.to_string(), count.to_string()]);
	}
	table.add_separator();
	table.add_row(vec!["Total".to_string(), keywords.len().to_string()]);
	table.render()
}

/// Describes how a single description would be classified.
pub fn classify(keywords: &KeywordMap, description: &str) -> String {
	match keywords.search(description) {
		Some(class) => class.to_string(),
		None => "No match".to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::import::keywords::KeywordConfig;
	use crate::parsing::chase::ChaseRecord;
	use crate::session::console::ScriptedConsole;
	use std::fs;
	use tempfile::TempDir;

	const EXPORT: &str = "Transaction Date,Post Date,Description,Category,Type,Amount,Memo
01/05/2024,01/06/2024,SHELL OIL 5744,Gas,Sale,-40.00,
01/02/2024,01/03/2024,STARBUCKS #123,,Sale,-5.75,
01/03/2024,01/04/2024,Payment Thank You-Mobile,,Payment,500.00,
01/04/2024,01/05/2024,CORNER FLORIST,Shopping,Sale,-25.00,
";

	fn keywords() -> KeywordMap {
		KeywordMap::build(
			&KeywordConfig::from_json(
				r#"{"food_drinks_out": ["starbucks"], "gas": ["shell oil"],
				    "skip": ["payment thank you"]}"#,
			)
			.unwrap(),
		)
		.unwrap()
	}

	fn records() -> Vec<ChaseRecord> {
		ChaseRecord::read_all(EXPORT.as_bytes()).unwrap()
	}

	#[test]
	fn test_run_to_sink() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("out.csv").to_string_lossy().into_owned();
		let sink = CsvSink::open(&path).unwrap();
		let mut console = ScriptedConsole::scripted(&["Flowers for mom", "8", "ok"]);

		run(&records(), &keywords(), 3, true, Some(sink), &mut console).unwrap();

		assert_eq!(
			fs::read_to_string(&path).unwrap(),
			"01/02/2024,Food/Drinks Out,STARBUCKS #123,-5.75\n\
			 01/04/2024,Gift Giving,Flowers for mom,-25.00\n\
			 01/05/2024,Gas,SHELL OIL 5744,-40.00\n"
		);
		assert!(console.transcript().contains("Appended 3 transaction(s)."));
	}

	#[test]
	fn test_run_without_edit_prints_statement() {
		let mut console = ScriptedConsole::scripted(&["skip"]);
		run(&records(), &keywords(), 3, false, None, &mut console).unwrap();

		let transcript = console.transcript();
		let statement = transcript
			.split("Full revised statement:")
			.nth(1)
			.unwrap();
		assert!(statement.contains("STARBUCKS #123"));
		assert!(statement.contains("SHELL OIL 5744"));
		assert!(!statement.contains("CORNER FLORIST"));
		assert!(!statement.contains("Payment Thank You"));
	}

	#[test]
	fn test_fatal_selection_writes_nothing() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("out.csv").to_string_lossy().into_owned();
		let sink = CsvSink::open(&path).unwrap();
		let mut console = ScriptedConsole::scripted(&["", "99"]);

		assert!(run(&records(), &keywords(), 1, true, Some(sink), &mut console).is_err());
		assert_eq!(fs::read_to_string(&path).unwrap(), "");
	}

	#[test]
	fn test_keyword_summary() {
		let summary = keyword_summary(&keywords());
		assert!(summary.contains("Food/Drinks Out"));
		assert!(summary.contains("Skip"));
		let last = summary.lines().last().unwrap();
		assert!(last.starts_with("Total"));
		assert!(last.ends_with('3'));
	}

	#[test]
	fn test_classify() {
		let map = keywords();
		assert_eq!(classify(&map, "starbucks reserve"), "Food/Drinks Out");
		assert_eq!(classify(&map, "PAYMENT THANK YOU"), "Skip");
		assert_eq!(classify(&map, "unknown"), "No match");
	}
}
