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
use crate::error::{Error, Result};
use crate::gl::statement::Statement;
use crate::gl::transaction::Transaction;
use crate::reports::statement_reporter::StatementReporter;
use crate::session::console::Terminal;
use crate::session::prompts;
use regex::Regex;
use tracing::{info, warn};

const ACTION_PROMPT: &str = "Enter 'ok' to finish, 'add' to add a transaction, \
	'delete <index>' to delete one, or 'edit <index>' to edit one.";

/// One command line typed into the edit loop.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
	Finish,
	Add,
	Delete(String),
	Edit(String),
	Invalid(String),
}

pub struct ActionParser {
	action_regex: Regex,
}

impl ActionParser {
	pub fn new() -> Self {
		let re = Regex::new(r"^(ok|add|delete|edit)(?:\s+(\S+))?$").unwrap();
		Self { action_regex: re }
	}

	pub fn parse(&self, line: &str) -> Action {
		let line = line.trim();
		let Some(caps) = self.action_regex.captures(line) else {
			return Action::Invalid(line.to_string());
		};

		let arg = caps.get(2).map(|m| m.as_str().to_string());
		match (&caps[1], arg) {
			("ok", None) => Action::Finish,
			("add", None) => Action::Add,
			("delete", Some(index)) => Action::Delete(index),
			("edit", Some(index)) => Action::Edit(index),
			_ => Action::Invalid(line.to_string()),
		}
	}
}

fn parse_index(index: &str) -> Result<i64> {
	index
		.parse::<i64>()
		.map_err(|_| Error::InvalidIndex(index.to_string()))
}

/// Interactive refinement of a reconciled statement. Validation failures are
/// reported and the loop carries on; anything fatal (a closed input stream,
/// an exhausted category selection) ends the session.
pub struct Editor {
	parser: ActionParser,
	category_attempts: u32,
}

impl Editor {
	pub fn new(category_attempts: u32) -> Self {
		Self {
			parser: ActionParser::new(),
			category_attempts,
		}
	}

	pub fn run(&self, statement: &mut Statement, term: &mut dyn Terminal) -> Result<()> {
		loop {
			term.say(&StatementReporter::new(statement).render())?;
			term.say(ACTION_PROMPT)?;

			let result = match self.parser.parse(&term.read_line()?) {
				Action::Finish => return Ok(()),
				Action::Add => self.add(statement, term),
				Action::Delete(index) => parse_index(&index)
					.and_then(|i| statement.delete(i))
					.and_then(|t| {
						info!(description = %t.description, "deleted transaction");
						term.say(&format!("Deleted \"{}\".\n", t.description))
					}),
				Action::Edit(index) => {
					parse_index(&index).and_then(|i| self.edit(statement, i, term))
				},
				Action::Invalid(line) => {
					term.say(&format!("'{}' is not a valid action.\n", line))?;
					continue;
				},
			};

			match result {
				Ok(()) => {},
				Err(e) if e.is_recoverable() => {
					warn!(error = %e, "rejected action");
					term.say(&format!("Error: {}\n", e))?;
				},
				Err(e) => return Err(e),
			}
		}
	}

	/// Collects a new transaction field by field and adds it.
	pub fn add(&self, statement: &mut Statement, term: &mut dyn Terminal) -> Result<()> {
		let date = prompts::new_date(term)?;
		let category = prompts::category(term, self.category_attempts)?;
		let description = prompts::required_description(term)?;
		let amount = prompts::amount(term)?;

		statement.add(Transaction::new(&date, category, &description, amount))?;
		info!("added transaction");
		Ok(())
	}

	/// Edits the transaction at `index`. Changes are staged on a copy, so
	/// the statement only changes once every field has been accepted.
	pub fn edit(
		&self,
		statement: &mut Statement,
		index: i64,
		term: &mut dyn Terminal,
	) -> Result<()> {
		let mut edited = statement.get(index)?.clone();
		term.say(&format!(
			"Editing transaction {}: {} | {} | {} | {}",
			index, edited.date, edited.category, edited.description, edited.amount
		))?;

		if let Some(date) = prompts::date_override(term, &edited.date)? {
			edited.date = date;
		}
		edited.category = prompts::category(term, self.category_attempts)?;
		if let Some(description) =
			prompts::description_override(term, &edited.description)?
		{
			edited.description = description;
		}
		edited.amount = prompts::amount(term)?;

		statement.replace(index, edited)?;
		info!(index, "edited transaction");
		Ok(())
	}
}
