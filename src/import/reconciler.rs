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
use crate::error::Result;
use crate::gl::category::Classification;
use crate::gl::statement::Statement;
use crate::gl::transaction::Transaction;
use crate::import::keywords::KeywordMap;
use crate::import::normalizer::{BankRecord, Draft};
use crate::reports::statement_reporter::render_record;
use crate::session::console::Terminal;
use crate::session::prompts::{self, DescriptionChoice};
use crate::util::date::Date;
use tracing::{debug, info};

/// Final state of one transaction's trip through reconciliation.
#[derive(Debug, PartialEq)]
pub enum Resolution {
	Accepted(Transaction),
	Skipped,
}

/// Decides, row by row, whether a bank transaction enters the statement.
///
/// Rows whose description matches a keyword are accepted (or dropped, for a
/// skip keyword) without interaction. Anything else is shown to the user, who
/// may override the description, skip the row, or pick a category.
pub struct Reconciler<'a> {
	keywords: &'a KeywordMap,
	category_attempts: u32,
}

impl<'a> Reconciler<'a> {
	pub fn new(keywords: &'a KeywordMap, category_attempts: u32) -> Self {
		Self {
			keywords,
			category_attempts,
		}
	}

	/// Resolves every record in input order and assembles the statement.
	/// Any fatal error abandons the whole run. Bank dates are all checked
	/// before the first prompt.
	pub fn reconcile<R: BankRecord>(
		&self,
		records: &[R],
		term: &mut dyn Terminal,
	) -> Result<Statement> {
		for record in records {
			Date::from_str(&record.normalize().date)?;
		}

		let mut accepted = Vec::new();
		let mut skipped = 0usize;

		for record in records {
			match self.resolve(record, term)? {
				Resolution::Accepted(t) => accepted.push(t),
				Resolution::Skipped => skipped += 1,
			}
		}

		info!(accepted = accepted.len(), skipped, "reconciliation finished");
		Statement::new(accepted)
	}

	pub fn resolve<R: BankRecord>(
		&self,
		record: &R,
		term: &mut dyn Terminal,
	) -> Result<Resolution> {
		let draft = record.normalize();
		Date::from_str(&draft.date)?;

		match self.keywords.search(&draft.description) {
			Some(Classification::Budget(category)) => {
				debug!(
					date = %draft.date,
					description = %draft.description,
					%category,
					"adding transaction to statement"
				);
				Ok(Resolution::Accepted(draft.accept(category)))
			},
			Some(Classification::Skip) => {
				info!(
					fields = ?record.fields(),
					"skipping transaction: description matched a skip keyword"
				);
				term.say(&format!(
					"Skipping transaction \"{}\" based on discovery of a skip \
					 keyword in the description.\n",
					draft.description
				))?;
				Ok(Resolution::Skipped)
			},
			None => self.prompt(record, draft, term),
		}
	}

	fn prompt<R: BankRecord>(
		&self,
		record: &R,
		mut draft: Draft,
		term: &mut dyn Terminal,
	) -> Result<Resolution> {
		term.say(&render_record(record))?;

		match prompts::description_or_skip(term)? {
			DescriptionChoice::Skip => {
				info!(fields = ?record.fields(), "skipping transaction at user request");
				term.say("This transaction will be skipped.\n")?;
				return Ok(Resolution::Skipped);
			},
			DescriptionChoice::Override(description) => {
				draft.description = description
			},
			DescriptionChoice::Keep => {},
		}
		term.say(&format!("Received description: {}\n", draft.description))?;

		let category = prompts::category(term, self.category_attempts)?;
		debug!(
			date = %draft.date,
			description = %draft.description,
			%category,
			"adding transaction to statement"
		);
		Ok(Resolution::Accepted(draft.accept(category)))
	}
}
