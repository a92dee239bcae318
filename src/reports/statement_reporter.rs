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
use crate::gl::statement::Statement;
use crate::import::normalizer::BankRecord;
use crate::reports::table::Table;

pub const STATEMENT_COLUMNS: [&str; 5] =
	["Index", "Date", "Category", "Description", "Amount"];

/// Renders a statement as an indexed table. The index column is what the
/// edit loop's `delete` and `edit` commands refer to.
pub struct StatementReporter<'a> {
	statement: &'a Statement,
}

impl<'a> StatementReporter<'a> {
	pub fn new(statement: &'a Statement) -> Self {
		Self { statement }
	}

	pub fn render(&self) -> String {
		let mut table = Table::new(STATEMENT_COLUMNS.len());
		table.right_align(vec![0, 4]);
		table.add_header(STATEMENT_COLUMNS.to_vec());
		table.add_separator();

		for (i, t) in self.statement.iter().enumerate() {
			table.add_row(vec![
				i.to_string(),
				t.date.clone(),
				t.category.to_string(),
				t.description.clone(),
				t.amount.to_string(),
			]);
		}

		table.render()
	}
}

/// Renders one raw bank row under its own column names, as shown when a
/// transaction needs a human decision.
pub fn render_record<R: BankRecord>(record: &R) -> String {
	let headers = R::headers();
	let mut table = Table::new(headers.len());
	table.add_header(headers.to_vec());
	table.add_row(record.fields());
	table.render()
}
