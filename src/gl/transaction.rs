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
use crate::gl::category::Category;
use crate::util::amount::Amount;
use crate::util::date::Date;

/// A canonical, categorized statement line.
///
/// The date is held as the text the bank (or the user) supplied. It is
/// validated whenever the statement is sorted, which is the gate every
/// mutation of a statement passes through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
	pub date: String,
	pub category: Category,
	pub description: String,
	pub amount: Amount,
}

impl Transaction {
	pub fn new(
		date: &str,
		category: Category,
		description: &str,
		amount: Amount,
	) -> Self {
		Self {
			date: date.to_string(),
			category,
			description: description.to_string(),
			amount,
		}
	}

	pub fn parsed_date(&self) -> Result<Date> {
		Date::from_str(&self.date)
	}

	/// Row shape expected by the output sink.
	pub fn raw_row(&self) -> Vec<String> {
		vec![
			self.date.clone(),
			self.category.label().to_string(),
			self.description.clone(),
			self.amount.to_string(),
		]
	}
}
