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
use crate::gl::category::Category;
use crate::gl::transaction::Transaction;
use crate::util::amount::Amount;

/// A bank-specific export row. Implementors know their own column layout and
/// how to reduce themselves to the canonical shape.
pub trait BankRecord {
	/// Column names, used when presenting a raw row to the user.
	fn headers() -> &'static [&'static str];

	/// Field values in the same order as `headers`.
	fn fields(&self) -> Vec<String>;

	/// Pure conversion to the canonical shape, category not yet decided.
	fn normalize(&self) -> Draft;
}

/// A canonical transaction awaiting its category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draft {
	pub date: String,
	pub description: String,
	pub amount: Amount,
}

impl Draft {
	pub fn accept(self, category: Category) -> Transaction {
		Transaction {
			date: self.date,
			category,
			description: self.description,
			amount: self.amount,
		}
	}
}
