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
use crate::gl::transaction::Transaction;
use crate::util::date::Date;

/// The chronologically ordered set of transactions produced by
/// reconciliation and refined in the edit loop.
///
/// Every mutating operation re-establishes ascending date order before it
/// returns successfully, and leaves the statement untouched when it fails.
/// Transactions sharing a date keep their relative insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Statement {
	transactions: Vec<Transaction>,
}

impl Statement {
	pub fn new(transactions: Vec<Transaction>) -> Result<Self> {
		let mut statement = Self { transactions };
		statement.sort()?;
		Ok(statement)
	}

	pub fn len(&self) -> usize {
		self.transactions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.transactions.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
		self.transactions.iter()
	}

	pub fn get(&self, index: i64) -> Result<&Transaction> {
		let i = self.check_index(index)?;
		Ok(&self.transactions[i])
	}

	/// Appends a transaction and re-sorts. If any date in the statement,
	/// old or new, is invalid, the transaction is not added.
	pub fn add(&mut self, transaction: Transaction) -> Result<()> {
		self.transactions.push(transaction);
		if let Err(e) = self.sort() {
			self.transactions.pop();
			return Err(e);
		}
		Ok(())
	}

	/// Removes and returns the transaction at the given index. The remaining
	/// transactions are already in order.
	pub fn delete(&mut self, index: i64) -> Result<Transaction> {
		let i = self.check_index(index)?;
		Ok(self.transactions.remove(i))
	}

	/// Swaps in an edited transaction at the given index and re-sorts. On
	/// failure the previous transaction is restored in place.
	pub fn replace(&mut self, index: i64, transaction: Transaction) -> Result<()> {
		let i = self.check_index(index)?;
		let previous = std::mem::replace(&mut self.transactions[i], transaction);
		if let Err(e) = self.sort() {
			self.transactions[i] = previous;
			return Err(e);
		}
		Ok(())
	}

	/// Rows of `[date, category, description, amount]`, no header, for the
	/// output sink.
	pub fn raw_data(&self) -> Vec<Vec<String>> {
		self.transactions.iter().map(Transaction::raw_row).collect()
	}

	/// Stable sort on (year, month, day). Every date is validated before
	/// anything moves, so a failed sort leaves the order as it was.
	fn sort(&mut self) -> Result<()> {
		let keys = self
			.transactions
			.iter()
			.map(Transaction::parsed_date)
			.collect::<Result<Vec<Date>>>()?;

		let mut keyed: Vec<(Date, Transaction)> =
			keys.into_iter().zip(self.transactions.drain(..)).collect();
		keyed.sort_by_key(|(date, _)| *date);
		self.transactions = keyed.into_iter().map(|(_, t)| t).collect();

		Ok(())
	}

	fn check_index(&self, index: i64) -> Result<usize> {
		if index < 0 || index as u64 >= self.transactions.len() as u64 {
			return Err(Error::IndexOutOfRange {
				index,
				len: self.transactions.len(),
			});
		}
		Ok(index as usize)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::gl::category::Category;
	use crate::util::amount::Amount;

	fn txn(date: &str, desc: &str) -> Transaction {
		Transaction::new(
			date,
			Category::OtherWant,
			desc,
			Amount::from_str("-1.00").unwrap(),
		)
	}

	fn descriptions(statement: &Statement) -> Vec<&str> {
		statement.iter().map(|t| t.description.as_str()).collect()
	}

	fn assert_sorted(statement: &Statement) {
		let dates: Vec<Date> =
			statement.iter().map(|t| t.parsed_date().unwrap()).collect();
		for pair in dates.windows(2) {
			assert!(pair[0] <= pair[1], "{} after {}", pair[0], pair[1]);
		}
	}

	#[test]
	fn test_new_sorts_chronologically() {
		let statement = Statement::new(vec![
			txn("01/15/2024", "c"),
			txn("12/01/2023", "a"),
			txn("1/2/2024", "b"),
		])
		.unwrap();
		assert_eq!(descriptions(&statement), vec!["a", "b", "c"]);
	}

	#[test]
	fn test_new_rejects_invalid_date() {
		let result =
			Statement::new(vec![txn("01/15/2024", "a"), txn("2024-01-01", "b")]);
		assert!(matches!(result, Err(Error::InvalidDate { .. })));
	}

	#[test]
	fn test_repeated_add_keeps_order() {
		let mut statement = Statement::default();
		for (date, desc) in [
			("03/05/2024", "march"),
			("11/30/2023", "november"),
			("03/04/2024", "march-early"),
			("01/01/2025", "next-year"),
			("02/29/2024", "leap"),
		] {
			statement.add(txn(date, desc)).unwrap();
			assert_sorted(&statement);
		}
		assert_eq!(
			descriptions(&statement),
			vec!["november", "leap", "march-early", "march", "next-year"]
		);
	}

	#[test]
	fn test_add_is_stable_for_equal_dates() {
		let mut statement = Statement::default();
		statement.add(txn("05/05/2024", "first")).unwrap();
		statement.add(txn("05/06/2024", "later")).unwrap();
		statement.add(txn("5/5/2024", "second")).unwrap();
		statement.add(txn("05/05/2024", "third")).unwrap();
		assert_eq!(
			descriptions(&statement),
			vec!["first", "second", "third", "later"]
		);
	}

	#[test]
	fn test_add_with_invalid_date_leaves_statement_unchanged() {
		let mut statement =
			Statement::new(vec![txn("01/01/2024", "a"), txn("01/02/2024", "b")])
				.unwrap();
		let before = statement.clone();
		let result = statement.add(txn("13/40/2024", "bad"));
		assert!(matches!(result, Err(Error::InvalidDate { .. })));
		assert_eq!(statement, before);
	}

	#[test]
	fn test_delete_out_of_range() {
		let mut statement =
			Statement::new(vec![txn("01/01/2024", "a"), txn("01/02/2024", "b")])
				.unwrap();
		let before = statement.clone();

		assert!(matches!(
			statement.delete(-1),
			Err(Error::IndexOutOfRange { index: -1, len: 2 })
		));
		assert!(matches!(
			statement.delete(2),
			Err(Error::IndexOutOfRange { index: 2, len: 2 })
		));
		assert_eq!(statement, before);
	}

	#[test]
	fn test_delete_preserves_order() {
		let mut statement = Statement::new(vec![
			txn("01/01/2024", "a"),
			txn("01/02/2024", "b"),
			txn("01/03/2024", "c"),
		])
		.unwrap();
		let removed = statement.delete(1).unwrap();
		assert_eq!(removed.description, "b");
		assert_eq!(descriptions(&statement), vec!["a", "c"]);
	}

	#[test]
	fn test_replace_resorts() {
		let mut statement = Statement::new(vec![
			txn("01/01/2024", "a"),
			txn("01/02/2024", "b"),
			txn("01/03/2024", "c"),
		])
		.unwrap();
		statement.replace(0, txn("02/01/2024", "a-moved")).unwrap();
		assert_eq!(descriptions(&statement), vec!["b", "c", "a-moved"]);
	}

	#[test]
	fn test_replace_with_invalid_date_restores_previous() {
		let mut statement =
			Statement::new(vec![txn("01/01/2024", "a"), txn("01/02/2024", "b")])
				.unwrap();
		let before = statement.clone();
		assert!(statement.replace(1, txn("00/02/2024", "bad")).is_err());
		assert_eq!(statement, before);
	}

	#[test]
	fn test_get_bounds() {
		let statement = Statement::new(vec![txn("01/01/2024", "a")]).unwrap();
		assert_eq!(statement.get(0).unwrap().description, "a");
		assert!(statement.get(1).is_err());
		assert!(statement.get(-1).is_err());
	}

	#[test]
	fn test_raw_data() {
		let statement = Statement::new(vec![Transaction::new(
			"01/02/2024",
			Category::FoodDrinksOut,
			"STARBUCKS #123",
			Amount::from_str("-5.75").unwrap(),
		)])
		.unwrap();
		assert_eq!(
			statement.raw_data(),
			vec![vec![
				"01/02/2024".to_string(),
				"Food/Drinks Out".to_string(),
				"STARBUCKS #123".to_string(),
				"-5.75".to_string(),
			]]
		);
	}
}
