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
use crate::import::normalizer::{BankRecord, Draft};
use crate::util::amount::Amount;
use csv::ReaderBuilder;
use std::io::Read;

/// Column names of the Chase credit card export, in order.
pub const CHASE_COLUMNS: [&str; 7] = [
	"Transaction Date",
	"Post Date",
	"Description",
	"Category",
	"Type",
	"Amount",
	"Memo",
];

/// One row of a Chase credit card export.
#[derive(Clone, Debug, PartialEq)]
pub struct ChaseRecord {
	pub transaction_date: String,
	pub post_date: String,
	pub description: String,
	pub category: String,
	pub item_type: String,
	pub amount: Amount,
	pub memo: String,
}

impl ChaseRecord {
	/// Reads a whole export. The header must match exactly and every row
	/// must be complete; any problem rejects the entire file.
	pub fn read_all<R: Read>(input: R) -> Result<Vec<ChaseRecord>> {
		let mut rdr = ReaderBuilder::new()
			.has_headers(false)
			.flexible(true)
			.from_reader(input);

		let mut rows = rdr.records();
		let header = match rows.next() {
			Some(row) => row?,
			None => return Err(Error::Schema("empty CSV file".into())),
		};
		let header: Vec<&str> = header.iter().collect();
		validate_header(&header)?;

		let mut records = Vec::new();
		for (i, row) in rows.enumerate() {
			let row = row?;
			let fields: Vec<&str> = row.iter().collect();
			// +2 for the header row and 1-based numbering
			records.push(ChaseRecord::from_row(&fields).map_err(|e| {
				Error::Schema(format!("row {}: {}", i + 2, e))
			})?);
		}

		Ok(records)
	}

	fn from_row(row: &[&str]) -> std::result::Result<Self, String> {
		if row.len() != CHASE_COLUMNS.len() {
			return Err(format!(
				"expected {} columns but got {}",
				CHASE_COLUMNS.len(),
				row.len()
			));
		}
		let amount = Amount::from_str(row[5])
			.map_err(|_| format!("failed to parse amount {:?}", row[5]))?;

		Ok(ChaseRecord {
			transaction_date: row[0].to_string(),
			post_date: row[1].to_string(),
			description: row[2].to_string(),
			category: row[3].to_string(),
			item_type: row[4].to_string(),
			amount,
			memo: row[6].to_string(),
		})
	}
}

fn validate_header(header: &[&str]) -> Result<()> {
	if header.len() != CHASE_COLUMNS.len() {
		return Err(Error::Schema(format!(
			"expected {} columns in header row but got {}",
			CHASE_COLUMNS.len(),
			header.len()
		)));
	}
	for (i, (got, want)) in header.iter().zip(CHASE_COLUMNS).enumerate() {
		if *got != want {
			return Err(Error::Schema(format!(
				"expected column {} to be named {} but it is named {}",
				i + 1,
				want,
				got
			)));
		}
	}
	Ok(())
}

impl BankRecord for ChaseRecord {
	fn headers() -> &'static [&'static str] {
		&CHASE_COLUMNS
	}

	fn fields(&self) -> Vec<String> {
		vec![
			self.transaction_date.clone(),
			self.post_date.clone(),
			self.description.clone(),
			self.category.clone(),
			self.item_type.clone(),
			self.amount.to_string(),
			self.memo.clone(),
		]
	}

	fn normalize(&self) -> Draft {
		Draft {
			date: self.transaction_date.clone(),
			description: self.description.clone(),
			amount: self.amount,
		}
	}
}
