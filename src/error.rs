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

use thiserror::Error;

/// Errors raised by the classification and statement core.
#[derive(Error, Debug)]
pub enum Error {
	#[error("found duplicate keyword {keyword:?} under both {first} and {second}")]
	DuplicateKeyword {
		keyword: String,
		first: String,
		second: String,
	},

	#[error("empty keyword configured under {0}")]
	EmptyKeyword(String),

	#[error("invalid date {date:?}: {reason}")]
	InvalidDate { date: String, reason: String },

	#[error("index {index} is out of range for a statement of {len} transactions")]
	IndexOutOfRange { index: i64, len: usize },

	#[error("expected an integer index but got {0:?}")]
	InvalidIndex(String),

	#[error("failed to parse amount {0:?}")]
	InvalidAmount(String),

	#[error("received empty description")]
	EmptyDescription,

	#[error("received invalid category enumeration {input:?} after {attempts} attempt(s)")]
	InvalidCategory { input: String, attempts: u32 },

	#[error("input closed while waiting for a response")]
	EndOfInput,

	#[error("statement format error: {0}")]
	Schema(String),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("CSV error: {0}")]
	Csv(#[from] csv::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

impl Error {
	/// Validation failures that leave state untouched and can be retried by
	/// issuing a new command. Everything else aborts the run.
	pub fn is_recoverable(&self) -> bool {
		matches!(
			self,
			Error::InvalidDate { .. }
				| Error::IndexOutOfRange { .. }
				| Error::InvalidIndex(_)
				| Error::InvalidAmount(_)
				| Error::EmptyDescription
		)
	}
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_validation_errors_are_recoverable() {
		assert!(Error::EmptyDescription.is_recoverable());
		assert!(Error::IndexOutOfRange { index: -1, len: 0 }.is_recoverable());
		assert!(Error::InvalidAmount("x".into()).is_recoverable());
	}

	#[test]
	fn test_selection_and_input_errors_are_fatal() {
		let err = Error::InvalidCategory {
			input: "12".into(),
			attempts: 3,
		};
		assert!(!err.is_recoverable());
		assert!(!Error::EndOfInput.is_recoverable());
		assert!(!Error::Schema("bad header".into()).is_recoverable());
	}
}
