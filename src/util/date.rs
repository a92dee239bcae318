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
use chrono::{Datelike, Local};
use std::cmp::Ordering;
use std::fmt;

/// A statement date in the bank's MM/DD/YYYY convention. Only the numeric
/// ranges are checked (month 1-12, day 1-31, positive year); calendar
/// validity such as February 30th is deliberately not enforced.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Date {
	year: u32,
	month: u8,
	day: u8,
}

impl Date {
	/// Constructor to parse a string in the "MM/DD/YYYY" format
	pub fn from_str(date_str: &str) -> Result<Date> {
		let invalid = |reason: String| Error::InvalidDate {
			date: date_str.to_string(),
			reason,
		};

		let parts: Vec<&str> = date_str.split('/').collect();
		if parts.len() != 3 {
			return Err(invalid(format!(
				"expected 2 slashes but got {}",
				parts.len() - 1
			)));
		}

		let mut nums = [0i64; 3];
		for (i, part) in parts.iter().enumerate() {
			nums[i] = part.parse::<i64>().map_err(|e| {
				invalid(format!(
					"failed to parse number with index {} as an integer: {}",
					i, e
				))
			})?;
		}
		let [month, day, year] = nums;

		if !(1..=12).contains(&month) {
			return Err(invalid(format!(
				"received {} for month but it must be between 1 and 12",
				month
			)));
		}
		if !(1..=31).contains(&day) {
			return Err(invalid(format!(
				"received {} for day but it must be between 1 and 31",
				day
			)));
		}
		if year < 1 {
			return Err(invalid(format!(
				"received {} for year but it must be positive",
				year
			)));
		}
		if year > u32::MAX as i64 {
			return Err(invalid(format!(
				"received {} for year but it must be at most {}",
				year,
				u32::MAX
			)));
		}

		Ok(Date {
			year: year as u32,
			month: month as u8,
			day: day as u8,
		})
	}

	pub fn today() -> Date {
		let now = Local::now().date_naive();
		Date {
			year: now.year().max(1) as u32,
			month: now.month() as u8,
			day: now.day() as u8,
		}
	}
}

impl PartialOrd for Date {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Date {
	fn cmp(&self, other: &Self) -> Ordering {
		(self.year, self.month, self.day).cmp(&(
			other.year,
			other.month,
			other.day,
		))
	}
}

impl fmt::Display for Date {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:02}/{:02}/{:04}", self.month, self.day, self.year)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_valid_date() {
		let date = Date::from_str("01/02/2024").unwrap();
		assert_eq!((date.month, date.day, date.year), (1, 2, 2024));
	}

	#[test]
	fn test_parse_without_leading_zeroes() {
		let date = Date::from_str("1/2/2024").unwrap();
		assert_eq!(date.to_string(), "01/02/2024");
	}

	#[test]
	fn test_no_calendar_validation() {
		assert!(Date::from_str("02/30/2023").is_ok());
		assert!(Date::from_str("04/31/2023").is_ok());
	}

	#[test]
	fn test_month_out_of_range() {
		assert!(Date::from_str("13/01/2024").is_err());
		assert!(Date::from_str("00/01/2024").is_err());
	}

	#[test]
	fn test_day_out_of_range() {
		assert!(Date::from_str("12/32/2024").is_err());
		assert!(Date::from_str("12/0/2024").is_err());
	}

	#[test]
	fn test_year_must_be_positive() {
		assert!(Date::from_str("12/01/0").is_err());
		assert!(Date::from_str("12/01/-5").is_err());
		assert!(Date::from_str("12/01/1").is_ok());
	}

	#[test]
	fn test_year_too_large() {
		match Date::from_str("12/01/99999999999") {
			Err(Error::InvalidDate { reason, .. }) => {
				assert!(reason.contains("at most 4294967295"), "{}", reason);
			},
			other => panic!("unexpected result: {:?}", other),
		}
	}

	#[test]
	fn test_wrong_shape() {
		assert!(Date::from_str("2024-01-02").is_err());
		assert!(Date::from_str("01/02").is_err());
		assert!(Date::from_str("01/02/2024/5").is_err());
		assert!(Date::from_str("aa/02/2024").is_err());
		assert!(Date::from_str("").is_err());
	}

	#[test]
	fn test_invalid_date_error_carries_input() {
		match Date::from_str("13/40/2024") {
			Err(Error::InvalidDate { date, .. }) => assert_eq!(date, "13/40/2024"),
			other => panic!("unexpected result: {:?}", other),
		}
	}

	#[test]
	fn test_ordering_is_chronological_not_lexical() {
		// lexically "12/01/2023" > "01/15/2024"
		let earlier = Date::from_str("12/01/2023").unwrap();
		let later = Date::from_str("01/15/2024").unwrap();
		assert!(earlier < later);

		let a = Date::from_str("02/09/2024").unwrap();
		let b = Date::from_str("02/10/2024").unwrap();
		assert!(a < b);
	}

	#[test]
	fn test_today_round_trips() {
		let today = Date::today();
		assert_eq!(Date::from_str(&today.to_string()).unwrap(), today);
	}
}
