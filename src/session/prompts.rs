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
use crate::gl::category::Category;
use crate::session::console::Terminal;
use crate::util::amount::Amount;
use crate::util::date::Date;
use tracing::warn;

pub const SKIP_COMMAND: &str = "skip";

pub const DEFAULT_CATEGORY_ATTEMPTS: u32 = 3;

/// The user's answer to the description prompt for an unmatched transaction.
#[derive(Debug, PartialEq, Eq)]
pub enum DescriptionChoice {
	Keep,
	Override(String),
	Skip,
}

pub fn description_or_skip(term: &mut dyn Terminal) -> Result<DescriptionChoice> {
	term.say(
		"Please provide a description of this transaction. Press Enter to \
		 accept the default description. Submit 'skip' to not include the \
		 transaction in the final statement.",
	)?;

	let input = term.read_line()?;
	Ok(match input.as_str() {
		SKIP_COMMAND => DescriptionChoice::Skip,
		"" => DescriptionChoice::Keep,
		_ => DescriptionChoice::Override(input),
	})
}

/// Shows the category menu and reads a 1-indexed selection. Malformed or
/// out-of-range answers are re-prompted; once `attempts` answers have been
/// rejected the selection fails for good.
pub fn category(term: &mut dyn Terminal, attempts: u32) -> Result<Category> {
	let attempts = attempts.max(1);

	term.say(
		"Please enter the enumeration of this transaction's category. \
		 Options are:",
	)?;
	term.say(&Category::menu())?;

	let mut last = String::new();
	for attempt in 1..=attempts {
		let input = term.read_line()?;
		last = input.trim().to_string();

		if let Some(category) =
			last.parse::<i64>().ok().and_then(Category::from_selection)
		{
			term.say(&format!(
				"Received Category: {}. {}",
				category.selection(),
				category
			))?;
			return Ok(category);
		}

		warn!(input = %last, attempt, "rejected category selection");
		if attempt < attempts {
			term.say(&format!(
				"Received invalid category enumeration {}. Please enter a \
				 number between 1 and {}.",
				last,
				Category::ALL.len()
			))?;
		}
	}

	Err(Error::InvalidCategory {
		input: last,
		attempts,
	})
}

/// Date for a new transaction. An empty answer means today.
pub fn new_date(term: &mut dyn Terminal) -> Result<String> {
	term.say(
		"Please enter the date of the transaction with the format \
		 MM/DD/YYYY. Press Enter to use today's date.",
	)?;

	let input = term.read_line()?;
	let input = input.trim();
	if input.is_empty() {
		return Ok(Date::today().to_string());
	}
	Date::from_str(input)?;
	Ok(input.to_string())
}

/// Optional replacement date; `None` keeps the current one.
pub fn date_override(term: &mut dyn Terminal, current: &str) -> Result<Option<String>> {
	term.say(&format!(
		"Please enter a new date with the format MM/DD/YYYY. Press Enter to \
		 keep {}.",
		current
	))?;

	let input = term.read_line()?;
	let input = input.trim();
	if input.is_empty() {
		return Ok(None);
	}
	Date::from_str(input)?;
	Ok(Some(input.to_string()))
}

pub fn required_description(term: &mut dyn Terminal) -> Result<String> {
	term.say("Please enter a description of the transaction.")?;

	let input = term.read_line()?;
	if input.trim().is_empty() {
		return Err(Error::EmptyDescription);
	}
	Ok(input)
}

/// Optional replacement description; `None` keeps the current one.
pub fn description_override(
	term: &mut dyn Terminal,
	current: &str,
) -> Result<Option<String>> {
	term.say(&format!(
		"Please enter a new description. Press Enter to keep \"{}\".",
		current
	))?;

	let input = term.read_line()?;
	if input.is_empty() {
		return Ok(None);
	}
	Ok(Some(input))
}

pub fn amount(term: &mut dyn Terminal) -> Result<Amount> {
	term.say("Please enter the amount of the transaction.")?;
	Amount::from_str(&term.read_line()?)
}
