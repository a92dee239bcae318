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
use std::fmt;

/// The fixed set of budget categories a transaction can be filed under. The
/// discriminant order is the order of the interactive selection menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
	Rent,
	Utilities,
	GroceriesToiletries,
	FoodDrinksOut,
	Gas,
	OtherNeed,
	OtherWant,
	GiftGiving,
	Donations,
}

impl Category {
	pub const ALL: [Category; 9] = [
		Category::Rent,
		Category::Utilities,
		Category::GroceriesToiletries,
		Category::FoodDrinksOut,
		Category::Gas,
		Category::OtherNeed,
		Category::OtherWant,
		Category::GiftGiving,
		Category::Donations,
	];

	/// Human-facing name, as written to the statement.
	pub fn label(&self) -> &'static str {
		match self {
			Category::Rent => "Rent",
			Category::Utilities => "Utilities",
			Category::GroceriesToiletries => "Groceries/Toiletries",
			Category::FoodDrinksOut => "Food/Drinks Out",
			Category::Gas => "Gas",
			Category::OtherNeed => "Other (Need)",
			Category::OtherWant => "Other (Want)",
			Category::GiftGiving => "Gift Giving",
			Category::Donations => "Donations",
		}
	}

	/// Key used for this category in the keyword configuration file.
	pub fn config_key(&self) -> &'static str {
		match self {
			Category::Rent => "rent",
			Category::Utilities => "utilities",
			Category::GroceriesToiletries => "groceries_toiletries",
			Category::FoodDrinksOut => "food_drinks_out",
			Category::Gas => "gas",
			Category::OtherNeed => "other_need",
			Category::OtherWant => "other_want",
			Category::GiftGiving => "gift_giving",
			Category::Donations => "donations",
		}
	}

	/// Maps a 1-indexed menu selection back to a category.
	pub fn from_selection(selection: i64) -> Option<Category> {
		if selection < 1 {
			return None;
		}
		Category::ALL.get(selection as usize - 1).copied()
	}

	pub fn selection(&self) -> usize {
		*self as usize + 1
	}

	/// The one-line menu shown whenever a category must be chosen.
	pub fn menu() -> String {
		Category::ALL
			.iter()
			.map(|c| format!("{}. {}", c.selection(), c.label()))
			.collect::<Vec<_>>()
			.join(" ")
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.label())
	}
}

/// Outcome of a keyword lookup. Skip is never stored on a transaction; it
/// only tells the reconciler to drop the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
	Budget(Category),
	Skip,
}

impl Classification {
	pub const SKIP_KEY: &'static str = "skip";

	pub fn config_key(&self) -> &'static str {
		match self {
			Classification::Budget(c) => c.config_key(),
			Classification::Skip => Classification::SKIP_KEY,
		}
	}
}

impl fmt::Display for Classification {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Classification::Budget(c) => write!(f, "{}", c),
			Classification::Skip => write!(f, "Skip"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_selection_bounds() {
		assert_eq!(Category::from_selection(1), Some(Category::Rent));
		assert_eq!(Category::from_selection(9), Some(Category::Donations));
		assert_eq!(Category::from_selection(0), None);
		assert_eq!(Category::from_selection(10), None);
		assert_eq!(Category::from_selection(-3), None);
	}

	#[test]
	fn test_selection_round_trip() {
		for c in Category::ALL {
			assert_eq!(Category::from_selection(c.selection() as i64), Some(c));
		}
	}

	#[test]
	fn test_menu() {
		assert_eq!(
			Category::menu(),
			"1. Rent 2. Utilities 3. Groceries/Toiletries 4. Food/Drinks Out \
			 5. Gas 6. Other (Need) 7. Other (Want) 8. Gift Giving 9. Donations"
		);
	}

	#[test]
	fn test_labels() {
		assert_eq!(Category::FoodDrinksOut.to_string(), "Food/Drinks Out");
		assert_eq!(Classification::Skip.to_string(), "Skip");
		assert_eq!(Classification::Skip.config_key(), "skip");
	}
}
