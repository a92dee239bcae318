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
use crate::gl::category::{Category, Classification};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Keyword lists as loaded from the JSON configuration, one list per
/// category plus the reserved skip list. Missing keys are empty lists;
/// unknown keys are rejected so that a misspelled category is not silently
/// ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeywordConfig {
	#[serde(default)]
	pub rent: Vec<String>,
	#[serde(default)]
	pub utilities: Vec<String>,
	#[serde(default)]
	pub groceries_toiletries: Vec<String>,
	#[serde(default)]
	pub food_drinks_out: Vec<String>,
	#[serde(default)]
	pub gas: Vec<String>,
	#[serde(default)]
	pub other_need: Vec<String>,
	#[serde(default)]
	pub other_want: Vec<String>,
	#[serde(default)]
	pub gift_giving: Vec<String>,
	#[serde(default)]
	pub donations: Vec<String>,
	#[serde(default)]
	pub skip: Vec<String>,
}

impl KeywordConfig {
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Every keyword list paired with the classification it maps to, in
	/// menu order with skip last.
	fn lists(&self) -> [(Classification, &Vec<String>); 10] {
		use Category::*;
		[
			(Classification::Budget(Rent), &self.rent),
			(Classification::Budget(Utilities), &self.utilities),
			(
				Classification::Budget(GroceriesToiletries),
				&self.groceries_toiletries,
			),
			(Classification::Budget(FoodDrinksOut), &self.food_drinks_out),
			(Classification::Budget(Gas), &self.gas),
			(Classification::Budget(OtherNeed), &self.other_need),
			(Classification::Budget(OtherWant), &self.other_want),
			(Classification::Budget(GiftGiving), &self.gift_giving),
			(Classification::Budget(Donations), &self.donations),
			(Classification::Skip, &self.skip),
		]
	}
}

/// Immutable lookup from description substrings to classifications.
///
/// Matching is a case-insensitive substring test. A keyword may belong to at
/// most one classification; construction fails otherwise. When a description
/// contains keywords from more than one classification, the keyword that
/// sorts first wins.
#[derive(Debug, Default)]
pub struct KeywordMap {
	lookup: BTreeMap<String, Classification>, // lowercase keyword -> class
}

impl KeywordMap {
	pub fn build(config: &KeywordConfig) -> Result<Self> {
		let mut lookup: BTreeMap<String, Classification> = BTreeMap::new();

		for (class, words) in config.lists() {
			for word in words {
				if word.trim().is_empty() {
					return Err(Error::EmptyKeyword(class.config_key().into()));
				}
				// surrounding spaces are part of the substring
				let keyword = word.to_lowercase();

				match lookup.get(&keyword) {
					Some(existing) if *existing != class => {
						return Err(Error::DuplicateKeyword {
							keyword,
							first: existing.config_key().into(),
							second: class.config_key().into(),
						});
					},
					Some(_) => {}, // repeated within one list
					None => {
						lookup.insert(keyword, class);
					},
				}
			}
		}

		Ok(Self { lookup })
	}

	pub fn search(&self, description: &str) -> Option<Classification> {
		let haystack = description.to_lowercase();
		self.lookup
			.iter()
			.find(|(keyword, _)| haystack.contains(keyword.as_str()))
			.map(|(_, class)| *class)
	}

	pub fn len(&self) -> usize {
		self.lookup.len()
	}

	/// Number of keywords per classification, in menu order.
	pub fn counts(&self) -> Vec<(Classification, usize)> {
		let mut classes: Vec<Classification> =
			Category::ALL.iter().map(|c| Classification::Budget(*c)).collect();
		classes.push(Classification::Skip);

		classes
			.into_iter()
			.map(|class| {
				let n = self.lookup.values().filter(|c| **c == class).count();
				(class, n)
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn build(json: &str) -> Result<KeywordMap> {
		KeywordMap::build(&KeywordConfig::from_json(json)?)
	}

	#[test]
	fn test_search_is_case_insensitive_substring() {
		let map = build(r#"{"food_drinks_out": ["starbucks"]}"#).unwrap();
		for desc in [
			"prefix starbucks suffix",
			"PREFIX STARBUCKS SUFFIX",
			"Prefix StarBucks Suffix",
			"STARBUCKS #123",
		] {
			assert_eq!(
				map.search(desc),
				Some(Classification::Budget(Category::FoodDrinksOut)),
				"{}",
				desc
			);
		}
	}

	#[test]
	fn test_configured_keyword_casing_is_ignored() {
		let map = build(r#"{"gas": ["Shell Oil"]}"#).unwrap();
		assert_eq!(
			map.search("SHELL OIL 5744"),
			Some(Classification::Budget(Category::Gas))
		);
	}

	#[test]
	fn test_no_match() {
		let map = build(r#"{"rent": ["landlord"]}"#).unwrap();
		assert_eq!(map.search("COFFEE SHOP"), None);
	}

	#[test]
	fn test_skip_keyword() {
		let map = build(r#"{"skip": ["payment thank you"]}"#).unwrap();
		assert_eq!(
			map.search("Payment Thank You-Mobile"),
			Some(Classification::Skip)
		);
	}

	#[test]
	fn test_duplicate_across_categories_fails() {
		let result = build(r#"{"rent": ["foo"], "gas": ["foo"]}"#);
		assert!(matches!(result, Err(Error::DuplicateKeyword { .. })));
	}

	#[test]
	fn test_duplicate_with_skip_fails() {
		let result = build(r#"{"donations": ["venmo"], "skip": ["Venmo"]}"#);
		match result {
			Err(Error::DuplicateKeyword {
				keyword,
				first,
				second,
			}) => {
				assert_eq!(keyword, "venmo");
				assert_eq!(first, "donations");
				assert_eq!(second, "skip");
			},
			other => panic!("unexpected result: {:?}", other),
		}
	}

	#[test]
	fn test_repeat_within_category_is_collapsed() {
		let map = build(r#"{"gas": ["chevron", "CHEVRON"]}"#).unwrap();
		assert_eq!(map.len(), 1);
	}

	#[test]
	fn test_keyword_spaces_are_kept() {
		let map = build(r#"{"gas": ["shell "]}"#).unwrap();
		assert_eq!(map.search("SHELLFISH MARKET"), None);
		assert_eq!(
			map.search("SHELL OIL 5744"),
			Some(Classification::Budget(Category::Gas))
		);
	}

	#[test]
	fn test_padded_keyword_is_distinct() {
		let map = build(r#"{"gas": ["foo"], "rent": [" foo"]}"#).unwrap();
		assert_eq!(map.len(), 2);
	}

	#[test]
	fn test_empty_keyword_fails() {
		let result = build(r#"{"utilities": ["  "]}"#);
		assert!(matches!(result, Err(Error::EmptyKeyword(k)) if k == "utilities"));
	}

	#[test]
	fn test_unknown_key_fails() {
		assert!(matches!(
			build(r#"{"grocery": ["kroger"]}"#),
			Err(Error::Json(_))
		));
	}

	#[test]
	fn test_counts() {
		let map = build(
			r#"{"rent": ["a", "b"], "gas": ["c"], "skip": ["d", "e", "f"]}"#,
		)
		.unwrap();
		let counts = map.counts();
		assert_eq!(counts.len(), 10);
		assert_eq!(counts[0], (Classification::Budget(Category::Rent), 2));
		assert_eq!(counts[4], (Classification::Budget(Category::Gas), 1));
		assert_eq!(counts[9], (Classification::Skip, 3));
	}
}
