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
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	/// Path to the keyword JSON file.
	pub keywords: Option<String>,
	pub import: Option<Import>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Import {
	/// CSV file the finished statement is appended to. When absent the
	/// statement is printed instead.
	pub output: Option<String>,

	/// How many answers to the category menu are accepted before giving up.
	pub category_attempts: Option<u32>,
}
