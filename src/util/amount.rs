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
use std::fmt;

/// Upper bound on fractional digits accepted from input.
const MAX_SCALE: u32 = 18;
/// Upper bound on total digits; keeps rendering well inside u128.
const MAX_DIGITS: usize = 30;

/// An exact signed decimal amount, stored as `mantissa * 10^-scale` and kept
/// reduced so that equal values compare equal regardless of how they were
/// written ("5.10" and "5.1" are the same amount).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Amount {
	mantissa: i128,
	scale: u32,
}

impl Amount {
	pub fn new(mantissa: i128, scale: u32) -> Self {
		let mut amount = Self { mantissa, scale };
		amount.reduce();
		amount
	}

	/// Parses `[+-]digits[.digits]`, surrounding whitespace ignored.
	pub fn from_str(input: &str) -> Result<Self> {
		let invalid = || Error::InvalidAmount(input.to_string());
		let s = input.trim();

		let (negative, digits) = match s.strip_prefix('-') {
			Some(rest) => (true, rest),
			None => (false, s.strip_prefix('+').unwrap_or(s)),
		};
		let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));

		if whole.is_empty() && frac.is_empty() {
			return Err(invalid());
		}
		let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
		if !all_digits(whole) || !all_digits(frac) {
			return Err(invalid());
		}
		if frac.len() as u32 > MAX_SCALE || whole.len() + frac.len() > MAX_DIGITS
		{
			return Err(invalid());
		}

		let mut mantissa: i128 = 0;
		for c in whole.chars().chain(frac.chars()) {
			mantissa = mantissa * 10 + (c as u8 - b'0') as i128;
		}
		if negative {
			mantissa = -mantissa;
		}

		Ok(Self::new(mantissa, frac.len() as u32))
	}

	fn reduce(&mut self) {
		while self.scale > 0 && self.mantissa % 10 == 0 {
			self.mantissa /= 10;
			self.scale -= 1;
		}
	}
}

impl fmt::Display for Amount {
	/// Renders at least two fractional digits, more if the value needs them.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let precision = self.scale.max(2);
		let magnitude =
			self.mantissa.unsigned_abs() * 10u128.pow(precision - self.scale);
		let divisor = 10u128.pow(precision);

		let sign = if self.mantissa < 0 { "-" } else { "" };
		write!(
			f,
			"{}{}.{:0width$}",
			sign,
			magnitude / divisor,
			magnitude % divisor,
			width = precision as usize
		)
	}
}
