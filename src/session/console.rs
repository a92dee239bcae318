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
use std::io::{self, BufRead, Write};

/// Line-oriented conversation with the human. Everything interactive takes
/// one of these so the decision logic can run against scripted input.
pub trait Terminal {
	/// Reads one line with its line ending removed. End of input is fatal.
	fn read_line(&mut self) -> Result<String>;

	fn write(&mut self, text: &str) -> Result<()>;

	fn say(&mut self, line: &str) -> Result<()> {
		self.write(line)?;
		self.write("\n")
	}
}

pub struct Console<R, W> {
	input: R,
	output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
	pub fn new(input: R, output: W) -> Self {
		Self { input, output }
	}
}

impl Console<io::StdinLock<'static>, io::Stdout> {
	pub fn stdio() -> Self {
		Self::new(io::stdin().lock(), io::stdout())
	}
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
	fn read_line(&mut self) -> Result<String> {
		self.output.flush()?;

		let mut line = String::new();
		if self.input.read_line(&mut line)? == 0 {
			return Err(Error::EndOfInput);
		}

		let line = line.strip_suffix('\n').unwrap_or(&line);
		let line = line.strip_suffix('\r').unwrap_or(line);
		Ok(line.to_string())
	}

	fn write(&mut self, text: &str) -> Result<()> {
		self.output.write_all(text.as_bytes())?;
		Ok(())
	}
}

#[cfg(test)]
pub type ScriptedConsole = Console<io::Cursor<Vec<u8>>, Vec<u8>>;

#[cfg(test)]
impl ScriptedConsole {
	/// A console that answers prompts from the given lines in order.
	pub fn scripted(lines: &[&str]) -> Self {
		let mut input = lines.join("\n");
		if !lines.is_empty() {
			input.push('\n');
		}
		Self::new(io::Cursor::new(input.into_bytes()), Vec::new())
	}

	pub fn transcript(&self) -> String {
		String::from_utf8_lossy(&self.output).into_owned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_read_strips_line_endings() {
		let mut console =
			Console::new(io::Cursor::new(b"one\r\ntwo\n  three  ".to_vec()), Vec::new());
		assert_eq!(console.read_line().unwrap(), "one");
		assert_eq!(console.read_line().unwrap(), "two");
		assert_eq!(console.read_line().unwrap(), "  three  ");
		assert!(matches!(console.read_line(), Err(Error::EndOfInput)));
	}

	#[test]
	fn test_empty_line_is_not_end_of_input() {
		let mut console = ScriptedConsole::scripted(&["", "x"]);
		assert_eq!(console.read_line().unwrap(), "");
		assert_eq!(console.read_line().unwrap(), "x");
	}

	#[test]
	fn test_say_appends_newline() {
		let mut console = ScriptedConsole::scripted(&[]);
		console.say("hello").unwrap();
		console.write("a").unwrap();
		assert_eq!(console.transcript(), "hello\na");
	}
}
