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
use anyhow::{anyhow, Error};
use csv::WriterBuilder;
use std::fs::{File, OpenOptions};
use tracing::info;

/// Appends finished statement rows to a CSV ledger, no header. The file is
/// opened up front so an unwritable destination fails before any
/// interactive work is done.
pub struct CsvSink {
	path: String,
	file: File,
}

impl CsvSink {
	pub fn open(path: &str) -> Result<Self, Error> {
		let file = OpenOptions::new()
			.append(true)
			.create(true)
			.open(path)
			.map_err(|e| anyhow!("failed to open {} for appending: {}", path, e))?;

		Ok(Self {
			path: path.to_string(),
			file,
		})
	}

	pub fn append(self, rows: &[Vec<String>]) -> Result<(), Error> {
		let mut writer = WriterBuilder::new()
			.has_headers(false)
			.from_writer(self.file);
		for row in rows {
			writer.write_record(row)?;
		}
		writer.flush()?;

		info!(rows = rows.len(), path = %self.path, "appended statement");
		Ok(())
	}
}
