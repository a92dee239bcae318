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
use crate::config::config_file::Config;
use crate::import::keywords::KeywordConfig;
use crate::parsing::chase::ChaseRecord;
use anyhow::{anyhow, Error};
use dirs::home_dir;
use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};

pub struct Filesystem {
	/// Directory holding the default config and keyword files.
	config_dir: Option<PathBuf>,
}

impl Filesystem {
	pub fn new() -> Self {
		Self {
			config_dir: home_dir().map(|h| h.join(".config/budgr")),
		}
	}

	#[cfg(test)]
	pub fn with_config_dir(dir: &Path) -> Self {
		Self {
			config_dir: Some(dir.to_path_buf()),
		}
	}

	pub fn open(&self, file_path: &str) -> Result<File, Error> {
		let path = Path::new(file_path);
		File::open(path).map_err(|e| anyhow!("failed to open {}: {}", file_path, e))
	}

	fn default_path(&self, file_name: &str) -> Result<PathBuf, Error> {
		self.config_dir
			.as_ref()
			.map(|dir| dir.join(file_name))
			.ok_or_else(|| anyhow!("Unable to determine home directory"))
	}

	/// Fetches the config from the given path, or default path if none. The
	/// default file is created empty on first use; a custom path must exist.
	pub fn get_config(
		&self,
		custom_config_path: Option<&String>,
	) -> Result<Config, Error> {
		let config_path = match &custom_config_path {
			None => self.default_path("config.toml")?,
			Some(p) => PathBuf::from(p),
		};

		// create empty config file if it doesn't exist
		if !config_path.exists() && custom_config_path.is_none() {
			if let Some(parent) = config_path.parent() {
				fs::create_dir_all(parent)?;
			}
			File::create(config_path.clone())?;
		}

		let content = fs::read_to_string(&config_path).map_err(|e| {
			anyhow!("failed to read config {}: {}", config_path.display(), e)
		})?;
		let config: Config = toml::from_str(&content)
			.map_err(|e| anyhow!("failed to parse config: {}", e))?;

		if let Some(import) = &config.import {
			if import.category_attempts == Some(0) {
				return Err(anyhow!("import.category_attempts must be at least 1"));
			}
		}

		Ok(config)
	}

	/// Loads keyword lists from the flag path, the configured path, or the
	/// default location, in that order of preference.
	pub fn load_keywords(
		&self,
		custom_keywords_path: Option<&String>,
		config: &Config,
	) -> Result<KeywordConfig, Error> {
		let path = match custom_keywords_path.or(config.keywords.as_ref()) {
			Some(p) => PathBuf::from(p),
			None => self.default_path("keywords.json")?,
		};

		let content = fs::read_to_string(&path).map_err(|e| {
			anyhow!("failed to read keywords {}: {}", path.display(), e)
		})?;
		KeywordConfig::from_json(&content)
			.map_err(|e| anyhow!("failed to parse keywords {}: {}", path.display(), e))
	}

	pub fn read_statement(&self, file_path: &str) -> Result<Vec<ChaseRecord>, Error> {
		let file = self.open(file_path)?;
		ChaseRecord::read_all(file)
			.map_err(|e| anyhow!("failed to read {}: {}", file_path, e))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use tempfile::TempDir;

	fn write(dir: &TempDir, name: &str, content: &str) -> String {
		let path = dir.path().join(name);
		let mut file = File::create(&path).unwrap();
		file.write_all(content.as_bytes()).unwrap();
		path.to_string_lossy().into_owned()
	}

	#[test]
	fn test_default_config_is_created() {
		let dir = TempDir::new().unwrap();
		let fs = Filesystem::with_config_dir(&dir.path().join("nested"));
		let config = fs.get_config(None).unwrap();
		assert!(config.keywords.is_none());
		assert!(dir.path().join("nested/config.toml").exists());
	}

	#[test]
	fn test_missing_custom_config_fails() {
		let dir = TempDir::new().unwrap();
		let fs = Filesystem::with_config_dir(dir.path());
		let missing = dir.path().join("nope.toml").to_string_lossy().into_owned();
		assert!(fs.get_config(Some(&missing)).is_err());
	}

	#[test]
	fn test_zero_attempts_rejected() {
		let dir = TempDir::new().unwrap();
		let fs = Filesystem::with_config_dir(dir.path());
		let path = write(&dir, "c.toml", "[import]\ncategory_attempts = 0\n");
		assert!(fs.get_config(Some(&path)).is_err());
	}

	#[test]
	fn test_keyword_path_precedence() {
		let dir = TempDir::new().unwrap();
		let fs = Filesystem::with_config_dir(dir.path());
		write(&dir, "keywords.json", r#"{"rent": ["default"]}"#);
		let configured = write(&dir, "configured.json", r#"{"rent": ["configured"]}"#);
		let flagged = write(&dir, "flagged.json", r#"{"rent": ["flagged"]}"#);

		let mut config = Config::default();
		assert_eq!(fs.load_keywords(None, &config).unwrap().rent, vec!["default"]);

		config.keywords = Some(configured);
		assert_eq!(
			fs.load_keywords(None, &config).unwrap().rent,
			vec!["configured"]
		);
		assert_eq!(
			fs.load_keywords(Some(&flagged), &config).unwrap().rent,
			vec!["flagged"]
		);
	}

	#[test]
	fn test_bad_keyword_json() {
		let dir = TempDir::new().unwrap();
		let fs = Filesystem::with_config_dir(dir.path());
		let path = write(&dir, "bad.json", "{ not json");
		assert!(fs.load_keywords(Some(&path), &Config::default()).is_err());
	}

	#[test]
	fn test_read_statement() {
		let dir = TempDir::new().unwrap();
		let fs = Filesystem::with_config_dir(dir.path());
		let path = write(
			&dir,
			"statement.csv",
			"Transaction Date,Post Date,Description,Category,Type,Amount,Memo\n\
			 01/02/2024,01/03/2024,STARBUCKS #123,,Sale,-5.75,\n",
		);
		let records = fs.read_statement(&path).unwrap();
		assert_eq!(records.len(), 1);
	}
}
