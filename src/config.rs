use crate::table::TableFormat;
use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub menu: MenuConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MenuConfig {
    pub title: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            title: "Student Report Card System".to_owned(),
        }
    }
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub table_format: TableFormat,
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config> {
        let content = fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot read {}", file_name.display()))
            .wrap_err("cannot load configuration file")?;
        Self::parse(&content).wrap_err("cannot load configuration file")
    }

    pub fn parse(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }
}
