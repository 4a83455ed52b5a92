/*
 *  Copyright (C) 2025 Michael Bachmann
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU Affero General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU Affero General Public License for more details.
 *
 *  You should have received a copy of the GNU Affero General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

use crate::error::{ConfigError, ConfigResult};
use clap::ValueEnum;
use mli_codec::MliType;
use std::{env, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub mli_type: MliType,
    pub output: OutputFormat,
}

impl Config {
    pub fn load_env(&mut self) -> ConfigResult<()> {
        self.load_vars(|key| env::var(key).ok())
    }

    fn load_vars(&mut self, var: impl Fn(&str) -> Option<String>) -> ConfigResult<()> {
        if let Some(val) = var("MLI_TYPE") {
            self.mli_type = val.parse()?;
        }

        if let Some(val) = var("MLI_OUTPUT") {
            self.output = val.parse()?;
        }

        Ok(())
    }

    pub fn new() -> ConfigResult<Self> {
        let mut config = Config::default();
        config.load_env()?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mli_type: MliType::TwoInclusive,
            output: OutputFormat::Plain,
        }
    }
}
