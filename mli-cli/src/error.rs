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

use miette::Diagnostic;
use mli_codec::error::{DecodeError, EncodeError, UnknownMliType};
use std::io;

#[derive(Debug, Diagnostic, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid MLI type in MLI_TYPE: {0}")]
    #[diagnostic(code(mli::config::mli_type))]
    InvalidMliType(#[from] UnknownMliType),
    #[error("invalid output format in MLI_OUTPUT: {0}; output format must be 'plain' or 'json'")]
    #[diagnostic(code(mli::config::output))]
    InvalidOutputFormat(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Diagnostic, thiserror::Error)]
pub enum MliAppError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    EncodeError(#[from] EncodeError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    DecodeError(#[from] DecodeError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    ConfigError(#[from] ConfigError),
    #[error("Invalid hex input: {0}")]
    #[diagnostic(
        code(mli::cli::hex),
        help("pass the MLI bytes as hex, e.g. '002d' or '0x002d'")
    )]
    HexError(#[from] hex::FromHexError),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type MliAppResult<T> = Result<T, MliAppError>;
