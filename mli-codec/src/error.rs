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

use crate::{MliLength, MliType};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("invalid MLI type provided: '{0}'")]
#[diagnostic(
    code(mli::unknown_type),
    help("supported MLI types are 2I, 2E, 4I, 4E, 2EE, 2BCD2 and A4E")
)]
pub struct UnknownMliType(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum DecodeError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    UnknownType(#[from] UnknownMliType),
    #[error(
        "input bytes do not match expected size for MLI type {mli_type}: expected {expected}, got {actual}"
    )]
    #[diagnostic(
        code(mli::decode::byte_size),
        help("read exactly MliType::size() bytes from the transport before decoding")
    )]
    ByteSize {
        mli_type: MliType,
        expected: usize,
        actual: usize,
    },
    #[error("invalid MLI length: {mli_type} value {value} is smaller than the MLI itself")]
    #[diagnostic(code(mli::decode::length))]
    Length { mli_type: MliType, value: MliLength },
    #[error("could not convert {mli_type} bytes {bytes:02x?} to a decimal length")]
    #[diagnostic(code(mli::decode::format))]
    Format { mli_type: MliType, bytes: Vec<u8> },
}

pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum EncodeError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    UnknownType(#[from] UnknownMliType),
    #[error("invalid MLI length provided: {0}")]
    #[diagnostic(code(mli::encode::length))]
    Length(i64),
    #[error("length {length} is too large for MLI type {mli_type} (max {max} allowed)")]
    #[diagnostic(code(mli::encode::out_of_range))]
    OutOfRange {
        mli_type: MliType,
        length: MliLength,
        max: MliLength,
    },
    #[error("unable to convert '{digits}' to {mli_type} binary-coded decimal")]
    #[diagnostic(code(mli::encode::format))]
    Format { mli_type: MliType, digits: String },
}

pub type EncodeResult<T> = std::result::Result<T, EncodeError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn errors_carry_diagnostic_codes() {
        let e = DecodeError::ByteSize {
            mli_type: MliType::TwoInclusive,
            expected: 2,
            actual: 3,
        };
        assert_eq!(
            Some("mli::decode::byte_size".to_owned()),
            e.code().map(|c| c.to_string())
        );

        let e = EncodeError::from(UnknownMliType("bogus".to_owned()));
        assert_eq!(
            Some("mli::unknown_type".to_owned()),
            e.code().map(|c| c.to_string())
        );
    }

    #[test]
    fn error_messages_are_readable() {
        let e = DecodeError::Format {
            mli_type: MliType::TwoBcd,
            bytes: vec![0x00, 0x00, 0x0a, 0xff],
        };
        assert_eq!(
            "could not convert 2BCD2 bytes [00, 00, 0a, ff] to a decimal length",
            e.to_string()
        );

        let e = EncodeError::OutOfRange {
            mli_type: MliType::AsciiFourExclusive,
            length: 10_000,
            max: 9999,
        };
        assert_eq!(
            "length 10000 is too large for MLI type A4E (max 9999 allowed)",
            e.to_string()
        );
    }
}
