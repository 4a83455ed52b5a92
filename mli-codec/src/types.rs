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

use crate::{
    decode_mli, encode_mli,
    error::{DecodeResult, EncodeResult, UnknownMliType},
    prepend_mli,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub type MliLength = usize;

/// 2-byte network byte order with MLI included
pub const MLI_2I: &str = "2I";
/// 2-byte network byte order with MLI excluded
pub const MLI_2E: &str = "2E";
/// 4-byte network byte order with MLI included
pub const MLI_4I: &str = "4I";
/// 4-byte network byte order with MLI excluded
pub const MLI_4E: &str = "4E";
/// 2-byte network byte order with MLI excluded, additional 2-byte header is included with message
pub const MLI_2EE: &str = "2EE";
/// 2-byte header with a 2-byte binary-coded decimal with MLI included
pub const MLI_2BCD2: &str = "2BCD2";
/// 4-byte ASCII string with MLI excluded
pub const MLI_A4E: &str = "A4E";

pub const SIZE_2I: usize = (u16::BITS / 8) as usize;
pub const SIZE_2E: usize = (u16::BITS / 8) as usize;
pub const SIZE_4I: usize = (u32::BITS / 8) as usize;
pub const SIZE_4E: usize = (u32::BITS / 8) as usize;
pub const SIZE_2EE: usize = (u16::BITS / 8) as usize;
pub const SIZE_2BCD2: usize = BCD_HEADER_BYTES + BCD_DIGIT_BYTES;
pub const SIZE_A4E: usize = DECIMAL_DIGITS;

/// Size of the header that follows a 2EE MLI and is counted in its decoded length.
pub const EMBEDDED_HEADER_SIZE: usize = 2;

pub const BCD_HEADER_BYTES: usize = 2;
pub const BCD_DIGIT_BYTES: usize = 2;
pub const DECIMAL_DIGITS: usize = 4;
pub const MAX_DECIMAL_VALUE: usize = 9999;

/// The closed set of supported Message Length Indicator formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MliType {
    #[serde(rename = "2I")]
    TwoInclusive,
    #[serde(rename = "2E")]
    TwoExclusive,
    #[serde(rename = "4I")]
    FourInclusive,
    #[serde(rename = "4E")]
    FourExclusive,
    #[serde(rename = "2EE")]
    TwoExclusiveEmbedded,
    #[serde(rename = "2BCD2")]
    TwoBcd,
    #[serde(rename = "A4E")]
    AsciiFourExclusive,
}

impl MliType {
    pub const ALL: [MliType; 7] = [
        MliType::TwoInclusive,
        MliType::TwoExclusive,
        MliType::FourInclusive,
        MliType::FourExclusive,
        MliType::TwoExclusiveEmbedded,
        MliType::TwoBcd,
        MliType::AsciiFourExclusive,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MliType::TwoInclusive => MLI_2I,
            MliType::TwoExclusive => MLI_2E,
            MliType::FourInclusive => MLI_4I,
            MliType::FourExclusive => MLI_4E,
            MliType::TwoExclusiveEmbedded => MLI_2EE,
            MliType::TwoBcd => MLI_2BCD2,
            MliType::AsciiFourExclusive => MLI_A4E,
        }
    }

    /// Number of bytes a transport has to read before calling [`MliType::decode`].
    pub fn size(self) -> usize {
        match self {
            MliType::TwoInclusive => SIZE_2I,
            MliType::TwoExclusive => SIZE_2E,
            MliType::FourInclusive => SIZE_4I,
            MliType::FourExclusive => SIZE_4E,
            MliType::TwoExclusiveEmbedded => SIZE_2EE,
            MliType::TwoBcd => SIZE_2BCD2,
            MliType::AsciiFourExclusive => SIZE_A4E,
        }
    }

    /// Whether the encoded value counts the MLI's own bytes.
    pub fn is_inclusive(self) -> bool {
        matches!(
            self,
            MliType::TwoInclusive | MliType::FourInclusive | MliType::TwoBcd
        )
    }

    pub fn embedded_header_size(self) -> usize {
        match self {
            MliType::TwoExclusiveEmbedded => EMBEDDED_HEADER_SIZE,
            _ => 0,
        }
    }

    /// The largest length [`MliType::encode`] accepts for this type.
    pub fn max_length(self) -> MliLength {
        match self {
            MliType::TwoInclusive => u16::MAX as usize - SIZE_2I,
            MliType::TwoExclusive => u16::MAX as usize,
            MliType::FourInclusive => u32::MAX as usize - SIZE_4I,
            MliType::FourExclusive => u32::MAX as usize,
            MliType::TwoExclusiveEmbedded => u16::MAX as usize + EMBEDDED_HEADER_SIZE,
            MliType::TwoBcd => MAX_DECIMAL_VALUE - SIZE_2BCD2,
            MliType::AsciiFourExclusive => MAX_DECIMAL_VALUE,
        }
    }

    pub fn encode(self, length: MliLength) -> EncodeResult<Vec<u8>> {
        encode_mli(self, length)
    }

    pub fn decode(self, bytes: &[u8]) -> DecodeResult<MliLength> {
        decode_mli(self, bytes)
    }

    /// Encodes the length of `payload` and returns the MLI followed by the payload.
    pub fn prepend(self, payload: &[u8]) -> EncodeResult<Vec<u8>> {
        prepend_mli(self, payload)
    }
}

impl fmt::Display for MliType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for MliType {
    type Err = UnknownMliType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MliType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| UnknownMliType(s.to_owned()))
    }
}

impl TryFrom<&str> for MliType {
    type Error = UnknownMliType;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
