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
    BCD_HEADER_BYTES, EMBEDDED_HEADER_SIZE, MAX_DECIMAL_VALUE, MliLength, MliType, SIZE_2BCD2,
    SIZE_2I, SIZE_4I,
    error::{EncodeError, EncodeResult},
};

/// Encodes a message length as an MLI of the type given by its name, e.g. `"2I"`.
///
/// `length` is the length of the message without the MLI. Inclusive MLI types add their own
/// size to the encoded value.
///
/// 2EE messages carry a 2-byte header that is not accounted for in the MLI. The header must be
/// included in `length`, so a 1500 byte message including the header is encoded as 1498.
pub fn encode(key: &str, length: i64) -> EncodeResult<Vec<u8>> {
    let length = MliLength::try_from(length).map_err(|_| EncodeError::Length(length))?;
    let mli_type: MliType = key.parse()?;
    encode_mli(mli_type, length)
}

pub fn encode_mli(mli_type: MliType, length: MliLength) -> EncodeResult<Vec<u8>> {
    match mli_type {
        MliType::TwoInclusive => write_u16(mli_type, length, length.checked_add(SIZE_2I)),
        MliType::TwoExclusive => write_u16(mli_type, length, Some(length)),
        MliType::FourInclusive => write_u32(mli_type, length, length.checked_add(SIZE_4I)),
        MliType::FourExclusive => write_u32(mli_type, length, Some(length)),
        MliType::TwoExclusiveEmbedded => {
            let value = length
                .checked_sub(EMBEDDED_HEADER_SIZE)
                .ok_or(EncodeError::Length(length as i64))?;
            write_u16(mli_type, length, Some(value))
        }
        MliType::TwoBcd => {
            let digits = zero_padded(mli_type, length, length.checked_add(SIZE_2BCD2))?;
            let mut buf = vec![0; BCD_HEADER_BYTES];
            buf.extend(pack_bcd(mli_type, &digits)?);
            Ok(buf)
        }
        MliType::AsciiFourExclusive => {
            let digits = zero_padded(mli_type, length, Some(length))?;
            Ok(digits.into_bytes())
        }
    }
}

fn out_of_range(mli_type: MliType, length: MliLength) -> EncodeError {
    EncodeError::OutOfRange {
        mli_type,
        length,
        max: mli_type.max_length(),
    }
}

fn write_u16(mli_type: MliType, length: MliLength, value: Option<usize>) -> EncodeResult<Vec<u8>> {
    let value = value
        .and_then(|v| u16::try_from(v).ok())
        .ok_or_else(|| out_of_range(mli_type, length))?;
    Ok(value.to_be_bytes().to_vec())
}

fn write_u32(mli_type: MliType, length: MliLength, value: Option<usize>) -> EncodeResult<Vec<u8>> {
    let value = value
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| out_of_range(mli_type, length))?;
    Ok(value.to_be_bytes().to_vec())
}

fn zero_padded(mli_type: MliType, length: MliLength, value: Option<usize>) -> EncodeResult<String> {
    match value {
        Some(value) if value <= MAX_DECIMAL_VALUE => Ok(format!("{value:04}")),
        _ => Err(out_of_range(mli_type, length)),
    }
}

/// Packs a string of decimal digits into binary-coded decimal, two digits per byte.
fn pack_bcd(mli_type: MliType, digits: &str) -> EncodeResult<Vec<u8>> {
    let format_error = || EncodeError::Format {
        mli_type,
        digits: digits.to_owned(),
    };

    let nibbles = digits
        .bytes()
        .map(|c| {
            if c.is_ascii_digit() {
                Ok(c - b'0')
            } else {
                Err(format_error())
            }
        })
        .collect::<EncodeResult<Vec<u8>>>()?;

    let pairs = nibbles.chunks_exact(2);
    if !pairs.remainder().is_empty() {
        return Err(format_error());
    }

    Ok(pairs.map(|pair| (pair[0] << 4) | pair[1]).collect())
}
