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
    BCD_HEADER_BYTES, EMBEDDED_HEADER_SIZE, MliLength, MliType,
    error::{DecodeError, DecodeResult},
};

/// Decodes an MLI given by its type name, e.g. `"2I"`.
///
/// `bytes` must contain the MLI and nothing else. The returned length excludes the MLI itself,
/// so a 2I MLI of 1502 decodes to 1500.
///
/// 2EE MLIs do not count the 2-byte header that follows them, the returned length includes it:
/// a 2EE MLI of 1500 decodes to 1502.
pub fn decode(key: &str, bytes: &[u8]) -> DecodeResult<MliLength> {
    let mli_type: MliType = key.parse()?;
    decode_mli(mli_type, bytes)
}

pub fn decode_mli(mli_type: MliType, bytes: &[u8]) -> DecodeResult<MliLength> {
    let expected = mli_type.size();
    if bytes.len() != expected {
        return Err(DecodeError::ByteSize {
            mli_type,
            expected,
            actual: bytes.len(),
        });
    }

    match mli_type {
        MliType::TwoInclusive => remove_mli_size(mli_type, read_u16(bytes)),
        MliType::TwoExclusive => Ok(read_u16(bytes)),
        MliType::FourInclusive => remove_mli_size(mli_type, read_u32(bytes)),
        MliType::FourExclusive => Ok(read_u32(bytes)),
        MliType::TwoExclusiveEmbedded => Ok(read_u16(bytes) + EMBEDDED_HEADER_SIZE),
        MliType::TwoBcd => {
            let value = read_bcd(mli_type, &bytes[BCD_HEADER_BYTES..])?;
            remove_mli_size(mli_type, value)
        }
        MliType::AsciiFourExclusive => read_ascii(mli_type, bytes),
    }
}

fn read_u16(bytes: &[u8]) -> MliLength {
    u16::from_be_bytes([bytes[0], bytes[1]]) as MliLength
}

fn read_u32(bytes: &[u8]) -> MliLength {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as MliLength
}

// a raw zero is a valid empty inclusive MLI and is not adjusted
fn remove_mli_size(mli_type: MliType, value: MliLength) -> DecodeResult<MliLength> {
    if value == 0 {
        return Ok(0);
    }

    value
        .checked_sub(mli_type.size())
        .ok_or(DecodeError::Length { mli_type, value })
}

fn read_bcd(mli_type: MliType, bytes: &[u8]) -> DecodeResult<MliLength> {
    bytes
        .iter()
        .flat_map(|b| [b >> 4, b & 0x0f])
        .try_fold(0, |acc, nibble| {
            if nibble > 9 {
                Err(DecodeError::Format {
                    mli_type,
                    bytes: bytes.to_vec(),
                })
            } else {
                Ok(acc * 10 + nibble as MliLength)
            }
        })
}

fn read_ascii(mli_type: MliType, bytes: &[u8]) -> DecodeResult<MliLength> {
    if bytes.iter().all(|b| *b == b'0') {
        return Ok(0);
    }

    bytes.iter().try_fold(0, |acc, b| {
        if b.is_ascii_digit() {
            Ok(acc * 10 + (b - b'0') as MliLength)
        } else {
            Err(DecodeError::Format {
                mli_type,
                bytes: bytes.to_vec(),
            })
        }
    })
}
