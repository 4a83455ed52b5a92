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

pub mod config;
pub mod error;
pub mod logging;

use config::OutputFormat;
use error::MliAppResult;
use mli_codec::{MliLength, MliType};
use serde::Serialize;
use std::io::{Read, Write};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mli {
    pub mli_type: MliType,
    pub length: MliLength,
    pub mli: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeInfo {
    pub mli_type: MliType,
    pub size: usize,
    pub inclusive: bool,
    pub embedded_header: usize,
    pub max_length: MliLength,
}

impl From<MliType> for TypeInfo {
    fn from(mli_type: MliType) -> Self {
        TypeInfo {
            mli_type,
            size: mli_type.size(),
            inclusive: mli_type.is_inclusive(),
            embedded_header: mli_type.embedded_header_size(),
            max_length: mli_type.max_length(),
        }
    }
}

pub fn encode_length(mli_type: MliType, length: MliLength) -> MliAppResult<Mli> {
    debug!("Encoding length {length} as {mli_type} MLI …");
    let bytes = mli_type.encode(length)?;
    Ok(Mli {
        mli_type,
        length,
        mli: hex::encode(bytes),
    })
}

pub fn decode_hex(mli_type: MliType, input: &str) -> MliAppResult<Mli> {
    let input: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input.as_str());
    let bytes = hex::decode(digits)?;
    debug!("Decoding {mli_type} MLI {bytes:02x?} …");
    let length = mli_type.decode(&bytes)?;
    Ok(Mli {
        mli_type,
        length,
        mli: hex::encode(bytes),
    })
}

/// Reads a complete payload from `input` and writes it to `output`, preceded by its MLI.
pub fn wrap(mli_type: MliType, mut input: impl Read, mut output: impl Write) -> MliAppResult<Mli> {
    let mut payload = Vec::new();
    input.read_to_end(&mut payload)?;
    let framed = mli_type.prepend(&payload)?;
    output.write_all(&framed)?;
    output.flush()?;
    info!(
        "Wrapped {} byte payload in {} MLI.",
        payload.len(),
        mli_type
    );
    Ok(Mli {
        mli_type,
        length: payload.len(),
        mli: hex::encode(&framed[..mli_type.size()]),
    })
}

pub fn type_infos() -> Vec<TypeInfo> {
    MliType::ALL.into_iter().map(TypeInfo::from).collect()
}

pub fn render_mli(mli: &Mli, output: OutputFormat, print_length: bool) -> MliAppResult<String> {
    match output {
        OutputFormat::Json => Ok(serde_json::to_string(mli)?),
        OutputFormat::Plain if print_length => Ok(mli.length.to_string()),
        OutputFormat::Plain => Ok(mli.mli.clone()),
    }
}

pub fn render_types(types: &[TypeInfo], output: OutputFormat) -> MliAppResult<String> {
    match output {
        OutputFormat::Json => Ok(serde_json::to_string(types)?),
        OutputFormat::Plain => Ok(types
            .iter()
            .map(|t| {
                format!(
                    "{:<6}{} bytes\t{}\tmax length {}",
                    t.mli_type,
                    t.size,
                    if t.inclusive { "inclusive" } else { "exclusive" },
                    t.max_length
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::MliAppError;
    use mli_codec::error::{DecodeError, EncodeError};

    #[test]
    fn length_is_encoded_as_hex() {
        let mli = encode_length(MliType::TwoExclusiveEmbedded, 56).unwrap();
        assert_eq!("0036", mli.mli);
        assert_eq!("0036", render_mli(&mli, OutputFormat::Plain, false).unwrap());
    }

    #[test]
    fn hex_input_is_decoded() {
        let mli = decode_hex(MliType::TwoBcd, "0x0000 0288").unwrap();
        assert_eq!(284, mli.length);
        assert_eq!("00000288", mli.mli);
        assert_eq!("284", render_mli(&mli, OutputFormat::Plain, true).unwrap());
    }

    #[test]
    fn invalid_hex_is_rejected() {
        assert!(matches!(
            decode_hex(MliType::TwoInclusive, "zz"),
            Err(MliAppError::HexError(_))
        ));
    }

    #[test]
    fn codec_errors_are_propagated() {
        assert!(matches!(
            decode_hex(MliType::TwoInclusive, "0001"),
            Err(MliAppError::DecodeError(DecodeError::Length { .. }))
        ));
        assert!(matches!(
            encode_length(MliType::AsciiFourExclusive, 10_000),
            Err(MliAppError::EncodeError(EncodeError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn payload_is_wrapped() {
        let mut out = Vec::new();
        let mli = wrap(MliType::AsciiFourExclusive, &b"hello"[..], &mut out).unwrap();
        assert_eq!(b"0005hello".to_vec(), out);
        assert_eq!(5, mli.length);
        assert_eq!("30303035", mli.mli);
    }

    #[test]
    fn json_output_uses_camel_case() {
        let mli = encode_length(MliType::TwoInclusive, 43).unwrap();
        assert_eq!(
            r#"{"mliType":"2I","length":43,"mli":"002d"}"#,
            render_mli(&mli, OutputFormat::Json, true).unwrap()
        );

        let types = render_types(&type_infos()[..1], OutputFormat::Json).unwrap();
        assert_eq!(
            r#"[{"mliType":"2I","size":2,"inclusive":true,"embeddedHeader":0,"maxLength":65533}]"#,
            types
        );
    }

    #[test]
    fn all_types_are_listed() {
        let plain = render_types(&type_infos(), OutputFormat::Plain).unwrap();
        assert_eq!(7, plain.lines().count());
        assert!(plain.starts_with("2I    2 bytes\tinclusive\tmax length 65533"));
    }
}
