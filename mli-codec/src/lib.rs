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

//! Encoder and decoder for Message Length Indicators (MLI).
//!
//! MLIs are fixed size headers in front of messages sent over raw TCP/IP sockets, commonly
//! used with ISO 8583 financial messages. Reading from the socket is left to the caller:
//!
//! ```
//! use mli_codec::MliType;
//!
//! let msg = b"This is a message";
//! let framed = MliType::TwoInclusive.prepend(msg).unwrap();
//!
//! let (mli, payload) = framed.split_at(MliType::TwoInclusive.size());
//! let length = MliType::TwoInclusive.decode(mli).unwrap();
//! assert_eq!(msg.len(), length);
//! assert_eq!(&msg[..], payload);
//! ```

mod decode;
mod encode;
pub mod error;
mod types;

pub use decode::*;
pub use encode::*;
use error::EncodeResult;
pub use types::*;

pub(crate) fn prepend_mli(mli_type: MliType, payload: &[u8]) -> EncodeResult<Vec<u8>> {
    let mut buf = encode_mli(mli_type, payload.len())?;
    buf.extend_from_slice(payload);
    Ok(buf)
}
