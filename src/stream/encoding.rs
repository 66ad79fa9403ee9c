/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::{Error, Result};

/// Byte encodings accepted by the string operations of
/// [`BitStream`](crate::stream::BitStream).
///
/// Encoding a character outside the encoding's repertoire is an explicit
/// [`Error::Encode`], never a silent substitution. UTF-16 uses
/// little-endian code units; the stream's endianness setting affects
/// numeric conversion only, never string bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "mem_dbg", derive(mem_dbg::MemDbg, mem_dbg::MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub enum CharEncoding {
    /// One byte per character, code points `0..=127`.
    Ascii,
    /// Standard UTF-8.
    Utf8,
    /// UTF-16 with little-endian code units.
    Utf16,
}

impl core::fmt::Display for CharEncoding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            CharEncoding::Ascii => "ASCII",
            CharEncoding::Utf8 => "UTF-8",
            CharEncoding::Utf16 => "UTF-16LE",
        })
    }
}

impl CharEncoding {
    /// Encode `text` into bytes.
    pub fn encode(self, text: &str) -> Result<Vec<u8>> {
        match self {
            CharEncoding::Ascii => {
                if !text.is_ascii() {
                    return Err(Error::Encode { encoding: self });
                }
                Ok(text.as_bytes().to_vec())
            }
            CharEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
            CharEncoding::Utf16 => Ok(text
                .encode_utf16()
                .flat_map(|unit| unit.to_le_bytes())
                .collect()),
        }
    }

    /// Decode `bytes` into text.
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        match self {
            CharEncoding::Ascii => {
                if !bytes.is_ascii() {
                    return Err(Error::Decode { encoding: self });
                }
                // ASCII is a UTF-8 subset, checked just above
                Ok(String::from_utf8(bytes.to_vec())
                    .map_err(|_| Error::Decode { encoding: self })?)
            }
            CharEncoding::Utf8 => String::from_utf8(bytes.to_vec())
                .map_err(|_| Error::Decode { encoding: self }),
            CharEncoding::Utf16 => {
                if bytes.len() % 2 != 0 {
                    return Err(Error::Decode { encoding: self });
                }
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                String::from_utf16(&units).map_err(|_| Error::Decode { encoding: self })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_rejects_non_ascii() {
        assert_eq!(
            CharEncoding::Ascii.encode("héllo"),
            Err(Error::Encode {
                encoding: CharEncoding::Ascii
            })
        );
        assert_eq!(
            CharEncoding::Ascii.decode(&[0x68, 0xFF]),
            Err(Error::Decode {
                encoding: CharEncoding::Ascii
            })
        );
    }

    #[test]
    fn test_utf16_round_trip() -> Result<()> {
        let text = "héllo ∑ 🦀";
        let bytes = CharEncoding::Utf16.encode(text)?;
        assert_eq!(bytes.len() % 2, 0);
        assert_eq!(CharEncoding::Utf16.decode(&bytes)?, text);
        Ok(())
    }

    #[test]
    fn test_utf16_rejects_odd_length() {
        assert_eq!(
            CharEncoding::Utf16.decode(&[0x68]),
            Err(Error::Decode {
                encoding: CharEncoding::Utf16
            })
        );
    }
}
