/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The error type shared by all stream and conversion operations.

use crate::stream::CharEncoding;
use thiserror::Error;

/// Errors raised by [`BitStream`](crate::stream::BitStream) operations and by
/// [`EndianBitConverter`](crate::convert::EndianBitConverter).
///
/// All errors are local to the operation that raised them; none are retried
/// internally, and the operation leaves no useful partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A bit index or cursor moved past the logical end of the buffer.
    #[error("bit position {pos} is out of range for a buffer of {len} bits")]
    OutOfRange {
        /// The offending bit position
        pos: usize,
        /// The buffer length in bits
        len: usize,
    },

    /// A conversion was asked to start beyond the end of the source slice.
    #[error("offset {offset} is beyond the end of a {len}-byte slice")]
    OffsetOutOfRange {
        /// The requested start offset
        offset: usize,
        /// The slice length in bytes
        len: usize,
    },

    /// An exact-width write was declared with a bit count that does not
    /// match the input array's bit length.
    #[error("declared width of {bits} bits does not match {len} input bytes")]
    WidthMismatch {
        /// The declared width in bits
        bits: usize,
        /// The input length in bytes
        len: usize,
    },

    /// A requested bit width exceeds what the input can supply.
    #[error("{bits} bits requested but only {available} are available")]
    WidthExceedsInput {
        /// The requested width in bits
        bits: usize,
        /// The bits actually available
        available: usize,
    },

    /// A per-unit bit width outside the supported `1..=8` range.
    #[error("unit width of {bits} bits is outside the supported range 1..=8")]
    UnitWidth {
        /// The offending unit width
        bits: usize,
    },

    /// The text cannot be represented in the requested encoding.
    #[error("text cannot be encoded as {encoding}")]
    Encode {
        /// The encoding that rejected the text
        encoding: CharEncoding,
    },

    /// The stream bytes are not a valid sequence in the requested encoding.
    #[error("stream bytes are not valid {encoding}")]
    Decode {
        /// The encoding that rejected the bytes
        encoding: CharEncoding,
    },
}

/// Convenient result type alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
