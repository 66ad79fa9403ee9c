/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Direction in which a stream's cursors sweep the buffer's bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "mem_dbg", derive(mem_dbg::MemDbg, mem_dbg::MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub enum ByteDirection {
    /// From the first byte towards the last.
    Ascending,
    /// From the last byte towards the first.
    Descending,
}

/// Order in which the bits of a unit are traversed within a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "mem_dbg", derive(mem_dbg::MemDbg, mem_dbg::MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub enum BitDirection {
    /// Least-significant bit first.
    LsbFirst,
    /// Most-significant bit first.
    MsbFirst,
}

/// The four traversal orders a [`BitStream`](crate::stream::BitStream) can
/// be constructed with.
///
/// A mode fuses two orthogonal choices, recoverable through
/// [`byte_direction`](Self::byte_direction) and
/// [`bit_direction`](Self::bit_direction): the direction in which the
/// cursors sweep the buffer's bytes, and the nominal bit order within each
/// byte. The mode is fixed at construction and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "mem_dbg", derive(mem_dbg::MemDbg, mem_dbg::MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub enum BitOrderMode {
    /// Ascending bytes, LSB → MSB within each byte.
    FirstByteFirstBit,
    /// Ascending bytes, MSB → LSB within each byte.
    FirstByteLastBit,
    /// Descending bytes, LSB → MSB within each byte.
    LastByteFirstBit,
    /// Descending bytes, MSB → LSB within each byte.
    LastByteLastBit,
}

impl BitOrderMode {
    /// The byte-traversal component of this mode.
    #[inline]
    #[must_use]
    pub fn byte_direction(self) -> ByteDirection {
        match self {
            BitOrderMode::FirstByteFirstBit => ByteDirection::Ascending,
            BitOrderMode::FirstByteLastBit => ByteDirection::Ascending,
            BitOrderMode::LastByteFirstBit => ByteDirection::Descending,
            BitOrderMode::LastByteLastBit => ByteDirection::Descending,
        }
    }

    /// The intra-byte bit-traversal component of this mode.
    #[inline]
    #[must_use]
    pub fn bit_direction(self) -> BitDirection {
        match self {
            BitOrderMode::FirstByteFirstBit => BitDirection::LsbFirst,
            BitOrderMode::FirstByteLastBit => BitDirection::MsbFirst,
            BitOrderMode::LastByteFirstBit => BitDirection::LsbFirst,
            BitOrderMode::LastByteLastBit => BitDirection::MsbFirst,
        }
    }

    /// The order in which the bits of a written or read unit are emitted
    /// at the cursor.
    ///
    /// Under a descending byte traversal the cursor walks the buffer
    /// backwards, so a unit must be emitted in the order opposite to its
    /// nominal bit direction for the intra-byte layout to come out as the
    /// mode prescribes. A unit is therefore emitted LSB-first exactly when
    /// the two components agree in direction.
    #[inline]
    #[must_use]
    pub(crate) fn unit_order(self) -> BitDirection {
        match self {
            BitOrderMode::FirstByteFirstBit => BitDirection::LsbFirst,
            BitOrderMode::FirstByteLastBit => BitDirection::MsbFirst,
            BitOrderMode::LastByteFirstBit => BitDirection::MsbFirst,
            BitOrderMode::LastByteLastBit => BitDirection::LsbFirst,
        }
    }

    /// All four modes, in declaration order.
    pub const ALL: [BitOrderMode; 4] = [
        BitOrderMode::FirstByteFirstBit,
        BitOrderMode::FirstByteLastBit,
        BitOrderMode::LastByteFirstBit,
        BitOrderMode::LastByteLastBit,
    ];
}
