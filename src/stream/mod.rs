/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Fixed-capacity bit streams with selectable traversal order.

A [`BitStream`] owns a [`BitBuffer`] and two independent cursors, one
advanced by writes and one by reads. The [`BitOrderMode`] chosen at
construction fixes, for the lifetime of the stream, the direction in which
the cursors sweep the buffer and the order in which the bits of each unit
are laid down:

| Mode                | Byte traversal | Bit traversal within byte |
|---------------------|----------------|---------------------------|
| `FirstByteFirstBit` | ascending      | LSB → MSB                 |
| `FirstByteLastBit`  | ascending      | MSB → LSB                 |
| `LastByteFirstBit`  | descending     | LSB → MSB                 |
| `LastByteLastBit`   | descending     | MSB → LSB                 |

The two components of a mode are available separately as [`ByteDirection`]
and [`BitDirection`]; all dispatch over them is by exhaustive matching.

Units written under one mode read back under the same mode: byte-, word-,
integer-, and string-level operations are all built from the single-bit
primitives and mirror each other exactly. Multi-byte integers additionally
pass through the stream's
[`EndianBitConverter`](crate::convert::EndianBitConverter); raw buffer
extraction via [`BitStream::get_bytes`] is never byte-swapped.

*/

mod order;
pub use order::*;

mod buffer;
pub use buffer::*;

mod encoding;
pub use encoding::*;

mod bit_stream;
pub use bit_stream::*;
