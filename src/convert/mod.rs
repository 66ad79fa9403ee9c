/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Endianness-aware conversion between byte sequences and fixed-width primitives.

[`EndianBitConverter`] converts between raw bytes and 32-bit integers, 32-bit
floats, and 64-bit doubles, reversing byte order exactly when the requested
endianness disagrees with the host's native order. Short trailing data is
zero-padded up to the primitive's width; only an out-of-range start offset is
an error.

The admitted value types are sealed behind [`EndianValue`]; callers cannot
extend the set.

*/

mod endian;
pub use endian::*;
