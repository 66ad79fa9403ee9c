/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use arbitrary::Arbitrary;

const CAPACITY_BITS: usize = 4096;

#[derive(Arbitrary, Debug)]
pub struct FuzzCase {
    mode: BitOrderMode,
    big_endian: bool,
    commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug)]
pub enum RandomCommand {
    WriteBit(bool),
    WriteByte(u8, u8),
    WriteInt(i32),
}

/// Replay a command sequence as writes, then read everything back and
/// check that each value survives under the case's mode and endianness.
pub fn harness(data: FuzzCase) {
    let mut stream = BitStream::new(CAPACITY_BITS, data.mode, data.big_endian);
    let mut written = vec![];

    for command in &data.commands {
        let ok = match command {
            RandomCommand::WriteBit(bit) => stream.write_bit(*bit).is_ok(),
            RandomCommand::WriteByte(value, width) => {
                let width = (1 + (*width % 8)) as usize;
                stream.write_byte(*value, width).is_ok()
            }
            RandomCommand::WriteInt(value) => stream.write_int(*value, 32).is_ok(),
        };
        if !ok {
            // a failed write may have advanced the cursor mid-unit; stop
            // here so the read-back below stays aligned
            break;
        }
        written.push(command);
    }

    for command in written {
        match command {
            RandomCommand::WriteBit(bit) => {
                assert_eq!(stream.read_bit().unwrap(), *bit);
            }
            RandomCommand::WriteByte(value, width) => {
                let width = (1 + (*width % 8)) as usize;
                let mask = if width == 8 { 0xFF } else { (1u8 << width) - 1 };
                assert_eq!(stream.read_byte(width).unwrap(), value & mask);
            }
            RandomCommand::WriteInt(value) => {
                assert_eq!(stream.read_int(32).unwrap(), *value);
            }
        }
    }
}
