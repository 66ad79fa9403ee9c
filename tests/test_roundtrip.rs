/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use bitlane::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, RngExt, SeedableRng};

const INT_VALUES: [i32; 5] = [1, 64, 1547861, -5, i32::MIN];

#[test]
fn test_int_round_trip_all_modes() -> Result<()> {
    for mode in BitOrderMode::ALL {
        for big_endian in [false, true] {
            for value in INT_VALUES {
                let mut stream = BitStream::new(32, mode, big_endian);
                stream.write_int(value, 32)?;
                assert_eq!(
                    stream.read_int(32)?,
                    value,
                    "mode {mode:?}, big_endian {big_endian}"
                );
                assert!(!stream.can_read());
            }
        }
    }
    Ok(())
}

#[test]
fn test_mixed_sequence_round_trip() -> Result<()> {
    for mode in BitOrderMode::ALL {
        for big_endian in [false, true] {
            let mut stream = BitStream::new(128, mode, big_endian);
            stream.write_bit(true)?;
            stream.write_byte(0x2A, 7)?;
            stream.write_int(-123456, 32)?;
            stream.write_bytes(&[0xDE, 0xAD], 8)?;

            assert!(stream.read_bit()?);
            assert_eq!(stream.read_byte(7)?, 0x2A);
            assert_eq!(stream.read_int(32)?, -123456);
            assert_eq!(stream.read_bytes(16, 8)?, vec![0xDE, 0xAD]);
        }
    }
    Ok(())
}

#[test]
fn test_random_round_trip() -> Result<()> {
    const OPS: usize = 200;
    let mut rng = SmallRng::seed_from_u64(0);
    for mode in BitOrderMode::ALL {
        for big_endian in [false, true] {
            let mut stream = BitStream::new(OPS * 32, mode, big_endian);
            let mut expected: Vec<(u8, usize)> = vec![];
            for _ in 0..OPS {
                let width = rng.random_range(1..=8);
                let value = rng.random::<u8>() & if width == 8 { 0xFF } else { (1 << width) - 1 };
                stream.write_byte(value, width)?;
                expected.push((value, width));
            }
            for (value, width) in expected {
                assert_eq!(
                    stream.read_byte(width)?,
                    value,
                    "mode {mode:?}, big_endian {big_endian}"
                );
            }
            assert!(!stream.can_read());
        }
    }
    Ok(())
}

#[test]
fn test_random_int_round_trip() -> Result<()> {
    const N: usize = 500;
    let mut rng = SmallRng::seed_from_u64(1);
    for mode in BitOrderMode::ALL {
        for big_endian in [false, true] {
            let mut stream = BitStream::new(N * 32, mode, big_endian);
            let values: Vec<i32> = (0..N).map(|_| rng.random()).collect();
            for &value in &values {
                stream.write_int(value, 32)?;
            }
            for &value in &values {
                assert_eq!(stream.read_int(32)?, value);
            }
        }
    }
    Ok(())
}
