#![no_main]

use bitlane::fuzz::round_trip::{harness, FuzzCase};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzCase| { harness(data) });
