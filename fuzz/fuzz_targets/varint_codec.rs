// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for varint (LEB128) encoding/decoding.
//!
//! Posting deltas and section lengths are varints, so a decoder panic here
//! would take down every snapshot load.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sift::snapshot::{decode_varint, encode_varint};

fuzz_target!(|data: &[u8]| {
    if let Ok((value, consumed)) = decode_varint(data) {
        assert!(consumed >= 1 && consumed <= data.len());

        let mut reencoded = Vec::new();
        encode_varint(value, &mut reencoded);
        let (redecoded, reconsumed) =
            decode_varint(&reencoded).expect("re-encoded varint must decode");
        assert_eq!(value, redecoded);
        assert_eq!(reconsumed, reencoded.len());
    }
});
