// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for snapshot decoding.
//!
//! Snapshots come from disk, so any byte string may show up. Decoding must
//! return Err on garbage, never panic. Anything that does decode must survive
//! a second encode/decode cycle byte for byte.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sift::snapshot;

fuzz_target!(|data: &[u8]| {
    let _ = snapshot::inspect(data);

    if let Ok(index) = snapshot::deserialize(data) {
        let reencoded = snapshot::serialize(&index).expect("decoded index must encode");
        let again = snapshot::deserialize(&reencoded).expect("re-encoded snapshot must decode");
        assert_eq!(again.doc_count(), index.doc_count());
        assert_eq!(
            snapshot::serialize(&again).expect("decoded index must encode"),
            reencoded,
            "snapshot encoding is not stable"
        );
    }
});
