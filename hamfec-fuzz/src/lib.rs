//! Fuzzing harness for hamfec-core
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_decode

use hamfec_core::{decode_with_policy, encode, NoopSink, TruncatedPolicy};

pub fn fuzz_decode(data: &[u8]) {
    // Try to decode - should never panic
    let _ = hamfec_core::decode(data);
    let _ = decode_with_policy(data, TruncatedPolicy::Partial, &mut NoopSink);
}

pub fn fuzz_round_trip(data: &[u8]) {
    let payload = &data[..data.len().min(hamfec_core::constants::MAX_PAYLOAD_LEN)];

    let encoded = encode(payload).expect("payload within limit");
    let decoded = hamfec_core::decode(&encoded).expect("clean stream decodes");
    assert_eq!(decoded.data.as_ref(), payload);
    assert_eq!(decoded.corrected_errors, 0);
}
