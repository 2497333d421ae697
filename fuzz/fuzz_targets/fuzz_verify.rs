#![no_main]

use jsonguard::Verifier;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let unrestricted = Verifier::default().verify_bytes(data);

    // serde_json accepts a strict subset of what an unrestricted verifier
    // accepts (it additionally enforces surrogate pairing, number range, and
    // its own recursion limit), so its successes must all pass.
    if serde_json::from_slice::<serde_json::Value>(data).is_ok() {
        assert!(
            unrestricted.is_ok(),
            "serde_json parsed input rejected as {:?}",
            unrestricted
        );
    }

    // Limited verifiers must reject with a limit or grammar error, never
    // panic, regardless of input shape.
    let limited = Verifier::builder()
        .max_container_depth(16)
        .max_array_element_count(8)
        .max_object_entry_count(8)
        .max_object_key_length(32)
        .max_string_value_length(32)
        .build()
        .unwrap();
    let _ = limited.verify_bytes(data);
});
