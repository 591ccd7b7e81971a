#![no_main]

use std::collections::HashSet;

use libfuzzer_sys::fuzz_target;

use labelgen_core::{LabelError, RangeLabelGenerator};

fn read_i64(bytes: &[u8]) -> i64 {
    let mut buf = [0u8; 8];
    buf[..bytes.len()].copy_from_slice(bytes);
    i64::from_le_bytes(buf)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }
    let lower = read_i64(&data[0..8]);
    // Cap the span at 4096 values for speed
    let span = read_i64(&data[8..16]).rem_euclid(4096);
    let upper = lower.saturating_add(span);

    let mut gen = match RangeLabelGenerator::new(lower, upper) {
        Ok(gen) => gen,
        Err(LabelError::InvalidRange { .. }) => {
            assert!(lower >= upper);
            return;
        }
        Err(e) => panic!("unexpected construction error: {e}"),
    };

    // Remaining bytes are non-zero divisors, two bytes each
    let mut seen = HashSet::new();
    for chunk in data[16..].chunks(2) {
        let divisor = i64::from(i16::from_le_bytes([chunk[0], *chunk.get(1).unwrap_or(&1)]));
        if divisor == 0 {
            continue;
        }
        let rejected = gen.add_divisor_label(divisor, divisor.to_string()).is_err();
        assert_eq!(rejected, !seen.insert(divisor));
    }
    assert_eq!(gen.rules().len(), seen.len());

    let mut produced = 0u64;
    while !gen.is_completed() {
        let value = gen.current_value();
        let line = gen.produce_line().unwrap();
        assert!(!line.is_empty());
        if gen.rules().iter().all(|r| !r.matches(value)) {
            assert_eq!(line, value.to_string());
        }
        produced += 1;
    }
    assert_eq!(produced, gen.total_count());
    assert!(gen.produce_line().is_err());
});
