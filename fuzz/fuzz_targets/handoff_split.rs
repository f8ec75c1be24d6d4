#![no_main]

use std::thread;

use handoffrs::{HandoffBuffer, HandoffConfig, HandoffError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u8, u8, Vec<u8>)| {
    let (write_size, read_size, data) = input;
    let write_size = write_size as usize + 1;
    let read_size = read_size as usize + 1;

    // Small retained capacity so the release path is exercised too.
    let config = HandoffConfig::new(0, 64).unwrap();
    let buffer = HandoffBuffer::with_config(config).unwrap();

    thread::scope(|s| {
        let writer = s.spawn(|| {
            for part in data.chunks(write_size) {
                assert_eq!(buffer.write(part), Ok(part.len()));
            }
        });

        let mut out = Vec::with_capacity(data.len());
        let mut dst = vec![0u8; read_size];
        while out.len() < data.len() {
            match buffer.read(&mut dst) {
                Ok(n) => {
                    assert!(n <= read_size);
                    out.extend_from_slice(&dst[..n]);
                }
                Err(HandoffError::EndOfStream) => thread::yield_now(),
                Err(e) => panic!("unexpected read error: {}", e),
            }
        }

        writer.join().unwrap();

        // Verify: bytes arrive intact and in order
        assert_eq!(out, data);
    });

    // Verify: nothing left behind
    assert!(buffer.is_empty());
    assert!(!buffer.has_pending_write());
});
