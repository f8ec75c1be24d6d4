//! A paced producer handing frames to a consumer.
//!
//! Run with:
//!     RUST_LOG=handoffrs=trace cargo run --example producer_consumer

use std::io::{Read, Write};
use std::thread;
use std::time::{Duration, Instant};

use handoffrs::{HandoffBuffer, HandoffConfig};

const FRAME_SIZE: usize = 4 * 1024;
const FRAMES: usize = 16;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let buffer = HandoffBuffer::with_config(HandoffConfig::new(FRAME_SIZE, 4 * FRAME_SIZE)?)?;
    let start = Instant::now();

    thread::scope(|s| -> Result<(), Box<dyn std::error::Error>> {
        let producer = s.spawn(|| -> std::io::Result<()> {
            let mut writer = &buffer;
            for i in 0..FRAMES {
                let frame = vec![i as u8; FRAME_SIZE];
                // Returns only after the consumer has taken the whole frame.
                writer.write_all(&frame)?;
                println!("[{:?}] produced frame {}", start.elapsed(), i);
            }
            Ok(())
        });

        // A slow consumer: the producer is paced to its speed.
        let mut reader = &buffer;
        let mut dst = [0u8; 1024];
        let mut consumed = 0usize;
        while consumed < FRAME_SIZE * FRAMES {
            let n = Read::read(&mut reader, &mut dst)?;
            if n == 0 {
                thread::yield_now();
                continue;
            }
            consumed += n;
            thread::sleep(Duration::from_micros(200));
        }

        producer.join().map_err(|_| "producer panicked")??;
        println!("\nTotal: {} frames, {} bytes", FRAMES, consumed);
        Ok(())
    })?;

    Ok(())
}
