//! Example pushing packets through a simulated noisy channel

use hamfec_core::{CorrectionEvent, Hamming74};
use rand::{Rng, SeedableRng};

/// Probability that any single bit is flipped on the air
const BIT_ERROR_RATE: f64 = 0.005;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("hamfec Noisy Link Example\n");

    let codec = Hamming74::new();
    let mut rng = rand::rngs::StdRng::seed_from_u64(2024);

    let mut delivered = 0;
    let mut damaged = 0;
    let mut corrected_total = 0;

    for i in 1..=50 {
        let payload = format!("packet {} from node 3, rssi -{} dBm", i, 60 + i % 30);
        let mut air = codec.encode(payload.as_bytes())?.to_vec();

        let mut flips = 0;
        for byte in air.iter_mut() {
            for bit in 0..8 {
                if rng.gen_bool(BIT_ERROR_RATE) {
                    *byte ^= 1 << bit;
                    flips += 1;
                }
            }
        }

        let mut blocks_hit = 0;
        let result = codec.decode_with_sink(&air, &mut |_: &CorrectionEvent| blocks_hit += 1);

        match result {
            Ok(decoded) if decoded.data.as_ref() == payload.as_bytes() => {
                delivered += 1;
                corrected_total += decoded.corrected_errors;
                if flips > 0 {
                    println!(
                        "Packet {:>2}: {} flips, {} corrections in {} blocks",
                        i, flips, decoded.corrected_errors, blocks_hit
                    );
                }
            }
            Ok(_) => {
                damaged += 1;
                println!("Packet {:>2}: {} flips, miscorrected", i, flips);
            }
            Err(e) => {
                damaged += 1;
                println!("Packet {:>2}: {} flips, lost: {}", i, flips, e);
            }
        }
    }

    println!("\nDelivered intact: {}", delivered);
    println!("Damaged or lost:  {}", damaged);
    println!("Corrections:      {}", corrected_total);

    Ok(())
}
