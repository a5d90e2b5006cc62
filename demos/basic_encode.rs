//! Basic encoding example

use hamfec_core::{constants::encoded_len, decode, encode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("hamfec Basic Encoding Example\n");

    let readings = ["T=21.5", "H=48", "P=1013.2", "battery low"];

    let mut output = Vec::new();
    for reading in readings {
        let encoded = encode(reading.as_bytes())?;
        assert_eq!(encoded.len(), encoded_len(reading.len()));

        println!(
            "{:<12} {:>2} bytes -> {:>2} bytes: {}",
            reading,
            reading.len(),
            encoded.len(),
            hex_string(&encoded)
        );
        output.extend_from_slice(&encoded);
    }

    // Packets can be sent back to back; each length prefix marks its own end.
    let mut rest = output.as_slice();
    while !rest.is_empty() {
        let used = hamfec_core::decoder::required_len(rest).ok_or("short packet")?;
        let decoded = decode(&rest[..used])?;
        println!("Received: {}", String::from_utf8_lossy(&decoded.data));
        rest = &rest[used..];
    }

    std::fs::write("example_output.ham", &output)?;
    println!("\nWrote {} bytes to example_output.ham", output.len());
    println!("Use 'hamfec inspect --input example_output.ham' to look at the first packet");

    Ok(())
}

fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
