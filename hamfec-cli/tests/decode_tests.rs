use std::fs;
use tempfile::tempdir;

use hamfec_cli::{
    commands::{corrupt, decode, encode},
    StreamFormat,
};

/// Helper: encode `payload` into `dir/packet.ham` and return its path
fn write_packet(dir: &std::path::Path, payload: &[u8]) -> String {
    let in_path = dir.join("payload.bin");
    let out_path = dir.join("packet.ham");
    fs::write(&in_path, payload).unwrap();
    encode::execute(
        in_path.to_str().unwrap(),
        out_path.to_str().unwrap(),
        false,
        StreamFormat::Raw,
    )
    .unwrap();
    out_path.to_str().unwrap().to_string()
}

#[test]
fn decode_clean_packet() {
    let td = tempdir().unwrap();
    let packet = write_packet(td.path(), b"hello radio");
    let out_path = td.path().join("decoded.bin");

    let report = decode::execute(
        &packet,
        out_path.to_str().unwrap(),
        false,
        StreamFormat::Raw,
        None,
    )
    .unwrap();

    assert_eq!(fs::read(&out_path).unwrap(), b"hello radio");
    assert!(report.complete);
    assert_eq!(report.corrected_errors, 0);
    assert_eq!(report.declared_len, Some(11));
}

#[test]
fn decode_after_corrupting_every_codeword() {
    let td = tempdir().unwrap();
    let payload = b"every codeword takes a hit";
    let packet = write_packet(td.path(), payload);
    let damaged = td.path().join("damaged.ham");
    let out_path = td.path().join("decoded.bin");
    let report_path = td.path().join("report.json");

    let flipped = corrupt::execute(
        &packet,
        damaged.to_str().unwrap(),
        &[],
        Some(3),
        StreamFormat::Raw,
    )
    .unwrap();
    assert_eq!(flipped, 2 * (payload.len() + 1));

    let report = decode::execute(
        damaged.to_str().unwrap(),
        out_path.to_str().unwrap(),
        false,
        StreamFormat::Raw,
        Some(report_path.to_str().unwrap()),
    )
    .unwrap();

    assert_eq!(fs::read(&out_path).unwrap(), payload);
    assert_eq!(report.corrected_errors as usize, flipped);
    assert_eq!(report.corrections.len(), payload.len() + 1);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["corrected_errors"], flipped);
    assert_eq!(json["complete"], true);
    assert_eq!(json["corrections"][0]["byte_index"], serde_json::Value::Null);
    assert_eq!(json["corrections"][1]["byte_index"], 0);
}

#[test]
fn decode_single_flipped_bit() {
    let td = tempdir().unwrap();
    let packet = write_packet(td.path(), &[0x01, 0x02, 0x03]);
    let damaged = td.path().join("damaged.ham");
    let out_path = td.path().join("decoded.bin");

    corrupt::execute(
        &packet,
        damaged.to_str().unwrap(),
        &[20],
        None,
        StreamFormat::Raw,
    )
    .unwrap();

    let report = decode::execute(
        damaged.to_str().unwrap(),
        out_path.to_str().unwrap(),
        false,
        StreamFormat::Raw,
        None,
    )
    .unwrap();

    assert_eq!(fs::read(&out_path).unwrap(), [0x01, 0x02, 0x03]);
    assert_eq!(report.corrected_errors, 1);
    assert_eq!(report.corrections[0].byte_index, Some(0));
    assert!(report.corrections[0].high_corrected);
}

#[test]
fn decode_truncated_packet() {
    let td = tempdir().unwrap();
    let packet = write_packet(td.path(), b"0123456789");
    let bytes = fs::read(&packet).unwrap();
    let short = td.path().join("short.ham");
    fs::write(&short, &bytes[..8]).unwrap();
    let out_path = td.path().join("decoded.bin");

    let err = decode::execute(
        short.to_str().unwrap(),
        out_path.to_str().unwrap(),
        false,
        StreamFormat::Raw,
        None,
    )
    .unwrap_err();
    assert!(format!("{:#}", err).contains("Insufficient data"));

    let report = decode::execute(
        short.to_str().unwrap(),
        out_path.to_str().unwrap(),
        true,
        StreamFormat::Raw,
        None,
    )
    .unwrap();
    assert!(!report.complete);
    assert_eq!(report.decoded_len, 3);
    assert_eq!(fs::read(&out_path).unwrap(), b"012");
}

#[test]
fn decode_hex_input_with_whitespace() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("packet.hex");
    let out_path = td.path().join("decoded.bin");
    fs::write(&in_path, "00 36\n8a e0\n").unwrap();

    decode::execute(
        in_path.to_str().unwrap(),
        out_path.to_str().unwrap(),
        false,
        StreamFormat::Hex,
        None,
    )
    .unwrap();

    assert_eq!(fs::read(&out_path).unwrap(), [0xA5]);
}

#[test]
fn corrupt_rejects_out_of_range() {
    let td = tempdir().unwrap();
    let packet = write_packet(td.path(), &[0xFF]);
    let damaged = td.path().join("damaged.ham");

    assert!(corrupt::execute(
        &packet,
        damaged.to_str().unwrap(),
        &[32],
        None,
        StreamFormat::Raw
    )
    .is_err());

    assert!(corrupt::execute(
        &packet,
        damaged.to_str().unwrap(),
        &[],
        Some(7),
        StreamFormat::Raw
    )
    .is_err());
}
