use std::fs;
use tempfile::tempdir;

use hamfec_cli::{commands::encode, StreamFormat};
use hamfec_core::{constants::encoded_len, decode};

#[test]
fn encode_raw_basic() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("payload.bin");
    let out_path = td.path().join("packet.ham");

    fs::write(&in_path, [0xA5]).unwrap();

    encode::execute(
        in_path.to_str().unwrap(),
        out_path.to_str().unwrap(),
        /*truncate*/ false,
        StreamFormat::Raw,
    )
    .unwrap();

    let bytes = fs::read(&out_path).unwrap();
    assert_eq!(bytes, [0x00, 0x36, 0x8A, 0xE0]);
}

#[test]
fn encode_hex_output() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("payload.txt");
    let out_path = td.path().join("packet.hex");

    fs::write(&in_path, "Hi").unwrap();

    encode::execute(
        in_path.to_str().unwrap(),
        out_path.to_str().unwrap(),
        false,
        StreamFormat::Hex,
    )
    .unwrap();

    let text = fs::read_to_string(&out_path).unwrap();
    assert_eq!(text.trim(), "005d1c6692c0");
}

#[test]
fn encode_oversize_fails_without_truncate() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("big.bin");
    let out_path = td.path().join("big.ham");

    fs::write(&in_path, vec![0x11u8; 400]).unwrap();

    let err = encode::execute(
        in_path.to_str().unwrap(),
        out_path.to_str().unwrap(),
        false,
        StreamFormat::Raw,
    )
    .unwrap_err();

    let message = format!("{:#}", err);
    assert!(message.starts_with("Failed to encode"));
    assert!(message.contains("Payload size 400 exceeds maximum 255"));
    assert!(!out_path.exists());
}

#[test]
fn encode_oversize_truncates_when_asked() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("big.bin");
    let out_path = td.path().join("big.ham");

    let payload: Vec<u8> = (0..400u32).map(|i| (i % 251) as u8).collect();
    fs::write(&in_path, &payload).unwrap();

    encode::execute(
        in_path.to_str().unwrap(),
        out_path.to_str().unwrap(),
        true,
        StreamFormat::Raw,
    )
    .unwrap();

    let bytes = fs::read(&out_path).unwrap();
    assert_eq!(bytes.len(), encoded_len(255));
    let decoded = decode(&bytes).unwrap();
    assert_eq!(decoded.data.as_ref(), &payload[..255]);
}

#[test]
fn encode_missing_input_reports_path() {
    let td = tempdir().unwrap();
    let missing = td.path().join("nope.bin");
    let out_path = td.path().join("out.ham");

    let err = encode::execute(
        missing.to_str().unwrap(),
        out_path.to_str().unwrap(),
        false,
        StreamFormat::Raw,
    )
    .unwrap_err();

    assert!(err.to_string().contains("Failed to read input file"));
}
