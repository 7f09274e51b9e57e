//! Codec behaviour through the public API.

use rand::Rng;
use sextet::{Alphabet, Codec, CodecError, ErrorKind, STANDARD_SYMBOLS, decode, encode};

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::rng();
    let length = rng.random_range(0..=100);
    (0..length).map(|_| rng.random::<u8>()).collect()
}

#[test]
fn random_blobs_round_trip() {
    for _ in 0..200 {
        let blob = generate_blob();
        let encoded = encode(&blob);
        assert_eq!(encoded.len() % 4, 0);
        assert_eq!(decode(&encoded).unwrap(), blob, "encoded {encoded}");
    }
}

#[test]
fn random_blobs_with_garbage_suffix_are_rejected() {
    for _ in 0..100 {
        let blob = generate_blob();
        let invalid = format!("{}!!!!", encode(&blob));
        let err = decode(&invalid).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter, "input {invalid:?}");
    }
}

#[test]
fn decoded_length_drops_one_byte_per_pad() {
    for (encoded, expected) in [("TWFu", 3), ("TWE=", 2), ("TQ==", 1), ("TWFuTQ==", 4)] {
        assert_eq!(decode(encoded).unwrap().len(), expected);
    }
}

#[test]
fn hello_world() {
    assert_eq!(encode(b"hello world"), "aGVsbG8gd29ybGQ=");
    assert_eq!(decode("aGVsbG8gd29ybGQ=").unwrap(), b"hello world");
}

#[test]
fn padding_only_in_final_group() {
    let err = decode("TQ==TQ==").unwrap_err();
    assert_eq!(err, CodecError::InvalidPadding { position: 2 });
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
}

#[test]
fn failed_decode_reports_first_bad_symbol() {
    let err = decode("TWFu TWF").unwrap_err();
    assert_eq!(
        err,
        CodecError::InvalidCharacter {
            char: ' ',
            position: 4
        }
    );
}

#[test]
fn custom_codec_does_not_accept_standard_padding() {
    let codec = Codec::new(Alphabet::from_chars(STANDARD_SYMBOLS, '~').unwrap());
    assert_eq!(codec.encode(b"M"), "TQ~~");
    assert_eq!(
        codec.decode("TQ=="),
        Err(CodecError::InvalidCharacter {
            char: '=',
            position: 2
        })
    );
}

#[test]
fn text_through_codec() {
    let bytes = sextet::text::to_code_unit_bytes("Ma");
    let encoded = encode(&bytes);
    assert_eq!(encoded, "TQBhAA==");
    let decoded = decode(&encoded).unwrap();
    assert_eq!(sextet::text::from_code_unit_bytes(&decoded).unwrap(), "Ma");
}
