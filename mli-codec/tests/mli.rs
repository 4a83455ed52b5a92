use mli_codec::{
    MliType, decode, encode,
    error::{DecodeError, EncodeError},
};

struct Case {
    name: &'static str,
    size: usize,
    encoded: &'static str,
    invalid: Option<&'static str>,
    value: i64,
    embedded_header: i64,
}

const CASES: [Case; 7] = [
    Case {
        name: "2I",
        size: 2,
        encoded: "002d",
        invalid: Some("0001"),
        value: 43,
        embedded_header: 0,
    },
    Case {
        name: "2E",
        size: 2,
        encoded: "002b",
        invalid: None,
        value: 43,
        embedded_header: 0,
    },
    Case {
        name: "4I",
        size: 4,
        encoded: "00000035",
        invalid: Some("00000001"),
        value: 49,
        embedded_header: 0,
    },
    Case {
        name: "4E",
        size: 4,
        encoded: "00000022",
        invalid: None,
        value: 34,
        embedded_header: 0,
    },
    Case {
        name: "2EE",
        size: 2,
        encoded: "0036",
        invalid: None,
        value: 56,
        embedded_header: 2,
    },
    Case {
        name: "2BCD2",
        size: 4,
        encoded: "00000288",
        invalid: Some("00000001"),
        value: 284,
        embedded_header: 0,
    },
    Case {
        name: "A4E",
        size: 4,
        encoded: "30303433",
        invalid: None,
        value: 43,
        embedded_header: 0,
    },
];

#[test]
fn sample_mlis_are_decoded() {
    for c in &CASES {
        let bytes = hex::decode(c.encoded).unwrap();
        assert_eq!(c.value as usize, decode(c.name, &bytes).unwrap(), "{}", c.name);
    }
}

#[test]
fn sample_lengths_are_encoded() {
    for c in &CASES {
        let bytes = encode(c.name, c.value).unwrap();
        assert_eq!(c.encoded, hex::encode(&bytes), "{}", c.name);
        assert_eq!(c.size, bytes.len(), "{}", c.name);
    }
}

#[test]
fn empty_messages_survive_encoding() {
    for c in &CASES {
        let bytes = encode(c.name, c.embedded_header).unwrap();
        assert_eq!(
            c.embedded_header as usize,
            decode(c.name, &bytes).unwrap(),
            "{}",
            c.name
        );
    }
}

#[test]
fn malformed_mlis_yield_length_errors() {
    for c in CASES.iter().filter(|c| c.invalid.is_some()) {
        let bytes = hex::decode(c.invalid.unwrap_or_default()).unwrap();
        let res = decode(c.name, &bytes);
        assert!(
            matches!(res, Err(DecodeError::Length { .. })),
            "{}: {res:?}",
            c.name
        );
    }
}

#[test]
fn wrongly_sized_input_is_rejected() {
    for c in &CASES {
        let too_big = vec![0; c.size + 10_000];
        let too_small = vec![0; c.size - 1];
        for bytes in [too_big, too_small] {
            let res = decode(c.name, &bytes);
            assert_eq!(
                Err(DecodeError::ByteSize {
                    mli_type: c.name.parse().unwrap(),
                    expected: c.size,
                    actual: bytes.len(),
                }),
                res,
                "{}",
                c.name
            );
        }
    }
}

#[test]
fn negative_lengths_are_rejected() {
    for c in &CASES {
        assert_eq!(Err(EncodeError::Length(-1)), encode(c.name, -1), "{}", c.name);
    }
}

#[test]
fn unknown_types_are_rejected() {
    assert!(matches!(
        encode("Invalid", 0),
        Err(EncodeError::UnknownType(_))
    ));
    assert!(matches!(
        decode("Invalid", &[]),
        Err(DecodeError::UnknownType(_))
    ));
}

#[test]
fn random_strings_are_not_ascii_mlis() {
    assert!(matches!(
        decode("A4E", b"helo"),
        Err(DecodeError::Format { .. })
    ));
}

#[test]
fn typed_and_named_apis_agree() {
    for c in &CASES {
        let mli_type: MliType = c.name.parse().unwrap();
        assert_eq!(c.size, mli_type.size());
        assert_eq!(
            encode(c.name, c.value).unwrap(),
            mli_type.encode(c.value as usize).unwrap()
        );
    }
}

#[test]
fn mli_types_serialize_as_their_names() {
    for mli_type in MliType::ALL {
        let json = serde_json::to_string(&mli_type).unwrap();
        assert_eq!(format!("\"{mli_type}\""), json);
        assert_eq!(mli_type, serde_json::from_str::<MliType>(&json).unwrap());
    }
    assert!(serde_json::from_str::<MliType>("\"bogus\"").is_err());
}
