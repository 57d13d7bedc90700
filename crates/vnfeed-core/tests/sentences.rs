use vnfeed_core::sentence::checksum;
use vnfeed_core::{Reading, SentenceError, parse_sentence};

const SAMPLE: &str = "$VNYMR,+104.977,+004.548,-001.276,-00.8012,-02.7376,+01.0070,+00.837,+00.235,-10.414,-00.002081,-00.001151,+00.002113*61\r\n";

/// Wrap a payload (everything between `$` and `*`) into a framed sentence
/// with a freshly computed checksum.
fn frame(payload: &str) -> String {
    format!("${payload}*{:02X}\r\n", checksum(payload.as_bytes()))
}

fn wire_order(reading: &Reading) -> [f64; 12] {
    [
        reading.yaw,
        reading.pitch,
        reading.roll,
        reading.mag_x,
        reading.mag_y,
        reading.mag_z,
        reading.accel_x,
        reading.accel_y,
        reading.accel_z,
        reading.gyro_x,
        reading.gyro_y,
        reading.gyro_z,
    ]
}

#[test]
fn reference_sentence_decodes_exactly() {
    let reading = parse_sentence(SAMPLE).expect("reference sentence");
    assert_eq!(
        wire_order(&reading),
        [
            104.977, 4.548, -1.276, -0.8012, -2.7376, 1.007, 0.837, 0.235, -10.414, -0.002081,
            -0.001151, 0.002113
        ]
    );
}

#[test]
fn wrong_declared_checksum_reports_both_values() {
    let line = SAMPLE.replace("*61", "*60");
    match parse_sentence(&line).unwrap_err() {
        SentenceError::ChecksumMismatch { expected, actual } => {
            assert_eq!(expected, 0x61);
            assert_eq!(actual, 0x60);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unexpected_identifier_is_reported() {
    let payload = SAMPLE[1..SAMPLE.find('*').unwrap()].replace("VNYMR", "VNYMS");
    match parse_sentence(&frame(&payload)).unwrap_err() {
        SentenceError::UnexpectedSentenceType { got } => assert_eq!(got, "$VNYMS"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_field_is_a_count_mismatch() {
    let basis = &SAMPLE[1..SAMPLE.find('*').unwrap()];
    let mut tokens: Vec<&str> = basis.split(',').collect();
    tokens.pop();
    match parse_sentence(&frame(&tokens.join(","))).unwrap_err() {
        SentenceError::FieldCountMismatch { expected, got } => {
            assert_eq!(expected, 13);
            assert_eq!(got, 12);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_checksum_delimiter_is_malformed() {
    let line = SAMPLE.replace('*', "");
    assert!(matches!(
        parse_sentence(&line).unwrap_err(),
        SentenceError::MalformedFrame { found: 0 }
    ));
}

#[test]
fn unparsable_yaw_names_the_field() {
    let basis = &SAMPLE[1..SAMPLE.find('*').unwrap()];
    let payload = basis.replace("+104.977", "abc");
    match parse_sentence(&frame(&payload)).unwrap_err() {
        SentenceError::FieldParse { field, token, .. } => {
            assert_eq!(field, "yaw");
            assert_eq!(token, "abc");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn round_trip_preserves_every_field() {
    let reading = parse_sentence(SAMPLE).expect("reference sentence");
    let payload = format!(
        "VNYMR,{}",
        wire_order(&reading)
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(",")
    );
    let reparsed = parse_sentence(&frame(&payload)).expect("round trip");
    assert_eq!(reparsed, reading);
}

#[test]
fn any_single_bit_flip_in_the_basis_is_detected() {
    let star = SAMPLE.find('*').unwrap();
    for position in 1..star {
        let original = SAMPLE.as_bytes()[position];
        // Flipping '+' (0x2B) at bit 0 would create a second '*' and be
        // rejected as a framing error instead; the checksum claim only
        // covers flips that keep the frame shape.
        if original ^ 0x01 == b'*' {
            continue;
        }
        let mut corrupted = SAMPLE.as_bytes().to_vec();
        corrupted[position] ^= 0x01;
        let line = String::from_utf8(corrupted).expect("ascii sentence");
        assert!(
            matches!(
                parse_sentence(&line).unwrap_err(),
                SentenceError::ChecksumMismatch { .. }
            ),
            "flip at byte {position} was not detected"
        );
    }
}

#[test]
fn parsing_is_idempotent() {
    let first = parse_sentence(SAMPLE).expect("first parse");
    let second = parse_sentence(SAMPLE).expect("second parse");
    assert_eq!(first, second);
}

#[test]
fn first_invalid_field_wins_over_later_ones() {
    let basis = &SAMPLE[1..SAMPLE.find('*').unwrap()];
    let mut tokens: Vec<String> = basis.split(',').map(str::to_string).collect();
    tokens[2] = "nope".to_string();
    tokens[5] = "also-nope".to_string();
    match parse_sentence(&frame(&tokens.join(","))).unwrap_err() {
        SentenceError::FieldParse { field, token, .. } => {
            assert_eq!(field, "pitch");
            assert_eq!(token, "nope");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn out_of_range_values_are_accepted_as_is() {
    let reading = parse_sentence(&frame("VNYMR,720.5,0,0,0,0,0,0,0,0,0,0,0")).expect("syntactic");
    assert_eq!(reading.yaw, 720.5);
}
