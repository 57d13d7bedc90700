pub const SENTENCE_ID: &str = "$VNYMR";

pub const START_DELIMITER: char = '$';
pub const CHECKSUM_DELIMITER: char = '*';
pub const FIELD_DELIMITER: char = ',';

pub const CHECKSUM_HEX_LEN: usize = 2;

/// Identifier token plus twelve numeric fields.
pub const TOKEN_COUNT: usize = 13;

/// Field names in wire order, used for error attribution and JSON output.
pub const FIELD_NAMES: [&str; 12] = [
    "yaw", "pitch", "roll", "magX", "magY", "magZ", "accelX", "accelY", "accelZ", "gyroX", "gyroY",
    "gyroZ",
];
