//! Core library for decoding VectorNav `$VNYMR` IMU feeds.
//!
//! This crate implements the parsing pipeline used by the CLI: a line
//! source frames the serial byte stream into candidate sentences, the
//! sentence layer (layout/validator/decoder) checks framing and checksum
//! integrity and decodes the twelve numeric fields into a [`Reading`].
//! Parsing is pure and side-effect free; all I/O is isolated in `source`
//! modules and in the binary.
//!
//! Invariants:
//! - A [`Reading`] exists only if checksum verification and all twelve
//!   field decodes succeeded; there is no partially-valid Reading.
//! - Every rejection reason is a distinct [`SentenceError`] variant.
//! - The parser holds no state across calls and may be invoked
//!   concurrently on independent input.
//!
//! # Examples
//! ```
//! use vnfeed_core::parse_sentence;
//!
//! let line = "$VNYMR,+104.977,+004.548,-001.276,-00.8012,-02.7376,+01.0070,\
//!             +00.837,+00.235,-10.414,-00.002081,-00.001151,+00.002113*61\r\n";
//! let reading = parse_sentence(line)?;
//! assert_eq!(reading.orientation().yaw, 104.977);
//! # Ok::<(), vnfeed_core::SentenceError>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod sentence;
mod source;

pub use sentence::{SentenceError, parse_sentence};
pub use source::{LineSource, ReaderLineSource, SourceError};

/// One validated IMU reading decoded from a `$VNYMR` sentence.
///
/// Immutable value object: twelve `f64` fields in the documented wire
/// order, no identity beyond the field values and no back-reference to the
/// sentence text. Serializes with lower-camel-case names (`magX`,
/// `accelY`, ...).
///
/// # Examples
/// ```
/// use vnfeed_core::Reading;
///
/// let reading = Reading::from_wire_order([1.0; 12]);
/// let json = serde_json::to_value(&reading).unwrap();
/// assert_eq!(json["magX"], 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// Yaw angle in degrees.
    pub yaw: f64,
    /// Pitch angle in degrees.
    pub pitch: f64,
    /// Roll angle in degrees.
    pub roll: f64,
    /// X-axis magnetic field (normalized, unitless).
    pub mag_x: f64,
    /// Y-axis magnetic field (normalized, unitless).
    pub mag_y: f64,
    /// Z-axis magnetic field (normalized, unitless).
    pub mag_z: f64,
    /// X-axis acceleration in m/s².
    pub accel_x: f64,
    /// Y-axis acceleration in m/s².
    pub accel_y: f64,
    /// Z-axis acceleration in m/s².
    pub accel_z: f64,
    /// X-axis angular rate in rad/s.
    pub gyro_x: f64,
    /// Y-axis angular rate in rad/s.
    pub gyro_y: f64,
    /// Z-axis angular rate in rad/s.
    pub gyro_z: f64,
}

impl Reading {
    /// Build a Reading from the twelve decoded values in wire order
    /// (yaw, pitch, roll, mag X/Y/Z, accel X/Y/Z, gyro X/Y/Z).
    pub fn from_wire_order(values: [f64; 12]) -> Self {
        let [
            yaw,
            pitch,
            roll,
            mag_x,
            mag_y,
            mag_z,
            accel_x,
            accel_y,
            accel_z,
            gyro_x,
            gyro_y,
            gyro_z,
        ] = values;
        Reading {
            yaw,
            pitch,
            roll,
            mag_x,
            mag_y,
            mag_z,
            accel_x,
            accel_y,
            accel_z,
            gyro_x,
            gyro_y,
            gyro_z,
        }
    }

    /// Reduced read-only view for consumers that need orientation only.
    pub fn orientation(&self) -> Orientation {
        Orientation {
            yaw: self.yaw,
            pitch: self.pitch,
            roll: self.roll,
        }
    }
}

/// Orientation-only projection of a [`Reading`].
///
/// # Examples
/// ```
/// use vnfeed_core::Reading;
///
/// let mut values = [0.0; 12];
/// values[0] = 90.0;
/// let orientation = Reading::from_wire_order(values).orientation();
/// assert_eq!(orientation.yaw, 90.0);
/// assert_eq!(orientation.pitch, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    /// Yaw angle in degrees.
    pub yaw: f64,
    /// Pitch angle in degrees.
    pub pitch: f64,
    /// Roll angle in degrees.
    pub roll: f64,
}
