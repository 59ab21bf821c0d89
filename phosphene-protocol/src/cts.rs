//! Current Time payload decoding.
//!
//! The radio co-processor relays the value of the host's Current Time
//! characteristic verbatim. The layout is positional:
//!
//! ```text
//! offset  0..2   year        u16, little-endian
//! offset  2      month       1-12
//! offset  3      day         1-31
//! offset  4      hour        0-23
//! offset  5      minute      0-59
//! offset  6      second      0-59
//! offset  7      day of week (optional; 0 = unknown, 1 = Monday)
//! offset  8..    fractions / adjust reason (ignored)
//! ```
//!
//! Only the first seven bytes are required. Hosts routinely send the full
//! ten-byte characteristic; the tail is ignored.

/// Minimum payload length: everything up to and including `second`.
pub const CTS_MIN_LEN: usize = 7;

/// Errors from [`CtsTime::decode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CtsError {
    /// Payload shorter than the required field width
    Truncated,
    /// A decoded field is outside its valid range
    OutOfRange,
}

/// A decoded wall-clock time from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CtsTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Present only when the host sent the 8th byte
    pub day_of_week: Option<u8>,
}

impl CtsTime {
    /// Decode a relayed Current Time payload.
    ///
    /// Payloads shorter than [`CTS_MIN_LEN`] are rejected. Fields that the
    /// clock model displays are range-checked: a host that hands us
    /// `hour = 200` gets its update dropped rather than rendered. The
    /// calendar stays carried by the internal tick until the next good sync.
    pub fn decode(payload: &[u8]) -> Result<Self, CtsError> {
        if payload.len() < CTS_MIN_LEN {
            return Err(CtsError::Truncated);
        }

        let time = Self {
            year: u16::from_le_bytes([payload[0], payload[1]]),
            month: payload[2],
            day: payload[3],
            hour: payload[4],
            minute: payload[5],
            second: payload[6],
            day_of_week: payload.get(7).copied(),
        };

        if !(1..=12).contains(&time.month)
            || !(1..=31).contains(&time.day)
            || time.hour > 23
            || time.minute > 59
            || time.second > 59
        {
            return Err(CtsError::OutOfRange);
        }

        Ok(time)
    }
}
