//! Metadata embedded in time-based and node-based UUIDs.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::{Error, Uuid};

/// Number of 100-nanosecond ticks between 1582-10-15 and 1970-01-01 (141427 days).
pub(crate) const GREGORIAN_OFFSET: u64 = 0x01b2_1dd2_1381_4000;

const TICKS_PER_SECOND: i64 = 10_000_000;

impl Uuid {
    /// Returns the embedded creation time as 100-nanosecond intervals relative to the Unix epoch.
    ///
    /// Versions 1 and 6 carry a 60-bit Gregorian tick count, which may predate 1970 and is then
    /// negative. Version 7 carries Unix milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] for every other version.
    pub fn unix_ts_100ns(&self) -> Result<i64, Error> {
        let msb = self.most_significant_bits();
        let gregorian = |ticks: u64| ticks as i64 - GREGORIAN_OFFSET as i64;
        match self.version() {
            1 => Ok(gregorian(
                (msb & 0xfff) << 48 | ((msb >> 16) & 0xffff) << 32 | msb >> 32,
            )),
            6 => Ok(gregorian((msb >> 16) << 12 | (msb & 0xfff))),
            7 => Ok((msb >> 16) as i64 * (TICKS_PER_SECOND / 1000)),
            version => Err(Error::Unsupported {
                operation: "timestamp",
                version,
            }),
        }
    }

    /// Returns the embedded creation time of a version 1, 6, or 7 UUID.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidkit::Uuid;
    ///
    /// let x = "017f22e2-79b0-7cc3-98c4-dc0c0c07398f".parse::<Uuid>()?;
    /// assert_eq!(x.timestamp()?.to_rfc3339(), "2022-02-22T19:22:22+00:00");
    ///
    /// let y = "919108f7-52d1-4320-9bac-f847db4148a8".parse::<Uuid>()?;
    /// assert!(y.timestamp().is_err());
    /// # Ok::<(), uuidkit::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] for every other version.
    pub fn timestamp(&self) -> Result<DateTime<Utc>, Error> {
        let ticks = self.unix_ts_100ns()?;
        let secs = ticks.div_euclid(TICKS_PER_SECOND);
        let nanos = ticks.rem_euclid(TICKS_PER_SECOND) as u32 * 100;
        DateTime::from_timestamp(secs, nanos)
            .ok_or_else(|| Error::format(format!("timestamp out of range: {ticks}")))
    }

    /// Returns the 48-bit node id of a version 1 UUID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] for every other version.
    pub fn node(&self) -> Result<[u8; 6], Error> {
        match self.version() {
            1 => {
                let b = self.as_bytes();
                Ok([b[10], b[11], b[12], b[13], b[14], b[15]])
            }
            version => Err(Error::Unsupported {
                operation: "node",
                version,
            }),
        }
    }

    /// Renders the node id of a version 1 UUID as uppercase hex pairs joined by `separator`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] for every other version.
    pub fn node_with_separator(&self, separator: &str) -> Result<String, Error> {
        Ok(self
            .node()?
            .iter()
            .map(|b| hex::encode_upper([*b]))
            .collect::<Vec<_>>()
            .join(separator))
    }

    /// Renders the node id of a version 1 UUID as a colon-separated MAC address.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidkit::Uuid;
    ///
    /// let x = "c232ab00-9414-11ec-b3c8-9f6bdeced846".parse::<Uuid>()?;
    /// assert_eq!(x.mac()?, "9F:6B:DE:CE:D8:46");
    /// assert_eq!(x.node_with_separator("-")?, "9F-6B-DE-CE-D8-46");
    /// # Ok::<(), uuidkit::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] for every other version.
    pub fn mac(&self) -> Result<String, Error> {
        self.node_with_separator(":")
    }
}

impl fmt::Debug for Uuid {
    /// Renders the canonical form plus whatever metadata the version carries.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Uuid");
        s.field("value", &self.encode().as_str())
            .field("version", &self.version());
        if let Ok(timestamp) = self.timestamp() {
            s.field("timestamp", &timestamp);
        }
        if let Ok(mac) = self.mac() {
            s.field("node", &mac);
        }
        s.finish()
    }
}
