//! Error type shared by the codecs and the UUID value type.

/// Errors produced by decoding, parsing, and metadata extraction.
///
/// Every fallible operation either fully succeeds or returns one of these without side effects.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum Error {
    /// Malformed text passed to a codec or to the UUID string parser.
    #[error("invalid format: {0}")]
    Format(String),

    /// A byte sequence of the wrong length passed where exactly 16 bytes are required.
    #[error("invalid length: expected 16 bytes, found {0}")]
    Size(usize),

    /// Metadata requested from a UUID whose version does not carry it.
    #[error("`{operation}` is not supported by version {version} UUIDs")]
    Unsupported {
        /// Name of the rejected operation.
        operation: &'static str,
        /// Version nibble of the UUID the operation was applied to.
        version: u8,
    },
}

impl Error {
    pub(crate) fn format(reason: impl Into<String>) -> Self {
        Self::Format(reason.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    /// Renders human-readable messages
    #[test]
    fn renders_human_readable_messages() {
        assert_eq!(
            Error::format("odd number of digits").to_string(),
            "invalid format: odd number of digits"
        );
        assert_eq!(
            Error::Size(15).to_string(),
            "invalid length: expected 16 bytes, found 15"
        );
        assert_eq!(
            Error::Unsupported {
                operation: "node",
                version: 4
            }
            .to_string(),
            "`node` is not supported by version 4 UUIDs"
        );
    }
}
