use ::base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};

use super::Codec;
use crate::Error;

/// Standard alphabet, no `=` on output, either form accepted on input.
const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Base64 codec over the standard alphabet.
///
/// Output is unpadded so that a UUID encodes to exactly 22 characters.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Base64;

impl Codec for Base64 {
    fn encode(&self, bytes: &[u8]) -> String {
        ENGINE.encode(bytes)
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, Error> {
        ENGINE
            .decode(text)
            .map_err(|err| Error::format(format!("base64: {err}")))
    }
}
