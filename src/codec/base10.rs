use super::Codec;
use crate::Error;

/// Decimal codec: the bytes are read as one unsigned big-endian integer.
///
/// This codec is lossy with respect to leading zero bytes, which carry no numeric value. An empty
/// input encodes to `"0"`, and `"0"` decodes to an empty vector.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Base10;

impl Codec for Base10 {
    fn encode(&self, bytes: &[u8]) -> String {
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        let mut magnitude = bytes[start..].to_vec();
        if magnitude.is_empty() {
            return "0".to_owned();
        }

        // long division by 10, collecting digits least significant first
        let mut digits = Vec::with_capacity(magnitude.len() * 5 / 2 + 1);
        while !magnitude.is_empty() {
            let mut rem = 0u32;
            for e in magnitude.iter_mut() {
                let acc = (rem << 8) | *e as u32;
                *e = (acc / 10) as u8;
                rem = acc % 10;
            }
            digits.push(b'0' + rem as u8);
            let zeros = magnitude.iter().take_while(|&&b| b == 0).count();
            magnitude.drain(..zeros);
        }
        digits.iter().rev().map(|&d| d as char).collect()
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, Error> {
        if text.is_empty() || !text.bytes().all(|c| c.is_ascii_digit()) {
            return Err(Error::format("base10 accepts only the digits 0-9"));
        }

        let mut magnitude: Vec<u8> = Vec::with_capacity(text.len() / 2 + 1);
        for c in text.bytes() {
            let mut carry = (c - b'0') as u32;
            for e in magnitude.iter_mut().rev() {
                let acc = *e as u32 * 10 + carry;
                *e = acc as u8;
                carry = acc >> 8;
            }
            if carry > 0 {
                magnitude.insert(0, carry as u8);
            }
        }

        // keep the minimal big-endian form
        let zeros = magnitude.iter().take_while(|&&b| b == 0).count();
        magnitude.drain(..zeros);
        Ok(magnitude)
    }
}
