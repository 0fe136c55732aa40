use super::Codec;
use crate::Error;

const ENCODING_TABLE: &[u8; 91] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
abcdefghijklmnopqrstuvwxyz\
0123456789!#$%&()*+,./:;<=>?@[]^_`{|}~\"";

/// Reverse lookup of [`ENCODING_TABLE`]; `-1` marks bytes outside the alphabet.
const DECODING_TABLE: [i16; 256] = {
    let mut table = [-1i16; 256];
    let mut i = 0;
    while i < ENCODING_TABLE.len() {
        table[ENCODING_TABLE[i] as usize] = i as i16;
        i += 1;
    }
    table
};

/// basE91 codec.
///
/// Bits are packed least significant first into 13- or 14-bit codewords, each written as two
/// symbols (`value % 91`, then `value / 91`). The output is bit-exact with the classic basE91
/// implementation, so strings persisted elsewhere decode unchanged.
///
/// Decoding is lenient: characters outside the alphabet (whitespace, line breaks, `'` `-` `\`,
/// non-ASCII) are skipped rather than rejected, so it never fails.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Base91;

impl Codec for Base91 {
    fn encode(&self, bytes: &[u8]) -> String {
        let mut buffer = String::with_capacity(bytes.len() * 16 / 13 + 2);
        let mut push = |v: u32| buffer.push(ENCODING_TABLE[v as usize] as char);

        let mut queue = 0u32;
        let mut n_bits = 0u32;
        for &e in bytes {
            queue |= (e as u32) << n_bits;
            n_bits += 8;
            if n_bits > 13 {
                let mut value = queue & 0x1fff;
                if value > 88 {
                    queue >>= 13;
                    n_bits -= 13;
                } else {
                    // values this small would collide with the 14-bit range, so take one more bit
                    value = queue & 0x3fff;
                    queue >>= 14;
                    n_bits -= 14;
                }
                push(value % 91);
                push(value / 91);
            }
        }

        if n_bits > 0 {
            push(queue % 91);
            if n_bits > 7 || queue > 90 {
                push(queue / 91);
            }
        }
        buffer
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, Error> {
        let mut buffer = Vec::with_capacity(text.len() * 13 / 8);

        let mut queue = 0u32;
        let mut n_bits = 0u32;
        let mut pending: Option<u32> = None;
        for c in text.chars() {
            let Some(digit) = lookup(c) else {
                continue;
            };

            match pending.take() {
                None => pending = Some(digit),
                Some(first) => {
                    let value = first + digit * 91;
                    queue |= value << n_bits;
                    n_bits += if value & 0x1fff > 88 { 13 } else { 14 };
                    while n_bits > 7 {
                        buffer.push(queue as u8);
                        queue >>= 8;
                        n_bits -= 8;
                    }
                }
            }
        }

        if let Some(last) = pending {
            buffer.push((queue | last << n_bits) as u8);
        }
        Ok(buffer)
    }
}

fn lookup(c: char) -> Option<u32> {
    let code = u32::from(c);
    if code < 256 {
        u32::try_from(DECODING_TABLE[code as usize]).ok()
    } else {
        None
    }
}
