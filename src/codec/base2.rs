use super::Codec;
use crate::Error;

/// Binary codec: every byte becomes an eight-character group of `0`/`1`, most significant bit
/// first.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Base2;

impl Codec for Base2 {
    fn encode(&self, bytes: &[u8]) -> String {
        let mut buffer = String::with_capacity(bytes.len() * 8);
        for e in bytes {
            for shift in (0..8).rev() {
                buffer.push(if (e >> shift) & 1 == 1 { '1' } else { '0' });
            }
        }
        buffer
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, Error> {
        if text.len() % 8 != 0 {
            return Err(Error::format(format!(
                "base2 length must be a multiple of 8, found {}",
                text.len()
            )));
        }
        text.as_bytes()
            .chunks_exact(8)
            .map(|group| {
                group.iter().try_fold(0u8, |acc, &c| match c {
                    b'0' => Ok(acc << 1),
                    b'1' => Ok((acc << 1) | 1),
                    _ => Err(Error::format("base2 accepts only '0' and '1'")),
                })
            })
            .collect()
    }
}
