//! Alternate renderings of the 8-4-4-4-12 form.

use std::fmt;

use crate::Uuid;

/// Letter case and grouping options for rendering a [`Uuid`] as hexadecimal text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct UuidFormat {
    uppercase: bool,
    hyphenated: bool,
}

impl UuidFormat {
    /// `c232ab00-9414-11ec-b3c8-9f6bdeced846`
    pub const HYPHENATED: Self = Self::new(false, true);

    /// `C232AB00-9414-11EC-B3C8-9F6BDECED846`
    pub const UPPER_HYPHENATED: Self = Self::new(true, true);

    /// `c232ab00941411ecb3c89f6bdeced846`
    pub const SIMPLE: Self = Self::new(false, false);

    /// `C232AB00941411ECB3C89F6BDECED846`
    pub const UPPER_SIMPLE: Self = Self::new(true, false);

    /// Creates a format from its two switches.
    pub const fn new(uppercase: bool, hyphenated: bool) -> Self {
        Self {
            uppercase,
            hyphenated,
        }
    }

    /// Returns `true` if hex digits are rendered in uppercase.
    pub const fn is_uppercase(&self) -> bool {
        self.uppercase
    }

    /// Returns `true` if the groups are separated by hyphens.
    pub const fn is_hyphenated(&self) -> bool {
        self.hyphenated
    }

    /// Returns the number of characters this format produces.
    pub const fn output_len(&self) -> usize {
        if self.hyphenated {
            36
        } else {
            32
        }
    }
}

impl Default for UuidFormat {
    fn default() -> Self {
        Self::HYPHENATED
    }
}

impl Uuid {
    /// Returns a [`fmt::Display`] adapter rendering this value with the given options.
    ///
    /// Every rendering parses back with [`str::parse`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidkit::{Uuid, UuidFormat};
    ///
    /// let x = "c232ab00-9414-11ec-b3c8-9f6bdeced846".parse::<Uuid>()?;
    /// assert_eq!(
    ///     x.format(UuidFormat::UPPER_SIMPLE).to_string(),
    ///     "C232AB00941411ECB3C89F6BDECED846"
    /// );
    /// # Ok::<(), uuidkit::Error>(())
    /// ```
    pub const fn format(&self, format: UuidFormat) -> Formatted {
        Formatted {
            value: *self,
            format,
        }
    }
}

/// A [`Uuid`] paired with a [`UuidFormat`], created by [`Uuid::format`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Formatted {
    value: Uuid,
    format: UuidFormat,
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let canonical = self.value.encode();
        let mut buffer = [0u8; 36];
        let mut len = 0;
        for c in canonical.bytes() {
            if c == b'-' && !self.format.hyphenated {
                continue;
            }
            buffer[len] = if self.format.uppercase {
                c.to_ascii_uppercase()
            } else {
                c
            };
            len += 1;
        }
        debug_assert_eq!(len, self.format.output_len());
        // the canonical form is ASCII and case mapping keeps it so
        f.write_str(std::str::from_utf8(&buffer[..len]).map_err(|_| fmt::Error)?)
    }
}

#[cfg(test)]
mod tests {
    use super::UuidFormat;
    use crate::Uuid;

    /// Renders every combination of case and grouping
    #[test]
    fn renders_every_combination_of_case_and_grouping() {
        let x = "C232AB00-9414-11EC-B3C8-9F6BDECED846".parse::<Uuid>().unwrap();
        let cases = [
            (UuidFormat::HYPHENATED, "c232ab00-9414-11ec-b3c8-9f6bdeced846"),
            (UuidFormat::UPPER_HYPHENATED, "C232AB00-9414-11EC-B3C8-9F6BDECED846"),
            (UuidFormat::SIMPLE, "c232ab00941411ecb3c89f6bdeced846"),
            (UuidFormat::UPPER_SIMPLE, "C232AB00941411ECB3C89F6BDECED846"),
        ];

        for (format, expected) in cases {
            let text = x.format(format).to_string();
            assert_eq!(text, expected);
            assert_eq!(text.len(), format.output_len());
            assert_eq!(text.parse::<Uuid>(), Ok(x));
        }
    }

    /// Defaults to the canonical form
    #[test]
    fn defaults_to_the_canonical_form() {
        let x = Uuid::from(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef_u128);
        assert_eq!(x.format(UuidFormat::default()).to_string(), x.to_string());
        assert!(UuidFormat::default().is_hyphenated());
        assert!(!UuidFormat::default().is_uppercase());
    }
}
