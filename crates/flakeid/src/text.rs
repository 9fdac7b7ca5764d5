use crate::{Error, FlakeId, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD_NO_PAD;
use core::fmt;
use core::str::FromStr;

/// String representations a flake ID can be converted to and from.
///
/// Only [`TextFormat::Hex`] and [`TextFormat::Base64`] are implemented and
/// form the stable contract. [`TextFormat::Base32`] and [`TextFormat::Base58`]
/// are recognized names reserved for future use; [`encode`] and [`decode`]
/// reject them with [`Error::UnsupportedFormat`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TextFormat {
    /// Lowercase big-endian hexadecimal, 16 characters.
    Hex,
    /// Unpadded standard base64 of the big-endian 8-byte encoding.
    Base64,
    /// Reserved, not implemented.
    Base32,
    /// Reserved, not implemented.
    Base58,
}

impl TextFormat {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Base64 => "base64",
            Self::Base32 => "base32",
            Self::Base58 => "base58",
        }
    }
}

impl fmt::Display for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hex" => Ok(Self::Hex),
            "base64" => Ok(Self::Base64),
            "base32" => Ok(Self::Base32),
            "base58" => Ok(Self::Base58),
            other => Err(Error::UnsupportedFormat(other.to_owned())),
        }
    }
}

/// Converts a raw flake ID into its string form for the given format.
///
/// A zero input is rejected with [`Error::EmptyInput`]: no generator ever
/// produces 0 (the timestamp field alone makes real IDs astronomically
/// larger), so a zero here always means "no ID yet".
///
/// # Example
///
/// ```
/// use flakeid::{TextFormat, text};
///
/// let s = text::encode(4_290_444_552_448_220_549, TextFormat::Hex).unwrap();
/// assert_eq!(s, "3b8ab896b52f9d85");
/// ```
pub fn encode(raw: u64, format: TextFormat) -> Result<String> {
    if raw == 0 {
        return Err(Error::EmptyInput);
    }
    match format {
        TextFormat::Hex => Ok(format!("{raw:016x}")),
        TextFormat::Base64 => Ok(STANDARD_NO_PAD.encode(raw.to_be_bytes())),
        reserved => Err(Error::UnsupportedFormat(reserved.as_str().to_owned())),
    }
}

/// Parses a string in the given format back into a raw flake ID.
///
/// Hex input may be shorter than 16 digits; base64 input must decode to
/// exactly 8 bytes.
///
/// # Example
///
/// ```
/// use flakeid::{TextFormat, text};
///
/// let raw = text::decode("O4q4lrUvnYU", TextFormat::Base64).unwrap();
/// assert_eq!(raw, 4_290_444_552_448_220_549);
/// ```
pub fn decode(s: &str, format: TextFormat) -> Result<u64> {
    if s.is_empty() {
        return Err(Error::EmptyInput);
    }
    match format {
        TextFormat::Hex => {
            // `from_str_radix` tolerates a leading sign; hex digits only here.
            if s.starts_with(['+', '-']) {
                return Err(Error::MalformedText {
                    format,
                    reason: "sign prefix not allowed".to_owned(),
                });
            }
            u64::from_str_radix(s, 16).map_err(|e| Error::MalformedText {
                format,
                reason: e.to_string(),
            })
        }
        TextFormat::Base64 => {
            let bytes = STANDARD_NO_PAD
                .decode(s)
                .map_err(|e| Error::MalformedText {
                    format,
                    reason: e.to_string(),
                })?;
            let bytes: [u8; 8] = bytes.try_into().map_err(|b: Vec<u8>| Error::MalformedText {
                format,
                reason: format!("expected 8 bytes, got {}", b.len()),
            })?;
            Ok(u64::from_be_bytes(bytes))
        }
        reserved => Err(Error::UnsupportedFormat(reserved.as_str().to_owned())),
    }
}

/// Extension trait adding text conversions directly on ID types.
///
/// # Example
///
/// ```
/// use flakeid::{FlakeTextExt, RandomFlakeId, TextFormat};
///
/// let id = RandomFlakeId::from(511_460_846_954, 3_120_517);
/// assert_eq!(id.encode_text(TextFormat::Base64).unwrap(), "O4q4lrUvnYU");
/// assert_eq!(
///     RandomFlakeId::decode_text("O4q4lrUvnYU", TextFormat::Base64).unwrap(),
///     id
/// );
/// ```
pub trait FlakeTextExt: FlakeId {
    /// Encodes this ID into a string using the given format.
    fn encode_text(&self, format: TextFormat) -> Result<String> {
        encode(self.to_raw(), format)
    }

    /// Decodes a string in the given format into this ID type.
    fn decode_text(s: &str, format: TextFormat) -> Result<Self> {
        decode(s, format).map(Self::from_raw)
    }
}

impl<T: FlakeId> FlakeTextExt for T {}
