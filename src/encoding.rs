/*!
 * Character encodings for subtitle files.
 *
 * Detection only looks for a byte order mark or for valid UTF-8; anything
 * else falls back to the configured encoding. Decoding is lossy so a file
 * with a few bad bytes still opens.
 */

use std::fmt;

use crate::errors::SubtitleError;

/// Windows-1252 code points for bytes 0x80 to 0x9F. Undefined bytes map to
/// the C1 control with the same value.
const WINDOWS_1252_HIGH: [u16; 32] = [
    0x20AC, 0x0081, 0x201A, 0x0192, 0x201E, 0x2026, 0x2020, 0x2021, 0x02C6, 0x2030, 0x0160,
    0x2039, 0x0152, 0x008D, 0x017D, 0x008F, 0x0090, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022,
    0x2013, 0x2014, 0x02DC, 0x2122, 0x0161, 0x203A, 0x0153, 0x009D, 0x017E, 0x0178,
];

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Supported text encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
    Windows1252,
    Iso8859_1,
}

impl TextEncoding {
    /// Resolves an encoding label such as "UTF-8", "cp1252" or "latin1"
    pub fn from_label(label: &str) -> Result<Self, SubtitleError> {
        let normalized = label.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "utf-16" | "utf-16le" | "utf16le" | "utf16" => Ok(Self::Utf16Le),
            "utf-16be" | "utf16be" => Ok(Self::Utf16Be),
            "windows-1252" | "cp1252" | "1252" => Ok(Self::Windows1252),
            "iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" => Ok(Self::Iso8859_1),
            _ => Err(SubtitleError::EncodingNotSupported(label.to_string())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16Le => "UTF-16LE",
            Self::Utf16Be => "UTF-16BE",
            Self::Windows1252 => "windows-1252",
            Self::Iso8859_1 => "ISO-8859-1",
        }
    }

    /// Probable encodings of raw bytes, most probable first.
    ///
    /// Empty when nothing could be detected.
    pub fn detect_candidates(bytes: &[u8]) -> Vec<Self> {
        if bytes.starts_with(&UTF8_BOM) {
            vec![Self::Utf8]
        } else if bytes.starts_with(&UTF16_LE_BOM) {
            vec![Self::Utf16Le]
        } else if bytes.starts_with(&UTF16_BE_BOM) {
            vec![Self::Utf16Be]
        } else if std::str::from_utf8(bytes).is_ok() {
            vec![Self::Utf8]
        } else {
            Vec::new()
        }
    }

    /// Decodes bytes, dropping a matching byte order mark
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 => {
                let bytes = bytes.strip_prefix(&UTF8_BOM).unwrap_or(bytes);
                String::from_utf8_lossy(bytes).into_owned()
            }
            Self::Utf16Le => {
                let bytes = bytes.strip_prefix(&UTF16_LE_BOM).unwrap_or(bytes);
                decode_utf16(bytes, u16::from_le_bytes)
            }
            Self::Utf16Be => {
                let bytes = bytes.strip_prefix(&UTF16_BE_BOM).unwrap_or(bytes);
                decode_utf16(bytes, u16::from_be_bytes)
            }
            Self::Windows1252 => bytes
                .iter()
                .map(|&b| match b {
                    0x80..=0x9F => {
                        char::from_u32(u32::from(WINDOWS_1252_HIGH[usize::from(b - 0x80)]))
                            .unwrap_or(char::REPLACEMENT_CHARACTER)
                    }
                    _ => char::from(b),
                })
                .collect(),
            Self::Iso8859_1 => bytes.iter().map(|&b| char::from(b)).collect(),
        }
    }

    /// Encodes text. UTF-16 output starts with a byte order mark; characters
    /// a single-byte encoding cannot represent become `?`.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::Utf16Le => {
                let mut bytes = UTF16_LE_BOM.to_vec();
                bytes.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
                bytes
            }
            Self::Utf16Be => {
                let mut bytes = UTF16_BE_BOM.to_vec();
                bytes.extend(text.encode_utf16().flat_map(u16::to_be_bytes));
                bytes
            }
            Self::Windows1252 => text.chars().map(encode_windows_1252).collect(),
            Self::Iso8859_1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
                .collect(),
        }
    }
}

fn decode_utf16(bytes: &[u8], to_unit: fn([u8; 2]) -> u16) -> String {
    let units = bytes.chunks_exact(2).map(|pair| to_unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

fn encode_windows_1252(character: char) -> u8 {
    let code = u32::from(character);
    if code < 0x80 || (0xA0..=0xFF).contains(&code) {
        return code as u8;
    }
    WINDOWS_1252_HIGH
        .iter()
        .position(|&mapped| u32::from(mapped) == code)
        .map(|offset| 0x80 + offset as u8)
        .unwrap_or(b'?')
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
