/*!
 * Tests for text encodings
 */

use subcore::encoding::TextEncoding;

/// Test that labels resolve to encodings and back
#[test]
fn test_from_label_withAliases_shouldResolve() {
    assert_eq!(TextEncoding::from_label("utf8").unwrap(), TextEncoding::Utf8);
    assert_eq!(TextEncoding::from_label(" CP1252 ").unwrap(), TextEncoding::Windows1252);
    assert_eq!(TextEncoding::from_label("UTF_16BE").unwrap(), TextEncoding::Utf16Be);
    assert_eq!(TextEncoding::Iso8859_1.to_string(), "ISO-8859-1");
}

/// Test that plain UTF-8 bytes are detected as UTF-8
#[test]
fn test_detect_candidates_withUtf8Text_shouldPickUtf8() {
    assert_eq!(TextEncoding::detect_candidates("héllo".as_bytes()), vec![TextEncoding::Utf8]);
}

/// Test that a UTF-8 byte order mark is dropped when decoding
#[test]
fn test_decode_withUtf8Bom_shouldDropBom() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice("{1}{2}x".as_bytes());
    assert_eq!(TextEncoding::Utf8.decode(&bytes), "{1}{2}x");
}

/// Test that single-byte encodings replace characters they cannot hold
#[test]
fn test_encode_withUnrepresentableCharacter_shouldWriteQuestionMark() {
    assert_eq!(TextEncoding::Iso8859_1.encode("é€"), vec![0xE9, b'?']);
    assert_eq!(TextEncoding::Windows1252.encode("é€"), vec![0xE9, 0x80]);
    assert_eq!(TextEncoding::Windows1252.encode("日"), vec![b'?']);
}

/// Test that UTF-16 little endian output starts with its byte order mark
#[test]
fn test_encode_withUtf16Le_shouldWriteBom() {
    let bytes = TextEncoding::Utf16Le.encode("A");
    assert_eq!(bytes, vec![0xFF, 0xFE, b'A', 0]);
    assert_eq!(TextEncoding::detect_candidates(&bytes), vec![TextEncoding::Utf16Le]);
    assert_eq!(TextEncoding::Utf16Le.decode(&bytes), "A");
}
