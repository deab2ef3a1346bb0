use crate::error::{Result, RoiExportError};

/// Extracts the boundary parameter of a multipart Content-Type header
pub fn parse_boundary(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if name.trim().eq_ignore_ascii_case("boundary") {
            Some(value.trim().trim_matches('"').to_string())
        } else {
            None
        }
    })
}

fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + from)
}

/// Splits a multipart/related body into the payloads of its parts
///
/// Part headers are discarded. The CRLF preceding each delimiter belongs to
/// the delimiter, not to the payload.
pub fn split_multipart<'a>(body: &'a [u8], boundary: &str) -> Result<Vec<&'a [u8]>> {
    let delimiter = format!("--{}", boundary).into_bytes();
    let malformed =
        |reason: &str| RoiExportError::Retrieval(format!("malformed multipart body: {}", reason));

    let mut parts = Vec::new();
    let mut cursor = find(body, &delimiter, 0).ok_or_else(|| malformed("no delimiter"))?;

    loop {
        let after = cursor + delimiter.len();
        if body[after..].starts_with(b"--") {
            break;
        }

        let headers_end = find(body, b"\r\n\r\n", after)
            .ok_or_else(|| malformed("unterminated part headers"))?;
        let payload_start = headers_end + 4;

        let mut closing = b"\r\n".to_vec();
        closing.extend_from_slice(&delimiter);
        let next = find(body, &closing, payload_start)
            .ok_or_else(|| malformed("missing closing delimiter"))?;

        parts.push(&body[payload_start..next]);
        cursor = next + 2;
    }

    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_boundary() {
        assert_eq!(
            parse_boundary("multipart/related; type=\"application/dicom\"; boundary=abc123"),
            Some("abc123".to_string())
        );
        assert_eq!(
            parse_boundary("multipart/related; boundary=\"quoted\"; type=\"application/dicom\""),
            Some("quoted".to_string())
        );
        assert_eq!(parse_boundary("application/dicom"), None);
    }

    #[test]
    fn test_split_single_part() {
        let body = b"--b1\r\nContent-Type: application/dicom\r\n\r\nPAYLOAD\r\n--b1--\r\n";
        let parts = split_multipart(body, "b1").unwrap();
        assert_eq!(parts, vec![&b"PAYLOAD"[..]]);
    }

    #[test]
    fn test_split_keeps_binary_payload_intact() {
        let mut body = b"--xyz\r\nContent-Type: application/dicom\r\n\r\n".to_vec();
        body.extend_from_slice(&[0u8, 13, 10, 45, 45, 255]);
        body.extend_from_slice(b"\r\n--xyz\r\nContent-Type: application/dicom\r\n\r\n");
        body.extend_from_slice(b"SECOND\r\n--xyz--");

        let parts = split_multipart(&body, "xyz").unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], &[0u8, 13, 10, 45, 45, 255][..]);
        assert_eq!(parts[1], &b"SECOND"[..]);
    }

    #[test]
    fn test_split_without_delimiter_fails() {
        assert!(split_multipart(b"no parts here", "b1").is_err());
    }

    #[test]
    fn test_split_unterminated_fails() {
        let body = b"--b1\r\nContent-Type: application/dicom\r\n\r\nPAYLOAD";
        assert!(split_multipart(body, "b1").is_err());
    }
}
