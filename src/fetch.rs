// ABOUTME: HTTP fetching with charset-aware body decoding.
// ABOUTME: Resolves to Some(body) on success and None on any unusable response.

use bytes::Bytes;

/// Fetch `url` and decode the body to text.
///
/// Any transport error or non-success status resolves to `None`; callers
/// treat that as the cache layer's "nothing usable" signal rather than an
/// error to propagate.
pub async fn fetch_text(client: &reqwest::Client, url: &str) -> Option<String> {
    let response = client.get(url).send().await.ok()?;
    if !response.status().is_success() {
        return None;
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    let body: Bytes = response.bytes().await.ok()?;
    Some(decode_body(&body, content_type.as_deref()))
}

/// Decode body bytes to a String using charset from the content-type header
/// or detection. The upstream site serves Chinese pages, so the charset is
/// not always UTF-8.
fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    if let Some(ct) = content_type {
        if let Some(charset) = extract_charset(ct) {
            if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
                let (decoded, _, _) = encoding.decode(body);
                return decoded.into_owned();
            }
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    let (decoded, _, _) = encoding.decode(body);
    decoded.into_owned()
}

/// Extract charset value from a Content-Type header.
fn extract_charset(content_type: &str) -> Option<String> {
    let lower = content_type.to_lowercase();
    for part in lower.split(';') {
        let trimmed = part.trim();
        if let Some(charset) = trimmed.strip_prefix("charset=") {
            let charset = charset.trim_matches('"').trim_matches('\'');
            return Some(charset.to_string());
        }
    }
    None
}
