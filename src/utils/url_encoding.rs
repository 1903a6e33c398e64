use crate::deep::Entry;

/// Decode an `application/x-www-form-urlencoded` body into ordered entries.
///
/// Repeated keys are kept in submission order. `+` decodes to a space, and a
/// component that fails to percent-decode is kept as it was sent.
pub fn parse_urlencoded_entries(body: &[u8]) -> Vec<Entry> {
    let raw = String::from_utf8_lossy(body);
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = decode_component(parts.next().unwrap_or(""));
            let value = decode_component(parts.next().unwrap_or(""));
            Entry { key, value }
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
