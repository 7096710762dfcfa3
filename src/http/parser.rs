use crate::http::request::{Method, Request};

/// Parses one request line into a [`Request`].
///
/// The line is split on single spaces. A usable request needs at least two
/// tokens with a supported method first; the target is the second token and
/// anything after it (the HTTP version, typically) is ignored. Anything else
/// yields `None` and the connection falls through to the 501 path.
pub fn parse_request_line(line: &str) -> Option<Request> {
    let mut parts = line.split(' ');

    let method = Method::from_str(parts.next()?)?;
    let target = parts.next()?;

    if target.is_empty() {
        return None;
    }

    Some(Request {
        method,
        target: target.to_string(),
    })
}
