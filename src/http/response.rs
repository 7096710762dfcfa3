use crate::http::resource::Resource;

/// Response outcomes supported by the server.
///
/// A closed set: the request either resolved to an existing file (`Ok`), to
/// a missing one (`NotFound`), or never resolved at all (`NotImplemented`).
/// The status picks both the status-line text and the body branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 501 Not Implemented
    NotImplemented,
}

impl Status {
    /// Returns the status-line text. The same string doubles as the entire
    /// body of a non-OK response.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyserv::http::response::Status;
    /// assert_eq!(Status::Ok.text(), "200 OK");
    /// assert_eq!(Status::NotFound.text(), "404 Not Found");
    /// ```
    pub fn text(&self) -> &'static str {
        match self {
            Status::Ok => "200 OK",
            Status::NotFound => "404 Not Found",
            Status::NotImplemented => "501 Not Implemented",
        }
    }

    /// Classifies a resolution outcome.
    ///
    /// `Ok` iff the resource exists at classification time, `NotFound`
    /// otherwise, `NotImplemented` when no resource was resolved. A resource
    /// whose name climbs out of the serve root, by `..` components or by
    /// being absolute, is classified `NotFound` without touching the
    /// filesystem.
    pub async fn classify(resource: Option<&Resource>) -> Self {
        match resource {
            None => Status::NotImplemented,
            Some(r) if r.escapes_root() => Status::NotFound,
            Some(r) => {
                if r.exists().await {
                    Status::Ok
                } else {
                    Status::NotFound
                }
            }
        }
    }
}

/// Primary category of a MIME type.
///
/// The server only defines body handling for `text` content; everything else
/// is written without a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentCategory {
    Text,
    Other,
}

/// A caller-supplied MIME type string (e.g., `text/html`).
///
/// Only the primary category matters here: it decides whether template
/// substitution applies to the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType(String);

impl ContentType {
    pub fn new(mime: impl Into<String>) -> Self {
        Self(mime.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part before the first `/`, mapped onto the closed category set.
    pub fn category(&self) -> ContentCategory {
        match self.0.split('/').next() {
            Some("text") => ContentCategory::Text,
            _ => ContentCategory::Other,
        }
    }
}
