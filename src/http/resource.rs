use std::path::{Component, Path, PathBuf};

use crate::http::request::Request;

/// Resource name a bare `/` target resolves to.
pub const DEFAULT_RESOURCE: &str = "index.html";

/// The filesystem-backed entity a request target points at.
///
/// Resolution is purely syntactic: `/` maps to [`DEFAULT_RESOURCE`], any
/// other target has its leading slash stripped and is joined to the serve
/// root. No canonicalization is performed; targets that try to climb out of
/// the root are caught at classification time instead.
///
/// One resource is created per connection and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    name: String,
    path: PathBuf,
}

impl Resource {
    /// Resolves a request target against the serve root.
    pub fn resolve(request: &Request, root: &Path) -> Self {
        let name = if request.target == "/" {
            DEFAULT_RESOURCE.to_string()
        } else {
            let mut chars = request.target.chars();
            chars.next();
            chars.as_str().to_string()
        };

        let path = root.join(&name);
        Self { name, path }
    }

    /// The target with its leading slash removed (or the default resource).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full path of the resource under the serve root.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }

    /// True when the resource name contains a `..` component or is absolute.
    /// Either would resolve outside the serve root (`join` discards the root
    /// for an absolute name), so such targets are refused.
    pub fn escapes_root(&self) -> bool {
        let name = Path::new(&self.name);
        name.has_root()
            || name.components().any(|c| matches!(c, Component::ParentDir))
    }
}
