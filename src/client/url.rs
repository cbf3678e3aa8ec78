//! URL-joining strategies for the MorphoSource client.

use crate::error::{ApiError, ApiResult};
use url::Url;

/// How the client combines its base URL with an endpoint path.
///
/// Both strategies produce identical URLs for a normalized base (scheme +
/// host, no path, no trailing slash); they differ only for degenerate inputs
/// such as a base carrying its own path segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UrlStrategy {
    /// Trim the base's trailing slash and interpolate: `{base}/{path}`.
    #[default]
    Interpolate,

    /// RFC 3986 base-relative resolution via the `url` crate.
    BaseRelative,
}

impl UrlStrategy {
    /// Join `base` and `path` into a full request URL.
    pub(crate) fn join(&self, base: &str, path: &str) -> ApiResult<String> {
        let path = path.trim_start_matches('/');
        match self {
            UrlStrategy::Interpolate => {
                let base = base.trim_end_matches('/');
                Ok(format!("{}/{}", base, path))
            }
            UrlStrategy::BaseRelative => {
                let mut base_url = Url::parse(base)
                    .map_err(|e| ApiError::InvalidRequest(format!("invalid base URL: {}", e)))?;
                // Url::join resolves relative to the base's last slash, so a
                // base with a non-slash-terminated path would lose a segment.
                if !base_url.path().ends_with('/') {
                    let slashed = format!("{}/", base_url.path());
                    base_url.set_path(&slashed);
                }
                let joined = base_url
                    .join(path)
                    .map_err(|e| ApiError::InvalidRequest(format!("invalid path: {}", e)))?;
                Ok(joined.to_string())
            }
        }
    }
}
