use crate::domain::ResourceName;
use crate::error::{FetchError, LocatorError};
use crate::http::{translate, ResponseError, SharedTransport, Transport};
use url::Url;

/// Base URL of a resolved service. Never cached: every use goes back to discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLocation {
    base: Url,
}

impl ResourceLocation {
    pub const fn new(base: Url) -> Self {
        Self { base }
    }

    pub const fn base(&self) -> &Url {
        &self.base
    }

    /// Appends each segment, percent-encoded, to the base path.
    pub fn endpoint<S: AsRef<str>>(&self, segments: &[S]) -> Result<Url, FetchError> {
        append_segments(&self.base, segments).ok_or_else(|| FetchError::InvalidUrl {
            base: self.base.to_string(),
            reason: "base cannot carry path segments".to_string(),
        })
    }
}

pub(crate) fn append_segments<S: AsRef<str>>(base: &Url, segments: &[S]) -> Option<Url> {
    let mut url = base.clone();
    {
        let mut path = url.path_segments_mut().ok()?;
        path.pop_if_empty();
        for segment in segments {
            path.push(segment.as_ref());
        }
    }
    Some(url)
}

/// Resolves a [`ResourceName`] through `GET {discovery}/{name}`.
#[derive(Clone)]
pub struct Locator {
    transport: SharedTransport,
    discovery: Url,
}

impl Locator {
    pub fn new(transport: SharedTransport, discovery: Url) -> Self {
        Self {
            transport,
            discovery,
        }
    }

    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    pub async fn locate(&self, name: ResourceName) -> Result<ResourceLocation, LocatorError> {
        let url = append_segments(&self.discovery, &[name.as_str()]).ok_or_else(|| {
            LocatorError::InvalidLocation {
                resource: name,
                reason: format!("discovery URL {} cannot carry a path", self.discovery),
            }
        })?;

        let reply = self
            .transport
            .get(&url)
            .await
            .map_err(|source| LocatorError::Unreachable {
                resource: name,
                source,
            })?;

        let raw: String = translate(&reply).map_err(|err| match err {
            ResponseError::Rejected(rejection) => LocatorError::Rejected {
                resource: name,
                status: rejection.status,
                status_text: rejection.status_text,
            },
            ResponseError::Decode(e) => LocatorError::InvalidLocation {
                resource: name,
                reason: e.to_string(),
            },
        })?;

        let base = Url::parse(raw.trim()).map_err(|e| LocatorError::InvalidLocation {
            resource: name,
            reason: format!("{raw:?}: {e}"),
        })?;

        tracing::debug!(resource = %name, %base, "located");
        Ok(ResourceLocation::new(base))
    }
}

impl std::fmt::Debug for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Locator")
            .field("discovery", &self.discovery.as_str())
            .finish_non_exhaustive()
    }
}
