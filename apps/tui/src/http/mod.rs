// HTTP plumbing shared by the locator, the cascade and the poller

pub mod response;
pub mod transport;

pub use response::{translate, ErrorView, Rejection, ResponseError};
pub use transport::{HttpReply, ReqwestTransport, SharedTransport, Transport};

use crate::error::FetchError;
use serde::de::DeserializeOwned;
use url::Url;

/// GET `url` and decode its JSON body under the shared response policy.
pub async fn fetch_json<T: DeserializeOwned>(
    transport: &dyn Transport,
    url: &Url,
) -> Result<T, FetchError> {
    tracing::debug!(%url, "fetching");
    let reply = transport.get(url).await?;

    translate(&reply).map_err(|err| match err {
        ResponseError::Rejected(rejection) => FetchError::Rejected {
            url: url.to_string(),
            status: rejection.status,
            status_text: rejection.status_text,
        },
        ResponseError::Decode(source) => FetchError::Decode {
            url: url.to_string(),
            source,
        },
    })
}
