use super::form::{Completion, Outcome, Request};
use crate::domain::{NamedEntry, ResourceName, ScheduleDocument};
use crate::error::CascadeError;
use crate::http::fetch_json;
use crate::locator::Locator;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Locate → fetch for every request the selection form can issue.
#[derive(Debug, Clone)]
pub struct CascadeClient {
    locator: Locator,
}

impl CascadeClient {
    pub const fn new(locator: Locator) -> Self {
        Self { locator }
    }

    pub async fn provinces(&self) -> Result<Vec<String>, CascadeError> {
        self.listing(&["provinces"]).await
    }

    pub async fn municipalities(&self, province: &str) -> Result<Vec<String>, CascadeError> {
        self.listing(&["municipalities", province]).await
    }

    pub async fn places(&self, municipality: &str) -> Result<Vec<String>, CascadeError> {
        self.listing(&["places", "municipality", municipality]).await
    }

    pub async fn schedule(
        &self,
        province: &str,
        place: &str,
    ) -> Result<ScheduleDocument, CascadeError> {
        let location = self.locator.locate(ResourceName::Schedule).await?;
        let url = location.endpoint(&[province, place])?;
        Ok(fetch_json(self.locator.transport(), &url).await?)
    }

    pub async fn execute(&self, request: &Request) -> Result<Outcome, CascadeError> {
        match request {
            Request::Provinces => self.provinces().await.map(Outcome::Listing),
            Request::Municipalities { province } => {
                self.municipalities(province).await.map(Outcome::Listing)
            }
            Request::Places { municipality } => {
                self.places(municipality).await.map(Outcome::Listing)
            }
            Request::Schedule { province, place } => {
                self.schedule(province, place).await.map(Outcome::Schedule)
            }
        }
    }

    async fn listing(&self, segments: &[&str]) -> Result<Vec<String>, CascadeError> {
        let location = self.locator.locate(ResourceName::Places).await?;
        let url = location.endpoint(segments)?;
        let entries: Vec<NamedEntry> = fetch_json(self.locator.transport(), &url).await?;
        Ok(entries.into_iter().map(|entry| entry.name).collect())
    }
}

/// Runs each request as its own task and hands the result back over a channel.
///
/// Tasks are independent: nothing orders or cancels them relative to each other.
#[derive(Debug, Clone)]
pub struct CascadeController {
    client: CascadeClient,
    completions: mpsc::UnboundedSender<Completion>,
}

impl CascadeController {
    pub fn new(client: CascadeClient) -> (Self, mpsc::UnboundedReceiver<Completion>) {
        let (completions, receiver) = mpsc::unbounded_channel();
        (
            Self {
                client,
                completions,
            },
            receiver,
        )
    }

    pub fn dispatch(&self, request: Request) -> JoinHandle<()> {
        let client = self.client.clone();
        let completions = self.completions.clone();

        tokio::spawn(async move {
            tracing::debug!(?request, "cascade step started");
            let result = client.execute(&request).await;
            if completions.send(Completion { request, result }).is_err() {
                tracing::debug!("cascade step finished after the form went away");
            }
        })
    }
}
