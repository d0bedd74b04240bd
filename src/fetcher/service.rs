use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{debug, error};

use crate::config::{EndpointSettings, Settings};
use crate::fetcher::transport::{HttpTransport, ReqwestTransport};
use crate::message::{Message, MessagePage};
use crate::utils::{FetchError, TransportError};

/// Anything that can hand back a list of messages.
#[async_trait]
pub trait MessageSource: Send + Sync {
    async fn fetch_messages(&self) -> Result<Vec<Message>, FetchError>;
}

/// Fetches and normalizes the message list of one endpoint.
///
/// Holds no state between calls, so a single fetcher may serve concurrent
/// callers.
#[derive(Debug, Clone)]
pub struct MessageFetcher<T> {
    transport: T,
    endpoint: EndpointSettings,
}

impl<T: HttpTransport> MessageFetcher<T> {
    pub fn new(transport: T, endpoint: EndpointSettings) -> Self {
        Self {
            transport,
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &EndpointSettings {
        &self.endpoint
    }

    /// Issues one GET to the endpoint and returns its messages in upstream order.
    ///
    /// Any failure is logged once and returned; nothing is retried.
    pub async fn get_messages(&self) -> Result<Vec<Message>, FetchError> {
        match self.try_get_messages().await {
            Ok(messages) => Ok(messages),
            Err(err) => {
                error!(source = %self.endpoint.source, url = %self.endpoint.url, "{}", err);
                Err(err)
            }
        }
    }

    async fn try_get_messages(&self) -> Result<Vec<Message>, FetchError> {
        let response = self.transport.get(&self.endpoint.url).await?;

        if !response.is_success() {
            return Err(FetchError::http(
                response.status,
                response.status_text,
                &response.body,
            ));
        }

        let page: MessagePage = serde_json::from_str(&response.body)?;
        debug!(source = %self.endpoint.source, body = %response.body, "Got data");

        Ok(page.into_messages(&self.endpoint.source))
    }
}

/// `reqwest` transport honouring `fetcher.timeout_secs`.
pub fn reqwest_transport(settings: &Settings) -> Result<ReqwestTransport, TransportError> {
    ReqwestTransport::with_timeout(settings.fetcher.timeout_secs.map(Duration::from_secs))
}

#[async_trait]
impl<T: HttpTransport> MessageSource for MessageFetcher<T> {
    async fn fetch_messages(&self) -> Result<Vec<Message>, FetchError> {
        self.get_messages().await
    }
}

/// Fetches from every endpoint concurrently.
///
/// Results come back in the same order as `fetchers`, each paired with the
/// endpoint's source label.
pub async fn fetch_all<T: HttpTransport>(
    fetchers: &[MessageFetcher<T>],
) -> Vec<(String, Result<Vec<Message>, FetchError>)> {
    let results = join_all(fetchers.iter().map(|f| f.get_messages())).await;
    fetchers
        .iter()
        .map(|f| f.endpoint().source.clone())
        .zip(results)
        .collect()
}
