pub mod dto;
pub mod urls;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::errors::AppError;
use crate::domain::logging::LogComponent;
use crate::domain::search::entities::{QuoteRecord, SuggestionItem, WatchlistEntry};
use crate::domain::search::repositories::StockGateway;
use crate::{log_debug, log_warn};

use dto::{ActionResponse, QuoteResponse, SuggestionsResponse, SymbolPayload, WatchlistResponse};

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Where the backend lives. The default empty base keeps requests same-origin,
/// which is how the server-rendered pages are deployed.
#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    pub base_url: String,
}

/// gloo-net gateway to the Flask-style JSON API.
///
/// Failure policy: no timeout, no retry, no abort of in-flight requests. Every
/// failure is logged here and surfaces to the caller as one [`AppError`].
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new() -> Self {
        Self { config: ApiConfig::default() }
    }

    pub fn with_config(config: ApiConfig) -> Self {
        Self { config }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, AppError> {
        log_debug!(LogComponent::Infrastructure("Api"), "GET {url}");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.ok() {
            log_warn!(
                LogComponent::Infrastructure("Api"),
                "GET {url} -> status {}",
                response.status()
            );
            return Err(Self::status_error(response).await);
        }

        response.json::<T>().await.map_err(|e| AppError::Parse(e.to_string()))
    }

    /// The backend pairs non-2xx statuses with a JSON `error` body; prefer
    /// that message over the bare status code when it is present.
    async fn status_error(response: gloo_net::http::Response) -> AppError {
        let status = response.status();
        match response.json::<ErrorBody>().await {
            Ok(ErrorBody { error: Some(message) }) => AppError::Api(message),
            _ => AppError::Http(status),
        }
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: String,
        body: &B,
    ) -> Result<T, AppError> {
        log_debug!(LogComponent::Infrastructure("Api"), "POST {url}");

        let response = Request::post(&url)
            .json(body)
            .map_err(|e| AppError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.ok() {
            log_warn!(
                LogComponent::Infrastructure("Api"),
                "POST {url} -> status {}",
                response.status()
            );
            return Err(Self::status_error(response).await);
        }

        response.json::<T>().await.map_err(|e| AppError::Parse(e.to_string()))
    }

    fn quote_from(&self, envelope: QuoteResponse) -> Result<QuoteRecord, AppError> {
        if let Some(message) = envelope.error {
            return Err(AppError::Api(message));
        }
        envelope
            .stock
            .map(|dto| dto.into_domain())
            .ok_or_else(|| AppError::Parse("stock field missing from response".to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl StockGateway for ApiClient {
    fn suggestions<'a>(
        &'a self,
        query: &'a str,
    ) -> LocalBoxFuture<'a, Result<Vec<SuggestionItem>, AppError>> {
        async move {
            let url = urls::suggestions_url(&self.config.base_url, query);
            let envelope: SuggestionsResponse = self.get_json(url).await?;
            if let Some(message) = envelope.error {
                return Err(AppError::Api(message));
            }
            Ok(envelope.results.into_iter().map(|dto| dto.into_domain()).collect())
        }
        .boxed_local()
    }

    fn quote<'a>(&'a self, symbol: &'a str) -> LocalBoxFuture<'a, Result<QuoteRecord, AppError>> {
        async move {
            let url = urls::quote_url(&self.config.base_url, symbol);
            let envelope: QuoteResponse = self.get_json(url).await?;
            self.quote_from(envelope)
        }
        .boxed_local()
    }

    fn refresh<'a>(&'a self, symbol: &'a str) -> LocalBoxFuture<'a, Result<QuoteRecord, AppError>> {
        async move {
            let url = urls::refresh_url(&self.config.base_url, symbol);
            let envelope: QuoteResponse = self.get_json(url).await?;
            self.quote_from(envelope)
        }
        .boxed_local()
    }

    fn watchlist_add<'a>(
        &'a self,
        symbol: &'a str,
    ) -> LocalBoxFuture<'a, Result<String, AppError>> {
        async move {
            let url = urls::watchlist_add_url(&self.config.base_url);
            let payload = SymbolPayload { symbol: symbol.to_string() };
            let envelope: ActionResponse = self.post_json(url, &payload).await?;
            if let Some(message) = envelope.error {
                return Err(AppError::Api(message));
            }
            Ok(envelope.message.unwrap_or_else(|| format!("{symbol} added to watchlist")))
        }
        .boxed_local()
    }

    fn watchlist_remove<'a>(
        &'a self,
        symbol: &'a str,
    ) -> LocalBoxFuture<'a, Result<String, AppError>> {
        async move {
            let url = urls::watchlist_remove_url(&self.config.base_url);
            let payload = SymbolPayload { symbol: symbol.to_string() };
            let envelope: ActionResponse = self.post_json(url, &payload).await?;
            if let Some(message) = envelope.error {
                return Err(AppError::Api(message));
            }
            Ok(envelope.message.unwrap_or_else(|| format!("{symbol} removed from watchlist")))
        }
        .boxed_local()
    }

    fn watchlist_list(&self) -> LocalBoxFuture<'_, Result<Vec<WatchlistEntry>, AppError>> {
        async move {
            let url = urls::watchlist_list_url(&self.config.base_url);
            let envelope: WatchlistResponse = self.get_json(url).await?;
            if let Some(message) = envelope.error {
                return Err(AppError::Api(message));
            }
            Ok(envelope.watchlist.into_iter().map(|dto| dto.into_domain()).collect())
        }
        .boxed_local()
    }
}
