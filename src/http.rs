// ABOUTME: HTTP transport dispatch for compiled routes with error classification
// ABOUTME: Issues requests via a pooled reqwest client and shapes outcomes into WomResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::time::Duration;

use reqwest::{Client, ClientBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{HttpErrorResponse, WomError, WomResult};
use crate::routes::CompiledRoute;

/// Base URL of the public API.
pub const DEFAULT_BASE_URL: &str = "https://api.wiseoldman.net/v2";

/// User agent sent when the caller does not configure one.
pub const DEFAULT_USER_AGENT: &str = concat!("wom-client/", env!("CARGO_PKG_VERSION"));

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout in seconds.
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Fallback message for error responses whose body carried no `message`.
const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred while making the request.";

/// Error bodies are a bare `message` field; anything else is ignored.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Executes compiled routes against the API and classifies each outcome.
///
/// Holds the connection-pooling [`reqwest::Client`]; concurrent calls share
/// the pool and proceed independently. No retries, caching, or rate
/// limiting happen here.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    user_agent: String,
}

impl HttpClient {
    /// Creates a transport with the given credentials and base URL,
    /// falling back to library defaults for anything unset.
    #[must_use]
    pub fn new(
        api_key: Option<String>,
        user_agent: Option<String>,
        base_url: Option<String>,
    ) -> Self {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            api_key,
            user_agent: user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
        }
    }

    /// Replaces the API key sent with subsequent requests.
    pub fn set_api_key(&mut self, api_key: Option<String>) {
        self.api_key = api_key;
    }

    /// Replaces the user agent sent with subsequent requests.
    pub fn set_user_agent(&mut self, user_agent: String) {
        self.user_agent = user_agent;
    }

    /// Replaces the base URL used for subsequent requests.
    pub fn set_base_url(&mut self, base_url: String) {
        self.base_url = base_url;
    }

    /// Executes a compiled route and decodes the 2xx payload into `T`.
    ///
    /// Non-2xx statuses become [`WomError::Api`]; transport-level failures
    /// become [`WomError::Network`]; a 2xx body of the wrong shape becomes
    /// [`WomError::Decode`].
    ///
    /// # Panics
    ///
    /// Panics if the route still contains an unsubstituted `{}` segment,
    /// which indicates a bug in the calling service.
    pub async fn fetch<T: DeserializeOwned>(&self, route: CompiledRoute) -> WomResult<T> {
        self.dispatch(route, None::<&()>).await
    }

    /// Executes a compiled route with a JSON request body.
    ///
    /// # Panics
    ///
    /// Panics if the route still contains an unsubstituted `{}` segment.
    pub async fn fetch_with_body<T, B>(&self, route: CompiledRoute, body: &B) -> WomResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.dispatch(route, Some(body)).await
    }

    async fn dispatch<T, B>(&self, route: CompiledRoute, body: Option<&B>) -> WomResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        assert!(
            route.is_fully_resolved(),
            "route {} dispatched with an unsubstituted uri segment",
            route.uri()
        );

        let url = format!("{}{}", self.base_url, route.uri());
        debug!(method = %route.method(), %url, "dispatching API request");

        let mut request = self
            .client
            .request(route.method().clone(), &url)
            .header("x-user-agent", &self.user_agent)
            .query(route.params());

        if let Some(api_key) = &self.api_key {
            request = request.header("x-api-key", api_key);
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(WomError::Network)?;
        let status = response.status();
        let text = response.text().await.map_err(WomError::Network)?;

        if !status.is_success() {
            return Err(WomError::Api(classify_error(status, &text)));
        }

        serde_json::from_str(&text).map_err(|source| WomError::Decode {
            context: std::any::type_name::<T>(),
            source,
        })
    }
}

/// Builds the typed error payload for a non-2xx response, preferring the
/// body's `message` field over a generic description.
fn classify_error(status: StatusCode, body: &str) -> HttpErrorResponse {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_owned());

    warn!(status = status.as_u16(), %message, "API request failed");

    HttpErrorResponse {
        status_code: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Route;
    use reqwest::Method;

    #[tokio::test]
    #[should_panic(expected = "unsubstituted uri segment")]
    async fn test_dispatching_an_unresolved_route_panics() {
        let client = HttpClient::new(None, None, Some("http://localhost:0".to_owned()));
        let route = Route::new(Method::GET, "/players/{}").compile();

        let _: WomResult<serde_json::Value> = client.fetch(route).await;
    }

    #[test]
    fn test_error_message_is_taken_from_body_when_present() {
        let err = classify_error(StatusCode::NOT_FOUND, r#"{"message":"Player not found."}"#);

        assert_eq!(err.status_code, 404);
        assert_eq!(err.message, "Player not found.");
    }

    #[test]
    fn test_error_message_falls_back_for_unparsable_bodies() {
        let err = classify_error(StatusCode::BAD_GATEWAY, "<html>nope</html>");

        assert_eq!(err.status_code, 502);
        assert_eq!(err.message, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_error_message_falls_back_when_field_is_missing() {
        let err = classify_error(StatusCode::INTERNAL_SERVER_ERROR, "{}");

        assert_eq!(err.status_code, 500);
        assert_eq!(err.message, GENERIC_ERROR_MESSAGE);
    }
}
