// ABOUTME: Top-level client owning the HTTP transport and handing out service views
// ABOUTME: Services borrow the transport, so one client serves any number of callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::http::HttpClient;
use crate::services::{
    CompetitionService, DeltaService, EfficiencyService, GroupService, NameChangeService,
    PlayerService, RecordService,
};

/// Optional settings applied when building a [`Client`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// An API key granting higher rate limits.
    pub api_key: Option<String>,
    /// A user agent identifying the calling project. Strongly
    /// recommended: the API team uses it to reach out about misuse.
    pub user_agent: Option<String>,
    /// A base URL overriding the public API, e.g. for the league API
    /// or a local instance.
    pub base_url: Option<String>,
}

/// The Wise Old Man API client.
///
/// A `Client` owns a connection pool and is cheap to share by
/// reference; the service accessors are free views over it.
///
/// ```no_run
/// # async fn run() -> wom_client::WomResult<()> {
/// let client = wom_client::Client::new();
/// let player = client.players().get_player_details("zezima").await?;
/// println!("{} has {} exp", player.player.display_name, player.player.exp);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    http: HttpClient,
}

impl Client {
    /// Creates a client against the public API with no API key.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client from explicit settings.
    #[must_use]
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            http: HttpClient::new(config.api_key, config.user_agent, config.base_url),
        }
    }

    /// Sets or replaces the API key sent with every request.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.http.set_api_key(Some(api_key.into()));
    }

    /// Drops the API key, reverting to unauthenticated rate limits.
    pub fn clear_api_key(&mut self) {
        self.http.set_api_key(None);
    }

    /// Sets the user agent sent with every request.
    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
        self.http.set_user_agent(user_agent.into());
    }

    /// Points the client at a different base URL.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.http.set_base_url(base_url.into());
    }

    /// Player lookups, updates, gains, and history.
    #[must_use]
    pub const fn players(&self) -> PlayerService<'_> {
        PlayerService::new(&self.http)
    }

    /// Group search, membership management, and group leaderboards.
    #[must_use]
    pub const fn groups(&self) -> GroupService<'_> {
        GroupService::new(&self.http)
    }

    /// Competition search, detail, and roster management.
    #[must_use]
    pub const fn competitions(&self) -> CompetitionService<'_> {
        CompetitionService::new(&self.http)
    }

    /// Name change search, submission, and review detail.
    #[must_use]
    pub const fn name_changes(&self) -> NameChangeService<'_> {
        NameChangeService::new(&self.http)
    }

    /// Global record leaderboards.
    #[must_use]
    pub const fn records(&self) -> RecordService<'_> {
        RecordService::new(&self.http)
    }

    /// Global gained-value leaderboards.
    #[must_use]
    pub const fn deltas(&self) -> DeltaService<'_> {
        DeltaService::new(&self.http)
    }

    /// Global efficiency leaderboards.
    #[must_use]
    pub const fn efficiency(&self) -> EfficiencyService<'_> {
        EfficiencyService::new(&self.http)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_builds() {
        let client = Client::default();
        let _players = client.players();
        let _groups = client.groups();
    }

    #[test]
    fn test_config_round_trip() {
        let mut client = Client::with_config(ClientConfig {
            api_key: Some("key".to_string()),
            user_agent: Some("agent".to_string()),
            base_url: Some("http://localhost:5000".to_string()),
        });

        client.set_api_key("other-key");
        client.set_user_agent("other-agent");
        client.set_base_url("http://localhost:5001");
    }
}
