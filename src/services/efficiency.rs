// ABOUTME: Efficiency service for the global EHP/EHB leaderboard
// ABOUTME: Supports single computed metrics and the combined ehp+ehb form
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::WomResult;
use crate::http::HttpClient;
use crate::metrics::ComputedMetric;
use crate::models::players::{Country, Player, PlayerBuild, PlayerType};
use crate::routes;

/// The upstream convention for requesting both computed metrics at once.
const COMBINED_METRIC: &str = "ehp+ehb";

/// Handles endpoints related to efficiency leaderboards.
#[derive(Debug, Clone, Copy)]
pub struct EfficiencyService<'c> {
    http: &'c HttpClient,
}

impl<'c> EfficiencyService<'c> {
    pub(crate) const fn new(http: &'c HttpClient) -> Self {
        Self { http }
    }

    /// Fetches the global efficiency leaderboard for one computed metric,
    /// optionally filtered by player type, build, and country.
    pub async fn get_global_efficiency_leaderboards(
        &self,
        metric: ComputedMetric,
        player_type: Option<PlayerType>,
        player_build: Option<PlayerBuild>,
        country: Option<Country>,
    ) -> WomResult<Vec<Player>> {
        self.leaderboards(metric.as_str(), player_type, player_build, country)
            .await
    }

    /// Fetches the leaderboard ranked by EHP and EHB combined
    /// (`metric=ehp+ehb`).
    pub async fn get_combined_efficiency_leaderboards(
        &self,
        player_type: Option<PlayerType>,
        player_build: Option<PlayerBuild>,
        country: Option<Country>,
    ) -> WomResult<Vec<Player>> {
        self.leaderboards(COMBINED_METRIC, player_type, player_build, country)
            .await
    }

    async fn leaderboards(
        &self,
        metric: &str,
        player_type: Option<PlayerType>,
        player_build: Option<PlayerBuild>,
        country: Option<Country>,
    ) -> WomResult<Vec<Player>> {
        let route = routes::GLOBAL_EFFICIENCY_LEADERS
            .compile()
            .with_param("metric", metric)
            .with_optional_param("playerType", player_type)
            .with_optional_param("playerBuild", player_build)
            .with_optional_param("country", country);

        self.http.fetch(route).await
    }
}
