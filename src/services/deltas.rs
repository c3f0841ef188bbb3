// ABOUTME: Delta service for the global gained leaderboard
// ABOUTME: Mirrors the record leaderboard filters over the deltas endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::WomResult;
use crate::http::HttpClient;
use crate::metrics::{Metric, Period};
use crate::models::deltas::DeltaLeaderboardEntry;
use crate::models::players::{Country, PlayerBuild, PlayerType};
use crate::routes;

/// Handles endpoints related to deltas (metric gains over time).
#[derive(Debug, Clone, Copy)]
pub struct DeltaService<'c> {
    http: &'c HttpClient,
}

impl<'c> DeltaService<'c> {
    pub(crate) const fn new(http: &'c HttpClient) -> Self {
        Self { http }
    }

    /// Fetches the global delta leaderboard for a metric and period,
    /// optionally filtered by player type, build, and country.
    pub async fn get_global_delta_leaderboards(
        &self,
        metric: impl Into<Metric>,
        period: Period,
        player_type: Option<PlayerType>,
        player_build: Option<PlayerBuild>,
        country: Option<Country>,
    ) -> WomResult<Vec<DeltaLeaderboardEntry>> {
        let route = routes::GLOBAL_DELTA_LEADERS
            .compile()
            .with_param("metric", metric.into())
            .with_param("period", period)
            .with_optional_param("playerType", player_type)
            .with_optional_param("playerBuild", player_build)
            .with_optional_param("country", country);

        self.http.fetch(route).await
    }
}
