// ABOUTME: Record service for the global record leaderboard
// ABOUTME: Serializes metric, period, and player filters into query parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::WomResult;
use crate::http::HttpClient;
use crate::metrics::{Metric, Period};
use crate::models::players::{Country, PlayerBuild, PlayerType};
use crate::models::records::RecordLeaderboardEntry;
use crate::routes;

/// Handles endpoints related to records.
#[derive(Debug, Clone, Copy)]
pub struct RecordService<'c> {
    http: &'c HttpClient,
}

impl<'c> RecordService<'c> {
    pub(crate) const fn new(http: &'c HttpClient) -> Self {
        Self { http }
    }

    /// Fetches the global record leaderboard for a metric and period,
    /// optionally filtered by player type, build, and country.
    pub async fn get_global_record_leaderboards(
        &self,
        metric: impl Into<Metric>,
        period: Period,
        player_type: Option<PlayerType>,
        player_build: Option<PlayerBuild>,
        country: Option<Country>,
    ) -> WomResult<Vec<RecordLeaderboardEntry>> {
        let route = routes::GLOBAL_RECORD_LEADERS
            .compile()
            .with_param("metric", metric.into())
            .with_param("period", period)
            .with_optional_param("playerType", player_type)
            .with_optional_param("playerBuild", player_build)
            .with_optional_param("country", country);

        self.http.fetch(route).await
    }
}
