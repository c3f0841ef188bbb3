// ABOUTME: Player service covering search, updates, details, gains, and history
// ABOUTME: Translates typed parameters into compiled routes and decodes the payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, Utc};

use crate::error::WomResult;
use crate::http::HttpClient;
use crate::metrics::{Metric, Period};
use crate::models::competitions::{
    CompetitionStatus, PlayerCompetitionStanding, PlayerParticipation,
};
use crate::models::groups::PlayerMembership;
use crate::models::names::NameChange;
use crate::models::players::{
    Achievement, AssertPlayerType, Player, PlayerAchievementProgress, PlayerDetail, PlayerGains,
    Snapshot,
};
use crate::models::records::Record;
use crate::routes;

/// Handles endpoints related to players.
#[derive(Debug, Clone, Copy)]
pub struct PlayerService<'c> {
    http: &'c HttpClient,
}

impl<'c> PlayerService<'c> {
    pub(crate) const fn new(http: &'c HttpClient) -> Self {
        Self { http }
    }

    /// Searches for players by partial username.
    pub async fn search_players(
        &self,
        username: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> WomResult<Vec<Player>> {
        let route = routes::SEARCH_PLAYERS
            .compile()
            .with_param("username", username)
            .with_optional_param("limit", limit)
            .with_optional_param("offset", offset);

        self.http.fetch(route).await
    }

    /// Requests a fresh hiscores update for the player.
    pub async fn update_player(&self, username: &str) -> WomResult<PlayerDetail> {
        let route = routes::UPDATE_PLAYER.compile().with_segment(username);
        self.http.fetch(route).await
    }

    /// Asks the API to re-check the player's game-mode type.
    pub async fn assert_player_type(&self, username: &str) -> WomResult<AssertPlayerType> {
        let route = routes::ASSERT_PLAYER_TYPE.compile().with_segment(username);
        self.http.fetch(route).await
    }

    /// Fetches a player's details by username.
    pub async fn get_player_details(&self, username: &str) -> WomResult<PlayerDetail> {
        let route = routes::PLAYER_DETAILS.compile().with_segment(username);
        self.http.fetch(route).await
    }

    /// Fetches a player's details by ID.
    pub async fn get_player_details_by_id(&self, player_id: i32) -> WomResult<PlayerDetail> {
        let route = routes::PLAYER_DETAILS_BY_ID.compile().with_segment(player_id);
        self.http.fetch(route).await
    }

    /// Fetches the achievements a player has earned.
    pub async fn get_player_achievements(&self, username: &str) -> WomResult<Vec<Achievement>> {
        let route = routes::PLAYER_ACHIEVEMENTS.compile().with_segment(username);
        self.http.fetch(route).await
    }

    /// Fetches a player's progress toward unearned achievements.
    pub async fn get_player_achievement_progress(
        &self,
        username: &str,
    ) -> WomResult<Vec<PlayerAchievementProgress>> {
        let route = routes::PLAYER_ACHIEVEMENT_PROGRESS
            .compile()
            .with_segment(username);

        self.http.fetch(route).await
    }

    /// Fetches the competitions a player participates in.
    pub async fn get_player_competition_participations(
        &self,
        username: &str,
        status: Option<CompetitionStatus>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> WomResult<Vec<PlayerParticipation>> {
        let route = routes::PLAYER_COMPETITION_PARTICIPATION
            .compile()
            .with_segment(username)
            .with_optional_param("status", status)
            .with_optional_param("limit", limit)
            .with_optional_param("offset", offset);

        self.http.fetch(route).await
    }

    /// Fetches a player's standings in competitions with the given
    /// status.
    pub async fn get_player_competition_standings(
        &self,
        username: &str,
        status: CompetitionStatus,
    ) -> WomResult<Vec<PlayerCompetitionStanding>> {
        let route = routes::PLAYER_COMPETITION_STANDINGS
            .compile()
            .with_segment(username)
            .with_param("status", status);

        self.http.fetch(route).await
    }

    /// Fetches the groups a player is a member of.
    pub async fn get_player_group_memberships(
        &self,
        username: &str,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> WomResult<Vec<PlayerMembership>> {
        let route = routes::PLAYER_GROUP_MEMBERSHIPS
            .compile()
            .with_segment(username)
            .with_optional_param("limit", limit)
            .with_optional_param("offset", offset);

        self.http.fetch(route).await
    }

    /// Fetches a player's gains over a trailing period or an explicit
    /// date range.
    pub async fn get_player_gains(
        &self,
        username: &str,
        period: Option<Period>,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> WomResult<PlayerGains> {
        let route = routes::PLAYER_GAINS
            .compile()
            .with_segment(username)
            .with_optional_param("period", period)
            .with_optional_param("startDate", start_date.map(|date| date.to_rfc3339()))
            .with_optional_param("endDate", end_date.map(|date| date.to_rfc3339()));

        self.http.fetch(route).await
    }

    /// Fetches the records a player holds.
    pub async fn get_player_records(
        &self,
        username: &str,
        period: Option<Period>,
        metric: Option<Metric>,
    ) -> WomResult<Vec<Record>> {
        let route = routes::PLAYER_RECORDS
            .compile()
            .with_segment(username)
            .with_optional_param("period", period)
            .with_optional_param("metric", metric);

        self.http.fetch(route).await
    }

    /// Fetches a player's snapshots over a trailing period or an
    /// explicit date range.
    pub async fn get_player_snapshots(
        &self,
        username: &str,
        period: Option<Period>,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> WomResult<Vec<Snapshot>> {
        let route = routes::PLAYER_SNAPSHOTS
            .compile()
            .with_segment(username)
            .with_optional_param("period", period)
            .with_optional_param("startDate", start_date.map(|date| date.to_rfc3339()))
            .with_optional_param("endDate", end_date.map(|date| date.to_rfc3339()));

        self.http.fetch(route).await
    }

    /// Fetches the name changes recorded for a player.
    pub async fn get_player_name_changes(&self, username: &str) -> WomResult<Vec<NameChange>> {
        let route = routes::PLAYER_NAME_CHANGES.compile().with_segment(username);
        self.http.fetch(route).await
    }
}
