// ABOUTME: Competition service covering search, detail, and verification-coded mutations
// ABOUTME: Participant and team rosters are edited through JSON bodies on the group's behalf
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde_json::json;

use crate::error::WomResult;
use crate::http::HttpClient;
use crate::metrics::Metric;
use crate::models::competitions::{
    Competition, CompetitionDetail, CompetitionStatus, CompetitionType,
    CompetitionWithParticipations, CreateCompetitionRequest, EditCompetitionRequest, Team,
    Top5ProgressResult,
};
use crate::models::SuccessResponse;
use crate::routes;

use super::VerifiedBody;

/// Handles endpoints related to competitions.
#[derive(Debug, Clone, Copy)]
pub struct CompetitionService<'c> {
    http: &'c HttpClient,
}

impl<'c> CompetitionService<'c> {
    pub(crate) const fn new(http: &'c HttpClient) -> Self {
        Self { http }
    }

    /// Searches for competitions by title, type, status, or metric.
    #[allow(clippy::too_many_arguments)]
    pub async fn search_competitions(
        &self,
        title: Option<&str>,
        competition_type: Option<CompetitionType>,
        status: Option<CompetitionStatus>,
        metric: Option<Metric>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> WomResult<Vec<Competition>> {
        let route = routes::SEARCH_COMPETITIONS
            .compile()
            .with_optional_param("title", title)
            .with_optional_param("type", competition_type)
            .with_optional_param("status", status)
            .with_optional_param("metric", metric)
            .with_optional_param("limit", limit)
            .with_optional_param("offset", offset);

        self.http.fetch(route).await
    }

    /// Fetches a competition with its participations and standings. A
    /// `metric` preview overrides the competition's own metric for the
    /// returned progress values.
    pub async fn get_competition_details(
        &self,
        id: i32,
        metric: Option<Metric>,
    ) -> WomResult<CompetitionDetail> {
        let route = routes::COMPETITION_DETAILS
            .compile()
            .with_segment(id)
            .with_optional_param("metric", metric);

        self.http.fetch(route).await
    }

    /// Fetches the progress history of the competition's top five
    /// participants.
    pub async fn get_top_participant_history(
        &self,
        id: i32,
        metric: Option<Metric>,
    ) -> WomResult<Vec<Top5ProgressResult>> {
        let route = routes::TOP_PARTICIPANT_HISTORY
            .compile()
            .with_segment(id)
            .with_optional_param("metric", metric);

        self.http.fetch(route).await
    }

    /// Creates a competition. The response carries the verification
    /// code needed for any later mutation; it is shown only once.
    pub async fn create_competition(
        &self,
        request: &CreateCompetitionRequest,
    ) -> WomResult<CompetitionWithParticipations> {
        let route = routes::CREATE_COMPETITION.compile();
        self.http.fetch_with_body(route, request).await
    }

    /// Edits a competition. Fields left unset in `request` are
    /// unchanged.
    pub async fn edit_competition(
        &self,
        id: i32,
        verification_code: &str,
        request: &EditCompetitionRequest,
    ) -> WomResult<Competition> {
        let payload = VerifiedBody {
            verification_code,
            request,
        };

        let route = routes::EDIT_COMPETITION.compile().with_segment(id);
        self.http.fetch_with_body(route, &payload).await
    }

    /// Deletes a competition.
    pub async fn delete_competition(
        &self,
        id: i32,
        verification_code: &str,
    ) -> WomResult<SuccessResponse> {
        let payload = json!({ "verificationCode": verification_code });
        let route = routes::DELETE_COMPETITION.compile().with_segment(id);

        self.http.fetch_with_body(route, &payload).await
    }

    /// Adds participants to a classic competition by username.
    pub async fn add_participants(
        &self,
        id: i32,
        verification_code: &str,
        participants: &[&str],
    ) -> WomResult<SuccessResponse> {
        let payload = json!({
            "verificationCode": verification_code,
            "participants": participants,
        });

        let route = routes::ADD_PARTICIPANTS.compile().with_segment(id);
        self.http.fetch_with_body(route, &payload).await
    }

    /// Removes participants from a classic competition by username.
    pub async fn remove_participants(
        &self,
        id: i32,
        verification_code: &str,
        participants: &[&str],
    ) -> WomResult<SuccessResponse> {
        let payload = json!({
            "verificationCode": verification_code,
            "participants": participants,
        });

        let route = routes::REMOVE_PARTICIPANTS.compile().with_segment(id);
        self.http.fetch_with_body(route, &payload).await
    }

    /// Adds teams to a team competition.
    pub async fn add_teams(
        &self,
        id: i32,
        verification_code: &str,
        teams: &[Team],
    ) -> WomResult<SuccessResponse> {
        let payload = json!({ "verificationCode": verification_code, "teams": teams });
        let route = routes::ADD_TEAMS.compile().with_segment(id);

        self.http.fetch_with_body(route, &payload).await
    }

    /// Removes teams from a team competition by team name.
    pub async fn remove_teams(
        &self,
        id: i32,
        verification_code: &str,
        team_names: &[&str],
    ) -> WomResult<SuccessResponse> {
        let payload = json!({ "verificationCode": verification_code, "teamNames": team_names });
        let route = routes::REMOVE_TEAMS.compile().with_segment(id);

        self.http.fetch_with_body(route, &payload).await
    }

    /// Queues an update for every outdated participant of the
    /// competition.
    pub async fn update_outdated_participants(
        &self,
        id: i32,
        verification_code: &str,
    ) -> WomResult<SuccessResponse> {
        let payload = json!({ "verificationCode": verification_code });
        let route = routes::UPDATE_OUTDATED_PARTICIPANTS
            .compile()
            .with_segment(id);

        self.http.fetch_with_body(route, &payload).await
    }
}
