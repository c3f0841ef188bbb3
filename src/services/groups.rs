// ABOUTME: Group service covering search, membership mutation, and group leaderboards
// ABOUTME: Verification-coded mutations send JSON bodies; reads compile query filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::error::WomResult;
use crate::http::HttpClient;
use crate::metrics::{Metric, Period};
use crate::models::competitions::Competition;
use crate::models::groups::{
    EditGroupRequest, Group, GroupDetail, GroupHiscoresEntry, GroupMemberFragment,
    GroupMemberGains, GroupMembership, GroupRole, GroupStatistics,
};
use crate::models::names::NameChange;
use crate::models::players::Achievement;
use crate::models::records::RecordLeaderboardEntry;
use crate::models::SuccessResponse;
use crate::routes;

use super::VerifiedBody;

/// Handles endpoints related to groups.
#[derive(Debug, Clone, Copy)]
pub struct GroupService<'c> {
    http: &'c HttpClient,
}

impl<'c> GroupService<'c> {
    pub(crate) const fn new(http: &'c HttpClient) -> Self {
        Self { http }
    }

    /// Searches for groups by name.
    pub async fn search_groups(
        &self,
        name: Option<&str>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> WomResult<Vec<Group>> {
        let route = routes::SEARCH_GROUPS
            .compile()
            .with_optional_param("name", name)
            .with_optional_param("limit", limit)
            .with_optional_param("offset", offset);

        self.http.fetch(route).await
    }

    /// Fetches a group with its memberships.
    pub async fn get_group_details(&self, id: i32) -> WomResult<GroupDetail> {
        let route = routes::GROUP_DETAILS.compile().with_segment(id);
        self.http.fetch(route).await
    }

    /// Creates a group. The returned detail carries the verification
    /// code needed for any later mutation; it is shown only once.
    pub async fn create_group(
        &self,
        name: &str,
        members: &[GroupMemberFragment],
        clan_chat: Option<&str>,
        description: Option<&str>,
        homeworld: Option<i32>,
    ) -> WomResult<GroupDetail> {
        let mut payload = json!({ "name": name, "members": members });

        if let Some(clan_chat) = clan_chat {
            payload["clanChat"] = json!(clan_chat);
        }
        if let Some(description) = description {
            payload["description"] = json!(description);
        }
        if let Some(homeworld) = homeworld {
            payload["homeworld"] = json!(homeworld);
        }

        let route = routes::CREATE_GROUP.compile();
        self.http.fetch_with_body(route, &payload).await
    }

    /// Edits a group. Fields left unset in `request` are unchanged.
    pub async fn edit_group(
        &self,
        id: i32,
        verification_code: &str,
        request: &EditGroupRequest,
    ) -> WomResult<GroupDetail> {
        let payload = VerifiedBody {
            verification_code,
            request,
        };

        let route = routes::EDIT_GROUP.compile().with_segment(id);
        self.http.fetch_with_body(route, &payload).await
    }

    /// Deletes a group.
    pub async fn delete_group(
        &self,
        id: i32,
        verification_code: &str,
    ) -> WomResult<SuccessResponse> {
        let payload = json!({ "verificationCode": verification_code });
        let route = routes::DELETE_GROUP.compile().with_segment(id);

        self.http.fetch_with_body(route, &payload).await
    }

    /// Adds members to a group.
    pub async fn add_members(
        &self,
        id: i32,
        verification_code: &str,
        members: &[GroupMemberFragment],
    ) -> WomResult<SuccessResponse> {
        let payload = json!({ "verificationCode": verification_code, "members": members });
        let route = routes::ADD_MEMBERS.compile().with_segment(id);

        self.http.fetch_with_body(route, &payload).await
    }

    /// Removes members from a group by username.
    pub async fn remove_members(
        &self,
        id: i32,
        verification_code: &str,
        members: &[&str],
    ) -> WomResult<SuccessResponse> {
        let payload = json!({ "verificationCode": verification_code, "members": members });
        let route = routes::REMOVE_MEMBERS.compile().with_segment(id);

        self.http.fetch_with_body(route, &payload).await
    }

    /// Changes one member's role.
    pub async fn change_member_role(
        &self,
        id: i32,
        verification_code: &str,
        username: &str,
        role: GroupRole,
    ) -> WomResult<GroupMembership> {
        let payload = json!({
            "verificationCode": verification_code,
            "username": username,
            "role": role,
        });

        let route = routes::CHANGE_MEMBER_ROLE.compile().with_segment(id);
        self.http.fetch_with_body(route, &payload).await
    }

    /// Queues an update for every outdated member of the group.
    pub async fn update_outdated_members(
        &self,
        id: i32,
        verification_code: &str,
    ) -> WomResult<SuccessResponse> {
        let payload = json!({ "verificationCode": verification_code });
        let route = routes::UPDATE_OUTDATED_MEMBERS.compile().with_segment(id);

        self.http.fetch_with_body(route, &payload).await
    }

    /// Fetches the members' gains in a metric over a trailing period or
    /// an explicit date range.
    #[allow(clippy::too_many_arguments)]
    pub async fn get_group_gains(
        &self,
        id: i32,
        metric: impl Into<Metric>,
        period: Option<Period>,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> WomResult<Vec<GroupMemberGains>> {
        let route = routes::GROUP_GAINS
            .compile()
            .with_segment(id)
            .with_param("metric", metric.into())
            .with_optional_param("period", period)
            .with_optional_param("startDate", start_date.map(|date| date.to_rfc3339()))
            .with_optional_param("endDate", end_date.map(|date| date.to_rfc3339()))
            .with_optional_param("limit", limit)
            .with_optional_param("offset", offset);

        self.http.fetch(route).await
    }

    /// Fetches the achievements recently earned by the group's members.
    pub async fn get_group_achievements(
        &self,
        id: i32,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> WomResult<Vec<Achievement>> {
        let route = routes::GROUP_ACHIEVEMENTS
            .compile()
            .with_segment(id)
            .with_optional_param("limit", limit)
            .with_optional_param("offset", offset);

        self.http.fetch(route).await
    }

    /// Fetches the records held by the group's members.
    pub async fn get_group_records(
        &self,
        id: i32,
        metric: impl Into<Metric>,
        period: Period,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> WomResult<Vec<RecordLeaderboardEntry>> {
        let route = routes::GROUP_RECORDS
            .compile()
            .with_segment(id)
            .with_param("metric", metric.into())
            .with_param("period", period)
            .with_optional_param("limit", limit)
            .with_optional_param("offset", offset);

        self.http.fetch(route).await
    }

    /// Fetches the group's internal hiscores for a metric.
    pub async fn get_group_hiscores(
        &self,
        id: i32,
        metric: impl Into<Metric>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> WomResult<Vec<GroupHiscoresEntry>> {
        let route = routes::GROUP_HISCORES
            .compile()
            .with_segment(id)
            .with_param("metric", metric.into())
            .with_optional_param("limit", limit)
            .with_optional_param("offset", offset);

        self.http.fetch(route).await
    }

    /// Fetches the name changes among the group's members.
    pub async fn get_group_name_changes(
        &self,
        id: i32,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> WomResult<Vec<NameChange>> {
        let route = routes::GROUP_NAME_CHANGES
            .compile()
            .with_segment(id)
            .with_optional_param("limit", limit)
            .with_optional_param("offset", offset);

        self.http.fetch(route).await
    }

    /// Fetches accumulated statistics over the group's members.
    pub async fn get_group_statistics(&self, id: i32) -> WomResult<GroupStatistics> {
        let route = routes::GROUP_STATISTICS.compile().with_segment(id);
        self.http.fetch(route).await
    }

    /// Fetches the competitions hosted by the group.
    pub async fn get_group_competitions(
        &self,
        id: i32,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> WomResult<Vec<Competition>> {
        let route = routes::GROUP_COMPETITIONS
            .compile()
            .with_segment(id)
            .with_optional_param("limit", limit)
            .with_optional_param("offset", offset);

        self.http.fetch(route).await
    }
}
