// ABOUTME: Competition domain models, participations, and standings
// ABOUTME: Includes the caller-built create/edit request payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::metrics::{wire_enum, Metric};

use super::groups::Group;
use super::players::Player;

wire_enum! {
    /// How a competition's participants are organized.
    CompetitionType {
        Classic => "classic",
        Team => "team",
    }
}

wire_enum! {
    /// Where a competition sits relative to its start and end dates.
    CompetitionStatus {
        Upcoming => "upcoming",
        Ongoing => "ongoing",
        Finished => "finished",
    }
}

/// A competition over one metric.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    /// The unique ID of the competition.
    pub id: i32,
    /// The competition title.
    pub title: String,
    /// The metric being measured.
    pub metric: Metric,
    /// The competition type.
    #[serde(rename = "type")]
    pub competition_type: CompetitionType,
    /// When the competition starts.
    pub starts_at: DateTime<Utc>,
    /// When the competition ends.
    pub ends_at: DateTime<Utc>,
    /// The hosting group's ID, when group-hosted.
    #[serde(default)]
    pub group_id: Option<i32>,
    /// The competition's score.
    pub score: i32,
    /// When the competition was created.
    pub created_at: DateTime<Utc>,
    /// When the competition was last updated.
    pub updated_at: DateTime<Utc>,
    /// The number of participants.
    pub participant_count: i32,
    /// The hosting group, when group-hosted.
    #[serde(default)]
    pub group: Option<Group>,
}

/// One player's enrolment in one competition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participation {
    /// The ID of the participating player.
    pub player_id: i32,
    /// The ID of the competition.
    pub competition_id: i32,
    /// The team the player belongs to, for team competitions.
    #[serde(default)]
    pub team_name: Option<String>,
    /// When the participation was created.
    pub created_at: DateTime<Utc>,
    /// When the participation was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A participation as listed on a competition, with the player attached.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionParticipation {
    /// The participation itself.
    #[serde(flatten)]
    pub participation: Participation,
    /// The participating player.
    pub player: Player,
}

/// Start, end, and gained values over a competition's window.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionProgress {
    /// The metric value at the start of the window.
    pub start: f64,
    /// The metric value at the end of the window.
    pub end: f64,
    /// The amount gained over the window.
    pub gained: f64,
}

/// A participation with the progress made, as listed in competition
/// details.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionParticipationDetail {
    /// The participation itself.
    #[serde(flatten)]
    pub participation: CompetitionParticipation,
    /// The progress made over the competition window.
    pub progress: CompetitionProgress,
}

/// A competition with its per-participant progress.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionDetail {
    /// The competition itself.
    #[serde(flatten)]
    pub competition: Competition,
    /// The participations, ordered by progress.
    pub participations: Vec<CompetitionParticipationDetail>,
}

/// A participation as listed on a player, with the competition attached.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerParticipation {
    /// The participation itself.
    #[serde(flatten)]
    pub participation: Participation,
    /// The competition participated in.
    pub competition: Competition,
}

/// A player's standing within a competition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCompetitionStanding {
    /// The participation itself.
    #[serde(flatten)]
    pub participation: PlayerParticipation,
    /// The progress made over the competition window.
    pub progress: CompetitionProgress,
    /// The player's rank in the standings.
    pub rank: i32,
}

/// One point in a top-participant history series.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionHistoryDataPoint {
    /// When the point was recorded.
    pub date: DateTime<Utc>,
    /// The metric value at that time.
    pub value: f64,
}

/// A top-5 participant with their value history over the competition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Top5ProgressResult {
    /// The participant.
    pub player: Player,
    /// The participant's value history.
    pub history: Vec<CompetitionHistoryDataPoint>,
}

/// A competition with its participations and, on creation, the
/// verification code needed for later edits.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionWithParticipations {
    /// The competition itself.
    #[serde(flatten)]
    pub competition: Competition,
    /// The participations.
    pub participations: Vec<CompetitionParticipation>,
    /// The verification code; only present when the competition was just
    /// created.
    #[serde(default)]
    pub verification_code: Option<String>,
}

/// A caller-built team for team competitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// The team name.
    pub name: String,
    /// The usernames on the team.
    pub participants: Vec<String>,
}

/// Caller-built payload for creating a competition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompetitionRequest {
    /// The competition title.
    pub title: String,
    /// The metric to measure.
    pub metric: Metric,
    /// When the competition starts.
    pub starts_at: DateTime<Utc>,
    /// When the competition ends.
    pub ends_at: DateTime<Utc>,
    /// The hosting group's ID, for group competitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i32>,
    /// The hosting group's verification code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_verification_code: Option<String>,
    /// Participant usernames, for classic competitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<String>>,
    /// Teams, for team competitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teams: Option<Vec<Team>>,
}

impl CreateCompetitionRequest {
    /// Creates a minimal request with no group, participants, or teams.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        metric: impl Into<Metric>,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            metric: metric.into(),
            starts_at,
            ends_at,
            group_id: None,
            group_verification_code: None,
            participants: None,
            teams: None,
        }
    }
}

/// Caller-built payload for editing a competition. Omitted fields are
/// left unchanged by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditCompetitionRequest {
    /// A new title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// A new metric.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<Metric>,
    /// A new start date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    /// A new end date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    /// A replacement participant list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<String>>,
    /// A replacement team list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teams: Option<Vec<Team>>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::metrics::Skill;

    #[test]
    fn test_create_request_omits_absent_fields() {
        let starts = "2023-01-01T00:00:00Z".parse().unwrap();
        let ends = "2023-01-08T00:00:00Z".parse().unwrap();
        let request =
            CreateCompetitionRequest::new("Skill week", Skill::Mining, starts, ends);

        let json = serde_json::to_value(&request).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object["metric"], "mining");
        assert_eq!(object["startsAt"], "2023-01-01T00:00:00Z");
        assert!(!object.contains_key("groupId"));
        assert!(!object.contains_key("participants"));
        assert!(!object.contains_key("teams"));
    }

    #[test]
    fn test_competition_type_field_is_renamed() {
        let json = serde_json::json!({
            "id": 1, "title": "SOTW", "metric": "agility", "type": "classic",
            "startsAt": "2023-01-01T00:00:00.000Z",
            "endsAt": "2023-01-08T00:00:00.000Z",
            "groupId": null, "score": 10,
            "createdAt": "2022-12-30T00:00:00.000Z",
            "updatedAt": "2022-12-30T00:00:00.000Z",
            "participantCount": 40, "group": null
        });

        let competition: Competition = serde_json::from_value(json).unwrap();
        assert_eq!(competition.competition_type, CompetitionType::Classic);
        assert_eq!(competition.metric, Metric::Skill(Skill::Agility));
        assert!(competition.group_id.is_none());
    }
}
