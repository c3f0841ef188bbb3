// ABOUTME: Domain model definitions for API resources
// ABOUTME: Read-only value records constructed exclusively by deserialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;

/// Competition resources.
pub mod competitions;
/// Delta leaderboard resources.
pub mod deltas;
/// Group resources.
pub mod groups;
/// Name change resources.
pub mod names;
/// Player resources.
pub mod players;
/// Record resources.
pub mod records;

pub use competitions::{
    Competition, CompetitionDetail, CompetitionHistoryDataPoint, CompetitionParticipation,
    CompetitionParticipationDetail, CompetitionProgress, CompetitionStatus, CompetitionType,
    CompetitionWithParticipations, CreateCompetitionRequest, EditCompetitionRequest,
    Participation, PlayerCompetitionStanding, PlayerParticipation, Team, Top5ProgressResult,
};
pub use deltas::DeltaLeaderboardEntry;
pub use groups::{
    EditGroupRequest, Group, GroupDetail, GroupHiscoresActivityItem, GroupHiscoresBossItem,
    GroupHiscoresComputedItem, GroupHiscoresData, GroupHiscoresEntry, GroupHiscoresSkillItem,
    GroupMemberFragment, GroupMemberGains, GroupMembership, GroupRole, GroupStatistics,
    Membership, PlayerMembership,
};
pub use names::{NameChange, NameChangeData, NameChangeDetail, NameChangeStatus};
pub use players::{
    Achievement, AchievementMeasure, AchievementProgress, ActivityGains, ActivityStat,
    AssertPlayerType, BossGains, BossStat, ComputedGains, ComputedStat, Country, Gains, Player,
    PlayerAchievementProgress, PlayerBuild, PlayerDetail, PlayerGains, PlayerGainsData,
    PlayerType, SkillGains, SkillStat, Snapshot, SnapshotData, StatisticsSnapshot,
};
pub use records::{Record, RecordLeaderboardEntry};

/// Acknowledgement payload returned by mutation endpoints that produce no
/// resource, such as deletions and update-all triggers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuccessResponse {
    /// The confirmation message from the API.
    pub message: String,
}

/// Deserializes a JSON object into the in-order list of its values,
/// discarding the keys.
///
/// Snapshot data arrives keyed by metric name with the metric repeated
/// inside each value, so the keys carry no extra information.
pub(crate) fn map_values<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct MapValues<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for MapValues<T> {
        type Value = Vec<T>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map keyed by metric name")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut values = Vec::with_capacity(map.size_hint().unwrap_or(0));

            while let Some((IgnoredAny, value)) = map.next_entry::<IgnoredAny, T>()? {
                values.push(value);
            }

            Ok(values)
        }
    }

    deserializer.deserialize_map(MapValues(PhantomData))
}
