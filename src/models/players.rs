// ABOUTME: Player domain models including snapshots, gains, and achievements
// ABOUTME: Deserialized atomically from API payloads; never partially constructed
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::metrics::{wire_enum, Activity, Boss, ComputedMetric, Metric, Skill};

use super::map_values;

wire_enum! {
    /// The game-mode type of a player account.
    PlayerType {
        Regular => "regular",
        Ironman => "ironman",
        Hardcore => "hardcore",
        Ultimate => "ultimate",
        FreshStart => "fresh_start",
        Unknown => "unknown",
    }
}

wire_enum! {
    /// The account build of a player.
    PlayerBuild {
        Main => "main",
        F2p => "f2p",
        Lvl3 => "lvl3",
        Zerker => "zerker",
        Def1 => "def1",
        Hp10 => "hp10",
        F2pLvl3 => "f2p_lvl3",
    }
}

wire_enum! {
    /// The measure an achievement threshold is expressed in.
    AchievementMeasure {
        Levels => "levels",
        Experience => "experience",
        Kills => "kills",
        Score => "score",
        Value => "value",
    }
}

/// An ISO 3166-1 alpha-2 country code, passed through verbatim from the
/// wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Country(pub String);

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A tracked player.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// The unique ID of the player.
    pub id: i32,
    /// The normalized username.
    pub username: String,
    /// The display name, with original capitalization.
    pub display_name: String,
    /// The account type.
    #[serde(rename = "type")]
    pub player_type: PlayerType,
    /// The account build.
    pub build: PlayerBuild,
    /// The player's flag country, when set.
    #[serde(default)]
    pub country: Option<Country>,
    /// Whether the player is flagged for suspicious gains.
    pub flagged: bool,
    /// Total experience.
    pub exp: i64,
    /// Efficient hours played.
    pub ehp: f64,
    /// Efficient hours bossed.
    pub ehb: f64,
    /// Time to max, in hours.
    pub ttm: f64,
    /// Time to 200m all, in hours.
    pub tt200m: f64,
    /// When the player was first tracked.
    pub registered_at: DateTime<Utc>,
    /// When the player was last updated.
    pub updated_at: DateTime<Utc>,
    /// When the player's stats last changed, if ever observed.
    #[serde(default)]
    pub last_changed_at: Option<DateTime<Utc>>,
    /// When hiscores history was last imported, if ever.
    #[serde(default)]
    pub last_imported_at: Option<DateTime<Utc>>,
}

/// A player's skill levels at one point in time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillStat {
    /// The skill this entry measures.
    pub metric: Skill,
    /// Hiscores rank.
    pub rank: i64,
    /// Skill level.
    pub level: i32,
    /// Skill experience.
    pub experience: i64,
    /// Efficient hours played attributable to this skill.
    pub ehp: f64,
}

/// A player's kill count for one boss at one point in time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BossStat {
    /// The boss this entry measures.
    pub metric: Boss,
    /// Hiscores rank.
    pub rank: i64,
    /// Kill count.
    pub kills: i64,
    /// Efficient hours bossed attributable to this boss.
    pub ehb: f64,
}

/// A player's score for one activity at one point in time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityStat {
    /// The activity this entry measures.
    pub metric: Activity,
    /// Hiscores rank.
    pub rank: i64,
    /// Activity score.
    pub score: i64,
}

/// A player's value for one computed metric at one point in time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedStat {
    /// The computed metric this entry measures.
    pub metric: ComputedMetric,
    /// Hiscores rank.
    pub rank: i64,
    /// The computed value.
    pub value: f64,
}

/// Per-category stat collections inside a snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SnapshotData {
    /// Stats for every skill.
    #[serde(deserialize_with = "map_values")]
    pub skills: Vec<SkillStat>,
    /// Stats for every boss.
    #[serde(deserialize_with = "map_values")]
    pub bosses: Vec<BossStat>,
    /// Stats for every activity.
    #[serde(deserialize_with = "map_values")]
    pub activities: Vec<ActivityStat>,
    /// Stats for every computed metric.
    #[serde(deserialize_with = "map_values")]
    pub computed: Vec<ComputedStat>,
}

/// A full capture of a player's stats at one point in time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// The unique ID of the snapshot.
    pub id: i32,
    /// The ID of the player this snapshot belongs to.
    pub player_id: i32,
    /// When the snapshot was taken.
    pub created_at: DateTime<Utc>,
    /// When the snapshot was imported from hiscores history, if it was.
    #[serde(default)]
    pub imported_at: Option<DateTime<Utc>>,
    /// The captured stats.
    pub data: SnapshotData,
}

/// A snapshot-shaped record whose creation date may be absent, as used in
/// aggregated group statistics.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSnapshot {
    /// The unique ID of the snapshot.
    pub id: i32,
    /// The ID of the player this snapshot belongs to.
    pub player_id: i32,
    /// When the snapshot was taken, when applicable.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the snapshot was imported, if it was.
    #[serde(default)]
    pub imported_at: Option<DateTime<Utc>>,
    /// The captured stats.
    pub data: SnapshotData,
}

/// A player together with the derived details returned by detail
/// endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetail {
    /// The player itself.
    #[serde(flatten)]
    pub player: Player,
    /// The player's combat level.
    pub combat_level: i32,
    /// The most recent snapshot, when one exists.
    #[serde(default)]
    pub latest_snapshot: Option<Snapshot>,
}

/// The outcome of asserting a player's game-mode type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssertPlayerType {
    /// The player after the assertion ran.
    pub player: Player,
    /// Whether the stored type changed.
    pub changed: bool,
}

/// An achievement a player has earned.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// The ID of the player who earned it.
    pub player_id: i32,
    /// The achievement name.
    pub name: String,
    /// The metric the achievement tracks.
    pub metric: Metric,
    /// The measure the threshold is expressed in.
    pub measure: AchievementMeasure,
    /// The threshold value.
    pub threshold: i64,
    /// When the achievement was earned.
    pub created_at: DateTime<Utc>,
}

/// An achievement a player is working toward; `created_at` is absent until
/// it is earned.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementProgress {
    /// The ID of the player.
    pub player_id: i32,
    /// The achievement name.
    pub name: String,
    /// The metric the achievement tracks.
    pub metric: Metric,
    /// The measure the threshold is expressed in.
    pub measure: AchievementMeasure,
    /// The threshold value.
    pub threshold: i64,
    /// When the achievement was earned, if it has been.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Progress toward one achievement.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAchievementProgress {
    /// The achievement being progressed.
    #[serde(flatten)]
    pub achievement: AchievementProgress,
    /// The player's current value in the achievement's measure.
    pub current_value: i64,
    /// Progress from zero toward the threshold, 0 to 1.
    pub absolute_progress: f64,
    /// Progress from the previous achievement tier, 0 to 1.
    pub relative_progress: f64,
}

/// A start/end pair with the gained difference.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gains {
    /// The amount gained over the interval.
    pub gained: f64,
    /// The value at the start of the interval.
    pub start: f64,
    /// The value at the end of the interval.
    pub end: f64,
}

/// Gains in one skill over an interval.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGains {
    /// The skill measured.
    pub metric: Skill,
    /// Experience gains.
    pub experience: Gains,
    /// Efficient-hours-played gains.
    pub ehp: Gains,
    /// Rank movement.
    pub rank: Gains,
    /// Level gains.
    pub level: Gains,
}

/// Gains against one boss over an interval.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BossGains {
    /// The boss measured.
    pub metric: Boss,
    /// Efficient-hours-bossed gains.
    pub ehb: Gains,
    /// Rank movement.
    pub rank: Gains,
    /// Kill count gains.
    pub kills: Gains,
}

/// Gains in one activity over an interval.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityGains {
    /// The activity measured.
    pub metric: Activity,
    /// Rank movement.
    pub rank: Gains,
    /// Score gains.
    pub score: Gains,
}

/// Gains in one computed metric over an interval.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedGains {
    /// The computed metric measured.
    pub metric: ComputedMetric,
    /// Rank movement.
    pub rank: Gains,
    /// Value gains.
    pub value: Gains,
}

/// Per-category gains collections.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerGainsData {
    /// Gains for every skill.
    #[serde(deserialize_with = "map_values")]
    pub skills: Vec<SkillGains>,
    /// Gains for every boss.
    #[serde(deserialize_with = "map_values")]
    pub bosses: Vec<BossGains>,
    /// Gains for every activity.
    #[serde(deserialize_with = "map_values")]
    pub activities: Vec<ActivityGains>,
    /// Gains for every computed metric.
    #[serde(deserialize_with = "map_values")]
    pub computed: Vec<ComputedGains>,
}

/// A player's gains over a requested interval.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerGains {
    /// The start of the interval.
    pub starts_at: DateTime<Utc>,
    /// The end of the interval.
    pub ends_at: DateTime<Utc>,
    /// The gains data.
    pub data: PlayerGainsData,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]

    use super::*;

    fn player_json() -> serde_json::Value {
        serde_json::json!({
            "id": 151063,
            "username": "zezima",
            "displayName": "Zezima",
            "type": "regular",
            "build": "main",
            "country": "IS",
            "flagged": false,
            "exp": 27_957_906,
            "ehp": 118.1123,
            "ehb": 0.0,
            "ttm": 1030.9,
            "tt200m": 22_123.2,
            "registeredAt": "2021-01-26T00:19:42.224Z",
            "updatedAt": "2023-02-12T17:55:59.352Z",
            "lastChangedAt": "2023-02-12T17:55:59.000Z",
            "lastImportedAt": null
        })
    }

    #[test]
    fn test_player_deserializes_with_optionals() {
        let player: Player = serde_json::from_value(player_json()).unwrap();

        assert_eq!(player.id, 151_063);
        assert_eq!(player.player_type, PlayerType::Regular);
        assert_eq!(player.country, Some(Country("IS".to_owned())));
        assert!(player.last_changed_at.is_some());
        assert!(player.last_imported_at.is_none());
    }

    #[test]
    fn test_player_missing_required_field_fails_atomically() {
        let mut json = player_json();
        json.as_object_mut().unwrap().remove("id");

        let result: Result<Player, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_player_detail_flattens_player_fields() {
        let mut json = player_json();
        let object = json.as_object_mut().unwrap();
        object.insert("combatLevel".to_owned(), serde_json::json!(126));
        object.insert("latestSnapshot".to_owned(), serde_json::Value::Null);

        let detail: PlayerDetail = serde_json::from_value(json).unwrap();
        assert_eq!(detail.combat_level, 126);
        assert_eq!(detail.player.username, "zezima");
        assert!(detail.latest_snapshot.is_none());
    }

    #[test]
    fn test_snapshot_data_keeps_map_value_order() {
        let json = serde_json::json!({
            "skills": {
                "overall": {
                    "metric": "overall", "rank": 12, "level": 2277,
                    "experience": 4_600_000_000_i64, "ehp": 25_000.0
                },
                "attack": {
                    "metric": "attack", "rank": 9, "level": 99,
                    "experience": 200_000_000, "ehp": 5_000.0
                }
            },
            "bosses": {
                "zulrah": { "metric": "zulrah", "rank": 3, "kills": 4000, "ehb": 110.0 }
            },
            "activities": {
                "pvp_arena": { "metric": "pvp_arena", "rank": 1, "score": 500 }
            },
            "computed": {
                "ehp": { "metric": "ehp", "rank": 12, "value": 25_000.0 }
            }
        });

        let data: SnapshotData = serde_json::from_value(json).unwrap();

        assert_eq!(data.skills.len(), 2);
        assert_eq!(data.skills[0].metric, Skill::Overall);
        assert_eq!(data.skills[1].metric, Skill::Attack);
        assert_eq!(data.bosses[0].kills, 4000);
        assert_eq!(data.activities[0].score, 500);
        assert_eq!(data.computed[0].value, 25_000.0);
    }

    #[test]
    fn test_malformed_date_fails_deserialization() {
        let mut json = player_json();
        json.as_object_mut()
            .unwrap()
            .insert("registeredAt".to_owned(), serde_json::json!("yesterday"));

        let result: Result<Player, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }
}
