// ABOUTME: Record domain models for per-period gains held by players
// ABOUTME: Includes the global record leaderboard entry shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::metrics::{Metric, Period};

use super::players::Player;

/// The largest gain a player has achieved in one metric over one period.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// The unique ID of the record.
    pub id: i32,
    /// The ID of the player holding it.
    pub player_id: i32,
    /// The period the record was achieved over.
    pub period: Period,
    /// The metric measured.
    pub metric: Metric,
    /// The gained value.
    pub value: f64,
    /// When the record was set or last improved.
    pub updated_at: DateTime<Utc>,
}

/// One entry on the global record leaderboard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordLeaderboardEntry {
    /// The record itself.
    #[serde(flatten)]
    pub record: Record,
    /// The player holding it.
    pub player: Player,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]

    use super::*;
    use crate::metrics::Skill;

    #[test]
    fn test_record_deserializes_period_and_metric() {
        let json = serde_json::json!({
            "id": 1,
            "playerId": 151_063,
            "period": "five_min",
            "metric": "woodcutting",
            "value": 55_000.0,
            "updatedAt": "2023-02-12T17:55:59.000Z"
        });

        let record: Record = serde_json::from_value(json).unwrap();
        assert_eq!(record.period, Period::FiveMins);
        assert_eq!(record.metric, Metric::Skill(Skill::Woodcutting));
        assert_eq!(record.value, 55_000.0);
    }
}
