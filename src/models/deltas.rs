// ABOUTME: Delta domain models for gains over trailing periods
// ABOUTME: Covers the global delta leaderboard entry shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::players::Player;

/// One entry on the global delta leaderboard: a player's gain in the
/// requested metric over the requested period.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeltaLeaderboardEntry {
    /// The player holding the entry.
    pub player: Player,
    /// The ID of the player.
    pub player_id: i32,
    /// The start of the measured interval.
    pub start_date: DateTime<Utc>,
    /// The end of the measured interval.
    pub end_date: DateTime<Utc>,
    /// The amount gained over the interval.
    pub gained: f64,
}
