// ABOUTME: Name change domain models and review data
// ABOUTME: Covers submissions, status tracking, and reviewer detail payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::metrics::wire_enum;

use super::players::Snapshot;

wire_enum! {
    /// Where a name change submission sits in the review process.
    NameChangeStatus {
        Pending => "pending",
        Approved => "approved",
        Denied => "denied",
    }
}

/// A submitted name change.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameChange {
    /// The unique ID of the name change.
    pub id: i32,
    /// The ID of the player it belongs to.
    pub player_id: i32,
    /// The previous username.
    pub old_name: String,
    /// The requested username.
    pub new_name: String,
    /// The review status.
    pub status: NameChangeStatus,
    /// When the change was reviewed, if it has been.
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
    /// When the submission was last updated.
    pub updated_at: DateTime<Utc>,
    /// When the change was submitted.
    pub created_at: DateTime<Utc>,
}

/// Evidence gathered for reviewing a name change.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameChangeData {
    /// Whether the new name appears on the hiscores.
    pub is_new_on_hiscores: bool,
    /// Whether the old name still appears on the hiscores.
    pub is_old_on_hiscores: bool,
    /// Whether the new name is already tracked.
    pub is_new_tracked: bool,
    /// Whether accepting would imply negative gains.
    pub has_negative_gains: bool,
    /// Milliseconds between the old name's last snapshot and the new
    /// name's first.
    pub time_diff: i64,
    /// The same interval, in hours.
    pub hours_diff: f64,
    /// Efficient-hours-played difference across the change.
    pub ehp_diff: f64,
    /// Efficient-hours-bossed difference across the change.
    pub ehb_diff: f64,
    /// The old name's last snapshot.
    pub old_stats: Snapshot,
    /// The new name's first snapshot, when one exists.
    #[serde(default)]
    pub new_stats: Option<Snapshot>,
}

/// A name change with its review evidence, when the API computed any.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameChangeDetail {
    /// The name change itself.
    pub name_change: NameChange,
    /// The review evidence; absent for already-resolved changes.
    #[serde(default)]
    pub data: Option<NameChangeData>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_name_change_deserializes() {
        let json = serde_json::json!({
            "id": 122_524,
            "playerId": 151_063,
            "oldName": "psikoi",
            "newName": "zezima",
            "status": "pending",
            "resolvedAt": null,
            "updatedAt": "2023-01-10T12:00:00.000Z",
            "createdAt": "2023-01-10T12:00:00.000Z"
        });

        let change: NameChange = serde_json::from_value(json).unwrap();
        assert_eq!(change.status, NameChangeStatus::Pending);
        assert!(change.resolved_at.is_none());
        assert_eq!(change.old_name, "psikoi");
    }

    #[test]
    fn test_unknown_status_is_an_error() {
        let result: Result<NameChangeStatus, _> = serde_json::from_str("\"escalated\"");
        assert!(result.is_err());
    }
}
