// ABOUTME: Service handles grouping API operations by domain area
// ABOUTME: Each method runs the fixed compile-dispatch-decode pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Serialize;

/// Competition operations.
pub mod competitions;
/// Delta leaderboard operations.
pub mod deltas;
/// Efficiency leaderboard operations.
pub mod efficiency;
/// Group operations.
pub mod groups;
/// Name change operations.
pub mod names;
/// Player operations.
pub mod players;
/// Record leaderboard operations.
pub mod records;

/// An edit payload with the verification code serialized alongside the
/// caller's request fields, in one pass with no intermediate value tree.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VerifiedBody<'a, T> {
    pub verification_code: &'a str,
    #[serde(flatten)]
    pub request: &'a T,
}

pub use competitions::CompetitionService;
pub use deltas::DeltaService;
pub use efficiency::EfficiencyService;
pub use groups::GroupService;
pub use names::NameChangeService;
pub use players::PlayerService;
pub use records::RecordService;
