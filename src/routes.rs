// ABOUTME: Static endpoint route table and the route compiler
// ABOUTME: Binds URI segments and query parameters into immutable request descriptors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::Display;

use reqwest::Method;

/// A static description of one API endpoint: its HTTP method and URI
/// template. Templates use `{}` placeholders for path segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    method: Method,
    uri: &'static str,
}

impl Route {
    /// Creates a route from a method and URI template.
    #[must_use]
    pub const fn new(method: Method, uri: &'static str) -> Self {
        Self { method, uri }
    }

    /// The URI template for this route.
    #[must_use]
    pub const fn uri(&self) -> &'static str {
        self.uri
    }

    /// The HTTP method for this route.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Begins compiling this route into a fully resolved request
    /// descriptor.
    #[must_use]
    pub fn compile(&self) -> CompiledRoute {
        CompiledRoute {
            method: self.method.clone(),
            uri: self.uri.to_owned(),
            params: Vec::new(),
            cursor: 0,
        }
    }
}

/// A route with its URI segments resolved and query parameters bound.
///
/// Created per call and consumed once by the transport. Query parameters
/// keep insertion order; absent optional values are never emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRoute {
    method: Method,
    uri: String,
    params: Vec<(&'static str, String)>,
    // Scan position past the last substituted segment, so placeholder
    // lookups never read substituted text.
    cursor: usize,
}

impl CompiledRoute {
    /// Substitutes the next `{}` placeholder in the URI with `value`.
    ///
    /// The value is taken literally; braces inside it never become new
    /// placeholders.
    ///
    /// # Panics
    ///
    /// Panics if the URI has no remaining placeholder. Passing more
    /// segments than the template declares is a bug in the calling code,
    /// not a runtime condition.
    #[must_use]
    pub fn with_segment(mut self, value: impl Display) -> Self {
        let open = self.uri[self.cursor..].find("{}");
        assert!(
            open.is_some(),
            "route {} has no open uri segment",
            self.uri
        );

        if let Some(offset) = open {
            let start = self.cursor + offset;
            let value = value.to_string();
            self.cursor = start + value.len();
            self.uri.replace_range(start..start + 2, &value);
        }
        self
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn with_param(mut self, name: &'static str, value: impl Display) -> Self {
        self.params.push((name, value.to_string()));
        self
    }

    /// Appends a query parameter when `value` is present, and omits the
    /// key entirely when it is `None`.
    #[must_use]
    pub fn with_optional_param(self, name: &'static str, value: Option<impl Display>) -> Self {
        match value {
            Some(value) => self.with_param(name, value),
            None => self,
        }
    }

    /// The resolved URI path for this request.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The HTTP method for this request.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// The bound query parameters, in insertion order.
    #[must_use]
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Whether every `{}` placeholder in the URI template was substituted.
    #[must_use]
    pub fn is_fully_resolved(&self) -> bool {
        !self.uri[self.cursor..].contains("{}")
    }
}

pub(crate) const SEARCH_PLAYERS: Route = Route::new(Method::GET, "/players/search");
pub(crate) const UPDATE_PLAYER: Route = Route::new(Method::POST, "/players/{}");
pub(crate) const ASSERT_PLAYER_TYPE: Route = Route::new(Method::POST, "/players/{}/assert-type");
pub(crate) const PLAYER_DETAILS: Route = Route::new(Method::GET, "/players/{}");
pub(crate) const PLAYER_DETAILS_BY_ID: Route = Route::new(Method::GET, "/players/id/{}");
pub(crate) const PLAYER_ACHIEVEMENTS: Route = Route::new(Method::GET, "/players/{}/achievements");
pub(crate) const PLAYER_ACHIEVEMENT_PROGRESS: Route =
    Route::new(Method::GET, "/players/{}/achievements/progress");
pub(crate) const PLAYER_COMPETITION_PARTICIPATION: Route =
    Route::new(Method::GET, "/players/{}/competitions");
pub(crate) const PLAYER_COMPETITION_STANDINGS: Route =
    Route::new(Method::GET, "/players/{}/competitions/standings");
pub(crate) const PLAYER_GROUP_MEMBERSHIPS: Route = Route::new(Method::GET, "/players/{}/groups");
pub(crate) const PLAYER_GAINS: Route = Route::new(Method::GET, "/players/{}/gained");
pub(crate) const PLAYER_RECORDS: Route = Route::new(Method::GET, "/players/{}/records");
pub(crate) const PLAYER_SNAPSHOTS: Route = Route::new(Method::GET, "/players/{}/snapshots");
pub(crate) const PLAYER_NAME_CHANGES: Route = Route::new(Method::GET, "/players/{}/names");

pub(crate) const SEARCH_NAME_CHANGES: Route = Route::new(Method::GET, "/names");
pub(crate) const SUBMIT_NAME_CHANGE: Route = Route::new(Method::POST, "/names");
pub(crate) const NAME_CHANGE_DETAILS: Route = Route::new(Method::GET, "/names/{}");

pub(crate) const GLOBAL_RECORD_LEADERS: Route = Route::new(Method::GET, "/records/leaderboard");
pub(crate) const GLOBAL_DELTA_LEADERS: Route = Route::new(Method::GET, "/deltas/leaderboard");
pub(crate) const GLOBAL_EFFICIENCY_LEADERS: Route =
    Route::new(Method::GET, "/efficiency/leaderboard");

pub(crate) const SEARCH_GROUPS: Route = Route::new(Method::GET, "/groups");
pub(crate) const GROUP_DETAILS: Route = Route::new(Method::GET, "/groups/{}");
pub(crate) const CREATE_GROUP: Route = Route::new(Method::POST, "/groups");
pub(crate) const EDIT_GROUP: Route = Route::new(Method::PUT, "/groups/{}");
pub(crate) const DELETE_GROUP: Route = Route::new(Method::DELETE, "/groups/{}");
pub(crate) const ADD_MEMBERS: Route = Route::new(Method::POST, "/groups/{}/members");
pub(crate) const REMOVE_MEMBERS: Route = Route::new(Method::DELETE, "/groups/{}/members");
pub(crate) const CHANGE_MEMBER_ROLE: Route = Route::new(Method::PUT, "/groups/{}/role");
pub(crate) const UPDATE_OUTDATED_MEMBERS: Route =
    Route::new(Method::POST, "/groups/{}/update-all");
pub(crate) const GROUP_GAINS: Route = Route::new(Method::GET, "/groups/{}/gained");
pub(crate) const GROUP_ACHIEVEMENTS: Route = Route::new(Method::GET, "/groups/{}/achievements");
pub(crate) const GROUP_RECORDS: Route = Route::new(Method::GET, "/groups/{}/records");
pub(crate) const GROUP_HISCORES: Route = Route::new(Method::GET, "/groups/{}/hiscores");
pub(crate) const GROUP_NAME_CHANGES: Route = Route::new(Method::GET, "/groups/{}/name-changes");
pub(crate) const GROUP_STATISTICS: Route = Route::new(Method::GET, "/groups/{}/statistics");
pub(crate) const GROUP_COMPETITIONS: Route = Route::new(Method::GET, "/groups/{}/competitions");

pub(crate) const SEARCH_COMPETITIONS: Route = Route::new(Method::GET, "/competitions");
pub(crate) const COMPETITION_DETAILS: Route = Route::new(Method::GET, "/competitions/{}");
pub(crate) const TOP_PARTICIPANT_HISTORY: Route =
    Route::new(Method::GET, "/competitions/{}/top-history");
pub(crate) const CREATE_COMPETITION: Route = Route::new(Method::POST, "/competitions");
pub(crate) const EDIT_COMPETITION: Route = Route::new(Method::PUT, "/competitions/{}");
pub(crate) const DELETE_COMPETITION: Route = Route::new(Method::DELETE, "/competitions/{}");
pub(crate) const UPDATE_OUTDATED_PARTICIPANTS: Route =
    Route::new(Method::POST, "/competitions/{}/update-all");
pub(crate) const ADD_PARTICIPANTS: Route =
    Route::new(Method::POST, "/competitions/{}/participants");
pub(crate) const REMOVE_PARTICIPANTS: Route =
    Route::new(Method::DELETE, "/competitions/{}/participants");
pub(crate) const ADD_TEAMS: Route = Route::new(Method::POST, "/competitions/{}/teams");
pub(crate) const REMOVE_TEAMS: Route = Route::new(Method::DELETE, "/competitions/{}/teams");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{Period, Skill};

    #[test]
    fn test_segments_substitute_in_order() {
        let route = PLAYER_DETAILS.compile().with_segment("jonxslays");

        assert_eq!(route.uri(), "/players/jonxslays");
        assert_eq!(route.method(), &Method::GET);
        assert!(route.is_fully_resolved());
    }

    #[test]
    #[should_panic(expected = "has no open uri segment")]
    fn test_extra_segment_panics() {
        let _ = SEARCH_PLAYERS.compile().with_segment("jonxslays");
    }

    #[test]
    fn test_unresolved_segment_is_detected() {
        let route = PLAYER_DETAILS.compile();
        assert!(!route.is_fully_resolved());
    }

    #[test]
    fn test_segment_values_containing_braces_stay_literal() {
        let route = PLAYER_DETAILS.compile().with_segment("a{}b");

        assert_eq!(route.uri(), "/players/a{}b");
        assert!(route.is_fully_resolved());
    }

    #[test]
    #[should_panic(expected = "has no open uri segment")]
    fn test_braces_in_a_substituted_value_open_no_segment() {
        let _ = PLAYER_DETAILS
            .compile()
            .with_segment("a{}b")
            .with_segment("again");
    }

    #[test]
    fn test_absent_optional_params_are_omitted() {
        let route = SEARCH_NAME_CHANGES
            .compile()
            .with_optional_param("username", None::<&str>)
            .with_optional_param("limit", None::<u32>)
            .with_optional_param("offset", None::<u32>);

        assert!(route.params().is_empty());
    }

    #[test]
    fn test_enum_params_use_wire_strings() {
        let route = GLOBAL_RECORD_LEADERS
            .compile()
            .with_param("metric", Skill::Overall)
            .with_param("period", Period::FiveMins);

        assert_eq!(
            route.params(),
            [
                ("metric", "overall".to_owned()),
                ("period", "five_min".to_owned())
            ]
        );
    }

    #[test]
    fn test_params_keep_insertion_order() {
        let route = SEARCH_PLAYERS
            .compile()
            .with_param("username", "zezima")
            .with_optional_param("limit", Some(25))
            .with_param("offset", 5);

        assert_eq!(
            route.params(),
            [
                ("username", "zezima".to_owned()),
                ("limit", "25".to_owned()),
                ("offset", "5".to_owned())
            ]
        );
    }
}
