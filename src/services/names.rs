// ABOUTME: Name change service covering search, submission, and review details
// ABOUTME: Builds query-filtered and JSON-body requests against the names endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde_json::json;

use crate::error::WomResult;
use crate::http::HttpClient;
use crate::models::names::{NameChange, NameChangeDetail, NameChangeStatus};
use crate::routes;

/// Handles endpoints related to name changes.
#[derive(Debug, Clone, Copy)]
pub struct NameChangeService<'c> {
    http: &'c HttpClient,
}

impl<'c> NameChangeService<'c> {
    pub(crate) const fn new(http: &'c HttpClient) -> Self {
        Self { http }
    }

    /// Searches name changes. With no filters the request carries no
    /// query parameters at all.
    pub async fn search_name_changes(
        &self,
        username: Option<&str>,
        status: Option<NameChangeStatus>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> WomResult<Vec<NameChange>> {
        let route = routes::SEARCH_NAME_CHANGES
            .compile()
            .with_optional_param("username", username)
            .with_optional_param("status", status)
            .with_optional_param("limit", limit)
            .with_optional_param("offset", offset);

        self.http.fetch(route).await
    }

    /// Submits a name change from `old_name` to `new_name`.
    pub async fn submit_name_change(
        &self,
        old_name: &str,
        new_name: &str,
    ) -> WomResult<NameChange> {
        let payload = json!({ "oldName": old_name, "newName": new_name });
        let route = routes::SUBMIT_NAME_CHANGE.compile();

        self.http.fetch_with_body(route, &payload).await
    }

    /// Fetches a name change with its review evidence.
    pub async fn get_name_change_details(&self, id: i32) -> WomResult<NameChangeDetail> {
        let route = routes::NAME_CHANGE_DETAILS.compile().with_segment(id);
        self.http.fetch(route).await
    }
}
