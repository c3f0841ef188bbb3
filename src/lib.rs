// ABOUTME: Typed async client for the Wise Old Man OSRS statistics API
// ABOUTME: Crate root wiring routes, transport, models, and service handles together
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A typed async client for the [Wise Old Man](https://wiseoldman.net) API,
//! the open source Old School RuneScape player statistics tracker.
//!
//! The entry point is [`Client`]: build one, then reach the API through
//! its per-domain service handles. Every operation returns
//! [`WomResult`], so transport failures, API rejections, and decode
//! failures all surface as a [`WomError`] instead of a panic.
//!
//! ```no_run
//! use wom_client::{Client, Period, Skill};
//!
//! # async fn run() -> wom_client::WomResult<()> {
//! let client = Client::new();
//!
//! let gains = client
//!     .players()
//!     .get_player_gains("zezima", Some(Period::Week), None, None)
//!     .await?;
//! println!("gained {} overall exp this week", gains.data.skills[0].experience.gained);
//! # Ok(())
//! # }
//! ```
//!
//! An API key and a descriptive user agent are optional but
//! recommended; see [`ClientConfig`].

/// Client construction and service accessors.
pub mod client;
/// Error taxonomy shared by every operation.
pub mod error;
/// Transport dispatch and response classification.
mod http;
/// Metric, period, and wire-string enums.
pub mod metrics;
/// Response and request payload types.
pub mod models;
/// Route table and URI compilation.
mod routes;
/// Per-domain service handles.
pub mod services;

pub use client::{Client, ClientConfig};
pub use error::{HttpErrorResponse, WomError, WomResult};
pub use metrics::{Activity, Boss, ComputedMetric, Metric, Period, Skill, UnknownWireValue};
