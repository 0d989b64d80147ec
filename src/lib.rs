//! Shadewalk: client for a shade-friendly walking-route service.
//!
//! Browse recommended street segments, search fastest and leisurely routes,
//! keep favorites and leave post-walk feedback. Every call goes through an
//! authenticated [`gateway::Gateway`] that refreshes an expired session once
//! and replays the requests that were waiting on it.
//!
//! # Quick Start
//!
//! ```no_run
//! use shadewalk::prelude::*;
//!
//! # async fn example() -> shadewalk::error::Result<()> {
//! let client = ShadewalkClient::from_config(&ClientConfig::from_env()?)?;
//! let route = client
//!     .routes()
//!     .search(&RouteSearchRequest::new(
//!         LatLng::new(37.5408, 127.0793),
//!         LatLng::new(37.5443, 127.0740),
//!     ).with_added_time(10))
//!     .await?;
//! println!("{} extra minutes in the shade", route.extra_minutes());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod prelude;
pub mod stores;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;

pub use client::ShadewalkClient;
pub use config::ClientConfig;
