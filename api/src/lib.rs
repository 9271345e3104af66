//! Client for the Raven Tools SEO API.
//!
//! Every remote method is one async call on [`RavenClient`]. Read operations
//! return the decoded JSON as-is; domain and keyword edits return whether the
//! service accepted them.
//!
//! ```rust,no_run
//! use raven_api::RavenClient;
//!
//! # async fn run() -> raven_api::Result<()> {
//! let client = RavenClient::new("RAVEN_API_KEY")?;
//! let domains = client.domains().await?;
//! println!("{domains}");
//!
//! if !client.add_keyword("example.com", "rust seo").await? {
//!     eprintln!("keyword rejected");
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod endpoints;
pub mod params;
mod types;

pub use client::{RavenClient, RavenClientBuilder, API_BASE_URL, DEFAULT_CONNECT_TIMEOUT};
pub use params::Params;
pub use raven_core::models::{Link, LinkId, Operation, SearchEngine};
pub use raven_core::{RavenError, Result};
pub use types::is_success;
