//! # pinboard-poster - Pinboard bookmarking client for Rust
//!
//! A small client for posting and deleting bookmarks ("pins") via the
//! [Pinboard](https://pinboard.in/) REST API.
//!
//! ## Features
//!
//! - Add and delete bookmarks with a single call each
//! - API token resolution from an explicit value, a properties file,
//!   or the `PINBOARD_API_TOKEN` environment variable
//! - Boolean success/failure contract: expected failures are logged and
//!   answered with `false`, never panics or unchecked errors
//! - A `try_` variant of each operation reporting the exact failure
//!   kind (configuration, validation, transport, remote)
//! - Diagnostic logging through the [`log`] facade, with the token
//!   redacted from request URLs; silent unless a logger is installed
//!
//! ## Basic Usage
//!
//! ```no_run
//! use pinboard_poster::{Pin, PinboardPoster};
//!
//! fn main() {
//!     let poster = PinboardPoster::new("user:TOKEN");
//!
//!     let pin = Pin::new("https://www.example.com/", "Example")
//!         .tags(["test", "example"])
//!         .build();
//!
//!     if poster.add_pin(&pin) {
//!         println!("Added: {}", pin.url);
//!     }
//!
//!     if poster.delete_pin(&pin.url) {
//!         println!("Deleted: {}", pin.url);
//!     }
//! }
//! ```
//!
//! ## Token Sources
//!
//! ```no_run
//! use pinboard_poster::{PinboardPoster, TokenSource};
//!
//! // explicit token
//! let poster = PinboardPoster::new("user:TOKEN");
//!
//! // `pinboard_api_token` entry in a properties file, falling back to
//! // the environment
//! let poster = PinboardPoster::from_properties("local.properties");
//!
//! // $PINBOARD_API_TOKEN only
//! let poster = PinboardPoster::from_env();
//!
//! // or spell the source out
//! let poster = PinboardPoster::from_source(TokenSource::Environment);
//! ```
//!
//! An unresolvable token does not fail construction; the first request
//! reports it as a configuration error.

pub mod client;
pub mod error;
pub mod pin;
pub mod poster;
pub mod response;
pub mod time;
pub mod token;

// Re-export main types for convenience
pub use client::{Config, API_ENDPOINT};
pub use error::{PinboardError, Result};
pub use pin::{Pin, PinBuilder};
pub use poster::PinboardPoster;
pub use response::ApiResult;
pub use time::Time;
pub use token::{ApiToken, TokenSource};
