pub use client::MatchdayClient;
pub use config::ClientConfig;
pub use error::{MatchdayError, Result};
pub use model::*;
pub use ordering::MatchBoard;

pub(crate) mod api;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod model;
pub mod ordering;
pub mod screen;
