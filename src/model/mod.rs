mod common;
mod fixture;
mod league;

pub use common::*;
pub use fixture::*;
pub use league::*;
