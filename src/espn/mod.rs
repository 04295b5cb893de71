//! ESPN Fantasy Football v3 API access: wire types, HTTP, and the league handle.

pub mod http;
pub mod league;
pub mod types;
