//! # REST API Interface Layer
//!
//! HTTP endpoints for the bill tracker. Handlers translate requests into
//! domain calls and domain results into status codes; they hold no
//! business logic of their own.

pub mod analysis_apis;
pub mod bill_apis;
pub mod mappers;

pub use analysis_apis::*;
pub use bill_apis::*;
