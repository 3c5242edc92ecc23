//! # IO Module
//!
//! Adapter layer between the frontend and the domain: the REST API, its
//! request/response DTOs (from the `shared` crate) and the mappers between
//! those DTOs and domain models.

pub mod rest;

pub use rest::*;
