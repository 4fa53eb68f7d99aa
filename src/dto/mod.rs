//! DTO modules shared by the backend client and the HTTP API.

pub mod api;
