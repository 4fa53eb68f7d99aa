//! Catalog entities and the typed requests the service layer works with.

pub mod product;
pub mod search;
