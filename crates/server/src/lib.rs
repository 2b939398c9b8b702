//! HTTP layer of the account admin API: three resource façades over one
//! account store, mounted behind an admin role gate.

pub mod auth;
pub mod context;
pub mod errors;
pub mod openapi;
pub mod request;
pub mod responses;
pub mod routes;
pub mod startup;

pub use startup::run;
