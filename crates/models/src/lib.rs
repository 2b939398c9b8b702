//! Persistence models for the account admin API.

pub mod account;
pub mod db;
pub mod errors;

#[cfg(test)]
mod tests;
