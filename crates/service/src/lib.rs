//! Service layer for the isme app.
//! - `isme::repository` defines the record store capability and its in-memory impl.
//! - `isme::repo::seaorm` backs the store with the `models` entity.
//! - `isme::service` exposes the membership operations the handlers call.

pub mod errors;
pub mod isme;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
