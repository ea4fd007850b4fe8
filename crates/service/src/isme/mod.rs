//! Membership of names on the shared "who is me" list: domain type,
//! store abstraction with its implementations, and the service on top.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::IsMe;
pub use repository::IsMeStore;
pub use service::MembershipService;
