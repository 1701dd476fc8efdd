//! Domain aggregates and search primitives exposed by the service layer.

pub mod condition;
pub mod criteria;
pub mod member;
pub mod member_team;
pub mod team;
pub mod types;
