//! API handlers for HiveDesk REST endpoints

pub mod booking;
pub mod health;
pub mod hours;
pub mod openapi;
