//! Repository layer for database operations

pub mod hours;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub hours: hours::HoursRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            hours: hours::HoursRepository::new(pool.clone()),
            pool,
        }
    }
}
