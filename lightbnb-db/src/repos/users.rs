//! User repository

use crate::error::Result;
use crate::executor::{decode, QueryExecutor};
use crate::models::{NewUser, User};
use crate::query::Statement;

/// User repository
pub struct UserRepo<'a, E: ?Sized> {
    executor: &'a E,
}

impl<'a, E: QueryExecutor + ?Sized> UserRepo<'a, E> {
    pub fn new(executor: &'a E) -> Self {
        Self { executor }
    }

    /// Get a user by email. `None` when no user has that email.
    pub async fn lookup_by_email(&self, email: &str) -> Result<Option<User>> {
        let stmt = Statement::new("SELECT * FROM users WHERE email = $1", vec![email.into()]);

        self.executor
            .fetch_one(&stmt)
            .await?
            .map(|record| decode("user", record))
            .transpose()
    }

    /// Get a user by id. `None` when no such user exists.
    pub async fn lookup_by_id(&self, id: i32) -> Result<Option<User>> {
        let stmt = Statement::new("SELECT * FROM users WHERE id = $1", vec![id.into()]);

        self.executor
            .fetch_one(&stmt)
            .await?
            .map(|record| decode("user", record))
            .transpose()
    }

    /// Insert a user and return it with its assigned id.
    ///
    /// A duplicate email surfaces as `DbError::ConstraintViolation`.
    pub async fn create(&self, user: &NewUser) -> Result<User> {
        let stmt = Statement::new(
            "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING *",
            vec![user.name().into(), user.email().into(), user.password().into()],
        );

        let record = self.executor.insert_returning("users", &stmt).await?;
        decode("user", record)
    }
}
