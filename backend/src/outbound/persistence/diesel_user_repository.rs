//! SQLite-backed `UserRepository` implementation using Diesel ORM.
//!
//! Updates and deletes are scoped by role so an employer id can never be used
//! to touch a jobseeker or admin row.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{
    NewUserRecord, PasswordHash, Role, StoredCredentials, User, UserChanges, UserId,
};

use super::diesel_error_mapping::{is_unique_violation, map_basic_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserRow, UserUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> UserRepositoryError {
    map_pool_error(error, UserRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> UserRepositoryError {
    map_basic_diesel_error(error, UserRepositoryError::query, UserRepositoryError::connection)
}

fn map_write_error(error: diesel::result::Error, email: &str) -> UserRepositoryError {
    if is_unique_violation(&error) {
        UserRepositoryError::email_taken(email)
    } else {
        map_diesel_error(error)
    }
}

fn row_to_user(row: &UserRow) -> Result<User, UserRepositoryError> {
    let role = row.role.parse::<Role>().map_err(|err| {
        warn!(user_id = row.id, value = %row.role, "stored role is not recognised");
        UserRepositoryError::query(err.to_string())
    })?;
    Ok(User {
        id: UserId::new(row.id),
        name: row.name.clone(),
        email: row.email.clone(),
        role,
        created_at: row.created_at.and_utc(),
    })
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, record: &NewUserRecord) -> Result<User, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let row = NewUserRow {
            name: &record.name,
            email: &record.email,
            password_hash: record.password_hash.as_str(),
            role: record.role.as_str(),
            created_at: record.created_at.naive_utc(),
        };

        let stored: UserRow = diesel::insert_into(users::table)
            .values(&row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_write_error(err, &record.email))?;

        row_to_user(&stored)
    }

    async fn find_credentials(
        &self,
        email: &str,
    ) -> Result<Option<StoredCredentials>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let row: Option<UserRow> = users::table
            .filter(users::email.eq(email))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(|row| {
            Ok(StoredCredentials {
                user: row_to_user(&row)?,
                password_hash: PasswordHash::from_stored(row.password_hash),
            })
        })
        .transpose()
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let row: Option<UserRow> = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn list_by_role(&self, role: Role) -> Result<Vec<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let rows: Vec<UserRow> = users::table
            .filter(users::role.eq(role.as_str()))
            .order(users::id.desc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.iter().map(row_to_user).collect()
    }

    async fn update(
        &self,
        id: UserId,
        role: Role,
        changes: &UserChanges,
    ) -> Result<bool, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let update = UserUpdate {
            name: &changes.name,
            email: &changes.email,
            password_hash: changes.password_hash.as_ref().map(PasswordHash::as_str),
        };

        let affected = diesel::update(
            users::table
                .filter(users::id.eq(id.get()))
                .filter(users::role.eq(role.as_str())),
        )
        .set(&update)
        .execute(&mut conn)
        .await
        .map_err(|err| map_write_error(err, &changes.email))?;

        Ok(affected > 0)
    }

    async fn delete(&self, id: UserId, role: Role) -> Result<bool, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let affected = diesel::delete(
            users::table
                .filter(users::id.eq(id.get()))
                .filter(users::role.eq(role.as_str())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }
}
