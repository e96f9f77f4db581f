//! Customer store demo on PostgreSQL, integration-tested with `provisioned`.

use sqlx::{postgres::PgPoolOptions, FromRow, PgPool};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// A customer.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Store for [Customer]s on PostgreSQL.
#[derive(Debug, Clone)]
pub struct CustomerStore {
    pool: PgPool,
}

impl CustomerStore {
    /// Connect the store to the database behind the given connection string.
    pub async fn connect(connection_string: &str) -> Result<Self, Error> {
        let pool = PgPoolOptions::new()
            .connect(connection_string)
            .await
            .map_err(|error| Error::Sqlx("cannot connect to database".to_string(), error))?;
        debug!("connected customer store");

        Ok(Self { pool })
    }

    /// Insert a new customer with the given name and email and return it.
    pub async fn add(&self, name: &str, email: &str) -> Result<Customer, Error> {
        let customer = Customer {
            id: Uuid::now_v7(),
            name: name.to_string(),
            email: email.to_string(),
        };
        sqlx::query("INSERT INTO customers (id, name, email) VALUES ($1, $2, $3)")
            .bind(customer.id)
            .bind(&customer.name)
            .bind(&customer.email)
            .execute(&self.pool)
            .await
            .map_err(|error| Error::Sqlx("cannot insert customer".to_string(), error))?;

        Ok(customer)
    }

    /// The customer with the given email, if any.
    pub async fn by_email(&self, email: &str) -> Result<Option<Customer>, Error> {
        sqlx::query_as("SELECT id, name, email FROM customers WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|error| Error::Sqlx("cannot select customer by email".to_string(), error))
    }

    /// All customers, ordered by name.
    pub async fn all(&self) -> Result<Vec<Customer>, Error> {
        sqlx::query_as("SELECT id, name, email FROM customers ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|error| Error::Sqlx("cannot select customers".to_string(), error))
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Sqlx(String, #[source] sqlx::Error),
}
