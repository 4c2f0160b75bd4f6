//! Throwaway PostgreSQL schema for integration tests
//!
//! Every `TestDb` creates its own schema and points the pool's search_path at
//! it, so tests can run concurrently against one database.

#![allow(dead_code)]

use lightbnb_db::PgExecutor;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

const SCHEMA: &str = r#"
CREATE TABLE users (
    id SERIAL PRIMARY KEY NOT NULL,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL UNIQUE,
    password VARCHAR(255) NOT NULL
);

CREATE TABLE properties (
    id SERIAL PRIMARY KEY NOT NULL,
    owner_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    title VARCHAR(255) NOT NULL,
    description TEXT,
    thumbnail_photo_url VARCHAR(255) NOT NULL,
    cover_photo_url VARCHAR(255) NOT NULL,
    cost_per_night INTEGER NOT NULL DEFAULT 0,
    parking_spaces INTEGER NOT NULL DEFAULT 0,
    number_of_bathrooms INTEGER NOT NULL DEFAULT 0,
    number_of_bedrooms INTEGER NOT NULL DEFAULT 0,
    country VARCHAR(255) NOT NULL,
    street VARCHAR(255) NOT NULL,
    city VARCHAR(255) NOT NULL,
    province VARCHAR(255) NOT NULL,
    post_code VARCHAR(255) NOT NULL,
    active BOOLEAN NOT NULL DEFAULT TRUE
);

CREATE TABLE reservations (
    id SERIAL PRIMARY KEY NOT NULL,
    start_date DATE NOT NULL,
    end_date DATE NOT NULL,
    property_id INTEGER NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
    guest_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
);

CREATE TABLE property_reviews (
    id SERIAL PRIMARY KEY NOT NULL,
    guest_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    property_id INTEGER NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
    reservation_id INTEGER REFERENCES reservations(id) ON DELETE CASCADE,
    rating SMALLINT NOT NULL DEFAULT 0,
    message TEXT
);
"#;

pub struct TestDb {
    admin: PgPool,
    schema: String,
    pub pool: PgPool,
    pub executor: PgExecutor,
}

impl TestDb {
    pub async fn new() -> Self {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let schema = format!("lightbnb_test_{}", Uuid::new_v4().simple());

        let admin = PgPool::connect(&url).await.expect("admin pool");
        sqlx::query(&format!("CREATE SCHEMA {schema}"))
            .execute(&admin)
            .await
            .expect("create schema");

        let search_path = format!("SET search_path TO {schema}");
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .after_connect(move |conn, _meta| {
                let search_path = search_path.clone();
                Box::pin(async move {
                    sqlx::query(&search_path).execute(&mut *conn).await?;
                    Ok(())
                })
            })
            .connect(&url)
            .await
            .expect("scoped pool");

        sqlx::raw_sql(SCHEMA)
            .execute(&pool)
            .await
            .expect("create tables");

        Self {
            admin,
            schema,
            executor: PgExecutor::new(pool.clone()),
            pool,
        }
    }

    pub async fn teardown(self) {
        self.pool.close().await;
        sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .execute(&self.admin)
            .await
            .expect("drop schema");
    }

    pub async fn insert_user(&self, name: &str, email: &str) -> i32 {
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO users (name, email, password) VALUES ($1, $2, 'hash') RETURNING id",
        )
        .bind(name)
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .expect("insert user");
        id
    }

    /// Insert a property; `cost_per_night` in cents.
    pub async fn insert_property(&self, owner_id: i32, title: &str, city: &str, cost_per_night: i32) -> i32 {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO properties (
                owner_id, title, thumbnail_photo_url, cover_photo_url, cost_per_night,
                country, street, city, province, post_code
            )
            VALUES ($1, $2, 't.jpg', 'c.jpg', $3, 'Canada', '1 Main St', $4, 'ON', 'A1A 1A1')
            RETURNING id
            "#,
        )
        .bind(owner_id)
        .bind(title)
        .bind(cost_per_night)
        .bind(city)
        .fetch_one(&self.pool)
        .await
        .expect("insert property");
        id
    }

    pub async fn insert_review(&self, guest_id: i32, property_id: i32, rating: i16) {
        sqlx::query(
            "INSERT INTO property_reviews (guest_id, property_id, rating) VALUES ($1, $2, $3)",
        )
        .bind(guest_id)
        .bind(property_id)
        .bind(rating)
        .execute(&self.pool)
        .await
        .expect("insert review");
    }

    pub async fn insert_reservation(&self, guest_id: i32, property_id: i32, start: &str, end: &str) -> i32 {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO reservations (guest_id, property_id, start_date, end_date)
            VALUES ($1, $2, $3::date, $4::date)
            RETURNING id
            "#,
        )
        .bind(guest_id)
        .bind(property_id)
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await
        .expect("insert reservation");
        id
    }
}
