//! SQLite-backed storage for user accounts and weather records.
//!
//! `Database` is synchronous; async callers wrap it in a mutex and reach it
//! through `tokio::task::spawn_blocking` (see the auth and weather service
//! crates).

use std::path::Path;

use rusqlite::{params, Connection};

use crate::error::{StoreError, StoreResult};
use crate::live::{LiveRegistry, WeatherQuery, WeatherSubscription};
use crate::types::{NewWeatherRecord, UserAccount, WeatherRecord};

/// SQLite store for users and weather history.
pub struct Database {
    conn: Connection,
    live: LiveRegistry,
}

impl Database {
    /// Open (or create) the database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::open(format!("create data directory: {}", e)))?;
        }
        let conn = Connection::open(path).map_err(|e| StoreError::open(e.to_string()))?;
        let db = Self {
            conn,
            live: LiveRegistry::default(),
        };
        db.init_schema()?;
        Ok(db)
    }

    /// Create an in-memory database (for testing).
    pub fn in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::open(e.to_string()))?;
        let db = Self {
            conn,
            live: LiveRegistry::default(),
        };
        db.init_schema()?;
        Ok(db)
    }

    /// Initialize the database schema.
    ///
    /// The unique index on `users.email` is the sole duplicate-detection
    /// mechanism for registration; there is no separate pre-check.
    fn init_schema(&self) -> StoreResult<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                password_hash TEXT NOT NULL
            );

            CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON users(email);

            CREATE TABLE IF NOT EXISTS weather (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                city TEXT NOT NULL,
                country TEXT NOT NULL,
                temperature_celsius INTEGER NOT NULL,
                sunrise INTEGER NOT NULL,
                sunset INTEGER NOT NULL,
                condition TEXT NOT NULL,
                icon TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                user_email TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_weather_created ON weather(created_at DESC);
            CREATE INDEX IF NOT EXISTS idx_weather_user_created
                ON weather(user_email, created_at DESC);
            "#,
        )?;
        Ok(())
    }

    fn row_to_user(row: &rusqlite::Row) -> rusqlite::Result<UserAccount> {
        Ok(UserAccount {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            password_hash: row.get(3)?,
        })
    }

    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<WeatherRecord> {
        Ok(WeatherRecord {
            id: row.get(0)?,
            city: row.get(1)?,
            country: row.get(2)?,
            temperature_celsius: row.get(3)?,
            sunrise: row.get(4)?,
            sunset: row.get(5)?,
            condition: row.get(6)?,
            icon: row.get(7)?,
            created_at: row.get(8)?,
            user_email: row.get(9)?,
        })
    }

    // ---- users ----

    /// Insert a new user account.
    ///
    /// # Errors
    /// Returns `StoreError::DuplicateEmail` when an account with the same
    /// email already exists.
    pub fn register_user(
        &mut self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> StoreResult<UserAccount> {
        self.conn.execute(
            "INSERT INTO users (name, email, password_hash) VALUES (?1, ?2, ?3)",
            params![name, email, password_hash],
        )?;

        let id = self.conn.last_insert_rowid();
        tracing::debug!("Registered user with ID: {}", id);

        Ok(UserAccount {
            id,
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        })
    }

    /// Look up a user by exact email.
    pub fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserAccount>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, email, password_hash FROM users WHERE email = ?1")?;

        let mut rows = stmt.query(params![email])?;
        match rows.next()? {
            Some(row) => Ok(Some(Self::row_to_user(row)?)),
            None => Ok(None),
        }
    }

    /// Look up a user by exact email and password hash.
    pub fn find_user_by_credentials(
        &self,
        email: &str,
        password_hash: &str,
    ) -> StoreResult<Option<UserAccount>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, email, password_hash FROM users
             WHERE email = ?1 AND password_hash = ?2",
        )?;

        let mut rows = stmt.query(params![email, password_hash])?;
        match rows.next()? {
            Some(row) => Ok(Some(Self::row_to_user(row)?)),
            None => Ok(None),
        }
    }

    // ---- weather ----

    /// Insert a weather record and notify live subscribers.
    pub fn insert_weather(&mut self, record: NewWeatherRecord) -> StoreResult<WeatherRecord> {
        self.conn.execute(
            r#"
            INSERT OR REPLACE INTO weather
                (city, country, temperature_celsius, sunrise, sunset,
                 condition, icon, created_at, user_email)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                record.city,
                record.country,
                record.temperature_celsius,
                record.sunrise,
                record.sunset,
                record.condition,
                record.icon,
                record.created_at,
                record.user_email,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        tracing::debug!("Inserted weather record with ID: {}", id);

        self.notify_subscribers();

        Ok(WeatherRecord {
            id,
            city: record.city,
            country: record.country,
            temperature_celsius: record.temperature_celsius,
            sunrise: record.sunrise,
            sunset: record.sunset,
            condition: record.condition,
            icon: record.icon,
            created_at: record.created_at,
            user_email: record.user_email,
        })
    }

    /// The most recently created record across all users.
    pub fn latest_weather(&self) -> StoreResult<Option<WeatherRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, city, country, temperature_celsius, sunrise, sunset,
                    condition, icon, created_at, user_email
             FROM weather ORDER BY created_at DESC LIMIT 1",
        )?;

        let mut rows = stmt.query([])?;
        match rows.next()? {
            Some(row) => Ok(Some(Self::row_to_record(row)?)),
            None => Ok(None),
        }
    }

    /// All records, newest first.
    pub fn weather_history(&self) -> StoreResult<Vec<WeatherRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, city, country, temperature_celsius, sunrise, sunset,
                    condition, icon, created_at, user_email
             FROM weather ORDER BY created_at DESC",
        )?;

        let rows = stmt.query_map([], Self::row_to_record)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
    }

    /// Records for one email (exact match), newest first.
    pub fn weather_history_for_user(&self, email: &str) -> StoreResult<Vec<WeatherRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, city, country, temperature_celsius, sunrise, sunset,
                    condition, icon, created_at, user_email
             FROM weather WHERE user_email = ?1 ORDER BY created_at DESC",
        )?;

        let rows = stmt.query_map(params![email], Self::row_to_record)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
    }

    // ---- live queries ----

    /// Subscribe to a query shape.
    ///
    /// The current snapshot is delivered immediately; subsequent result sets
    /// arrive after every successful weather insert.
    pub fn subscribe(&mut self, query: WeatherQuery) -> StoreResult<WeatherSubscription> {
        let snapshot = self.run_query(&query)?;
        let (tx, subscription) = self.live.register(query);
        // Delivery cannot fail: the receiver is still in scope.
        let _ = tx.send(snapshot);
        Ok(subscription)
    }

    /// Number of currently registered subscribers (dead ones included until
    /// the next notification pass).
    pub fn subscriber_count(&self) -> usize {
        self.live.len()
    }

    fn run_query(&self, query: &WeatherQuery) -> StoreResult<Vec<WeatherRecord>> {
        match query {
            WeatherQuery::AllHistory => self.weather_history(),
            WeatherQuery::HistoryForUser(email) => self.weather_history_for_user(email),
            WeatherQuery::Latest => Ok(self.latest_weather()?.into_iter().collect()),
        }
    }

    /// Re-run each subscriber's query and fan out the result sets in
    /// registration order, pruning subscribers whose receivers are gone.
    fn notify_subscribers(&mut self) {
        let conn = &self.conn;
        self.live.subscribers.retain(|subscriber| {
            let results = match run_query_on(conn, &subscriber.query) {
                Ok(results) => results,
                Err(e) => {
                    tracing::warn!("Live query failed, skipping fan-out: {}", e);
                    return true;
                }
            };
            subscriber.tx.send(results).is_ok()
        });
    }
}

/// Run a query shape against a raw connection.
///
/// Free function so `notify_subscribers` can borrow the connection while the
/// subscriber list is being retained.
fn run_query_on(conn: &Connection, query: &WeatherQuery) -> StoreResult<Vec<WeatherRecord>> {
    let (sql, email): (&str, Option<&str>) = match query {
        WeatherQuery::AllHistory => (
            "SELECT id, city, country, temperature_celsius, sunrise, sunset,
                    condition, icon, created_at, user_email
             FROM weather ORDER BY created_at DESC",
            None,
        ),
        WeatherQuery::HistoryForUser(email) => (
            "SELECT id, city, country, temperature_celsius, sunrise, sunset,
                    condition, icon, created_at, user_email
             FROM weather WHERE user_email = ?1 ORDER BY created_at DESC",
            Some(email),
        ),
        WeatherQuery::Latest => (
            "SELECT id, city, country, temperature_celsius, sunrise, sunset,
                    condition, icon, created_at, user_email
             FROM weather ORDER BY created_at DESC LIMIT 1",
            None,
        ),
    };

    let mut stmt = conn.prepare(sql)?;
    let rows = match email {
        Some(email) => stmt.query_map(params![email], Database::row_to_record)?,
        None => stmt.query_map([], Database::row_to_record)?,
    };
    rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
}
