#[macro_use]
extern crate diesel;

use std::{cell::RefCell, ops::Deref, sync::Arc};

use anyhow::{anyhow, Result as Fallible};
use diesel::{r2d2, sqlite::SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use wtw_core::usecases as uc;

mod models;
mod repo_impl;
mod schema;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

// Votes, comments and overrides rely on the foreign keys to
// their water source, which SQLite enforces per connection.
const CONNECTION_PRAGMAS: &str = "
PRAGMA journal_mode = WAL;
PRAGMA synchronous = NORMAL;
PRAGMA foreign_keys = 1;
PRAGMA encoding = 'UTF-8';
";

type ConnectionManager = r2d2::ConnectionManager<SqliteConnection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

#[derive(Debug)]
struct ConnectionOptions;

impl r2d2::CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        use diesel::connection::SimpleConnection as _;
        conn.batch_execute(CONNECTION_PRAGMAS)
            .map_err(r2d2::Error::QueryError)
    }
}

/// A pooled connection together with the lock on the pool it was taken from.
pub struct LockedDb<G> {
    _lock: G,
    conn: RefCell<PooledConnection>,
}

/// Shared access for loading, filtering and ranking.
pub type DbReadOnly<'a> = LockedDb<RwLockReadGuard<'a, ConnectionPool>>;

/// Exclusive access for storing sources and their feedback.
pub type DbReadWrite<'a> = LockedDb<RwLockWriteGuard<'a, ConnectionPool>>;

impl<G> LockedDb<G>
where
    G: Deref<Target = ConnectionPool>,
{
    fn acquire(lock: G, access: &str) -> Fallible<Self> {
        let conn = lock.get().inspect_err(|err| {
            log::error!("No pooled database connection available for {access} access: {err}");
        })?;
        Ok(Self {
            _lock: lock,
            conn: RefCell::new(conn),
        })
    }
}

/// The connection of a running transaction.
pub struct DbConnection<'a> {
    conn: RefCell<&'a mut SqliteConnection>,
}

impl<'a> DbConnection<'a> {
    fn new(conn: &'a mut SqliteConnection) -> Self {
        Self {
            conn: RefCell::new(conn),
        }
    }
}

impl DbReadWrite<'_> {
    /// Store the outcome of a use case atomically.
    ///
    /// Photos must be classified before, the write lock is
    /// held while `f` runs. Diesel only rolls back on its own
    /// error type, so the use case error is kept aside and
    /// returned after the rollback.
    pub fn transaction<T, E, F>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&DbConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        use diesel::Connection as _;
        let mut rejected: Option<uc::Error> = None;
        let conn: &mut SqliteConnection = self.conn.get_mut();
        let res = conn.transaction(|conn| {
            f(&DbConnection::new(conn)).map_err(|err| {
                rejected = Some(err.into());
                diesel::result::Error::RollbackTransaction
            })
        });
        res.map_err(|err| rejected.unwrap_or_else(|| repo_impl::from_diesel_err(err).into()))
    }
}

/// Pool of SQLite connections.
///
/// Readers share the pool while a writer locks it for itself,
/// SQLite would answer concurrent writers with "database is locked".
#[derive(Clone)]
pub struct Connections {
    pool: Arc<RwLock<ConnectionPool>>,
}

impl Connections {
    pub fn init(url: &str, pool_size: u32) -> Fallible<Self> {
        use diesel::Connection as _;
        // r2d2 keeps retrying inaccessible files instead of failing
        SqliteConnection::establish(url)?;
        let pool = ConnectionPool::builder()
            .max_size(pool_size)
            .connection_customizer(Box::new(ConnectionOptions))
            .build(ConnectionManager::new(url))?;
        log::info!("Connected to database {url} with a pool of {pool_size} connection(s)");
        Ok(Self {
            pool: Arc::new(RwLock::new(pool)),
        })
    }

    pub fn shared(&self) -> Fallible<DbReadOnly> {
        LockedDb::acquire(self.pool.read(), "read-only")
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        LockedDb::acquire(self.pool.write(), "read/write")
    }
}

pub fn run_embedded_database_migrations(mut db: DbReadWrite<'_>) -> Fallible<()> {
    let conn: &mut SqliteConnection = db.conn.get_mut();
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow!(err))?
        .len();
    log::info!("Applied {applied} pending database migration(s)");
    Ok(())
}
