use sqlx::postgres::PgConnection;
use sqlx::sqlite::SqliteConnection;
use sqlx::Connection as _;

/// An open connection to one of the supported databases.
pub enum Connection {
    Postgres(PgConnection),
    Sqlite(SqliteConnection),
}

/// The scheme of a connection URL, the only part of it that is safe to log.
pub fn scheme(url: &str) -> &str {
    url.split_once(':').map_or("", |(scheme, _)| scheme)
}

/// Opens a new connection for a single call.
///
/// The driver is picked from the URL scheme (`postgres://`, `postgresql://` or
/// `sqlite:`). Connections are never pooled or shared: every call to the data
/// access layer acquires its own and hands it to [`release`] before returning.
pub async fn acquire(url: &str) -> Result<Connection, sqlx::Error> {
    match scheme(url) {
        "postgres" | "postgresql" => Ok(Connection::Postgres(PgConnection::connect(url).await?)),
        "sqlite" => Ok(Connection::Sqlite(SqliteConnection::connect(url).await?)),
        other => Err(sqlx::Error::Configuration(
            format!("unsupported database URL scheme '{other}'").into(),
        )),
    }
}

/// Closes a connection, logging (but not failing on) an unclean shutdown.
pub async fn release(conn: Connection) {
    let closed = match conn {
        Connection::Postgres(conn) => conn.close().await,
        Connection::Sqlite(conn) => conn.close().await,
    };
    if let Err(e) = closed {
        tracing::warn!(error = %e, "Failed to close database connection cleanly.");
    }
}
