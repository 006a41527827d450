use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::info;

use crate::config::db::{db_url, DbProfile};
use crate::entities::items;
use crate::error::AppError;

/// Connect to the store for the given profile.
/// This function does NOT touch the schema.
pub async fn connect_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let database_url = db_url(profile.clone())?;

    let mut opts = ConnectOptions::new(database_url);
    opts.sqlx_logging(false);

    if profile == DbProfile::Test {
        // An in-memory SQLite database exists per connection; a single pooled
        // connection keeps it alive and visible for the whole test.
        opts.max_connections(1).min_connections(1);
    }

    let conn = Database::connect(opts).await?;
    Ok(conn)
}

/// Create the items table if it does not exist yet.
///
/// Schema setup happens here, explicitly, during bootstrap - never as a side
/// effect of loading a module.
pub async fn ensure_schema(conn: &DatabaseConnection) -> Result<(), AppError> {
    let builder = conn.get_database_backend();
    let schema = Schema::new(builder);

    let mut stmt = schema.create_table_from_entity(items::Entity);
    stmt.if_not_exists();

    conn.execute(builder.build(&stmt)).await?;
    info!("schema_ensured table=items");
    Ok(())
}

/// Single entrypoint used at startup and in tests: connect, then ensure the
/// schema exists.
pub async fn bootstrap_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile).await?;
    ensure_schema(&conn).await?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::{bootstrap_db, ensure_schema};
    use crate::config::db::DbProfile;

    #[tokio::test]
    async fn test_bootstrap_test_profile() {
        let conn = bootstrap_db(DbProfile::Test).await.expect("bootstrap");

        // Ensuring the schema twice must be a no-op, not an error.
        ensure_schema(&conn).await.expect("schema is idempotent");
    }
}
