use std::env;

use crate::error::AppError;

/// Database profile enum for different environments
#[derive(Debug, Clone, PartialEq)]
pub enum DbProfile {
    /// Production database profile - file-backed SQLite store
    Prod,
    /// Test database profile - always an in-memory store
    Test,
}

/// Builds a database URL based on the profile.
///
/// The production store is a local SQLite file created on first open
/// (`mode=rwc`). The test profile never touches the filesystem.
pub fn db_url(profile: DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => {
            let path = db_file()?;
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbProfile::Test => Ok("sqlite::memory:".to_string()),
    }
}

/// Get the SQLite file path from environment (defaults to ./items.db)
fn db_file() -> Result<String, AppError> {
    Ok(env::var("BACKEND_DB_FILE").unwrap_or_else(|_| "./items.db".to_string()))
}

#[cfg(test)]
mod tests {
    use std::env;

    use serial_test::serial;

    use super::{db_url, DbProfile};

    #[test]
    #[serial]
    fn test_db_url_prod_default() {
        env::remove_var("BACKEND_DB_FILE");
        let url = db_url(DbProfile::Prod).unwrap();
        assert_eq!(url, "sqlite://./items.db?mode=rwc");
    }

    #[test]
    #[serial]
    fn test_db_url_prod_respects_env() {
        env::set_var("BACKEND_DB_FILE", "/var/lib/itemstore/items.db");
        let url = db_url(DbProfile::Prod).unwrap();
        assert_eq!(url, "sqlite:///var/lib/itemstore/items.db?mode=rwc");
        env::remove_var("BACKEND_DB_FILE");
    }

    #[test]
    #[serial]
    fn test_db_url_test_is_in_memory() {
        let url = db_url(DbProfile::Test).unwrap();
        assert_eq!(url, "sqlite::memory:");
    }
}
