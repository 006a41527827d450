use futures_util::future::LocalBoxFuture;
use sea_orm::{DatabaseTransaction, TransactionTrait};

use super::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Execute a function within a database transaction scoped to one request.
///
/// Begin on entry, commit on Ok, best-effort rollback on Err. The connection
/// is returned to the pool on every exit path.
pub async fn with_txn<R, F>(state: &AppState, f: F) -> Result<R, AppError>
where
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> LocalBoxFuture<'c, Result<R, AppError>>,
{
    let db = require_db(state)?;
    let txn = db.begin().await?;

    match f(&txn).await {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; preserve original error
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::with_txn;
    use crate::error::AppError;
    use crate::state::app_state::AppState;

    #[tokio::test]
    async fn test_with_txn_requires_db() {
        let state = AppState::new_without_db();

        let result: Result<(), AppError> =
            with_txn(&state, |_txn| Box::pin(async { Ok(()) })).await;
        assert!(matches!(result, Err(AppError::DbUnavailable)));
    }
}
