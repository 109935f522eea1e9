use sqlx::{PgPool, Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

use roster_app::{
    repository::*,
    uow::{UnitOfWork, UnitOfWorkProvider},
};
use roster_core::{ApplicationError, DbError};

use crate::repository::*;

#[derive(Debug, Clone)]
pub struct PostgresUnitOfWorkProvider {
    pool: PgPool,
}

impl PostgresUnitOfWorkProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UnitOfWorkProvider for PostgresUnitOfWorkProvider {
    async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(Box::new(PostgresUnitOfWork {
            tx: Arc::new(Mutex::new(tx)),
        }))
    }
}

#[derive(Debug, Clone)]
pub struct PostgresUnitOfWork<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

#[async_trait::async_trait]
impl<'a> UnitOfWork<'a> for PostgresUnitOfWork<'a> {
    fn players(&self) -> Arc<dyn PlayerRepository + 'a> {
        Arc::new(PostgresPlayerRepository::new(self.tx.clone()))
    }

    async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
        // Repositories handed out by players() hold clones of the Arc. If any
        // is still alive the transaction can't be taken and rolls back on drop.
        match Arc::try_unwrap(self.tx) {
            Ok(mutex) => mutex
                .into_inner()
                .commit()
                .await
                .map_err(|e| ApplicationError::Db(DbError::Database(e))),
            Err(_) => {
                tracing::warn!("Commit refused, transaction still has multiple owners");
                Err(ApplicationError::Db(DbError::Transaction(
                    "transaction still has multiple owners".to_string(),
                )))
            }
        }
    }

    async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
        if let Ok(mutex) = Arc::try_unwrap(self.tx) {
            mutex
                .into_inner()
                .rollback()
                .await
                .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;
        }
        Ok(())
    }
}
