use std::sync::Arc;

use roster_core::{ApplicationError, Result};

use crate::{
    config::Config,
    cqrs::{Command, CommandHandler, Query, QueryHandler},
    uow::UnitOfWorkProvider,
};

/// AppBus (Mediator)
/// This struct is the central entry point for all application logic.
/// It does not contain any business logic itself.
/// Its primary roles are:
/// 1. Managing Unit of Work (transaction) lifecycles.
/// 2. Dispatching Commands and Queries to their respective handlers.
pub struct AppBus {
    config: Arc<Config>,
    uow_provider: Arc<dyn UnitOfWorkProvider>,
}

impl AppBus {
    pub fn new(config: Arc<Config>, uow_provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            config,
            uow_provider,
        }
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Executes a command.
    /// A command is an operation that modifies the system state.
    /// This method manages the transaction:
    /// - It begins a Unit of Work.
    /// - It passes the UoW to the handler.
    /// - If the handler succeeds, it commits the UoW.
    /// - If the handler fails, it rolls back the UoW.
    pub async fn execute<C, H>(&self, cmd: C, handler: H) -> Result<C::Output, ApplicationError>
    where
        C: Command,
        H: CommandHandler<C>,
    {
        let uow = self.uow_provider.begin().await?;
        let result = handler.handle(cmd, &uow, &self.config).await;

        match result {
            Ok(output) => {
                uow.commit().await?;
                Ok(output)
            }
            Err(e) => {
                uow.rollback().await?;
                Err(e)
            }
        }
    }

    /// Executes a query.
    /// A query is an operation that reads system state and returns data.
    /// It should *never* modify the state.
    /// This method ensures the transaction is *always* rolled back.
    pub async fn query<Q, H>(&self, query: Q, handler: H) -> Result<Q::Output, ApplicationError>
    where
        Q: Query,
        H: QueryHandler<Q>,
    {
        let uow = self.uow_provider.begin().await?;
        let result = handler.handle(query, &uow, &self.config).await;

        uow.rollback().await?;

        result
    }
}
