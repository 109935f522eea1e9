#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use std::{
        collections::BTreeMap,
        sync::{
            Arc, Mutex,
            atomic::{AtomicUsize, Ordering},
        },
    };

    use roster_core::{ApplicationError, DbError};
    use roster_game::models::player::{Player, PlayerId};

    use crate::{
        repository::PlayerRepository,
        uow::{UnitOfWork, UnitOfWorkProvider},
    };

    #[derive(Default)]
    struct PlayerStore {
        players: BTreeMap<PlayerId, Player>,
        last_id: i64,
        saves: usize,
    }

    /// In-memory player store. Clones share the same data, ids are never
    /// reused.
    #[derive(Default, Clone)]
    pub struct MockPlayerRepository {
        store: Arc<Mutex<PlayerStore>>,
    }

    impl MockPlayerRepository {
        pub fn new() -> Self {
            Default::default()
        }

        /// Stores a player directly, assigning an id when it has none.
        pub fn insert(&self, mut player: Player) -> Player {
            let mut store = self.store.lock().unwrap();
            let id = match player.id {
                Some(id) => id,
                None => {
                    store.last_id += 1;
                    PlayerId::new(store.last_id).unwrap()
                }
            };
            store.last_id = store.last_id.max(id.get());
            player.id = Some(id);
            store.players.insert(id, player.clone());
            player
        }

        /// How many times `save` went through the repository port.
        pub fn saves(&self) -> usize {
            self.store.lock().unwrap().saves
        }

        /// Every stored player ordered by id.
        pub fn snapshot(&self) -> Vec<Player> {
            self.store.lock().unwrap().players.values().cloned().collect()
        }
    }

    #[async_trait]
    impl PlayerRepository for MockPlayerRepository {
        async fn find_all(&self) -> Result<Vec<Player>, ApplicationError> {
            // Newest first, so callers can't rely on storage order.
            Ok(self.snapshot().into_iter().rev().collect())
        }

        async fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, ApplicationError> {
            Ok(self.store.lock().unwrap().players.get(&id).cloned())
        }

        async fn exists_by_id(&self, id: PlayerId) -> Result<bool, ApplicationError> {
            Ok(self.store.lock().unwrap().players.contains_key(&id))
        }

        async fn save(&self, player: &Player) -> Result<Player, ApplicationError> {
            self.store.lock().unwrap().saves += 1;
            Ok(self.insert(player.clone()))
        }

        async fn delete_by_id(&self, id: PlayerId) -> Result<(), ApplicationError> {
            self.store
                .lock()
                .unwrap()
                .players
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| ApplicationError::Db(DbError::PlayerNotFound(id.get())))
        }
    }

    #[derive(Default)]
    pub struct MockUnitOfWork {
        players: Arc<MockPlayerRepository>,

        // Counters to check if commit/rollback was called
        committed: Arc<AtomicUsize>,
        rolled_back: Arc<AtomicUsize>,
    }

    impl MockUnitOfWork {
        pub fn new() -> Self {
            Default::default()
        }
    }

    #[async_trait]
    impl<'a> UnitOfWork<'a> for MockUnitOfWork {
        fn players(&self) -> Arc<dyn PlayerRepository + 'a> {
            self.players.clone()
        }

        async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
            self.committed.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
            self.rolled_back.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Hands out units of work that all share one in-memory store.
    #[derive(Default)]
    pub struct MockUnitOfWorkProvider {
        players: Arc<MockPlayerRepository>,
        committed: Arc<AtomicUsize>,
        rolled_back: Arc<AtomicUsize>,
    }

    impl MockUnitOfWorkProvider {
        pub fn new() -> Self {
            Default::default()
        }

        pub fn repository(&self) -> Arc<MockPlayerRepository> {
            self.players.clone()
        }

        pub fn commits(&self) -> usize {
            self.committed.load(Ordering::SeqCst)
        }

        pub fn rollbacks(&self) -> usize {
            self.rolled_back.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl UnitOfWorkProvider for MockUnitOfWorkProvider {
        async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
            let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork {
                players: self.players.clone(),
                committed: self.committed.clone(),
                rolled_back: self.rolled_back.clone(),
            });
            Ok(uow)
        }
    }
}
