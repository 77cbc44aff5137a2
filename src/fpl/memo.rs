//! Within-run memoization of repeated upstream reads.
//!
//! The positional report asks for the same player's fixture history once per
//! gameweek the player appears in a squad, and the captain report re-reads the
//! same picks the positional report already fetched. `MemoSource` keeps those
//! answers in bounded LRU caches for the lifetime of one run. Nothing is
//! written to disk.

use async_trait::async_trait;
use lru::LruCache;
use std::{
    hash::Hash,
    num::NonZeroUsize,
    sync::{Mutex, MutexGuard},
};
use tracing::debug;

use crate::{
    cli::types::{Gameweek, LeagueId, ManagerId, PlayerId},
    fpl::{
        source::DataSource,
        types::{FixtureRecord, GameweekPicks, ManagerHistoryEntry, PlayerElement, StandingEntry},
    },
    Result,
};

pub const DEFAULT_MEMO_CAPACITY: usize = 1024;

fn lock<K: Hash + Eq, V>(m: &Mutex<LruCache<K, V>>) -> MutexGuard<'_, LruCache<K, V>> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// `DataSource` wrapper that memoizes per-player, per-manager and
/// per-(manager, gameweek) reads of the wrapped source.
pub struct MemoSource<S> {
    inner: S,
    player_history: Mutex<LruCache<PlayerId, Vec<FixtureRecord>>>,
    manager_history: Mutex<LruCache<ManagerId, Vec<ManagerHistoryEntry>>>,
    picks: Mutex<LruCache<(ManagerId, Gameweek), GameweekPicks>>,
    capacity: NonZeroUsize,
}

impl<S: DataSource> MemoSource<S> {
    pub fn new(inner: S, capacity: NonZeroUsize) -> Self {
        Self {
            inner,
            player_history: Mutex::new(LruCache::new(capacity)),
            manager_history: Mutex::new(LruCache::new(capacity)),
            picks: Mutex::new(LruCache::new(capacity)),
            capacity,
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Entries currently held per cache, and the shared per-cache capacity.
    pub fn memory_stats(&self) -> (usize, usize, usize, usize) {
        (
            lock(&self.player_history).len(),
            lock(&self.manager_history).len(),
            lock(&self.picks).len(),
            self.capacity.get(),
        )
    }
}

#[async_trait]
impl<S: DataSource> DataSource for MemoSource<S> {
    async fn get_bootstrap(&self) -> Result<Vec<PlayerElement>> {
        self.inner.get_bootstrap().await
    }

    async fn get_league_standings(&self, league_id: LeagueId) -> Result<Vec<StandingEntry>> {
        self.inner.get_league_standings(league_id).await
    }

    async fn get_manager_history(&self, manager: ManagerId) -> Result<Vec<ManagerHistoryEntry>> {
        if let Some(hit) = lock(&self.manager_history).get(&manager) {
            debug!(%manager, "manager history memo hit");
            return Ok(hit.clone());
        }
        let fetched = self.inner.get_manager_history(manager).await?;
        lock(&self.manager_history).put(manager, fetched.clone());
        Ok(fetched)
    }

    async fn get_manager_picks(&self, manager: ManagerId, gw: Gameweek) -> Result<GameweekPicks> {
        if let Some(hit) = lock(&self.picks).get(&(manager, gw)) {
            debug!(%manager, %gw, "picks memo hit");
            return Ok(hit.clone());
        }
        let fetched = self.inner.get_manager_picks(manager, gw).await?;
        lock(&self.picks).put((manager, gw), fetched.clone());
        Ok(fetched)
    }

    async fn get_player_history(&self, player: PlayerId) -> Result<Vec<FixtureRecord>> {
        if let Some(hit) = lock(&self.player_history).get(&player) {
            debug!(%player, "player history memo hit");
            return Ok(hit.clone());
        }
        let fetched = self.inner.get_player_history(player).await?;
        lock(&self.player_history).put(player, fetched.clone());
        Ok(fetched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeSource;

    fn memo(source: FakeSource, capacity: usize) -> MemoSource<FakeSource> {
        MemoSource::new(source, NonZeroUsize::new(capacity).unwrap())
    }

    fn seeded() -> FakeSource {
        FakeSource::new()
            .with_player_history(PlayerId::new(1), vec![FakeSource::fixture(1, 6)])
            .with_player_history(PlayerId::new(2), vec![FakeSource::fixture(1, 2)])
            .with_manager_history(ManagerId::new(7), vec![FakeSource::history(1, 50, 50, 1000)])
            .with_picks(
                ManagerId::new(7),
                Gameweek::new(1),
                vec![FakeSource::pick(1, 2, true)],
                (0, 0),
            )
    }

    #[tokio::test]
    async fn test_repeated_player_history_read_hits_memo() {
        let source = memo(seeded(), 8);

        let first = source.get_player_history(PlayerId::new(1)).await.unwrap();
        let second = source.get_player_history(PlayerId::new(1)).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(source.into_inner().calls("player_history"), 1);
    }

    #[tokio::test]
    async fn test_picks_keyed_by_manager_and_gameweek() {
        let source = memo(seeded(), 8);

        source
            .get_manager_picks(ManagerId::new(7), Gameweek::new(1))
            .await
            .unwrap();
        source
            .get_manager_picks(ManagerId::new(7), Gameweek::new(1))
            .await
            .unwrap();
        source
            .get_manager_history(ManagerId::new(7))
            .await
            .unwrap();

        let (players, managers, picks, capacity) = source.memory_stats();
        assert_eq!((players, managers, picks, capacity), (0, 1, 1, 8));

        let inner = source.into_inner();
        assert_eq!(inner.calls("picks"), 1);
        assert_eq!(inner.calls("manager_history"), 1);
    }

    #[tokio::test]
    async fn test_eviction_refetches() {
        let source = memo(seeded(), 1);

        source.get_player_history(PlayerId::new(1)).await.unwrap();
        source.get_player_history(PlayerId::new(2)).await.unwrap();
        source.get_player_history(PlayerId::new(1)).await.unwrap();

        assert_eq!(source.into_inner().calls("player_history"), 3);
    }

    #[tokio::test]
    async fn test_errors_are_not_memoized() {
        let source = memo(FakeSource::new(), 8);

        assert!(source.get_player_history(PlayerId::new(9)).await.is_err());
        assert!(source.get_player_history(PlayerId::new(9)).await.is_err());

        assert_eq!(source.into_inner().calls("player_history"), 2);
    }
}
