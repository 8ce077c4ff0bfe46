//! Load and pull-to-refresh lifecycle shared by every screen.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, error};

use crate::client::MatchdayClient;
use crate::error::Result;
use crate::model::League;
use crate::ordering::MatchBoard;

/// Something a screen can load its data from.
#[async_trait]
pub trait DataSource: Send + Sync {
    type Output: Clone + Send + Sync;

    /// Short name used in log lines.
    fn name(&self) -> &str;

    async fn load(&self) -> Result<Self::Output>;
}

/// The ordered match board.
#[derive(Debug, Clone)]
pub struct MatchesSource {
    client: MatchdayClient,
}

impl MatchesSource {
    pub fn new(client: MatchdayClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataSource for MatchesSource {
    type Output = MatchBoard;

    fn name(&self) -> &str {
        "matches"
    }

    async fn load(&self) -> Result<MatchBoard> {
        self.client.fetch_matches().await
    }
}

/// The current league with sorted standings.
#[derive(Debug, Clone)]
pub struct LeagueSource {
    client: MatchdayClient,
}

impl LeagueSource {
    pub fn new(client: MatchdayClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DataSource for LeagueSource {
    type Output = League;

    fn name(&self) -> &str {
        "league"
    }

    async fn load(&self) -> Result<League> {
        self.client.fetch_current_league().await
    }
}

/// What a screen currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Loaded(T),
    /// The last load failed. `last` keeps whatever was shown before it.
    Failed {
        message: String,
        data_error: bool,
        last: Option<T>,
    },
}

impl<T> ViewState<T> {
    /// The data to display, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Loading => None,
            ViewState::Loaded(data) => Some(data),
            ViewState::Failed { last, .. } => last.as_ref(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    fn into_data(self) -> Option<T> {
        match self {
            ViewState::Loading => None,
            ViewState::Loaded(data) => Some(data),
            ViewState::Failed { last, .. } => last,
        }
    }
}

/// Result of an initial load or a pull-to-refresh trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Refreshed,
    Failed,
    /// Another load or refresh was still running; no request was sent.
    AlreadyRefreshing,
}

/// A screen bound to one data source.
pub struct Screen<S: DataSource> {
    source: S,
    state: RwLock<ViewState<S::Output>>,
    refreshing: AtomicBool,
}

/// Clears the refreshing flag when the request finishes, whatever its result.
struct RefreshGuard<'a>(&'a AtomicBool);

impl Drop for RefreshGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<S: DataSource> Screen<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: RwLock::new(ViewState::Loading),
            refreshing: AtomicBool::new(false),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> ViewState<S::Output> {
        self.state.read().await.clone()
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing.load(Ordering::Acquire)
    }

    /// Initial load when the screen is opened.
    ///
    /// Shares the in-flight flag with [`Screen::refresh`], so a refresh
    /// triggered before the first load returns is skipped.
    pub async fn load(&self) -> RefreshOutcome {
        self.fetch().await
    }

    /// Reload on user request, unless a load or refresh is already running.
    pub async fn refresh(&self) -> RefreshOutcome {
        self.fetch().await
    }

    async fn fetch(&self) -> RefreshOutcome {
        if self
            .refreshing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!(source = self.source.name(), "refresh already in flight");
            return RefreshOutcome::AlreadyRefreshing;
        }
        let _guard = RefreshGuard(&self.refreshing);

        let result = self.source.load().await;
        if self.apply(result).await {
            RefreshOutcome::Refreshed
        } else {
            RefreshOutcome::Failed
        }
    }

    async fn apply(&self, result: Result<S::Output>) -> bool {
        let mut state = self.state.write().await;
        match result {
            Ok(data) => {
                debug!(source = self.source.name(), "screen data loaded");
                *state = ViewState::Loaded(data);
                true
            }
            Err(err) => {
                error!(source = self.source.name(), error = %err, "failed to load screen data");
                let last = std::mem::replace(&mut *state, ViewState::Loading).into_data();
                *state = ViewState::Failed {
                    message: err.to_string(),
                    data_error: err.is_data_error(),
                    last,
                };
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use tokio::sync::Notify;

    use super::*;
    use crate::error::MatchdayError;

    /// Returns the call number, failing on the calls listed in `fail_on`.
    struct Counting {
        calls: AtomicUsize,
        fail_on: Vec<usize>,
        gate: Option<Notify>,
    }

    impl Counting {
        fn new(fail_on: Vec<usize>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_on,
                gate: None,
            }
        }

        fn gated() -> Self {
            Self {
                gate: Some(Notify::new()),
                ..Self::new(vec![])
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DataSource for Counting {
        type Output = usize;

        fn name(&self) -> &str {
            "counting"
        }

        async fn load(&self) -> Result<usize> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if self.fail_on.contains(&call) {
                return Err(MatchdayError::NoLeagues {
                    url: "http://test/leagues/get-leagues".to_string(),
                });
            }
            Ok(call)
        }
    }

    #[tokio::test]
    async fn test_starts_loading_then_loads() {
        let screen = Screen::new(Counting::new(vec![]));
        assert!(screen.state().await.is_loading());

        assert_eq!(screen.load().await, RefreshOutcome::Refreshed);
        assert_eq!(screen.state().await, ViewState::Loaded(1));
    }

    #[tokio::test]
    async fn test_failed_initial_load_is_distinct_from_loading() {
        let screen = Screen::new(Counting::new(vec![1]));
        assert_eq!(screen.load().await, RefreshOutcome::Failed);
        assert!(!screen.is_refreshing());

        match screen.state().await {
            ViewState::Failed {
                data_error, last, ..
            } => {
                assert!(data_error);
                assert_eq!(last, None);
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_last_data() {
        let screen = Screen::new(Counting::new(vec![2, 3]));
        screen.load().await;

        assert_eq!(screen.refresh().await, RefreshOutcome::Failed);
        assert!(!screen.is_refreshing());
        assert_eq!(screen.state().await.data(), Some(&1));

        assert_eq!(screen.refresh().await, RefreshOutcome::Failed);
        assert_eq!(screen.state().await.data(), Some(&1));

        assert_eq!(screen.refresh().await, RefreshOutcome::Refreshed);
        assert_eq!(screen.state().await, ViewState::Loaded(4));
        assert!(!screen.is_refreshing());
    }

    #[tokio::test]
    async fn test_overlapping_refresh_is_skipped() {
        let screen = Screen::new(Counting::gated());

        let (first, second) = tokio::join!(screen.refresh(), async {
            assert!(screen.is_refreshing());
            let second = screen.refresh().await;
            if let Some(gate) = &screen.source().gate {
                gate.notify_one();
            }
            second
        });

        assert_eq!(first, RefreshOutcome::Refreshed);
        assert_eq!(second, RefreshOutcome::AlreadyRefreshing);
        assert_eq!(screen.source().calls(), 1);
        assert!(!screen.is_refreshing());
        assert_eq!(screen.state().await, ViewState::Loaded(1));
    }

    #[tokio::test]
    async fn test_refresh_during_initial_load_is_skipped() {
        let screen = Screen::new(Counting::gated());

        let (first, second) = tokio::join!(screen.load(), async {
            assert!(screen.is_refreshing());
            assert!(screen.state().await.is_loading());
            let second = screen.refresh().await;
            if let Some(gate) = &screen.source().gate {
                gate.notify_one();
            }
            second
        });

        assert_eq!(first, RefreshOutcome::Refreshed);
        assert_eq!(second, RefreshOutcome::AlreadyRefreshing);
        assert_eq!(screen.source().calls(), 1);
        assert!(!screen.is_refreshing());
        assert_eq!(screen.state().await, ViewState::Loaded(1));
    }
}
