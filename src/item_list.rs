// File: ./src/item_list.rs
// The item list component: state, one load per mount, and rendering
use crate::client::{FetchError, ItemClient};
use crate::config::Config;
use crate::model::Item;

use futures::future::{AbortHandle, Abortable};
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

type LoadResult = Result<Vec<Item>, FetchError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Still showing the initial list.
    Placeholder,
    /// At least one fetch succeeded.
    Loaded,
}

/// One drawn unit per item. Carries the key and the two displayed fields only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayBlock<'a> {
    pub key: i64,
    pub title: &'a str,
    pub body: &'a str,
}

impl<'a> DisplayBlock<'a> {
    /// Lines in display order.
    pub fn lines(&self) -> [&'a str; 2] {
        [self.title, self.body]
    }
}

impl<'a> From<&'a Item> for DisplayBlock<'a> {
    fn from(item: &'a Item) -> Self {
        Self {
            key: item.id,
            title: &item.title,
            body: &item.body,
        }
    }
}

struct PendingLoad {
    abort: AbortHandle,
    rx: oneshot::Receiver<LoadResult>,
}

pub struct ItemListView {
    items: Vec<Item>,
    phase: Phase,
    mounted: bool,
    pending: Option<PendingLoad>,
}

impl ItemListView {
    pub fn new(config: &Config) -> Self {
        Self {
            items: config.initial_items(),
            phase: Phase::Placeholder,
            mounted: false,
            pending: None,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts the one fetch this mount gets. Must be called from within a
    /// tokio runtime. Calling it again before `unmount` does nothing.
    pub fn mount(&mut self, client: ItemClient) {
        if self.mounted {
            tracing::debug!("View already mounted, not refetching");
            return;
        }
        self.mounted = true;

        let (tx, rx) = oneshot::channel();
        let (abort, registration) = AbortHandle::new_pair();

        tracing::info!(uri = %client.uri(), "Loading items");
        let task = async move { client.fetch_items().await };
        tokio::spawn(async move {
            if let Ok(result) = Abortable::new(task, registration).await {
                // Receiver gone means the view was torn down; drop the result.
                let _ = tx.send(result);
            }
        });

        self.pending = Some(PendingLoad { abort, rx });
    }

    /// Applies the in-flight result if it has arrived. Never blocks.
    pub fn poll_load(&mut self) -> Option<Result<usize, FetchError>> {
        let pending = self.pending.as_mut()?;
        match pending.rx.try_recv() {
            Ok(result) => {
                self.pending = None;
                Some(self.apply(result))
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => {
                self.pending = None;
                None
            }
        }
    }

    /// Waits for the in-flight result and applies it.
    pub async fn settle(&mut self) -> Option<Result<usize, FetchError>> {
        let pending = self.pending.take()?;
        match pending.rx.await {
            Ok(result) => Some(self.apply(result)),
            Err(_) => None,
        }
    }

    /// Fetches and applies in place, outside the mount lifecycle.
    pub async fn load_items(&mut self, client: &ItemClient) -> Result<usize, FetchError> {
        let result = client.fetch_items().await;
        self.apply(result)
    }

    /// Cancels any in-flight fetch. A response arriving later is discarded.
    pub fn unmount(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::debug!("Aborting in-flight load");
            pending.abort.abort();
        }
        self.mounted = false;
    }

    /// Blocks in list order. Cheap to clone and call again.
    pub fn render(&self) -> impl ExactSizeIterator<Item = DisplayBlock<'_>> + Clone + '_ {
        self.items.iter().map(DisplayBlock::from)
    }

    fn apply(&mut self, result: LoadResult) -> Result<usize, FetchError> {
        match result {
            Ok(items) => {
                let count = items.len();
                self.items = items;
                self.phase = Phase::Loaded;
                tracing::info!(count, "Items loaded");
                Ok(count)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load items, keeping current list");
                Err(e)
            }
        }
    }
}

impl Drop for ItemListView {
    fn drop(&mut self) {
        self.unmount();
    }
}
