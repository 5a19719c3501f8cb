// ============================================================================
// DATA VIEWMODEL - Full reload of every collection
// ============================================================================

use std::rc::Rc;
use crate::error::ClientError;
use crate::services::{fetch_all, Backend};
use crate::state::AppState;
use crate::utils::tf;

pub struct DataViewModel<B: Backend> {
    state: AppState,
    backend: Rc<B>,
}

impl<B: Backend> Clone for DataViewModel<B> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            backend: self.backend.clone(),
        }
    }
}

impl<B: Backend> DataViewModel<B> {
    pub fn new(state: AppState, backend: Rc<B>) -> Self {
        Self { state, backend }
    }

    /// Fetch all five collections and swap in whatever arrived.
    /// Failed collections keep their previous snapshot. Returns the number
    /// of failures.
    pub async fn reload(&self) -> usize {
        log::info!("🔄 [LOADER] Reloading all collections");
        self.state.set_loading(true);

        let results = fetch_all(self.backend.as_ref()).await;
        let lang = self.state.lang();
        let mut failures = 0;

        for (collection, result) in results {
            let stored = result.and_then(|rows| {
                self.state
                    .store
                    .replace_collection(collection, rows)
                    .map_err(ClientError::parse)
            });
            match stored {
                Ok(count) => log::debug!("✅ [LOADER] {}: {} rows", collection.key(), count),
                Err(e) => {
                    failures += 1;
                    log::error!("❌ [LOADER] {}: {}", collection.key(), e);
                    self.state
                        .notifications
                        .error(tf("load_failed", &lang, &[collection.key(), &e.to_string()]));
                }
            }
        }

        self.state.set_loading(false);
        self.state.notify_changed();
        failures
    }
}
