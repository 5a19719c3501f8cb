pub mod backend;
pub mod api_client;
pub mod dialog_service;
pub mod data_loader;

#[cfg(test)]
pub mod fake_backend;

pub use backend::Backend;
pub use api_client::ApiClient;
pub use dialog_service::{BrowserDialogs, Dialogs};
pub use data_loader::{fetch_all, CollectionResult};
