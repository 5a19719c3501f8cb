// Shared utils

pub mod i18n;
pub mod storage;
pub mod download;

pub use i18n::*;
pub use storage::*;
pub use download::*;
