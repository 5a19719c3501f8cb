// ============================================================================
// STORAGE - UI preferences in localStorage
// ============================================================================
// Only preferences live here; domain data is never persisted.
// ============================================================================

use gloo_storage::{LocalStorage, Storage};
use crate::config::CONFIG;
use crate::utils::i18n::{LANG_EN, LANG_KO};

const LANGUAGE_KEY: &str = "orchestraAttendance_language";

/// Saved language, else the configured default
pub fn load_language() -> String {
    LocalStorage::get::<String>(LANGUAGE_KEY)
        .ok()
        .map(|lang| lang.to_uppercase())
        .filter(|lang| lang == LANG_KO || lang == LANG_EN)
        .unwrap_or_else(|| CONFIG.default_language.clone())
}

pub fn save_language(lang: &str) {
    if let Err(e) = LocalStorage::set(LANGUAGE_KEY, lang) {
        log::warn!("⚠️ [APP] Could not persist language: {}", e);
    }
}
