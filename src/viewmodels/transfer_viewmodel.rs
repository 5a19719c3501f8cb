// ============================================================================
// TRANSFER VIEWMODEL - CSV archive export / import
// ============================================================================

use std::rc::Rc;
use crate::error::{ClientError, ClientResult};
use crate::services::{Backend, Dialogs};
use crate::state::AppState;
use crate::utils::{t, tf};
use crate::viewmodels::DataViewModel;

pub const EXPORT_FILENAME: &str = "orchestra_data.zip";
pub const EXPORT_MIME: &str = "application/zip";

pub struct TransferViewModel<B: Backend, D: Dialogs> {
    state: AppState,
    backend: Rc<B>,
    dialogs: Rc<D>,
    data: DataViewModel<B>,
}

impl<B: Backend, D: Dialogs> Clone for TransferViewModel<B, D> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            backend: self.backend.clone(),
            dialogs: self.dialogs.clone(),
            data: self.data.clone(),
        }
    }
}

impl<B: Backend, D: Dialogs> TransferViewModel<B, D> {
    pub fn new(state: AppState, backend: Rc<B>, dialogs: Rc<D>) -> Self {
        let data = DataViewModel::new(state.clone(), backend.clone());
        Self { state, backend, dialogs, data }
    }

    /// Fetch the archive and hand it to `save` (the browser download)
    pub async fn export<F>(&self, save: F) -> ClientResult<()>
    where
        F: FnOnce(&[u8]) -> Result<(), String>,
    {
        let lang = self.state.lang();
        self.state.notifications.info(t("export_start", &lang));
        self.state.notify_changed();

        let result = match self.backend.export_archive().await {
            Ok(bytes) => save(&bytes).map_err(ClientError::Validation),
            Err(ClientError::Http { status, .. }) => Err(ClientError::Http {
                status,
                message: t("export_server_failed", &lang),
            }),
            Err(e) => Err(e),
        };

        match &result {
            Ok(()) => {
                log::info!("✅ [CSV] Export complete");
                self.state.notifications.success(t("export_success", &lang));
            }
            Err(e) => {
                log::error!("❌ [CSV] Export failed: {}", e);
                self.state
                    .notifications
                    .error(tf("export_failed", &lang, &[&e.to_string()]));
            }
        }
        self.state.notify_changed();
        result
    }

    /// Replace the whole dataset with an uploaded archive, after confirmation.
    /// Ok(false) when the user declined.
    pub async fn import(&self, file: &B::Upload) -> ClientResult<bool> {
        let lang = self.state.lang();

        if !self.dialogs.confirm(&t("import_confirm", &lang)) {
            self.state.notifications.info(t("import_cancelled", &lang));
            self.state.notify_changed();
            return Ok(false);
        }

        self.state.notifications.info(t("import_start", &lang));
        self.state.notify_changed();

        match self.backend.import_archive(file).await {
            Ok(_) => {
                log::info!("✅ [CSV] Import accepted, reloading");
                self.state.notifications.success(t("import_success", &lang));
                self.data.reload().await;
                Ok(true)
            }
            Err(e) => {
                log::error!("❌ [CSV] Import failed: {}", e);
                self.state
                    .notifications
                    .error(tf("import_failed", &lang, &[&e.to_string()]));
                self.state.notify_changed();
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use futures::executor::block_on;
    use crate::services::fake_backend::{Call, FakeBackend, ScriptedDialogs};
    use crate::state::Severity;

    fn setup(dialogs: ScriptedDialogs) -> (AppState, Rc<FakeBackend>, TransferViewModel<FakeBackend, ScriptedDialogs>) {
        let state = AppState::new("KO");
        let backend = Rc::new(FakeBackend::with_sample_data());
        let vm = TransferViewModel::new(state.clone(), backend.clone(), Rc::new(dialogs));
        (state, backend, vm)
    }

    #[test]
    fn export_hands_the_archive_to_the_saver() {
        let (state, _backend, vm) = setup(ScriptedDialogs::accepting());
        let saved = RefCell::new(Vec::new());

        block_on(vm.export(|bytes| {
            saved.borrow_mut().extend_from_slice(bytes);
            Ok(())
        }))
        .unwrap();

        assert!(saved.borrow().starts_with(b"PK"));
        let toasts = state.notifications.pending();
        assert_eq!(toasts[0].severity, Severity::Info);
        assert_eq!(toasts[1].message, "데이터가 성공적으로 내보내졌습니다.");
    }

    #[test]
    fn export_http_failure_uses_the_server_message() {
        let (state, backend, vm) = setup(ScriptedDialogs::accepting());
        backend.fail("export", ClientError::Http { status: 500, message: "INTERNAL SERVER ERROR".into() });

        assert!(block_on(vm.export(|_| Ok(()))).is_err());
        assert_eq!(
            state.notifications.pending().pop().unwrap().message,
            "내보내기 실패: 서버에서 내보내기 파일을 생성하지 못했습니다."
        );
    }

    #[test]
    fn declined_import_uploads_nothing() {
        let (state, backend, vm) = setup(ScriptedDialogs::declining());

        assert!(!block_on(vm.import(&"backup.zip".to_string())).unwrap());

        assert!(backend.calls().is_empty());
        assert_eq!(state.notifications.pending()[0].message, "가져오기가 취소되었습니다.");
    }

    #[test]
    fn confirmed_import_uploads_and_reloads() {
        let (state, backend, vm) = setup(ScriptedDialogs::accepting());

        assert!(block_on(vm.import(&"backup.zip".to_string())).unwrap());

        assert_eq!(backend.calls()[0], Call::Import("backup.zip".into()));
        assert_eq!(backend.fetch_count(), 5);
        assert_eq!(state.store.students().len(), 3);
    }
}
