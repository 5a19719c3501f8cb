// ============================================================================
// SESSION VIEWMODEL - Login / logout
// ============================================================================

use std::rc::Rc;
use crate::error::{ClientError, ClientResult};
use crate::models::{LoginRequest, User};
use crate::services::Backend;
use crate::state::AppState;
use crate::utils::{t, tf};
use crate::viewmodels::DataViewModel;

pub struct SessionViewModel<B: Backend> {
    state: AppState,
    backend: Rc<B>,
    data: DataViewModel<B>,
}

impl<B: Backend> Clone for SessionViewModel<B> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            backend: self.backend.clone(),
            data: self.data.clone(),
        }
    }
}

impl<B: Backend> SessionViewModel<B> {
    pub fn new(state: AppState, backend: Rc<B>) -> Self {
        let data = DataViewModel::new(state.clone(), backend.clone());
        Self { state, backend, data }
    }

    /// Authenticate, reveal the main interface and load all data
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<User> {
        let lang = self.state.lang();

        if username.is_empty() || password.is_empty() {
            let message = t("login_required", &lang);
            self.state.auth.set_login_error(Some(message.clone()));
            self.state.notifications.error(message.clone());
            self.state.notify_changed();
            return Err(ClientError::Validation(message));
        }

        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        match self.backend.login(&request).await {
            Ok(user) => {
                log::info!("✅ [LOGIN] Logged in as {}", user.display_name());
                self.state.auth.set_login_error(None);
                self.state.auth.set_user(Some(user.clone()));
                self.state
                    .notifications
                    .success(tf("welcome", &lang, &[user.display_name()]));
                self.state.notify_changed();
                self.data.reload().await;
                Ok(user)
            }
            Err(e) => {
                log::error!("❌ [LOGIN] {}", e);
                self.state
                    .notifications
                    .error(tf("login_failed", &lang, &[&e.to_string()]));
                self.state.notify_changed();
                Err(e)
            }
        }
    }

    /// Drop every client-side trace of the session. The caller reloads the page.
    pub fn logout(&self) {
        log::info!("👋 [LOGIN] Logging out");
        self.state.reset_session();
        self.state.notify_changed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use crate::services::fake_backend::{Call, FakeBackend};
    use crate::state::Severity;

    fn setup() -> (AppState, Rc<FakeBackend>, SessionViewModel<FakeBackend>) {
        let state = AppState::new("KO");
        let backend = Rc::new(FakeBackend::with_sample_data());
        let vm = SessionViewModel::new(state.clone(), backend.clone());
        (state, backend, vm)
    }

    #[test]
    fn empty_credentials_never_reach_the_backend() {
        let (state, backend, vm) = setup();

        let err = block_on(vm.login("maestro", "")).unwrap_err();

        assert!(err.is_validation());
        assert!(backend.calls().is_empty());
        assert!(!state.auth.is_logged_in());
        assert_eq!(
            state.auth.get_login_error().as_deref(),
            Some("아이디와 비밀번호를 모두 입력해주세요.")
        );
    }

    #[test]
    fn successful_login_welcomes_and_loads_data() {
        let (state, backend, vm) = setup();

        let user = block_on(vm.login("maestro", "secret")).unwrap();

        assert_eq!(user.display_name(), "김지휘");
        assert!(state.auth.is_logged_in());
        assert_eq!(state.store.students().len(), 3);
        assert_eq!(backend.calls()[0], Call::Login("maestro".into()));
        assert_eq!(backend.fetch_count(), 5);

        let toasts = state.notifications.pending();
        assert_eq!(toasts[0].severity, Severity::Success);
        assert_eq!(toasts[0].message, "김지휘 님, 환영합니다!");
    }

    #[test]
    fn rejected_login_stays_on_the_login_screen() {
        let (state, backend, vm) = setup();

        assert!(block_on(vm.login("maestro", "wrong")).is_err());

        assert!(!state.auth.is_logged_in());
        assert_eq!(backend.fetch_count(), 0);
        assert_eq!(
            state.notifications.pending()[0].message,
            "로그인 실패: Invalid credentials"
        );
    }

    #[test]
    fn logout_discards_session_data() {
        let (state, _backend, vm) = setup();
        block_on(vm.login("maestro", "secret")).unwrap();

        vm.logout();

        assert!(!state.auth.is_logged_in());
        assert!(state.store.students().is_empty());
    }
}
