// ============================================================================
// AUTH STATE - Logged-in user for the page session
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::User;

#[derive(Clone)]
pub struct AuthState {
    pub current_user: Rc<RefCell<Option<User>>>,
    /// Inline message under the login form
    pub login_error: Rc<RefCell<Option<String>>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Rc::new(RefCell::new(None)),
            login_error: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_user(&self, user: Option<User>) {
        *self.current_user.borrow_mut() = user;
    }

    pub fn get_user(&self) -> Option<User> {
        self.current_user.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.borrow().is_some()
    }

    /// Name used as attendance marker; empty when logged out
    pub fn marker_name(&self) -> String {
        self.current_user
            .borrow()
            .as_ref()
            .map(|u| u.display_name().to_string())
            .unwrap_or_default()
    }

    pub fn set_login_error(&self, message: Option<String>) {
        *self.login_error.borrow_mut() = message;
    }

    pub fn get_login_error(&self) -> Option<String> {
        self.login_error.borrow().clone()
    }

    pub fn logout(&self) {
        self.set_user(None);
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}
