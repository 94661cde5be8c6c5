//! Admin Context
//!
//! Shared configuration and notification channel, provided via the Leptos
//! Context API and also handed to the page-level event bindings.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AdminConfig;
use crate::csrf;
use crate::error::AdminError;
use crate::models::ToastKind;
use crate::store::{store_push_toast, store_remove_toast, AdminState, AdminStore};

#[derive(Clone, Copy)]
pub struct AdminContext {
    config: StoredValue<AdminConfig>,
    /// Toast list and other page-wide state
    pub store: AdminStore,
}

impl AdminContext {
    pub fn new(config: AdminConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            store: AdminStore::new(AdminState::default()),
        }
    }

    pub fn save_positions_url(&self) -> String {
        self.config.with_value(|c| c.save_positions_url.clone())
    }

    /// Token for the `X-CSRFToken` header, read fresh from the cookie
    pub fn csrf_token(&self) -> Option<String> {
        let cookie = self.config.with_value(|c| c.csrf_cookie.clone());
        let token = csrf::csrf_token(&cookie);
        if token.is_none() {
            log::warn!("[CSRF] Cookie {} not found", cookie);
        }
        token
    }

    /// Show a toast that dismisses itself after the configured timeout
    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) {
        let id = store_push_toast(&self.store, message.into(), kind);
        let timeout = self.config.with_value(|c| c.toast_timeout_ms);
        if timeout == 0 {
            return;
        }
        let store = self.store;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            store_remove_toast(&store, id);
        });
    }

    /// Log an error and show it to the user
    pub fn report(&self, err: &AdminError) {
        match err {
            AdminError::Transport(_) | AdminError::Decode(_) | AdminError::Dom(_) => {
                log::error!("{}", err)
            }
            _ => log::warn!("{}", err),
        }
        self.notify(err.to_string(), ToastKind::Error);
    }
}
