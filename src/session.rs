//! User menu over an external auth session.
//!
//! The session provider is a collaborator: it knows the current user and can
//! end the session. The menu only displays it, and it never shows the
//! signed-out state before the provider's sign-out has resolved.

use crate::error::AtlasResult;
use std::future::Future;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub display_name: String,
    pub email: String,
}

pub trait SessionProvider {
    fn current_user(&self) -> Option<User>;

    /// End the session. Resolves once the session is terminated.
    fn sign_out(&self) -> impl Future<Output = AtlasResult<()>> + Send;
}

pub struct UserMenu<P> {
    provider: P,
    user: Option<User>,
    open: bool,
}

impl<P: SessionProvider> UserMenu<P> {
    pub fn new(provider: P) -> Self {
        let user = provider.current_user();
        Self {
            provider,
            user,
            open: false,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// "Signed in as ..." label from the given template, or `None` when
    /// nobody is signed in.
    pub fn label(&self, template: &str) -> Option<String> {
        self.user
            .as_ref()
            .map(|user| template.replace("{user}", &user.display_name))
    }

    /// Sign out, then close the menu.
    ///
    /// The menu state is only touched after the provider resolves. On
    /// failure the user stays signed in and the menu stays as it was.
    pub async fn sign_out(&mut self) -> AtlasResult<()> {
        if let Err(e) = self.provider.sign_out().await {
            warn!("Sign-out failed: {}", e);
            return Err(e);
        }

        self.user = None;
        self.open = false;
        info!("User signed out");
        Ok(())
    }
}
