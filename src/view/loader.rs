// Profile loader - the async half of a trigger
//
// Reads the credential, performs the fetch, and reports the outcome to the
// diagnostic log. The caller decides whether the resulting Resolution is
// still current (see ProfileView::resolve).

use super::state::Trigger;
use crate::api::{ErrorKind, ProfileApi};
use crate::credentials::CredentialProvider;
use crate::profile::UserProfile;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Outcome of one trigger's fetch
#[derive(Debug)]
pub struct Resolution {
    pub trigger: Trigger,
    pub outcome: Result<UserProfile, ErrorKind>,
}

/// Performs profile fetches with injected HTTP and credential capabilities
#[derive(Clone)]
pub struct ProfileLoader {
    api: Arc<dyn ProfileApi>,
    credentials: Arc<dyn CredentialProvider>,
}

impl ProfileLoader {
    pub fn new(api: Arc<dyn ProfileApi>, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self { api, credentials }
    }

    /// Fetch the profile for `trigger`
    ///
    /// Never fails: errors are logged with full detail and reduced to their
    /// [`ErrorKind`].
    pub async fn load(&self, trigger: Trigger) -> Resolution {
        // Read at request time so a refreshed token applies to the next load.
        // File-backed stores do blocking I/O, so the lookup runs off the
        // async workers.
        let credentials = Arc::clone(&self.credentials);
        let token = match tokio::task::spawn_blocking(move || credentials.token()).await {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("Credential lookup failed: {}", e);
                None
            }
        };
        if token.is_none() {
            tracing::debug!(
                "No credential in {} store; requesting '{}' without one",
                self.credentials.name(),
                trigger.id
            );
        }

        let outcome = match self
            .api
            .fetch_profile(&trigger.id, token.as_deref())
            .await
        {
            Ok(profile) => {
                tracing::info!("Loaded profile '{}'", trigger.id);
                Ok(profile)
            }
            Err(e) => {
                tracing::error!(
                    "Failed to load profile '{}' via {}: {}",
                    trigger.id,
                    self.api.name(),
                    e
                );
                Err(e.kind())
            }
        };

        Resolution { trigger, outcome }
    }

    /// Run [`load`](Self::load) on the runtime and deliver the result to `tx`
    pub fn spawn(&self, trigger: Trigger, tx: mpsc::Sender<Resolution>) {
        let loader = self.clone();
        tokio::spawn(async move {
            let resolution = loader.load(trigger).await;
            // Receiver gone means the view was torn down
            let _ = tx.send(resolution).await;
        });
    }
}
