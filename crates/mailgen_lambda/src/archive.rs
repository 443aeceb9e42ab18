//! Write-once persistence of generated emails.

use mailgen_core::storage_keys::{email_object_key, EMAIL_KEY_PREFIX};
use serde::Serialize;
use uuid::Uuid;

use crate::adapters::object_store::ObjectStore;

pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone)]
pub struct EmailArchive<S> {
    store: S,
    prefix: String,
}

impl<S: ObjectStore> EmailArchive<S> {
    pub fn new(store: S) -> Self {
        Self::with_prefix(store, EMAIL_KEY_PREFIX)
    }

    pub fn with_prefix(store: S, prefix: impl Into<String>) -> Self {
        Self {
            store,
            prefix: prefix.into(),
        }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    /// Stores `document` as JSON under a fresh or supplied identifier.
    ///
    /// Failures are logged and reported as `None`; callers decide whether a
    /// missing identifier matters.
    pub fn save(&self, document: &impl Serialize, email_id: Option<&str>) -> Option<String> {
        let email_id = email_id
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let key = email_object_key(&self.prefix, &email_id);

        let body = match serde_json::to_vec(document) {
            Ok(value) => value,
            Err(error) => {
                tracing::error!(
                    component = "email_archive",
                    event = "serialize_failed",
                    email_id = %email_id,
                    error = %error,
                    "Error serializing email document"
                );
                return None;
            }
        };

        match self.store.put_object(&key, &body, JSON_CONTENT_TYPE) {
            Ok(()) => {
                tracing::info!(
                    component = "email_archive",
                    event = "email_saved",
                    email_id = %email_id,
                    key = %key,
                    "Email saved"
                );
                Some(email_id)
            }
            Err(error) => {
                tracing::error!(
                    component = "email_archive",
                    event = "save_failed",
                    email_id = %email_id,
                    error = %error,
                    "Error saving email"
                );
                None
            }
        }
    }
}
