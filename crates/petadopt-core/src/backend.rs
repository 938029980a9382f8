//! Marketplace backend collaborator and the pending-request handle.
//!
//! Every account and listing submission ends in a [`MarketplaceBackend`]
//! call. Calls block, so the UI never makes them directly: [`dispatch`]
//! runs the call on a short-lived worker thread and hands back a
//! [`Pending`] that the event loop polls once per frame.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use chrono::Utc;
use crossbeam_channel::{Receiver, TryRecvError};
use tracing::{debug, info};

use petadopt_model::{
    ForgotPasswordForm, ListingDraft, ListingReceipt, RegisterForm, ResetPasswordForm, Session,
    SignInForm,
};

use crate::error::{BackendError, BackendResult};

/// Remote side of the marketplace. Implementations may block.
pub trait MarketplaceBackend: Send + Sync {
    fn sign_in(&self, form: &SignInForm) -> BackendResult<Session>;

    fn register(&self, form: &RegisterForm) -> BackendResult<Session>;

    fn request_password_reset(&self, form: &ForgotPasswordForm) -> BackendResult<()>;

    fn reset_password(&self, form: &ResetPasswordForm) -> BackendResult<()>;

    fn submit_listing(&self, draft: &ListingDraft) -> BackendResult<ListingReceipt>;
}

pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);
pub const DEFAULT_RESET_LATENCY: Duration = Duration::from_millis(1000);

/// Backend that waits a fixed time and then accepts every request.
#[derive(Debug)]
pub struct MockBackend {
    latency: Duration,
    reset_latency: Duration,
    rejection: Option<String>,
    next_reference: AtomicU32,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            reset_latency: DEFAULT_RESET_LATENCY,
            rejection: None,
            next_reference: AtomicU32::new(1),
        }
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `latency` for every request, password-reset requests included.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self.reset_latency = latency;
        self
    }

    pub fn with_reset_latency(mut self, latency: Duration) -> Self {
        self.reset_latency = latency;
        self
    }

    /// Reject every request with `reason` after the usual delay.
    pub fn rejecting(mut self, reason: impl Into<String>) -> Self {
        self.rejection = Some(reason.into());
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    fn respond<T>(&self, delay: Duration, ok: impl FnOnce() -> T) -> BackendResult<T> {
        thread::sleep(delay);
        match &self.rejection {
            Some(reason) => Err(BackendError::Rejected {
                reason: reason.clone(),
            }),
            None => Ok(ok()),
        }
    }
}

fn display_name_from_email(email: &str) -> String {
    email
        .trim()
        .split('@')
        .next()
        .unwrap_or_default()
        .to_string()
}

impl MarketplaceBackend for MockBackend {
    fn sign_in(&self, form: &SignInForm) -> BackendResult<Session> {
        self.respond(self.latency, || Session {
            email: form.email.trim().to_string(),
            display_name: display_name_from_email(&form.email),
        })
    }

    fn register(&self, form: &RegisterForm) -> BackendResult<Session> {
        self.respond(self.latency, || Session {
            email: form.email.trim().to_string(),
            display_name: form.full_name.trim().to_string(),
        })
    }

    fn request_password_reset(&self, _form: &ForgotPasswordForm) -> BackendResult<()> {
        self.respond(self.reset_latency, || ())
    }

    fn reset_password(&self, _form: &ResetPasswordForm) -> BackendResult<()> {
        self.respond(self.latency, || ())
    }

    fn submit_listing(&self, draft: &ListingDraft) -> BackendResult<ListingReceipt> {
        self.respond(self.latency, || {
            let seq = self.next_reference.fetch_add(1, Ordering::Relaxed);
            ListingReceipt {
                reference: format!("LST-{seq:05}"),
                title: draft.title.trim().to_string(),
                pet_type: draft.pet_type,
                city: draft.city.trim().to_string(),
                image_count: draft.images.filled_count(),
                submitted_at: Utc::now(),
            }
        })
    }
}

/// Result of a backend call that has not necessarily finished yet.
///
/// Resolves exactly once: after [`Pending::poll`] has returned `Some`, it
/// keeps returning `None`.
#[derive(Debug)]
pub struct Pending<T> {
    label: &'static str,
    started: Instant,
    rx: Receiver<BackendResult<T>>,
    resolved: bool,
}

impl<T: Send + 'static> Pending<T> {
    /// Run `op` on a worker thread.
    pub fn spawn<F>(label: &'static str, op: F) -> Self
    where
        F: FnOnce() -> BackendResult<T> + Send + 'static,
    {
        let (tx, rx) = crossbeam_channel::bounded(1);
        debug!(request = label, "backend request dispatched");
        thread::spawn(move || {
            // Receiver may already be gone if the caller stopped waiting.
            let _ = tx.send(op());
        });
        Self {
            label,
            started: Instant::now(),
            rx,
            resolved: false,
        }
    }
}

impl<T> Pending<T> {
    /// Non-blocking check for the result.
    pub fn poll(&mut self) -> Option<BackendResult<T>> {
        if self.resolved {
            return None;
        }
        let result = match self.rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(BackendError::Disconnected),
        };
        self.finish(&result);
        Some(result)
    }

    /// Block until the request finishes.
    pub fn wait(mut self) -> BackendResult<T> {
        let result = self
            .rx
            .recv()
            .unwrap_or(Err(BackendError::Disconnected));
        self.finish(&result);
        result
    }

    fn finish(&mut self, result: &BackendResult<T>) {
        self.resolved = true;
        let elapsed_ms = self.started.elapsed().as_millis();
        match result {
            Ok(_) => info!(request = self.label, elapsed_ms, "backend request completed"),
            Err(error) => info!(
                request = self.label,
                elapsed_ms,
                %error,
                "backend request failed"
            ),
        }
    }
}

/// Run `call` against `backend` on a worker thread.
pub fn dispatch<T, F>(
    backend: &Arc<dyn MarketplaceBackend>,
    label: &'static str,
    call: F,
) -> Pending<T>
where
    T: Send + 'static,
    F: FnOnce(&dyn MarketplaceBackend) -> BackendResult<T> + Send + 'static,
{
    let backend = Arc::clone(backend);
    Pending::spawn(label, move || call(backend.as_ref()))
}
