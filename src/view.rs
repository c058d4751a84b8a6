//! The translator view controller
//!
//! [`TranslatorView`] owns the [`ViewState`], the debounce timer and the
//! channel on which network completions come back. It runs the effects that
//! [`reduce`] asks for: requests are spawned onto a tokio runtime and their
//! outcome is fed back as an [`Action`] the next time the UI loop ticks, so
//! state is only ever touched from the UI thread.
//!
//! In-flight requests are never cancelled. Unless stale responses are being
//! discarded, whichever completion arrives last is what the user sees.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use crate::client::Translate;
use crate::debounce::Debouncer;
use crate::state::{reduce, Action, Effect, TranslationRequest, ViewState};

pub struct TranslatorView {
    state: ViewState,
    debounce: Debouncer<()>,
    client: Arc<dyn Translate>,
    runtime: Handle,
    completions_tx: UnboundedSender<Action>,
    completions_rx: UnboundedReceiver<Action>,
    in_flight: usize,
}

impl TranslatorView {
    pub fn new(
        state: ViewState,
        debounce: Duration,
        client: Arc<dyn Translate>,
        runtime: Handle,
    ) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        TranslatorView {
            state,
            debounce: Debouncer::new(debounce),
            client,
            runtime,
            completions_tx,
            completions_rx,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Requests issued whose completion has not been applied yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn is_debouncing(&self) -> bool {
        self.debounce.is_pending()
    }

    /// When the UI loop must wake up next to fire the debounce timer.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.next_deadline()
    }

    pub fn dispatch(&mut self, action: Action) {
        self.dispatch_at(Instant::now(), action);
    }

    /// Apply `action` as if it happened at `now`.
    pub fn dispatch_at(&mut self, now: Instant, action: Action) {
        if matches!(
            action,
            Action::TranslationSucceeded { .. } | Action::TranslationFailed { .. }
        ) {
            self.in_flight = self.in_flight.saturating_sub(1);
        }

        let (next, effects) = reduce(&self.state, action);
        self.state = next;

        for effect in effects {
            match effect {
                Effect::ScheduleTranslate => {
                    self.debounce.trigger_at(now, ());
                }
                Effect::CancelTranslate => {
                    self.debounce.cancel();
                }
                Effect::Request(request) => self.send(request),
            }
        }
    }

    /// Fire the debounce timer if due and apply finished requests.
    /// Returns true when anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if self.debounce.fire_due(now).is_some() {
            self.dispatch_at(now, Action::DebounceElapsed);
            changed = true;
        }

        while let Ok(action) = self.completions_rx.try_recv() {
            self.dispatch_at(now, action);
            changed = true;
        }

        changed
    }

    /// Wait for the next completion and apply it.
    pub async fn settle_next(&mut self) -> bool {
        match self.completions_rx.recv().await {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    /// Cancel the pending debounce timer. Called when the view goes away.
    pub fn shutdown(&mut self) {
        if self.debounce.cancel() {
            debug!("cancelled pending translation on shutdown");
        }
    }

    fn send(&mut self, request: TranslationRequest) {
        info!(
            seq = request.seq,
            langpair = %request.langpair(),
            chars = request.text.chars().count(),
            "translating"
        );

        self.in_flight += 1;
        let client = Arc::clone(&self.client);
        let tx = self.completions_tx.clone();
        self.runtime.spawn(async move {
            let seq = request.seq;
            let result = client.translate(&request).await;
            if let Err(err) = &result {
                warn!(seq, error = %err, "translation failed");
            }
            // The receiver is gone once the view has shut down
            let _ = tx.send(Action::completion(seq, result));
        });
    }
}

impl Drop for TranslatorView {
    fn drop(&mut self) {
        self.shutdown();
    }
}
