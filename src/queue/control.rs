//! Headless queue state owner
//!
//! `TicketControl` wires [`QueueState`] to a store, a session and a clock.
//! The terminal UI drives the same reducer from iocraft hooks; this type is
//! what `snackq watch` and the tests use.

use std::future::Future;

use futures::StreamExt;
use tokio::time::{Instant, MissedTickBehavior};

use super::QueueServices;
use super::model::{QueueAction, QueueState, Screen, VisibleView, reduce_queue_state, screen, visible_view};
use super::write::WriteRequest;
use crate::error::{Result, SnackError};
use crate::session::User;
use crate::store::{SnapshotEvent, Subscription};
use crate::types::{TicketFields, TicketId};

/// Rows the headless queue scrolls within.
const LIST_HEIGHT: usize = 20;

pub struct TicketControl {
    services: QueueServices,
    state: QueueState,
    subscription: Option<Subscription>,
}

impl TicketControl {
    pub fn new(services: QueueServices) -> Self {
        Self {
            services,
            state: QueueState::default(),
            subscription: None,
        }
    }

    pub fn state(&self) -> &QueueState {
        &self.state
    }

    pub fn services(&self) -> &QueueServices {
        &self.services
    }

    pub fn user(&self) -> Option<User> {
        self.services.current_user()
    }

    pub fn screen(&self) -> Screen {
        screen(self.user().as_ref(), &self.state)
    }

    pub fn visible_view(&self) -> VisibleView {
        visible_view(&self.state)
    }

    /// Open the live query, replacing any previous one.
    ///
    /// Returns whether a subscription is now open. Nothing is opened while
    /// signed out.
    pub fn mount(&mut self) -> bool {
        self.unmount();
        if self.user().is_none() {
            tracing::debug!("not signed in, queue stays closed");
            return false;
        }
        match self.services.store.subscribe(self.services.query()) {
            Ok(subscription) => {
                self.subscription = Some(subscription);
                true
            }
            Err(e) => {
                self.handle_event(SnapshotEvent::Error(e.to_string()));
                false
            }
        }
    }

    /// Cancel the live query, if any.
    pub fn unmount(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.cancel();
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }

    /// Apply every event that is already waiting. Returns how many there were.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Some(event) = self.subscription.as_mut().and_then(Subscription::try_next_event) {
            self.handle_event(event);
            applied += 1;
        }
        applied
    }

    /// Wait for the next subscription event and apply it.
    ///
    /// Returns `false` once there is nothing left to wait for.
    pub async fn pump(&mut self) -> bool {
        let event = match self.subscription.as_mut() {
            Some(subscription) => subscription.next().await,
            None => return false,
        };
        match event {
            Some(event) => {
                self.handle_event(event);
                true
            }
            None => {
                self.subscription = None;
                false
            }
        }
    }

    pub fn apply(&mut self, action: QueueAction) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce_queue_state(state, action, LIST_HEIGHT);
    }

    pub fn refresh_wait_times(&mut self) {
        let now = self.services.clock.now();
        self.apply(QueueAction::RefreshWaitTimes(now));
    }

    pub fn select(&mut self, id: &TicketId) {
        self.apply(QueueAction::SelectTicket(id.clone()));
    }

    /// Add a ticket. The new entry shows up with the next snapshot.
    pub async fn create(&mut self, fields: TicketFields) -> Result<TicketId> {
        self.write(WriteRequest::Create(fields)).await
    }

    /// Overwrite a ticket's fields, then leave edit mode.
    pub async fn edit(&mut self, id: &TicketId, fields: TicketFields) -> Result<()> {
        self.write(WriteRequest::Edit(id.clone(), fields)).await?;
        Ok(())
    }

    pub async fn delete(&mut self, id: &TicketId) -> Result<()> {
        self.write(WriteRequest::Delete(id.clone())).await?;
        Ok(())
    }

    /// Delete whatever is selected. Returns the deleted id, if any.
    pub async fn delete_selected(&mut self) -> Result<Option<TicketId>> {
        let Some(id) = self.state.selected.as_ref().map(|t| t.id.clone()) else {
            return Ok(None);
        };
        self.delete(&id).await?;
        Ok(Some(id))
    }

    /// Mount, then apply snapshots and refresh ticks until `shutdown`
    /// resolves. `on_change` sees the state after every transition.
    pub async fn run<F, S>(&mut self, mut on_change: F, shutdown: S)
    where
        F: FnMut(&QueueState),
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        self.mount();
        let period = self.services.refresh_interval;
        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        on_change(&self.state);
        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                _ = ticker.tick() => {
                    self.refresh_wait_times();
                    on_change(&self.state);
                }
                event = next_event(&mut self.subscription) => match event {
                    Some(event) => {
                        self.handle_event(event);
                        on_change(&self.state);
                    }
                    None => self.subscription = None,
                }
            }
        }
        self.unmount();
    }

    fn handle_event(&mut self, event: SnapshotEvent) {
        match event {
            SnapshotEvent::Snapshot(snapshot) => {
                tracing::debug!(tickets = snapshot.documents.len(), "snapshot received");
                let tickets = self.services.tickets_from(snapshot.documents);
                self.apply(QueueAction::SnapshotReceived(tickets));
            }
            SnapshotEvent::Error(message) => {
                tracing::error!("ticket subscription failed: {message}");
                self.apply(QueueAction::SubscriptionFailed(message));
            }
        }
    }

    async fn write(&mut self, request: WriteRequest) -> Result<TicketId> {
        match self.services.write(request).await {
            Ok(outcome) => {
                self.apply(outcome.action);
                Ok(outcome.id)
            }
            Err(SnackError::NotSignedIn) => Err(SnackError::NotSignedIn),
            Err(e) => {
                self.apply(QueueAction::WriteFailed(e.to_string()));
                Err(e)
            }
        }
    }
}

impl Drop for TicketControl {
    fn drop(&mut self) {
        self.unmount();
    }
}

async fn next_event(subscription: &mut Option<Subscription>) -> Option<SnapshotEvent> {
    match subscription {
        Some(subscription) => subscription.next().await,
        None => std::future::pending().await,
    }
}
