use std::{
    collections::HashMap,
    future::Future,
    sync::{
        Arc, Mutex, MutexGuard,
        atomic::{AtomicU64, Ordering},
    },
};

use flavormap_core::domain::common::entities::app_errors::CoreError;
use tokio::sync::watch;
use tracing::debug;

/// Operations tracked independently per device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    RestaurantFinder,
    ProductInsight,
    VideoSearch,
    VideoStream,
}

type SlotKey = (String, Feature);

/// Keeps at most one live request per device and feature. Starting a new
/// request supersedes the previous one, which then resolves to
/// [`CoreError::Superseded`] and drops its upstream call.
#[derive(Clone, Default)]
pub struct InFlightRegistry {
    slots: Arc<Mutex<HashMap<SlotKey, watch::Sender<u64>>>>,
    generation: Arc<AtomicU64>,
}

pub struct InFlightTicket {
    registry: InFlightRegistry,
    key: SlotKey,
    generation: u64,
    receiver: watch::Receiver<u64>,
}

impl InFlightRegistry {
    fn slots(&self) -> MutexGuard<'_, HashMap<SlotKey, watch::Sender<u64>>> {
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Claims the slot for `device_id` and `feature`. Requests without a
    /// device id are never tracked.
    pub fn begin(&self, device_id: Option<&str>, feature: Feature) -> Option<InFlightTicket> {
        let device_id = device_id?;
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let key = (device_id.to_string(), feature);

        let mut slots = self.slots();
        let receiver = match slots.get(&key) {
            Some(sender) => {
                debug!(?feature, "superseding in-flight request");
                sender.send_replace(generation);
                sender.subscribe()
            }
            None => {
                let (sender, receiver) = watch::channel(generation);
                slots.insert(key.clone(), sender);
                receiver
            }
        };

        Some(InFlightTicket {
            registry: self.clone(),
            key,
            generation,
            receiver,
        })
    }

    pub async fn guard<T, F>(
        &self,
        device_id: Option<&str>,
        feature: Feature,
        fut: F,
    ) -> Result<T, CoreError>
    where
        F: Future<Output = Result<T, CoreError>>,
    {
        match self.begin(device_id, feature) {
            Some(ticket) => ticket.run(fut).await,
            None => fut.await,
        }
    }

    #[cfg(test)]
    fn active(&self) -> usize {
        self.slots().len()
    }
}

impl InFlightTicket {
    pub fn is_current(&self) -> bool {
        *self.receiver.borrow() == self.generation
    }

    pub async fn run<T, F>(self, fut: F) -> Result<T, CoreError>
    where
        F: Future<Output = Result<T, CoreError>>,
    {
        let mut receiver = self.receiver.clone();

        tokio::select! {
            result = fut => {
                if self.is_current() { result } else { Err(CoreError::Superseded) }
            }
            _ = wait_superseded(&mut receiver, self.generation) => Err(CoreError::Superseded),
        }
    }
}

async fn wait_superseded(receiver: &mut watch::Receiver<u64>, generation: u64) {
    loop {
        if *receiver.borrow_and_update() != generation {
            return;
        }
        if receiver.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

impl Drop for InFlightTicket {
    fn drop(&mut self) {
        let mut slots = self.registry.slots();
        if let Some(sender) = slots.get(&self.key)
            && *sender.borrow() == self.generation
        {
            slots.remove(&self.key);
        }
    }
}
