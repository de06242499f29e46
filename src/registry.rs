use std::collections::HashMap;
use std::sync::Mutex;

use axum::extract::ws::Message;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct Subscriber {
    id: Uuid,
    tx: UnboundedSender<Message>,
}

/// Live subscriber connections grouped by organization. Constructed once at
/// startup and shared through `AppState`; tests get their own instance.
///
/// All three operations serialize on one lock. Critical sections never await
/// and sends go through unbounded channels, so broadcast snapshots the group
/// and delivers outside the lock.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    groups: Mutex<HashMap<String, Vec<Subscriber>>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber under the organization, creating the group if
    /// absent. Returns the connection id used for `disconnect`.
    pub fn connect(&self, organization_id: &str, tx: UnboundedSender<Message>) -> Uuid {
        let id = Uuid::new_v4();
        let mut groups = self.groups.lock().expect("registry lock poisoned");
        groups
            .entry(organization_id.to_string())
            .or_default()
            .push(Subscriber { id, tx });
        id
    }

    /// Removes the connection from whichever group holds it; an emptied group
    /// is dropped entirely.
    pub fn disconnect(&self, connection_id: Uuid) {
        let mut groups = self.groups.lock().expect("registry lock poisoned");
        let mut emptied = None;
        for (organization_id, subscribers) in groups.iter_mut() {
            if let Some(position) = subscribers.iter().position(|s| s.id == connection_id) {
                subscribers.remove(position);
                if subscribers.is_empty() {
                    emptied = Some(organization_id.clone());
                }
                break;
            }
        }
        if let Some(organization_id) = emptied {
            groups.remove(&organization_id);
        }
    }

    /// Delivers `message` to every current subscriber of the organization in
    /// connection order. A failed send (closed socket task) is skipped so it
    /// never blocks delivery to the rest. Unknown organization is a no-op.
    pub fn broadcast(&self, message: &str, organization_id: &str) {
        let subscribers = {
            let groups = self.groups.lock().expect("registry lock poisoned");
            match groups.get(organization_id) {
                Some(subscribers) => subscribers.clone(),
                None => return,
            }
        };
        for subscriber in subscribers {
            if subscriber
                .tx
                .send(Message::Text(message.to_string().into()))
                .is_err()
            {
                debug!(connection_id = %subscriber.id, "subscriber channel closed, skipping");
            }
        }
    }

    pub fn subscriber_count(&self, organization_id: &str) -> usize {
        let groups = self.groups.lock().expect("registry lock poisoned");
        groups.get(organization_id).map_or(0, Vec::len)
    }
}
