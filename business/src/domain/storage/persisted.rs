use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::logger::Logger;
use crate::domain::storage::key_value::KeyValueStore;

/// Bumped whenever the persisted state shape changes; older slots are discarded.
const STATE_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    version: u32,
    state: T,
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    version: u32,
    state: &'a T,
}

/// Rehydrates a store's state from its durable slot.
///
/// A missing slot, an unreadable backing, a corrupt payload, or a version
/// mismatch all fall back to the default state. None of these are surfaced to
/// the caller; they are logged and the session starts fresh.
pub fn initialize<T>(store: &dyn KeyValueStore, logger: &dyn Logger, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(err) => {
            logger.warn(&format!("Durable slot {} unavailable: {}", key, err));
            return T::default();
        }
    };

    match serde_json::from_str::<Envelope<T>>(&raw) {
        Ok(envelope) if envelope.version == STATE_VERSION => envelope.state,
        Ok(envelope) => {
            logger.warn(&format!(
                "Discarding slot {} with unsupported version {}",
                key, envelope.version
            ));
            T::default()
        }
        Err(err) => {
            logger.warn(&format!("Discarding corrupt slot {}: {}", key, err));
            T::default()
        }
    }
}

/// Serializes the whole state and writes it to the durable slot.
///
/// A failed write is logged and otherwise ignored: the in-memory state stays
/// authoritative for the rest of the session.
pub fn persist<T>(store: &dyn KeyValueStore, logger: &dyn Logger, key: &str, state: &T)
where
    T: Serialize,
{
    let envelope = EnvelopeRef {
        version: STATE_VERSION,
        state,
    };

    let raw = match serde_json::to_string(&envelope) {
        Ok(raw) => raw,
        Err(err) => {
            logger.error(&format!("Failed to serialize slot {}: {}", key, err));
            return;
        }
    };

    if let Err(err) = store.set(key, &raw) {
        logger.warn(&format!("Skipping persist for slot {}: {}", key, err));
    }
}
