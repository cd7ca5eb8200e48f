//! Per-entity state of in-flight mutations.
//!
//! `Idle -> Pending -> Succeeded | Failed`; a finished mutation can be
//! started again (there is no automatic retry). A second mutation on an
//! entity whose key is `Pending` is refused with [`AppError::Busy`].

use std::collections::HashMap;

use contracts::domain::a001_hotel::aggregate::HotelId;
use contracts::domain::a002_room::aggregate::RoomId;

use crate::shared::errors::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityKey {
    NewHotel,
    Hotel(HotelId),
    NewRoom(HotelId),
    Room(RoomId),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum MutationState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl MutationState {
    pub fn is_pending(&self) -> bool {
        matches!(self, MutationState::Pending)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MutationTracker {
    states: HashMap<EntityKey, MutationState>,
}

impl MutationTracker {
    pub fn state(&self, key: &EntityKey) -> MutationState {
        self.states.get(key).cloned().unwrap_or_default()
    }

    pub fn is_pending(&self, key: &EntityKey) -> bool {
        self.states.get(key).is_some_and(MutationState::is_pending)
    }

    pub fn any_pending(&self) -> bool {
        self.states.values().any(MutationState::is_pending)
    }

    /// Mark `key` pending, or refuse if it already is.
    pub fn begin(&mut self, key: EntityKey) -> Result<(), AppError> {
        if self.is_pending(&key) {
            log::warn!("Mutation on {:?} refused: already pending", key);
            return Err(AppError::Busy);
        }
        self.states.insert(key, MutationState::Pending);
        Ok(())
    }

    /// Record the outcome of the mutation started with [`begin`](Self::begin).
    pub fn finish<T>(&mut self, key: EntityKey, outcome: &Result<T, AppError>) {
        let state = match outcome {
            Ok(_) => MutationState::Succeeded,
            Err(e) => MutationState::Failed(e.to_string()),
        };
        self.states.insert(key, state);
    }

    /// Drop the recorded outcome, returning the key to `Idle`.
    pub fn clear(&mut self, key: &EntityKey) {
        if !self.is_pending(key) {
            self.states.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel(id: &str) -> EntityKey {
        EntityKey::Hotel(HotelId::new(id))
    }

    #[test]
    fn test_second_mutation_on_same_entity_is_refused() {
        let mut t = MutationTracker::default();
        assert_eq!(t.state(&hotel("h1")), MutationState::Idle);

        t.begin(hotel("h1")).unwrap();
        assert!(t.is_pending(&hotel("h1")));
        assert_eq!(t.begin(hotel("h1")), Err(AppError::Busy));

        // other entities are independent
        assert!(t.begin(hotel("h2")).is_ok());
        assert!(t.begin(EntityKey::NewHotel).is_ok());
    }

    #[test]
    fn test_failed_then_restart() {
        let mut t = MutationTracker::default();
        let key = EntityKey::Room(RoomId::new("r1"));
        t.begin(key.clone()).unwrap();
        t.finish::<()>(key.clone(), &Err(AppError::Save("HTTP 500".into())));
        assert_eq!(
            t.state(&key),
            MutationState::Failed("Ошибка при сохранении: HTTP 500".into())
        );
        assert!(!t.any_pending());

        t.begin(key.clone()).unwrap();
        t.finish(key.clone(), &Ok(()));
        assert_eq!(t.state(&key), MutationState::Succeeded);

        t.clear(&key);
        assert_eq!(t.state(&key), MutationState::Idle);
    }

    #[test]
    fn test_clear_keeps_pending() {
        let mut t = MutationTracker::default();
        t.begin(EntityKey::NewHotel).unwrap();
        t.clear(&EntityKey::NewHotel);
        assert!(t.is_pending(&EntityKey::NewHotel));
    }
}
