//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Each actor manages a single type of resource (the [`ActorEntity`]). Instead of defining
/// ad-hoc messages for every operation, we standardize around a set of lifecycle operations
/// that apply to almost any collection of records.
///
/// - **List**: Every record, in insertion order.
/// - **Get**: Fetches the current state of one record by ID.
/// - **Create**: Mints an ID and builds a record from [`ActorEntity::Create`]. Returns the stored record.
/// - **Replace**: Full update. Feeds [`ActorEntity::Create`] to `on_replace`; identity is retained.
/// - **Update**: Partial update. Feeds [`ActorEntity::Update`] to `on_update`.
/// - **Delete**: Removes one record and returns its last state.
/// - **Clear**: Removes every record and returns how many were dropped.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Replace {
        id: T::Id,
        params: T::Create,
        respond_to: Response<T>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
    Clear {
        respond_to: Response<usize>,
    },
}
