//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource must implement to be
//! managed by the generic `ResourceActor`. It specifies associated types for IDs, DTOs,
//! context and errors, and provides lifecycle hooks (`on_create`, `on_replace`, `on_update`,
//! `on_delete`). Implementing this trait gives a resource the uniform list / get / create /
//! replace / update / delete / clear API.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! You do **not** need to implement these unless you want to customize behavior.
//! The default implementation does nothing (`Ok(())`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g., calling other actors).
/// It also defines a `Context` type, which is injected into every hook. This allows "Late Binding"
/// of dependencies (passing clients to `run()` instead of `new()`).
///
/// # Staged Mutation
/// `on_replace` and `on_update` are always invoked on a *copy* of the stored entity. The actor
/// only commits the copy when the hook returns `Ok`, so a hook may reject a request halfway
/// through without leaving a half-applied record behind.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., String, a newtype, u64).
    type Id: Eq + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    /// Also used for full replacement of an existing instance.
    type Create: Send + Sync + Debug;

    /// The data required to partially update an existing instance.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// The framework boxes it into [`FrameworkError::EntityError`](crate::FrameworkError::EntityError);
    /// resource clients can downcast it back to recover the typed error.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier of this instance. Never changes after creation.
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is created, before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when a full replacement is requested. Must keep the identity intact.
    async fn on_replace(
        &mut self,
        params: Self::Create,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called when a partial update is requested.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
