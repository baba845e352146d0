//! Command implementations.

pub mod create;
pub mod events;
pub mod get;
pub mod invoke;
pub mod update;
pub mod verify;
