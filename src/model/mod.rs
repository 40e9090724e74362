//! System loading and saving functionality
//!
//! Provides high-level operations for loading and saving a `PetSystem`
//! using storage backends.

pub mod loader;
pub mod saver;

pub use loader::SystemLoader;
pub use saver::SystemSaver;
