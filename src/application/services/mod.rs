//! Application services - Use case implementations
//!
//! The wizard is the single entry point for callers; the synchronizer and
//! the avatar prompt builder support it.

pub mod avatar;
pub mod sync;
pub mod wizard;

pub use avatar::build_avatar_prompt;
pub use sync::{DraftSynchronizer, SyncConfig};
pub use wizard::{CharacterWizard, WizardError, WizardState};
