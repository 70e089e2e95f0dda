//! Outbound ports - Interfaces that the application requires from external systems

mod store_port;
mod suggestion_port;

pub use store_port::{CharacterStorePort, DraftStorePort};
pub use suggestion_port::SuggestionPort;
