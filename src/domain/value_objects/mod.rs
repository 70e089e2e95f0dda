//! Value objects - Immutable objects defined by their attributes

mod attributes;
mod background;
mod identity;
mod ids;
mod play_style;

pub use attributes::{modifier, Attribute, AttributeAllocation, AttributeValues};
pub use background::Background;
pub use identity::Identity;
pub use ids::{CampaignId, CharacterId, DraftId, UserId};
pub use play_style::PlayStyle;
