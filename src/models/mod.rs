pub mod group;
pub mod icon;
pub mod item;
pub mod language;
pub mod priority;
pub mod root;
pub mod status;

pub use group::Group;
pub use icon::IconType;
pub use item::{Item, ItemDraft};
pub use language::Language;
pub use priority::Priority;
pub use root::{LegacyRoot, StoreRoot, StoredDocument};
pub use status::{ItemStatus, Status};
