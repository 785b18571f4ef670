//! kingface-core: domain types for the KingFace backend
//!
//! Validated newtypes for user-supplied input, media content hashing,
//! pagination, and the KFTL token economics shared by the server crate.
//! Everything here is pure and synchronous; I/O lives in kingface-server.

pub mod content;
pub mod identity;
pub mod media;
pub mod page;
pub mod token;
pub mod validation;

pub use content::{ContentKind, PostBody};
pub use identity::{DisplayName, Username, WalletAddress};
pub use media::MediaAttachment;
pub use page::{Page, PageParams};
pub use validation::ValidationError;
