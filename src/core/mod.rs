pub mod add;
pub mod auth;
pub mod codec;
pub mod oplog;
pub mod reminders;
pub mod store;

pub use auth::{Authenticator, UserFile};
pub use store::{RawLines, RecordLines, RecordStore};
