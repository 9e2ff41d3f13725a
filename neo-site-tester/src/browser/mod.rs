pub mod page;
pub mod session;

pub use page::{SNAPSHOT_SCRIPT, SitePage};
pub use session::{BrowserConfig, BrowserKind, new_session};
