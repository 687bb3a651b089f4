//! CLI Commands

pub mod session;
pub mod profile;
pub mod section;

pub use session::{LoginCommand, LogoutCommand, StatusCommand};
pub use profile::ProfileCommand;
pub use section::SectionCommand;
