//! SFTP client module
//!
//! Opens password-authenticated SFTP sessions and performs the list and get
//! operations the mod sync needs.

pub mod client;
pub mod handler;
pub mod known_hosts;
pub mod session;
pub mod types;

pub use client::SftpClient;
pub use session::SftpSession;
pub use types::{FileEntry, format_size};
