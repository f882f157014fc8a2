//! Update handlers, one per message category

mod login;
mod sync;
mod ui;

pub use login::handle_login;
pub use sync::handle_sync;
pub use ui::handle_ui;
