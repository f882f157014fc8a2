pub mod common;
pub mod login;
pub mod mods;
pub mod toast;
