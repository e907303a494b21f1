//! Interactive menu interface
//!
//! All user interaction happens here: the numbered main menu and the
//! line-based prompts behind each operation.

pub mod menu;

pub use menu::run_menu;
