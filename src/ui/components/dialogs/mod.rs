//! Dialog components module

mod delete_policy_dialog;
mod help_dialog;
mod message_dialog;

pub use delete_policy_dialog::{ButtonFocus, DeletePolicyDialog};
pub use help_dialog::HelpDialog;
pub use message_dialog::{MessageDialog, MessageKind};
