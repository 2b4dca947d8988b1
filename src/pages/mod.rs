//! Page components, one per routed view.

pub mod chat;
pub mod login;
pub mod register;
