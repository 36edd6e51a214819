//! Terminal front end used by the `oxnetwork` binary

pub mod chat;
pub mod console;

pub use chat::ChatSession;
pub use console::Console;
