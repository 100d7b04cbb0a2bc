pub mod command_handler;
pub mod line_handler;
pub mod message_handler;
