pub mod header;
pub mod message;
