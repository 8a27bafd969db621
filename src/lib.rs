pub mod message;
pub mod probe;
