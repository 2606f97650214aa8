pub mod error;
pub mod ring;
