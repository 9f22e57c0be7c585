pub mod election;

pub use election::{Election, ElectionError};
