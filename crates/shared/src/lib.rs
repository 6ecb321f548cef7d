mod command;
pub mod recipe;

pub use command::*;
