pub mod item;
pub mod intent;
pub mod config;

pub use item::*;
pub use intent::*;
pub use config::*;
