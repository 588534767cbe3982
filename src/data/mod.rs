pub mod demo;
mod storage;

pub use storage::{PredictionStorage, SqliteStorage};
