pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use engine::assess;
pub use error::{ImtError, Result};
pub use models::{Assessment, FormInput, ImtCategory, Workload};
