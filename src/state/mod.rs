mod batch;
mod form;

pub use batch::{load_inputs, write_results};
pub use form::FormState;
