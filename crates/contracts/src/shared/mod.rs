pub mod api_error;
pub mod money;
pub mod reference;

pub use api_error::ApiErrorBody;
pub use reference::{Ref, Referenced};
