pub mod errors;
pub mod formatting;
pub mod logging;
pub mod notifications;
pub mod search;

pub use errors::AppError;
