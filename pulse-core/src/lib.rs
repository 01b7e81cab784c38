pub mod classify;
pub mod error;
pub mod error_utils;
pub mod keywords;
pub mod lexicon;
pub mod report;
pub mod types;

pub use classify::*;
pub use error::*;
pub use error_utils::*;
pub use keywords::*;
pub use report::*;
pub use types::*;
