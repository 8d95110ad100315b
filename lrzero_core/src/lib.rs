mod error;
mod lr0;
mod traits;

pub use crate::error::{GenerationError, GrammarError};
pub use crate::lr0::*;
pub use crate::traits::Grammar;
