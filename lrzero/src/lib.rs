mod error;
pub mod extra;
mod lexer;
mod recognizer;
mod traits;

pub use crate::error::ParseError;
pub use crate::lexer::SliceLexer;
pub use crate::recognizer::Recognizer;
pub use crate::traits::Lexer;

pub use lrzero_core::{Action, Grammar, ParseTable, RuleId, StateId, Symbol};

#[cfg(feature = "core")]
pub use lrzero_core::*;

#[cfg(feature = "trace")]
#[doc(hidden)]
pub use log as __log;
