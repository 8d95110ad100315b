mod grammar;
pub use self::grammar::{ContextFreeGrammar, GrammarBuilder, AUGMENTED_RULE, END_LABEL};

mod rule;
pub use self::rule::{Rule, RuleId};

mod parse_table;
pub use self::parse_table::ParseTable;

mod state;
pub use self::state::{State, StateId, START_STATE};

mod item;
pub use self::item::Item;

mod symbol;
pub use self::symbol::Symbol;

mod action;
pub use self::action::{Action, ActionKind, ActionTable};

mod conflict;
pub use self::conflict::{Conflict, ConflictKind};

mod closure;
pub use self::closure::{closure, successor};

mod collection;
pub use self::collection::CanonicalCollection;
