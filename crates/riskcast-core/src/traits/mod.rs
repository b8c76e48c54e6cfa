pub mod history;

pub use history::{HistoryLookup, InMemoryHistoryStore, RiskHistoryIndex};
