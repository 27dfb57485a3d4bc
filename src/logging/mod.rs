pub mod audit;
pub mod facts;

pub use audit::{Decision, EventBuilder, Stage, StageLogger};
pub use facts::{FactsEmitter, LogFacts};
