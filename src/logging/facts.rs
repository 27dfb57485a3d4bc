use serde_json::Value;

pub trait FactsEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value);
}

/// Writes each fact as a single JSON line through `log` under the `facts` target.
#[derive(Default, Clone, Copy)]
pub struct LogFacts;

impl FactsEmitter for LogFacts {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value) {
        log::info!(target: "facts", "{subsystem} {event} {decision} {fields}");
    }
}
