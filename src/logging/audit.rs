// Stage facts for the rollback pipeline.
//
// Every fact carries a minimal envelope: `schema_version`, `stage`, `decision`.
// Failures additionally carry `error_id` and `exit_code`.
use crate::constants::SCHEMA_VERSION;
use crate::logging::FactsEmitter;
use serde_json::{json, Value};

const SUBSYSTEM: &str = "rollback";

/// Stage for typed fact emission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Locate,
    RestoreResult,
}

impl Stage {
    pub fn as_event(&self) -> &'static str {
        match self {
            Stage::Locate => "locate",
            Stage::RestoreResult => "restore.result",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Success,
    Failure,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Success => "success",
            Decision::Failure => "failure",
        }
    }
}

/// Builder facade over fact emission with a centralized envelope.
pub struct StageLogger<'a> {
    facts: &'a dyn FactsEmitter,
}

impl<'a> StageLogger<'a> {
    pub fn new(facts: &'a dyn FactsEmitter) -> Self {
        Self { facts }
    }

    pub fn locate(&self) -> EventBuilder<'a> {
        EventBuilder::new(self.facts, Stage::Locate)
    }

    pub fn restore_result(&self) -> EventBuilder<'a> {
        EventBuilder::new(self.facts, Stage::RestoreResult)
    }
}

pub struct EventBuilder<'a> {
    facts: &'a dyn FactsEmitter,
    stage: Stage,
    fields: serde_json::Map<String, Value>,
}

impl<'a> EventBuilder<'a> {
    fn new(facts: &'a dyn FactsEmitter, stage: Stage) -> Self {
        let mut fields = serde_json::Map::new();
        fields.insert("stage".to_string(), json!(stage.as_event()));
        Self {
            facts,
            stage,
            fields,
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.fields.insert("path".into(), json!(path.into()));
        self
    }

    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn merge(mut self, extra: Value) -> Self {
        if let Some(obj) = extra.as_object() {
            for (k, v) in obj.iter() {
                self.fields.insert(k.clone(), v.clone());
            }
        }
        self
    }

    pub fn emit(mut self, decision: Decision) {
        self.fields
            .entry("schema_version")
            .or_insert(json!(SCHEMA_VERSION));
        self.fields
            .entry("decision")
            .or_insert(json!(decision.as_str()));
        self.facts.emit(
            SUBSYSTEM,
            self.stage.as_event(),
            decision.as_str(),
            Value::Object(self.fields),
        );
    }

    pub fn emit_success(self) {
        self.emit(Decision::Success)
    }

    pub fn emit_failure(self) {
        self.emit(Decision::Failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Capture(RefCell<Vec<(String, String, String, Value)>>);

    impl FactsEmitter for Capture {
        fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value) {
            self.0
                .borrow_mut()
                .push((subsystem.into(), event.into(), decision.into(), fields));
        }
    }

    #[test]
    fn envelope_is_filled_in() {
        let cap = Capture::default();
        StageLogger::new(&cap)
            .restore_result()
            .path("backend/analizador_optimizado.py")
            .merge(json!({"bytes": 3}))
            .emit_success();
        let got = cap.0.borrow();
        assert_eq!(got.len(), 1);
        let (sub, ev, dec, f) = &got[0];
        assert_eq!(sub, "rollback");
        assert_eq!(ev, "restore.result");
        assert_eq!(dec, "success");
        assert_eq!(f["schema_version"], json!(1));
        assert_eq!(f["stage"], json!("restore.result"));
        assert_eq!(f["decision"], json!("success"));
        assert_eq!(f["bytes"], json!(3));
    }

    #[test]
    fn failure_decision_is_recorded() {
        let cap = Capture::default();
        StageLogger::new(&cap)
            .locate()
            .field("error_id", json!("E_BACKUP_MISSING"))
            .emit_failure();
        let got = cap.0.borrow();
        assert_eq!(got[0].2, "failure");
        assert_eq!(got[0].3["decision"], json!("failure"));
        assert_eq!(got[0].3["stage"], json!("locate"));
    }
}
