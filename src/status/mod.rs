//! Classification of a Kibana `/api/status` document.
//!
//! Two response shapes are understood. The 7.x shape reports
//! `status.overall.state` and a `status.statuses` plugin list, the 8.x shape
//! reports `status.overall.level` and `status.core.savedObjects.summary`.
//! The 7.x gate is always tried first; once it passes, the 8.x fields are never
//! consulted.
use crate::errors::{Error, Result};
use log::debug;
use serde_json::Value;
use strum::EnumProperty;

mod lookup;
mod v7;
mod v8;

/// Both fragments must appear in a migration message for it to count as complete.
pub const MIGRATIONS_COMPLETE: [&str; 2] = ["completed migrations", "available"];

/// The outcome of one check. The discriminant is the process exit code.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumProperty,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Verdict {
    #[strum(props(meaning = "service available and migrations completed"))]
    Healthy = 0,
    #[strum(props(meaning = "service not available"))]
    Unavailable = 1,
    #[strum(props(meaning = "service up but migrations not reported complete"))]
    MigrationsPending = 2,
    #[strum(props(meaning = "document has no status field"))]
    Unrecognized = 3,
    #[strum(props(meaning = "input is not a JSON document"))]
    Malformed = 4,
}

impl Verdict {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn meaning(self) -> &'static str {
        self.get_str("meaning").unwrap_or_default()
    }
}

impl From<Verdict> for std::process::ExitCode {
    fn from(verdict: Verdict) -> Self {
        std::process::ExitCode::from(verdict.code())
    }
}

impl From<&Error> for Verdict {
    fn from(e: &Error) -> Self {
        debug!("{e}");
        match e {
            // 输入无法取得或无法解析，一律视为格式错误
            Error::Io(_) | Error::Json(_) => Verdict::Malformed,
        }
    }
}

pub fn parse(input: &[u8]) -> Result<Value> {
    Ok(serde_json::from_slice(input)?)
}

/// Parses and evaluates raw input in one step.
pub fn check(input: &[u8]) -> Verdict {
    match parse(input) {
        Ok(document) => evaluate(&document),
        Err(e) => Verdict::from(&e),
    }
}

pub fn evaluate(document: &Value) -> Verdict {
    let Some(status) = lookup::descend(document, &["status"]) else {
        debug!("no status field in document");
        return Verdict::Unrecognized;
    };

    if v7::is_green(status) {
        return v7::migrations(status);
    }
    if v8::is_available(status) {
        return v8::migrations(status);
    }

    Verdict::Unavailable
}
