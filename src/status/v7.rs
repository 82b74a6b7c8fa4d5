use super::{MIGRATIONS_COMPLETE, Verdict, lookup};
use log::trace;
use serde_json::Value;

const SAVED_OBJECTS_PLUGIN: &str = "core:savedObjects";

pub fn is_green(status: &Value) -> bool {
    lookup::text(status, &["overall", "state"]) == Some("green")
}

/// Scans `statuses` in order; the first saved-objects entry whose message
/// reports completed migrations wins.
pub fn migrations(status: &Value) -> Verdict {
    let plugins = lookup::descend(status, &["statuses"])
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    for plugin in plugins {
        let Some(id) = lookup::text(plugin, &["id"]) else {
            continue;
        };
        if !id.contains(SAVED_OBJECTS_PLUGIN) {
            continue;
        }
        let Some(message) = lookup::text(plugin, &["message"]) else {
            continue;
        };
        if lookup::contains_all(message, &MIGRATIONS_COMPLETE) {
            return Verdict::Healthy;
        }
        trace!("plugin {id} has not completed migrations: {message}");
    }

    Verdict::MigrationsPending
}
