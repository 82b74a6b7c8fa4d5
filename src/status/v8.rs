use super::{MIGRATIONS_COMPLETE, Verdict, lookup};
use serde_json::Value;

pub fn is_available(status: &Value) -> bool {
    lookup::text(status, &["overall", "level"]) == Some("available")
}

pub fn migrations(status: &Value) -> Verdict {
    match lookup::text(status, &["core", "savedObjects", "summary"]) {
        Some(summary) if lookup::contains_all(summary, &MIGRATIONS_COMPLETE) => Verdict::Healthy,
        _ => Verdict::MigrationsPending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_available() {
        assert!(is_available(&json!({"overall": {"level": "available"}})));
        assert!(!is_available(&json!({"overall": {"level": "degraded"}})));
        assert!(!is_available(&json!({"overall": {"level": "critical"}})));
        assert!(!is_available(&json!({"overall": {"state": "available"}})));
        assert!(!is_available(&json!({"overall": null})));
        assert!(!is_available(&json!([])));
    }

    #[test]
    fn test_migrations() {
        let summary = |s: Value| json!({"core": {"savedObjects": {"summary": s}}});

        assert_eq!(
            migrations(&summary(json!("127 completed migrations, now available"))),
            Verdict::Healthy
        );
        assert_eq!(
            migrations(&summary(json!("waiting for migrations"))),
            Verdict::MigrationsPending
        );
        assert_eq!(
            migrations(&summary(json!("completed migrations"))),
            Verdict::MigrationsPending
        );
        assert_eq!(
            migrations(&summary(json!(["completed migrations", "available"]))),
            Verdict::MigrationsPending
        );
        // 任一层级缺失都算未完成
        assert_eq!(migrations(&json!({})), Verdict::MigrationsPending);
        assert_eq!(migrations(&json!({"core": {}})), Verdict::MigrationsPending);
        assert_eq!(
            migrations(&json!({"core": {"savedObjects": {"level": "available"}}})),
            Verdict::MigrationsPending
        );
    }
}
