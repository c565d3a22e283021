//! Configuration and policy filtering tests

use docpath_client::{
    config::{ConfigurationError, DocumentConfig, OPERATE_POLICY_KEYS, Policy, Validator, policy::to_operate_policy},
    prelude::*,
};
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operate_policy_keeps_allow_listed_options() {
        let policy = Policy::new()
            .with("total_timeout", 1000)
            .with("gen", "EXPECT_GEN_EQUAL")
            .with("priority", "low")
            .with("send_key", true);

        let operate = policy.to_operate_policy();
        assert_eq!(operate.len(), 2);
        assert_eq!(operate.get("total_timeout"), Some(&json!(1000)));
        assert_eq!(operate.get("priority"), None);
        assert_eq!(policy.dropped_options(), vec!["priority", "send_key"]);

        let mut names: Vec<&str> = operate.iter().map(|(name, _)| name).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["gen", "total_timeout"]);
    }

    #[test]
    fn test_every_allow_listed_option_survives() {
        let policy: Policy = OPERATE_POLICY_KEYS.iter().map(|&name| (name, 1)).collect();
        assert_eq!(policy.to_operate_policy().len(), OPERATE_POLICY_KEYS.len());
        assert!(policy.dropped_options().is_empty());
    }

    #[test]
    fn test_missing_policy_stays_missing() {
        assert_eq!(to_operate_policy(None), None);
        let empty = Policy::new();
        assert_eq!(to_operate_policy(Some(&empty)).map(|policy| policy.len()), Some(0));
    }

    #[test]
    fn test_config_defaults_and_fallbacks() {
        let caller = Policy::new().with("replica", "any");
        let config = DocumentConfig::default()
            .with_read_policy(Policy::new().with("read_mode_ap", "all"))
            .with_generation_check(true);

        assert!(config.generation_check);
        assert_eq!(config.read_policy(Some(&caller)), Some(&caller));
        assert_eq!(
            config.read_policy(None).and_then(|policy| policy.get("read_mode_ap")),
            Some(&json!("all"))
        );
        assert_eq!(config.write_policy(None), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_json() {
        let config = DocumentConfig::from_json(
            r#"{"generation_check": true, "default_write_policy": {"durable_delete": true, "ttl": 5}}"#,
        )
        .expect("valid configuration");
        assert!(config.generation_check);
        assert_eq!(
            config.write_policy(None).map(Policy::dropped_options),
            Some(vec!["ttl"])
        );

        let empty = DocumentConfig::from_json("{}").expect("empty configuration");
        assert_eq!(empty, DocumentConfig::default());
    }

    #[test]
    fn test_config_rejects_policies_that_never_reach_the_store() {
        let error = DocumentConfig::from_json(r#"{"default_read_policy": {"ttl": 5}}"#)
            .expect_err("no operate options");
        assert!(matches!(error, ConfigurationError::InvalidPolicy(ref message) if message.contains("ttl")));

        let error = DocumentConfig::from_json("{").expect_err("malformed json");
        assert!(matches!(error, ConfigurationError::Parse(_)));

        let config = DocumentConfig::default().with_write_policy(Policy::new().with("ttl", 5));
        assert!(DocumentClient::with_config(MemoryStore::new(), config).is_err());
    }
}
