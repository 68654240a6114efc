use std::collections::BTreeMap;

use super::exit_code::TaskExitCode;
use crate::report::Report;

/// Name of the decoded report asset, before prefixing
pub const REPORT_ASSET: &str = "report";

/// Prefix every asset name; an empty prefix leaves the names alone.
pub fn prefix_asset_names<V>(prefix: &str, assets: BTreeMap<String, V>) -> BTreeMap<String, V> {
    if prefix.is_empty() {
        return assets;
    }

    assets
        .into_iter()
        .map(|(name, value)| (format!("{prefix}{name}"), value))
        .collect()
}

/// Outcome of one lint task execution
#[derive(Debug, Clone, PartialEq)]
pub struct TaskResult {
    exit_code: i32,
    message: String,
    assets: BTreeMap<String, Option<Report>>,
    asset_name_prefix: String,
}

impl TaskResult {
    pub fn new(
        exit_code: i32,
        message: impl Into<String>,
        report: Option<Report>,
        asset_name_prefix: &str,
    ) -> Self {
        let assets = BTreeMap::from([(REPORT_ASSET.to_string(), report)]);
        Self {
            exit_code,
            message: message.into(),
            assets: prefix_asset_names(asset_name_prefix, assets),
            asset_name_prefix: asset_name_prefix.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// The exit code as a well-known value, if it is one
    pub fn task_exit_code(&self) -> Option<TaskExitCode> {
        TaskExitCode::from_code(self.exit_code)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Assets under their (possibly prefixed) names
    pub fn assets(&self) -> &BTreeMap<String, Option<Report>> {
        &self.assets
    }

    /// The decoded report, when the linter produced one
    pub fn report(&self) -> Option<&Report> {
        let name = format!("{}{}", self.asset_name_prefix, REPORT_ASSET);
        self.assets.get(&name).and_then(Option::as_ref)
    }

    pub fn was_successful(&self) -> bool {
        self.exit_code == TaskExitCode::Ok.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assets_without_prefix() {
        let result = TaskResult::new(0, "No lints were found", Some(Report::new()), "");
        assert!(result.assets().contains_key("report"));
        assert!(result.report().is_some());
        assert!(result.was_successful());
        assert_eq!(result.task_exit_code(), Some(TaskExitCode::Ok));
    }

    #[test]
    fn test_assets_with_prefix() {
        let result = TaskResult::new(2, "errors", Some(Report::new()), "tsLint.");
        assert_eq!(
            result.assets().keys().collect::<Vec<_>>(),
            vec!["tsLint.report"]
        );
        assert!(result.report().is_some());
        assert!(!result.was_successful());
    }

    #[test]
    fn test_missing_report_keeps_the_asset_slot() {
        let result = TaskResult::new(7, "boom", None, "");
        assert_eq!(result.assets().get("report"), Some(&None));
        assert!(result.report().is_none());
        assert_eq!(result.task_exit_code(), None);
    }

    #[test]
    fn test_prefix_asset_names() {
        let assets = BTreeMap::from([("a".to_string(), 1), ("b".to_string(), 2)]);
        let prefixed = prefix_asset_names("x-", assets.clone());
        assert_eq!(prefixed.get("x-a"), Some(&1));
        assert_eq!(prefix_asset_names("", assets.clone()), assets);
    }
}
