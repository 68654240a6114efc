//! Translate lint options into a linter command line

use tracing::debug;

use super::tslint_command::{CommandArg, PipeStage, TsLintCommand};
use crate::config::TsLintOptions;

/// Program the output is piped into when a format conversion is requested
pub const CONVERTER_EXECUTABLE: &str = "node node_modules/.bin/tslint-formatters-convert";

/// Formatters shipped with `tslint-formatters`, used by the conversion pipeline
pub const CONVERTER_FORMATTERS_DIR: &str = "node_modules/tslint-formatters/lib/tslint/formatters";

/// How an option is rendered on the command line
enum OptionKind<'a> {
    Value(Option<&'a str>),
    MultiValue(Vec<&'a str>),
    Flag(bool),
}

/// Builds the linter command for a set of options.
///
/// Building never fails: options without a value are simply left out.
pub struct CommandBuilder<'a> {
    options: &'a TsLintOptions,
}

impl<'a> CommandBuilder<'a> {
    pub fn new(options: &'a TsLintOptions) -> Self {
        Self { options }
    }

    pub fn build(&self) -> TsLintCommand {
        let mut command = TsLintCommand::new(self.options.tslint_executable.clone());
        if let Some(dir) = self.options.working_directory() {
            command = command.with_working_dir(dir);
        }

        for (name, kind) in self.command_options() {
            match kind {
                OptionKind::Value(Some(value)) => {
                    command.args.push(CommandArg::literal(format!("--{name}")));
                    command.args.push(CommandArg::quoted(value));
                }
                OptionKind::Value(None) => {}
                OptionKind::MultiValue(values) => {
                    for value in values {
                        command.args.push(CommandArg::literal(format!("--{name}")));
                        command.args.push(CommandArg::quoted(value));
                    }
                }
                OptionKind::Flag(true) => {
                    command.args.push(CommandArg::literal(format!("--{name}")));
                }
                OptionKind::Flag(false) => {}
            }
        }

        if !self.options.paths.is_empty() {
            command.args.push(CommandArg::literal("--"));
            command
                .args
                .extend(self.options.paths.iter().map(CommandArg::quoted));
        }

        if let Some(converter) = self.options.convert_format_to() {
            let mut args = vec![CommandArg::quoted(converter)];
            if let Some(out) = self.options.out() {
                args.push(CommandArg::literal("--out"));
                args.push(CommandArg::quoted(out));
            }
            command = command.with_pipe(PipeStage {
                program: CONVERTER_EXECUTABLE.to_string(),
                args,
            });
        }

        debug!("Built lint command: {}", command);
        command
    }

    /// Options in the order they appear on the command line
    fn command_options(&self) -> [(&'static str, OptionKind<'a>); 9] {
        let options = self.options;
        let converting = options.convert_format_to().is_some();

        // With a converter in the pipe the converter writes the out file.
        let out = if converting { None } else { options.out() };
        let formatters_dir = match options.formatters_dir() {
            Some(dir) => Some(dir),
            None if converting => Some(CONVERTER_FORMATTERS_DIR),
            None => None,
        };

        [
            ("config", OptionKind::Value(options.config_file())),
            ("exclude", OptionKind::MultiValue(options.exclude.iter().collect())),
            ("force", OptionKind::Flag(options.force)),
            ("out", OptionKind::Value(out)),
            ("rules-dir", OptionKind::Value(options.rules_dir())),
            ("formatters-dir", OptionKind::Value(formatters_dir)),
            ("format", OptionKind::Value(options.format())),
            ("project", OptionKind::Value(options.project())),
            ("type-check", OptionKind::Flag(options.type_check)),
        ]
    }
}

impl TsLintOptions {
    /// Shortcut for `CommandBuilder::new(self).build().to_shell_command()`
    pub fn build_command(&self) -> String {
        CommandBuilder::new(self).build().to_shell_command()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InclusionList;

    fn build(options: TsLintOptions) -> String {
        options.build_command()
    }

    #[test]
    fn test_basic() {
        assert_eq!(build(TsLintOptions::new()), "node_modules/.bin/tslint");
    }

    #[test]
    fn test_empty_values_are_omitted() {
        let options = TsLintOptions::new()
            .with_config_file("")
            .with_out("")
            .with_rules_dir("")
            .with_formatters_dir("")
            .with_format("")
            .with_project("")
            .with_force(false)
            .with_type_check(false)
            .with_paths(Vec::<String>::new());
        assert_eq!(build(options), "node_modules/.bin/tslint");
    }

    #[test]
    fn test_value_options() {
        let cases = [
            (TsLintOptions::new().with_config_file("foo"), "--config 'foo'"),
            (TsLintOptions::new().with_out("foo"), "--out 'foo'"),
            (TsLintOptions::new().with_rules_dir("foo"), "--rules-dir 'foo'"),
            (TsLintOptions::new().with_formatters_dir("foo"), "--formatters-dir 'foo'"),
            (TsLintOptions::new().with_format("foo"), "--format 'foo'"),
            (TsLintOptions::new().with_project("foo"), "--project 'foo'"),
        ];

        for (options, expected) in cases {
            assert_eq!(build(options), format!("node_modules/.bin/tslint {expected}"));
        }
    }

    #[test]
    fn test_flags() {
        assert_eq!(
            build(TsLintOptions::new().with_force(true)),
            "node_modules/.bin/tslint --force"
        );
        assert_eq!(
            build(TsLintOptions::new().with_type_check(true)),
            "node_modules/.bin/tslint --type-check"
        );
    }

    #[test]
    fn test_exclude_repeats_the_flag() {
        assert_eq!(
            build(TsLintOptions::new().with_exclude(vec!["foo"])),
            "node_modules/.bin/tslint --exclude 'foo'"
        );
        assert_eq!(
            build(TsLintOptions::new().with_exclude(vec!["foo", "bar", "baz"])),
            "node_modules/.bin/tslint --exclude 'foo' --exclude 'bar' --exclude 'baz'"
        );
    }

    #[test]
    fn test_exclude_from_flag_map() {
        let exclude: InclusionList =
            serde_json::from_str(r#"{"a": true, "b": null, "c": false, "d": true, "e": false}"#)
                .unwrap();
        assert_eq!(
            build(TsLintOptions::new().with_exclude(exclude)),
            "node_modules/.bin/tslint --exclude 'a' --exclude 'd'"
        );
    }

    #[test]
    fn test_paths() {
        assert_eq!(
            build(TsLintOptions::new().with_paths(vec!["foo", "bar", "baz"])),
            "node_modules/.bin/tslint -- 'foo' 'bar' 'baz'"
        );

        let paths = InclusionList::from_flags([
            ("a", true),
            ("c", false),
            ("d", true),
            ("e", false),
        ]);
        assert_eq!(
            build(TsLintOptions::new().with_paths(paths)),
            "node_modules/.bin/tslint -- 'a' 'd'"
        );
    }

    #[test]
    fn test_option_order_is_fixed() {
        let options = TsLintOptions::new()
            .with_type_check(true)
            .with_project("tsconfig.json")
            .with_format("json")
            .with_formatters_dir("fmt")
            .with_rules_dir("rules")
            .with_out("out.json")
            .with_force(true)
            .with_exclude(vec!["x.ts"])
            .with_config_file("tslint.json")
            .with_paths(vec!["src/a.ts"]);

        assert_eq!(
            build(options),
            "node_modules/.bin/tslint --config 'tslint.json' --exclude 'x.ts' --force \
             --out 'out.json' --rules-dir 'rules' --formatters-dir 'fmt' --format 'json' \
             --project 'tsconfig.json' --type-check -- 'src/a.ts'"
        );
    }

    #[test]
    fn test_working_directory_and_executable() {
        let options = TsLintOptions::new()
            .with_working_directory("my-working-dir")
            .with_tslint_executable("bin/tslint")
            .with_format("json");
        assert_eq!(
            build(options),
            "cd 'my-working-dir' && bin/tslint --format 'json'"
        );
    }

    #[test]
    fn test_values_with_quotes_are_escaped() {
        assert_eq!(
            build(TsLintOptions::new().with_paths(vec!["it's.ts"])),
            "node_modules/.bin/tslint -- 'it'\\''s.ts'"
        );
    }

    #[test]
    fn test_convert_format_to() {
        let options = TsLintOptions::new()
            .with_convert_format_to("yaml2jsonGroupByFiles")
            .with_paths(vec!["a"]);
        assert_eq!(
            build(options),
            "node_modules/.bin/tslint --formatters-dir 'node_modules/tslint-formatters/lib/tslint/formatters' \
             -- 'a' | node node_modules/.bin/tslint-formatters-convert 'yaml2jsonGroupByFiles'"
        );
    }

    #[test]
    fn test_convert_format_to_moves_out_to_the_converter() {
        let options = TsLintOptions::new()
            .with_out("b")
            .with_convert_format_to("yaml2jsonGroupByFiles")
            .with_paths(vec!["a"]);
        assert_eq!(
            build(options),
            "node_modules/.bin/tslint --formatters-dir 'node_modules/tslint-formatters/lib/tslint/formatters' \
             -- 'a' | node node_modules/.bin/tslint-formatters-convert 'yaml2jsonGroupByFiles' --out 'b'"
        );
    }

    #[test]
    fn test_empty_convert_format_to_is_ignored() {
        assert_eq!(
            build(TsLintOptions::new().with_convert_format_to("")),
            "node_modules/.bin/tslint"
        );
    }
}
