use std::path::{Path, PathBuf};

use super::escape::{escape_shell_arg, escape_shell_cmd};

/// One argument of a command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandArg {
    /// Emitted as-is, e.g. `--force` or the `--` separator
    Literal(String),
    /// A user supplied value, always shell-escaped
    Quoted(String),
}

impl CommandArg {
    pub fn literal(value: impl Into<String>) -> Self {
        CommandArg::Literal(value.into())
    }

    pub fn quoted(value: impl Into<String>) -> Self {
        CommandArg::Quoted(value.into())
    }

    pub fn value(&self) -> &str {
        match self {
            CommandArg::Literal(v) | CommandArg::Quoted(v) => v,
        }
    }

    fn render(&self) -> String {
        match self {
            CommandArg::Literal(v) => v.clone(),
            CommandArg::Quoted(v) => escape_shell_arg(v),
        }
    }
}

/// A second program the linter output is piped into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeStage {
    /// Program and fixed leading words, emitted as-is
    pub program: String,
    pub args: Vec<CommandArg>,
}

/// A fully assembled linter invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsLintCommand {
    pub working_dir: Option<PathBuf>,
    pub executable: String,
    pub args: Vec<CommandArg>,
    pub pipe: Option<PipeStage>,
}

impl TsLintCommand {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            working_dir: None,
            executable: executable.into(),
            args: Vec::new(),
            pipe: None,
        }
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_arg(mut self, arg: CommandArg) -> Self {
        self.args.push(arg);
        self
    }

    pub fn with_pipe(mut self, pipe: PipeStage) -> Self {
        self.pipe = Some(pipe);
        self
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    /// The unescaped argument values, in order
    pub fn arg_values(&self) -> Vec<&str> {
        self.args.iter().map(CommandArg::value).collect()
    }

    /// Render the command as a single string that is safe to hand to `sh -c`.
    pub fn to_shell_command(&self) -> String {
        let mut cmd = String::new();

        if let Some(ref dir) = self.working_dir {
            cmd.push_str("cd ");
            cmd.push_str(&escape_shell_arg(&dir.to_string_lossy()));
            cmd.push_str(" && ");
        }

        cmd.push_str(&escape_shell_cmd(&self.executable));
        for arg in &self.args {
            cmd.push(' ');
            cmd.push_str(&arg.render());
        }

        if let Some(ref pipe) = self.pipe {
            cmd.push_str(" | ");
            cmd.push_str(&pipe.program);
            for arg in &pipe.args {
                cmd.push(' ');
                cmd.push_str(&arg.render());
            }
        }

        cmd
    }
}

impl std::fmt::Display for TsLintCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_shell_command())
    }
}
