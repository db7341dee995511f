use serde::Serialize;

/// A mocha invocation, ready to hand to a terminal or debugger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MochaCommand {
    pub program: String,
    pub args: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<(String, String)>,
    /// The `--grep` pattern, when the command targets a single block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grep: Option<String>,
}

impl MochaCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            working_dir: None,
            env: Vec::new(),
            grep: None,
        }
    }

    pub fn with_working_dir(mut self, dir: String) -> Self {
        self.working_dir = Some(dir);
        self
    }

    pub fn with_env(mut self, key: String, value: String) -> Self {
        self.env.push((key, value));
        self
    }

    pub fn with_grep(mut self, pattern: String) -> Self {
        self.args.push("--grep".to_string());
        self.args.push(pattern.clone());
        self.grep = Some(pattern);
        self
    }

    /// Render as a single POSIX shell line
    pub fn to_shell_command(&self) -> String {
        let mut cmd = String::new();
        for (key, value) in &self.env {
            cmd.push_str(&format!("{key}={} ", shell_quote(value)));
        }
        cmd.push_str(&shell_quote(&self.program));
        for arg in &self.args {
            cmd.push(' ');
            cmd.push_str(&shell_quote(arg));
        }
        cmd
    }
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/' | '=' | ':' | '@' | '%' | '+' | ',')
}

/// Single-quote `arg` unless every character is shell-safe
pub fn shell_quote(arg: &str) -> String {
    if !arg.is_empty() && arg.chars().all(is_shell_safe) {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', r"'\''"))
}
