//! Execution environment detection.
//!
//! Only environment variables are inspected; a child process started from a
//! notebook cell or an editor terminal inherits them from its host.

use serde::Serialize;
use std::fmt;

use super::logging::{LogFormat, LoggingConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentKind {
    /// Google Colab
    HostedNotebook,
    /// Jupyter kernel or server
    Notebook,
    /// VSCode integrated terminal
    Editor,
    Terminal,
}

impl fmt::Display for EnvironmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EnvironmentKind::HostedNotebook => "Google Colab",
            EnvironmentKind::Notebook => "Jupyter",
            EnvironmentKind::Editor => "VSCode",
            EnvironmentKind::Terminal => "Terminal",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Environment {
    pub kind: EnvironmentKind,
    pub os: &'static str,
    pub arch: &'static str,
}

const HOSTED_NOTEBOOK_VARS: &[&str] = &["COLAB_RELEASE_TAG", "COLAB_GPU"];
const NOTEBOOK_VARS: &[&str] = &["JPY_PARENT_PID", "JUPYTER_SERVER_ROOT"];

impl Environment {
    /// Detect from the current process environment
    pub fn detect() -> Self {
        Self::detect_with(|key| std::env::var(key).ok())
    }

    /// Detect using an arbitrary variable lookup
    pub fn detect_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_set = |key: &str| lookup(key).is_some_and(|v| !v.is_empty());

        let kind = if HOSTED_NOTEBOOK_VARS.iter().any(|k| is_set(*k)) {
            EnvironmentKind::HostedNotebook
        } else if NOTEBOOK_VARS.iter().any(|k| is_set(*k)) {
            EnvironmentKind::Notebook
        } else if lookup("TERM_PROGRAM").as_deref() == Some("vscode") {
            EnvironmentKind::Editor
        } else {
            EnvironmentKind::Terminal
        };

        Self {
            kind,
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        }
    }

    /// Logging preset suited to where output ends up
    pub fn logging_config(&self) -> LoggingConfig {
        match self.kind {
            EnvironmentKind::HostedNotebook => LoggingConfig {
                force_color: true,
                ..LoggingConfig::with_format(LogFormat::Compact)
            },
            EnvironmentKind::Notebook => LoggingConfig::with_format(LogFormat::Notebook),
            EnvironmentKind::Editor => LoggingConfig::with_format(LogFormat::Detailed),
            EnvironmentKind::Terminal => LoggingConfig::default(),
        }
    }
}
