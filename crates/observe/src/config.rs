use tracing::Level;

/// Where formatted log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Events more severe than the threshold go to stderr, everything else to
    /// stdout.
    Split { stderr_threshold: Level },
    /// Every event goes to stderr. For binaries whose stdout carries results.
    Stderr,
}

impl Default for Output {
    fn default() -> Self {
        Self::Split {
            stderr_threshold: Level::ERROR,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Directives in `EnvFilter` syntax, e.g. `warn,deployer=debug`.
    pub(crate) env_filter: String,
    pub(crate) output: Output,
    /// Emit one JSON object per event instead of plain lines.
    pub(crate) use_json_format: bool,
}

impl Config {
    pub fn new(env_filter: &str, output: Output, use_json_format: bool) -> Self {
        Self {
            env_filter: env_filter.into(),
            output,
            use_json_format,
        }
    }

    pub fn with_json_format(mut self) -> Self {
        self.use_json_format = true;
        self
    }

    pub fn with_env_filter(mut self, env_filter: &str) -> Self {
        self.env_filter = env_filter.to_string();
        self
    }

    pub fn with_stderr_threshold(mut self, stderr_threshold: Level) -> Self {
        self.output = Output::Split { stderr_threshold };
        self
    }

    pub fn with_stderr_only(mut self) -> Self {
        self.output = Output::Stderr;
        self
    }

    pub fn output(&self) -> Output {
        self.output
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            env_filter: "info".to_string(),
            output: Output::default(),
            use_json_format: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = Config::default()
            .with_env_filter("warn,deployer=debug")
            .with_stderr_threshold(Level::WARN)
            .with_json_format();

        assert_eq!(config.env_filter, "warn,deployer=debug");
        assert_eq!(
            config.output,
            Output::Split {
                stderr_threshold: Level::WARN
            }
        );
        assert!(config.use_json_format);
    }

    #[test]
    fn stderr_only_replaces_split_output() {
        let config = Config::default()
            .with_stderr_threshold(Level::WARN)
            .with_stderr_only();
        assert_eq!(config.output, Output::Stderr);
    }
}
