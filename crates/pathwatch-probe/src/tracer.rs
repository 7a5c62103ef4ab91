//! Network path tracing through the system traceroute utility.

use crate::error::{ProbeError, ProbeResult};
use async_trait::async_trait;
use pathwatch_core::ProbeConfig;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info};

/// Capability that produces raw path-tracing output for one target
#[async_trait]
pub trait Tracer: Send + Sync {
    /// Trace the path to `target` and return the utility's standard output
    async fn trace(&self, target: &str) -> ProbeResult<String>;
}

/// Tracer that shells out to an external utility such as `traceroute -n`
#[derive(Debug, Clone)]
pub struct CommandTracer {
    /// Program to run
    program: String,
    /// Arguments placed before the target
    args: Vec<String>,
    /// Hard wall-clock limit for one trace
    timeout: Duration,
}

impl Default for CommandTracer {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandTracer {
    /// Create a tracer running `traceroute -n` with a 30 second limit
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: String::from("traceroute"),
            args: vec![String::from("-n")],
            timeout: Duration::from_secs(30),
        }
    }

    /// Create a tracer from probe configuration
    #[must_use]
    pub fn from_config(config: &ProbeConfig) -> Self {
        Self {
            program: config.tracer_program.clone(),
            args: config.tracer_args.clone(),
            timeout: config.trace_timeout(),
        }
    }

    /// Set the program to invoke
    #[must_use]
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Set the arguments passed before the target
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set the wall-clock timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl Tracer for CommandTracer {
    async fn trace(&self, target: &str) -> ProbeResult<String> {
        info!(host = %target, "starting trace");

        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(target)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| ProbeError::Timeout(self.timeout))??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ProbeError::Trace(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        debug!(host = %target, bytes = output.stdout.len(), "trace finished");
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_stdout_on_success() {
        let tracer = CommandTracer::new().program("echo").args(["-n", "trace to"]);
        let out = tracer.trace("example.com").await.unwrap();
        assert_eq!(out, "trace to example.com");
    }

    #[tokio::test]
    async fn non_zero_exit_is_a_trace_error() {
        let tracer = CommandTracer::new().program("false").args(Vec::<String>::new());
        let err = tracer.trace("example.com").await.unwrap_err();
        assert!(matches!(err, ProbeError::Trace(_)));
    }

    #[tokio::test]
    async fn slow_trace_times_out() {
        let tracer = CommandTracer::new()
            .program("sleep")
            .args(Vec::<String>::new())
            .timeout(Duration::from_millis(100));
        let err = tracer.trace("5").await.unwrap_err();
        assert!(matches!(err, ProbeError::Timeout(d) if d == Duration::from_millis(100)));
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let tracer = CommandTracer::new().program("pathwatch-no-such-tracer");
        let err = tracer.trace("example.com").await.unwrap_err();
        assert!(matches!(err, ProbeError::Spawn(_)));
    }

    #[test]
    fn from_config_copies_settings() {
        let config = ProbeConfig {
            tracer_program: "tracepath".into(),
            tracer_args: vec!["-n".into(), "-m".into(), "20".into()],
            trace_timeout_secs: 5,
            ..ProbeConfig::default()
        };
        let tracer = CommandTracer::from_config(&config);
        assert_eq!(tracer.program, "tracepath");
        assert_eq!(tracer.args.len(), 3);
        assert_eq!(tracer.timeout, Duration::from_secs(5));
    }
}
