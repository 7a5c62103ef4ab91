//! Concurrent fan-out of the probe pipeline over a target list.

use crate::dns::{resolve_identity, DnsResolver, NameResolver};
use crate::error::{ProbeError, ProbeResult};
use crate::geo::GeoClient;
use crate::metrics::compute_metrics;
use crate::parser::{last_responsive_ip, parse_hops};
use crate::risk::RiskEvaluator;
use crate::threat::NullThreatScorer;
use crate::tracer::{CommandTracer, Tracer};
use futures_util::stream::{FuturesUnordered, StreamExt};
use pathwatch_core::{OutcomeSink, ProbeConfig, Reporter, TraceOutcome};
use std::sync::Arc;
use tracing::{debug, error, info};

/// A target that produced no outcome in this batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedTarget {
    /// Host that was being traced
    pub target: String,
    /// Why it was dropped
    pub reason: String,
}

/// Everything one batch produced
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Outcomes in completion order
    pub outcomes: Vec<TraceOutcome>,
    /// Targets dropped because their trace failed
    pub failures: Vec<FailedTarget>,
    /// Outcomes the sink refused to store
    pub unpersisted: usize,
}

/// Result of probing one target
struct TargetResult {
    target: String,
    outcome: ProbeResult<TraceOutcome>,
    persisted: bool,
}

/// Per-target pipeline shared by every task of a batch
struct Pipeline {
    tracer: Arc<dyn Tracer>,
    resolver: Arc<dyn NameResolver>,
    evaluator: RiskEvaluator,
    sink: Option<Arc<dyn OutcomeSink>>,
}

impl Pipeline {
    /// Trace, parse, measure, resolve and evaluate one target
    async fn probe(&self, target: &str) -> ProbeResult<TraceOutcome> {
        let raw = self.tracer.trace(target).await?;

        let hops = parse_hops(&raw);
        let metrics = compute_metrics(&hops);
        let last_ip = last_responsive_ip(&hops);
        let resolved_name = resolve_identity(self.resolver.as_ref(), last_ip).await;

        let risk = self
            .evaluator
            .evaluate(last_ip, metrics.avg_latency_ms, resolved_name.as_deref())
            .await;
        debug!(host = %target, alert = risk.is_alert(), "path evaluated");

        Ok(TraceOutcome::new(target, hops, metrics, resolved_name))
    }

    /// Hand a finished outcome to the sink, if one is attached
    ///
    /// Sinks do blocking I/O, so the write runs on the blocking pool.
    async fn persist(&self, outcome: &TraceOutcome) -> ProbeResult<()> {
        let Some(sink) = self.sink.clone() else {
            return Ok(());
        };
        let outcome = outcome.clone();

        tokio::task::spawn_blocking(move || sink.record(&outcome))
            .await
            .map_err(|e| ProbeError::Sink(e.to_string()))?
            .map_err(|e| ProbeError::Sink(e.to_string()))
    }

    async fn run_target(&self, target: String) -> TargetResult {
        let outcome = self.probe(&target).await;

        let persisted = match &outcome {
            Ok(outcome) => match self.persist(outcome).await {
                Ok(()) => true,
                Err(e) => {
                    error!(host = %target, error = %e, "failed to store outcome");
                    false
                }
            },
            Err(_) => false,
        };

        TargetResult {
            target,
            outcome,
            persisted,
        }
    }
}

/// Runs the probe pipeline for every configured target in parallel
pub struct ProbeOrchestrator {
    pipeline: Arc<Pipeline>,
    targets: Vec<String>,
    reporter: Option<Arc<dyn Reporter>>,
}

impl ProbeOrchestrator {
    /// Create a builder from the pipeline capabilities
    pub fn builder(
        tracer: Arc<dyn Tracer>,
        resolver: Arc<dyn NameResolver>,
        evaluator: RiskEvaluator,
    ) -> ProbeOrchestratorBuilder {
        ProbeOrchestratorBuilder {
            tracer,
            resolver,
            evaluator,
            targets: Vec::new(),
            sink: None,
            reporter: None,
        }
    }

    /// Create a builder wired to the real tracer, resolver and geolocation provider
    pub fn from_config(config: &ProbeConfig) -> ProbeResult<ProbeOrchestratorBuilder> {
        let evaluator = RiskEvaluator::new(
            Arc::new(GeoClient::from_config(config)?),
            Arc::new(NullThreatScorer),
            config.risk.clone(),
        );

        Ok(Self::builder(
            Arc::new(CommandTracer::from_config(config)),
            Arc::new(DnsResolver::new()),
            evaluator,
        )
        .targets(config.targets.iter().cloned()))
    }

    /// Targets probed by [`run`](Self::run)
    #[must_use]
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Probe every target concurrently and wait for all of them
    ///
    /// Each outcome is stored as soon as its own pipeline finishes. Targets
    /// whose trace fails are logged and dropped. The reporter runs once,
    /// after the last task.
    pub async fn run(&self) -> BatchReport {
        let mut tasks: FuturesUnordered<_> = self
            .targets
            .iter()
            .cloned()
            .map(|target| {
                let pipeline = Arc::clone(&self.pipeline);
                tokio::spawn(async move { pipeline.run_target(target).await })
            })
            .collect();

        let mut report = BatchReport::default();

        while let Some(joined) = tasks.next().await {
            let result = match joined {
                Ok(result) => result,
                Err(e) => {
                    error!(error = %e, "probe task aborted");
                    continue;
                }
            };

            match result.outcome {
                Ok(outcome) => {
                    if !result.persisted && self.pipeline.sink.is_some() {
                        report.unpersisted += 1;
                    }
                    report.outcomes.push(outcome);
                }
                Err(e) => {
                    error!(host = %result.target, error = %e, "traceroute failed, skipping target");
                    report.failures.push(FailedTarget {
                        target: result.target,
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            succeeded = report.outcomes.len(),
            failed = report.failures.len(),
            "probe batch complete"
        );

        if let Some(reporter) = &self.reporter {
            if let Err(e) = reporter.render() {
                error!(error = %e, "failed to render report");
            }
        }

        report
    }
}

/// Builder for a [`ProbeOrchestrator`]
pub struct ProbeOrchestratorBuilder {
    tracer: Arc<dyn Tracer>,
    resolver: Arc<dyn NameResolver>,
    evaluator: RiskEvaluator,
    targets: Vec<String>,
    sink: Option<Arc<dyn OutcomeSink>>,
    reporter: Option<Arc<dyn Reporter>>,
}

impl ProbeOrchestratorBuilder {
    /// Replace the target list
    #[must_use]
    pub fn targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.targets = targets.into_iter().map(Into::into).collect();
        self
    }

    /// Attach the persistence sink
    #[must_use]
    pub fn sink(mut self, sink: Arc<dyn OutcomeSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Attach the reporter run after each batch
    #[must_use]
    pub fn reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Build the orchestrator
    #[must_use]
    pub fn build(self) -> ProbeOrchestrator {
        ProbeOrchestrator {
            pipeline: Arc::new(Pipeline {
                tracer: self.tracer,
                resolver: self.resolver,
                evaluator: self.evaluator,
                sink: self.sink,
            }),
            targets: self.targets,
            reporter: self.reporter,
        }
    }
}
