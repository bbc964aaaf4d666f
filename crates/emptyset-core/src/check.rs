use crate::error::Result;
use crate::probe::Probe;
use crate::report::{RunReport, TargetOutcome};
use crate::status::Severity;
use crate::thresholds::Thresholds;

/// Run every target through the probe and fold the outcomes into one report.
///
/// Targets are processed sequentially in supplied order. A fatal error aborts
/// the run on the spot: targets after the failing one are never inspected and
/// outcomes gathered so far are dropped with the report.
pub fn run_checks<P>(probe: &P, targets: &[String], thresholds: &Thresholds) -> Result<RunReport>
where
    P: Probe + ?Sized,
{
    let mut report = RunReport::default();

    for target in targets {
        let entries = probe.inspect(target)?;
        let severity = thresholds.classify(entries.len());
        tracing::debug!(
            event = "target_evaluated",
            source = probe.source(),
            name = %target,
            entries = entries.len(),
            severity = ?severity,
        );

        let outcome = match severity {
            Severity::Ok => TargetOutcome::ok(),
            breached => TargetOutcome::breach(breached, probe.describe_breach(target, &entries)),
        };
        report.absorb(outcome);
    }

    Ok(report)
}
