use crate::error::Result;

/// Trait implemented by data-source adapters.
///
/// The aggregation loop only ever sees this seam, so it can be driven by
/// fakes returning canned entries or errors in tests.
pub trait Probe {
    /// Short identifier for the data source (e.g. `bird`).
    fn source(&self) -> &'static str;

    /// Inspect one target and list the entries found in it.
    ///
    /// Fails with a fatal error when the backing tool cannot be queried or
    /// its output cannot be understood.
    fn inspect(&self, target: &str) -> Result<Vec<String>>;

    /// Render the message reported when a target breaches a threshold.
    fn describe_breach(&self, target: &str, entries: &[String]) -> String;
}
