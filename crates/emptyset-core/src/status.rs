/// Per-target severity under the monitoring protocol ordering.
///
/// Derives `Ord` so the aggregate severity of a run is a plain `max` fold:
/// ok < warning < critical, and a raised severity never goes back down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    #[default]
    Ok,
    Warning,
    Critical,
}

/// Final service state reported to the monitoring framework.
///
/// Unknown is reserved for configuration and execution failures; threshold
/// evaluation can only ever produce the first three states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl ServiceState {
    /// Fixed exit-code protocol consumed by Nagios-compatible schedulers.
    pub const fn exit_code(self) -> u8 {
        match self {
            ServiceState::Ok => 0,
            ServiceState::Warning => 1,
            ServiceState::Critical => 2,
            ServiceState::Unknown => 3,
        }
    }
}

impl From<Severity> for ServiceState {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Ok => ServiceState::Ok,
            Severity::Warning => ServiceState::Warning,
            Severity::Critical => ServiceState::Critical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_ok_below_warning_below_critical() {
        assert!(Severity::Ok < Severity::Warning);
        assert!(Severity::Warning < Severity::Critical);
        assert_eq!(Severity::Warning.max(Severity::Critical), Severity::Critical);
        assert_eq!(Severity::Critical.max(Severity::Ok), Severity::Critical);
    }

    #[test]
    fn exit_codes_follow_the_plugin_protocol() {
        assert_eq!(ServiceState::Ok.exit_code(), 0);
        assert_eq!(ServiceState::Warning.exit_code(), 1);
        assert_eq!(ServiceState::Critical.exit_code(), 2);
        assert_eq!(ServiceState::Unknown.exit_code(), 3);
    }
}
