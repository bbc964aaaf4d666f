use crate::status::Severity;

/// Entry counts at which a target enters warning or critical state.
///
/// Both thresholds are independently optional; an unset threshold can never
/// be breached, whatever the count. The pair applies to every target of a
/// run, there is no per-target override.
#[derive(Debug, Clone, Copy, Default)]
pub struct Thresholds {
    pub warning: Option<u64>,
    pub critical: Option<u64>,
}

impl Thresholds {
    /// Classify an entry count.
    ///
    /// Critical is checked first so a count satisfying both thresholds
    /// resolves to critical. Comparison is `>=`: a count exactly equal to a
    /// threshold already breaches it.
    pub fn classify(&self, count: usize) -> Severity {
        let count = count as u64;
        if self.critical.is_some_and(|critical| count >= critical) {
            return Severity::Critical;
        }
        if self.warning.is_some_and(|warning| count >= warning) {
            return Severity::Warning;
        }
        Severity::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_thresholds_never_breach() {
        let thresholds = Thresholds::default();
        for count in [0, 1, 5, 10_000] {
            assert_eq!(thresholds.classify(count), Severity::Ok);
        }
    }

    #[test]
    fn counts_at_or_above_a_threshold_breach_it() {
        let thresholds = Thresholds {
            warning: Some(2),
            critical: Some(5),
        };
        assert_eq!(thresholds.classify(0), Severity::Ok);
        assert_eq!(thresholds.classify(1), Severity::Ok);
        assert_eq!(thresholds.classify(2), Severity::Warning);
        assert_eq!(thresholds.classify(4), Severity::Warning);
        assert_eq!(thresholds.classify(5), Severity::Critical);
        assert_eq!(thresholds.classify(100), Severity::Critical);
    }

    #[test]
    fn critical_wins_when_both_thresholds_are_satisfied() {
        let thresholds = Thresholds {
            warning: Some(1),
            critical: Some(1),
        };
        assert_eq!(thresholds.classify(1), Severity::Critical);
    }

    #[test]
    fn critical_alone_is_reachable_without_warning() {
        let thresholds = Thresholds {
            warning: None,
            critical: Some(3),
        };
        assert_eq!(thresholds.classify(2), Severity::Ok);
        assert_eq!(thresholds.classify(3), Severity::Critical);
    }

    #[test]
    fn warning_above_critical_skips_the_warning_state() {
        // Accepted configuration: the evaluator applies both thresholds
        // independently, so such a target goes straight to critical.
        let thresholds = Thresholds {
            warning: Some(10),
            critical: Some(5),
        };
        assert_eq!(thresholds.classify(4), Severity::Ok);
        assert_eq!(thresholds.classify(5), Severity::Critical);
        assert_eq!(thresholds.classify(20), Severity::Critical);
    }

    #[test]
    fn zero_threshold_breaches_on_empty_targets() {
        let thresholds = Thresholds {
            warning: Some(0),
            critical: None,
        };
        assert_eq!(thresholds.classify(0), Severity::Warning);
    }
}
