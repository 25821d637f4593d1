use jdkguard_types::{ComplianceResult, Verdict};

/// Aggregated outcome of one verification run.
///
/// `failures` keeps every failing result in encounter order; rendering may
/// cap what it lists but never this list. `total_checked` always equals the
/// number of results consumed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComplianceReport {
    pub total_checked: u32,
    pub failures: Vec<ComplianceResult>,
}

impl ComplianceReport {
    pub fn passed(&self) -> u32 {
        self.total_checked - self.failures.len() as u32
    }

    pub fn verdict(&self) -> Verdict {
        if self.failures.is_empty() {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

/// Count every result; retain only failures, in encounter order.
/// Deterministic: identical input sequence, identical report.
pub fn aggregate<I>(results: I) -> ComplianceReport
where
    I: IntoIterator<Item = ComplianceResult>,
{
    let mut report = ComplianceReport::default();
    for result in results {
        report.total_checked += 1;
        if result.verdict == Verdict::Fail {
            report.failures.push(result);
        }
    }
    report
}
