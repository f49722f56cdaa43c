use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::ScanRecord;

/// Sample counts for one subset of the records (all, positive or negative)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassBreakdown {
    /// Number of samples in the subset
    pub total: usize,
    /// Samples per BI-RADS class; index 0 is class I
    pub birads: [usize; 4],
    /// Samples per adipose shell id
    pub adipose_shells: BTreeMap<String, usize>,
}

impl ClassBreakdown {
    fn add(&mut self, record: &ScanRecord) {
        self.total += 1;
        if let Some(class @ 1..=4) = record.birads {
            self.birads[(class - 1) as usize] += 1;
        }
        *self
            .adipose_shells
            .entry(record.adipose_shell_id().to_string())
            .or_default() += 1;
    }
}

/// Content report of a set of scan records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataSummary {
    /// Every sample
    pub overall: ClassBreakdown,
    /// Tumour-containing samples
    pub positive: ClassBreakdown,
    /// Tumour-free samples
    pub negative: ClassBreakdown,
    /// Positive samples per tumour radius, keyed by the radius in cm
    pub tumor_sizes: BTreeMap<String, usize>,
}

impl MetadataSummary {
    /// Tally the records
    pub fn from_records(records: &[ScanRecord]) -> Self {
        let mut summary = Self::default();
        for record in records {
            summary.overall.add(record);
            match record.tumor_radius {
                Some(radius) => {
                    summary.positive.add(record);
                    *summary.tumor_sizes.entry(format!("{}", radius)).or_default() += 1;
                }
                None => summary.negative.add(record),
            }
        }
        summary
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        100.0 * part as f64 / whole as f64
    }
}

const CLASS_NAMES: [&str; 4] = ["I", "II", "III", "IV"];

fn write_breakdown(f: &mut fmt::Formatter<'_>, b: &ClassBreakdown, indent: &str) -> fmt::Result {
    for (name, count) in CLASS_NAMES.iter().zip(b.birads.iter()) {
        writeln!(
            f,
            "{indent}Class {:<4} samples: {:5} | {:6.2}%",
            name,
            count,
            percent(*count, b.total)
        )?;
    }
    for (shell, count) in &b.adipose_shells {
        writeln!(
            f,
            "{indent}Shell {:<4} samples: {:5} | {:6.2}%",
            shell,
            count,
            percent(*count, b.total)
        )?;
    }
    Ok(())
}

impl fmt::Display for MetadataSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.overall.total;
        writeln!(f, "Samples: {}", total)?;
        writeln!(
            f,
            "  Positive: {:5} | {:6.2}%",
            self.positive.total,
            percent(self.positive.total, total)
        )?;
        writeln!(
            f,
            "  Negative: {:5} | {:6.2}%",
            self.negative.total,
            percent(self.negative.total, total)
        )?;
        writeln!(f)?;
        writeln!(f, "Overall:")?;
        write_breakdown(f, &self.overall, "  ")?;
        for (size, count) in &self.tumor_sizes {
            writeln!(
                f,
                "  {} cm tumours: {:5} | {:6.2}%",
                size,
                count,
                percent(*count, self.positive.total)
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Positive samples:")?;
        write_breakdown(f, &self.positive, "  ")?;
        writeln!(f)?;
        writeln!(f, "Negative samples:")?;
        write_breakdown(f, &self.negative, "  ")
    }
}
