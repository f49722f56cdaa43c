use std::fmt;

/// Outcome of one check
#[derive(Debug, Clone)]
pub enum CheckStatus {
    /// Check passed
    Ok,
    /// Check passed with warnings
    Warning(String),
    /// Check failed
    Failed(String),
}

impl CheckStatus {
    fn tone(&self) -> Tone {
        match self {
            CheckStatus::Ok => Tone::Good,
            CheckStatus::Warning(_) => Tone::Warn,
            CheckStatus::Failed(_) => Tone::Bad,
        }
    }
}

/// A named check and its outcome
#[derive(Debug, Clone)]
pub struct ValidationCheck {
    /// Name of the check
    pub name: String,
    /// Outcome of the check
    pub status: CheckStatus,
}

impl ValidationCheck {
    pub(crate) fn ok(name: impl Into<String>) -> Self {
        Self::with_status(name, CheckStatus::Ok)
    }

    pub(crate) fn warning(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_status(name, CheckStatus::Warning(message.into()))
    }

    pub(crate) fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_status(name, CheckStatus::Failed(message.into()))
    }

    fn with_status(name: impl Into<String>, status: CheckStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }
}

/// Number of checks per outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckTally {
    /// Checks that passed
    pub passed: usize,
    /// Checks that passed with a warning
    pub warnings: usize,
    /// Checks that failed
    pub failed: usize,
}

/// Every check run over one raw directory tree
#[derive(Debug)]
pub struct ValidationReport {
    /// Checks in the order they ran
    pub checks: Vec<ValidationCheck>,
    /// Root directory that was validated
    pub root: String,
}

#[derive(Clone, Copy)]
enum Tone {
    Title,
    Good,
    Warn,
    Bad,
}

impl ValidationReport {
    /// Create an empty report for `root`
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            checks: Vec::new(),
            root: root.into(),
        }
    }

    /// Append a check
    pub fn add_check(&mut self, check: ValidationCheck) {
        self.checks.push(check);
    }

    /// Count the checks per outcome
    pub fn tally(&self) -> CheckTally {
        self.checks
            .iter()
            .fold(CheckTally::default(), |mut tally, check| {
                match check.status {
                    CheckStatus::Ok => tally.passed += 1,
                    CheckStatus::Warning(_) => tally.warnings += 1,
                    CheckStatus::Failed(_) => tally.failed += 1,
                }
                tally
            })
    }

    /// Whether any check failed
    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    /// Whether any check produced a warning
    pub fn has_warnings(&self) -> bool {
        self.checks
            .iter()
            .any(|c| matches!(c.status, CheckStatus::Warning(_)))
    }

    /// Checks that failed
    pub fn failures(&self) -> impl Iterator<Item = &ValidationCheck> {
        self.checks
            .iter()
            .filter(|c| matches!(c.status, CheckStatus::Failed(_)))
    }

    /// The report with colors when the `colorized_output` feature is on
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            self.render(&|text, tone| {
                let styled = console::style(text).bold();
                match tone {
                    Tone::Title => styled.cyan(),
                    Tone::Good => styled.green(),
                    Tone::Warn => styled.yellow(),
                    Tone::Bad => styled.red(),
                }
                .to_string()
            })
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            self.to_string()
        }
    }

    fn render(&self, paint: &dyn Fn(&str, Tone) -> String) -> String {
        let tally = self.tally();
        let (verdict, verdict_tone) = if tally.failed > 0 {
            ("Validation FAILED", Tone::Bad)
        } else if tally.warnings > 0 {
            ("Validation PASSED with warnings", Tone::Warn)
        } else {
            ("Validation PASSED", Tone::Good)
        };

        let mut lines = vec![
            paint("UM-BMID Validation Report", Tone::Title),
            paint("=========================", Tone::Title),
            format!("Directory: {}", self.root),
            String::new(),
        ];

        for check in &self.checks {
            let tone = check.status.tone();
            let symbol = match check.status {
                CheckStatus::Ok => "✓",
                CheckStatus::Warning(_) => "⚠",
                CheckStatus::Failed(_) => "✗",
            };
            let detail = match &check.status {
                CheckStatus::Ok => String::new(),
                CheckStatus::Warning(msg) => format!(" - {}: {}", paint("WARNING", tone), msg),
                CheckStatus::Failed(msg) => format!(" - {}: {}", paint("FAILED", tone), msg),
            };
            lines.push(format!("[{}] {}{}", paint(symbol, tone), check.name, detail));
        }

        lines.push(String::new());
        lines.push(format!(
            "Summary: {} passed, {} warnings, {} failed",
            paint(&tally.passed.to_string(), Tone::Good),
            paint(&tally.warnings.to_string(), Tone::Warn),
            paint(&tally.failed.to_string(), Tone::Bad),
        ));
        lines.push(String::new());
        lines.push(paint(verdict, verdict_tone));

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&|text, _| text.to_string()))
    }
}
