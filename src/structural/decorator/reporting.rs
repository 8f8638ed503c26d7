//! Decorator: logging wrapped around a reporting service.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::io::Write;

pub trait ReportingService {
    fn report(&self) -> Vec<String>;
}

pub struct BasicReportingService;

impl ReportingService for BasicReportingService {
    fn report(&self) -> Vec<String> {
        vec!["Here is your report".to_string()]
    }
}

/// Adds log lines around whatever service it wraps.
pub struct ReportingServiceWithLogging<S: ReportingService> {
    decorated: S,
}

impl<S: ReportingService> ReportingServiceWithLogging<S> {
    pub fn new(decorated: S) -> Self {
        Self { decorated }
    }
}

impl<S: ReportingService> ReportingService for ReportingServiceWithLogging<S> {
    fn report(&self) -> Vec<String> {
        tracing::debug!("Decorated report requested");
        let mut lines = vec!["Commencing log...".to_string()];
        lines.extend(self.decorated.report());
        lines.push("Ending log...".to_string());
        lines
    }
}

impl ReportingService for Box<dyn ReportingService> {
    fn report(&self) -> Vec<String> {
        (**self).report()
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let service: Box<dyn ReportingService> =
        Box::new(ReportingServiceWithLogging::new(BasicReportingService));
    for line in service.report() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_inner_report() {
        let service = ReportingServiceWithLogging::new(BasicReportingService);
        assert_eq!(
            service.report(),
            vec!["Commencing log...", "Here is your report", "Ending log..."]
        );
    }

    #[test]
    fn test_decorates_boxed_services() {
        let inner: Box<dyn ReportingService> = Box::new(BasicReportingService);
        let twice = ReportingServiceWithLogging::new(ReportingServiceWithLogging::new(inner));
        let report = twice.report();
        assert_eq!(report.len(), 5);
        assert_eq!(report[2], "Here is your report");
    }
}
