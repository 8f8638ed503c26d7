//! One fat machine interface forces a basic printer to stub out faxing and
//! scanning; small interfaces let each device implement only what it does.

use crate::config::PatternsConfig;
use crate::error::{PatternError, Result};
use std::io::Write;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub name: String,
}

impl Document {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

pub trait Machine {
    fn print(&self, doc: &Document) -> Result<String>;
    fn fax(&self, doc: &Document) -> Result<String>;
    fn scan(&self, doc: &Document) -> Result<String>;
}

pub struct MultiFunctionPrinter;

impl Machine for MultiFunctionPrinter {
    fn print(&self, doc: &Document) -> Result<String> {
        Ok(format!("Printed {}", doc.name))
    }

    fn fax(&self, doc: &Document) -> Result<String> {
        Ok(format!("Faxed {}", doc.name))
    }

    fn scan(&self, doc: &Document) -> Result<String> {
        Ok(format!("Scanned {}", doc.name))
    }
}

pub struct OldFashionedPrinter;

impl Machine for OldFashionedPrinter {
    fn print(&self, doc: &Document) -> Result<String> {
        Ok(format!("Printed {}", doc.name))
    }

    fn fax(&self, _doc: &Document) -> Result<String> {
        Err(PatternError::NotImplemented("fax"))
    }

    fn scan(&self, _doc: &Document) -> Result<String> {
        Err(PatternError::NotImplemented("scan"))
    }
}

pub trait Printer {
    fn print(&self, doc: &Document) -> String;
}

pub trait Scanner {
    fn scan(&self, doc: &Document) -> String;
}

pub trait MultiFunctionDevice: Printer + Scanner {}

impl<T: Printer + Scanner> MultiFunctionDevice for T {}

pub struct SimplePrinter;

impl Printer for SimplePrinter {
    fn print(&self, doc: &Document) -> String {
        format!("Printed {}", doc.name)
    }
}

pub struct SimpleScanner;

impl Scanner for SimpleScanner {
    fn scan(&self, doc: &Document) -> String {
        format!("Scanned {}", doc.name)
    }
}

/// Built from any printer and scanner, delegating to each.
pub struct MultiFunctionMachine<P, S> {
    printer: P,
    scanner: S,
}

impl<P: Printer, S: Scanner> MultiFunctionMachine<P, S> {
    pub fn new(printer: P, scanner: S) -> Self {
        Self { printer, scanner }
    }
}

impl<P: Printer, S: Scanner> Printer for MultiFunctionMachine<P, S> {
    fn print(&self, doc: &Document) -> String {
        self.printer.print(doc)
    }
}

impl<P: Printer, S: Scanner> Scanner for MultiFunctionMachine<P, S> {
    fn scan(&self, doc: &Document) -> String {
        self.scanner.scan(doc)
    }
}

fn copy(device: &impl MultiFunctionDevice, doc: &Document) -> Vec<String> {
    vec![device.scan(doc), device.print(doc)]
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let doc = Document::new("report.pdf");

    writeln!(out, "Fat interface:")?;
    let old = OldFashionedPrinter;
    for result in [old.print(&doc), old.fax(&doc), old.scan(&doc)] {
        match result {
            Ok(done) => writeln!(out, " - {done}")?,
            Err(e) => writeln!(out, " - {e}")?,
        }
    }

    writeln!(out, "Segregated interfaces:")?;
    writeln!(out, " - {}", SimplePrinter.print(&doc))?;
    let machine = MultiFunctionMachine::new(SimplePrinter, SimpleScanner);
    for line in copy(&machine, &doc) {
        writeln!(out, " - {line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_old_printer_stubs() {
        let doc = Document::new("a");
        assert!(OldFashionedPrinter.print(&doc).is_ok());
        assert!(matches!(OldFashionedPrinter.fax(&doc), Err(PatternError::NotImplemented("fax"))));
        assert!(MultiFunctionPrinter.fax(&doc).is_ok());
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run(&mut out, &PatternsConfig::quiet()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Fat interface:\n - Printed report.pdf\n\
             \x20- Operation not implemented: fax\n - Operation not implemented: scan\n\
             Segregated interfaces:\n - Printed report.pdf\n\
             \x20- Scanned report.pdf\n - Printed report.pdf\n"
        );
    }
}
