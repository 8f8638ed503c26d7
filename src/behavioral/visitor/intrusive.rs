//! Visitor: intrusive printing.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::io::Write;

pub trait Expression {
    fn print(&self, buf: &mut String);
}

pub struct DoubleExpression {
    value: f64,
}

impl DoubleExpression {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl Expression for DoubleExpression {
    fn print(&self, buf: &mut String) {
        buf.push_str(&self.value.to_string());
    }
}

pub struct AdditionExpression {
    left: Box<dyn Expression>,
    right: Box<dyn Expression>,
}

impl AdditionExpression {
    pub fn new(left: Box<dyn Expression>, right: Box<dyn Expression>) -> Self {
        Self { left, right }
    }
}

impl Expression for AdditionExpression {
    fn print(&self, buf: &mut String) {
        buf.push('(');
        self.left.print(buf);
        buf.push('+');
        self.right.print(buf);
        buf.push(')');
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let e = AdditionExpression::new(
        Box::new(DoubleExpression::new(1.0)),
        Box::new(AdditionExpression::new(
            Box::new(DoubleExpression::new(2.0)),
            Box::new(DoubleExpression::new(3.0)),
        )),
    );
    let mut buf = String::new();
    e.print(&mut buf);
    writeln!(out, "{buf}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_print() {
        let mut out = Vec::new();
        run(&mut out, &PatternsConfig::quiet()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "(1+(2+3))\n");
    }

    #[test]
    fn test_fractional_values() {
        let mut buf = String::new();
        DoubleExpression::new(2.5).print(&mut buf);
        assert_eq!(buf, "2.5");
    }
}
