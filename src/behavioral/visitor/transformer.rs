//! Visitor: expression transformers.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::io::Write;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Double(f64),
    Addition(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn add(left: Expression, right: Expression) -> Self {
        Expression::Addition(Box::new(left), Box::new(right))
    }

    /// Post-order reduction: children are transformed before their parent.
    pub fn reduce<T>(&self, transformer: &impl Transformer<T>) -> T {
        match self {
            Expression::Double(value) => transformer.double(*value),
            Expression::Addition(left, right) => {
                let left = left.reduce(transformer);
                let right = right.reduce(transformer);
                transformer.addition(left, right)
            }
        }
    }
}

pub trait Transformer<T> {
    fn double(&self, value: f64) -> T;
    fn addition(&self, left: T, right: T) -> T;
}

pub struct EvaluationTransformer;

impl Transformer<f64> for EvaluationTransformer {
    fn double(&self, value: f64) -> f64 {
        value
    }

    fn addition(&self, left: f64, right: f64) -> f64 {
        left + right
    }
}

pub struct PrintTransformer;

impl Transformer<String> for PrintTransformer {
    fn double(&self, value: f64) -> String {
        value.to_string()
    }

    fn addition(&self, left: String, right: String) -> String {
        format!("({left} + {right})")
    }
}

/// Rebuilds the tree with every literal squared.
pub struct SquareTransformer;

impl Transformer<Expression> for SquareTransformer {
    fn double(&self, value: f64) -> Expression {
        Expression::Double(value * value)
    }

    fn addition(&self, left: Expression, right: Expression) -> Expression {
        Expression::add(left, right)
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let expr = Expression::add(Expression::Double(1.0), Expression::Double(2.0));
    let result = expr.reduce(&EvaluationTransformer);
    let text = expr.reduce(&PrintTransformer);
    writeln!(out, "{text} = {result}")?;

    let squared = expr.reduce(&SquareTransformer);
    writeln!(out, "{}", squared.reduce(&PrintTransformer))?;
    Ok(())
}
