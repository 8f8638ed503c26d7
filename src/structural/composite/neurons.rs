//! Composite: neurons
//!
//! A single neuron and a whole layer connect through the same trait.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::cell::RefCell;
use std::io::Write;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

#[derive(Debug)]
struct NeuronData {
    id: usize,
    inputs: RefCell<Vec<Weak<NeuronData>>>,
    outputs: RefCell<Vec<Weak<NeuronData>>>,
}

/// Handle to a neuron. Connections are weak so a network of neurons that
/// point at each other can still be freed.
#[derive(Debug, Clone)]
pub struct Neuron(Rc<NeuronData>);

impl Neuron {
    pub fn new() -> Self {
        Self(Rc::new(NeuronData {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            inputs: RefCell::new(Vec::new()),
            outputs: RefCell::new(Vec::new()),
        }))
    }

    pub fn id(&self) -> usize {
        self.0.id
    }

    pub fn input_count(&self) -> usize {
        self.0.inputs.borrow().len()
    }

    pub fn output_count(&self) -> usize {
        self.0.outputs.borrow().len()
    }

    fn link(&self, to: &Neuron) {
        self.0.outputs.borrow_mut().push(Rc::downgrade(&to.0));
        to.0.inputs.borrow_mut().push(Rc::downgrade(&self.0));
    }
}

impl Default for Neuron {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Neuron {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Anything that can be seen as a set of neurons: a lone neuron is a set of
/// one.
pub trait NeuronSet {
    fn neurons(&self) -> Vec<Neuron>;

    /// Connects every neuron here to every neuron in `other`. A neuron is
    /// never connected to itself. Returns the number of links made.
    fn connect_to(&self, other: &impl NeuronSet) -> usize
    where
        Self: Sized,
    {
        let mut links = 0;
        let targets = other.neurons();
        for from in self.neurons() {
            for to in targets.iter().filter(|to| **to != from) {
                from.link(to);
                links += 1;
            }
        }
        tracing::debug!("Made {links} neuron link(s)");
        links
    }
}

impl NeuronSet for Neuron {
    fn neurons(&self) -> Vec<Neuron> {
        vec![self.clone()]
    }
}

#[derive(Debug, Clone, Default)]
pub struct NeuronLayer {
    neurons: Vec<Neuron>,
}

impl NeuronLayer {
    pub fn new(size: usize) -> Self {
        Self {
            neurons: (0..size).map(|_| Neuron::new()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }
}

impl NeuronSet for NeuronLayer {
    fn neurons(&self) -> Vec<Neuron> {
        self.neurons.clone()
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let neuron1 = Neuron::new();
    let neuron2 = Neuron::new();
    let layer1 = NeuronLayer::new(3);
    let layer2 = NeuronLayer::new(2);

    writeln!(out, "neuron -> neuron: {} link(s)", neuron1.connect_to(&neuron2))?;
    writeln!(out, "neuron -> layer: {} link(s)", neuron1.connect_to(&layer1))?;
    writeln!(out, "layer -> neuron: {} link(s)", layer1.connect_to(&neuron2))?;
    writeln!(out, "layer -> layer: {} link(s)", layer1.connect_to(&layer2))?;
    writeln!(out, "layer -> itself: {} link(s)", layer2.connect_to(&layer2))?;
    writeln!(
        out,
        "neuron1 has {} output(s), neuron2 has {} input(s)",
        neuron1.output_count(),
        neuron2.input_count()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_to_layer_links_every_pair() {
        let a = NeuronLayer::new(3);
        let b = NeuronLayer::new(4);
        assert_eq!(a.connect_to(&b), 12);
        assert!(a.neurons().iter().all(|n| n.output_count() == 4));
        assert!(b.neurons().iter().all(|n| n.input_count() == 3));
    }

    #[test]
    fn test_no_self_connection() {
        let n = Neuron::new();
        assert_eq!(n.connect_to(&n), 0);

        let layer = NeuronLayer::new(2);
        assert_eq!(layer.connect_to(&layer), 2);
    }

    #[test]
    fn test_ids_are_unique() {
        let layer = NeuronLayer::new(5);
        let mut ids: Vec<_> = layer.neurons().iter().map(Neuron::id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run(&mut out, &PatternsConfig::quiet()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "neuron -> neuron: 1 link(s)\nneuron -> layer: 3 link(s)\nlayer -> neuron: 3 link(s)\n\
             layer -> layer: 6 link(s)\nlayer -> itself: 2 link(s)\n\
             neuron1 has 4 output(s), neuron2 has 4 input(s)\n"
        );
    }
}
