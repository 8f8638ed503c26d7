//! State: transition table
//!
//! Enum states and triggers with optional guard conditions.

use crate::config::PatternsConfig;
use crate::error::{PatternError, Result};
use std::cell::Cell;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::io::Write;
use std::rc::Rc;

type Guard = Box<dyn Fn() -> bool>;

struct Transition<S, T> {
    trigger: T,
    destination: S,
    guard: Option<Guard>,
}

impl<S, T> Transition<S, T> {
    fn allowed(&self) -> bool {
        self.guard.as_ref().map_or(true, |guard| guard())
    }
}

/// Table-driven state machine over plain `Copy` enums.
pub struct StateMachine<S, T> {
    state: S,
    table: HashMap<S, Vec<Transition<S, T>>>,
}

impl<S, T> StateMachine<S, T>
where
    S: Copy + Eq + Hash + Debug,
    T: Copy + Eq + Debug,
{
    pub fn new(initial: S) -> Self {
        Self {
            state: initial,
            table: HashMap::new(),
        }
    }

    pub fn state(&self) -> S {
        self.state
    }

    pub fn configure(&mut self, state: S) -> StateConfiguration<'_, S, T> {
        StateConfiguration {
            transitions: self.table.entry(state).or_default(),
        }
    }

    fn find(&self, trigger: T) -> Option<&Transition<S, T>> {
        self.table.get(&self.state)?.iter().find(|t| t.trigger == trigger && t.allowed())
    }

    pub fn can_fire(&self, trigger: T) -> bool {
        self.find(trigger).is_some()
    }

    /// Triggers that would succeed right now, in configuration order.
    pub fn permitted_triggers(&self) -> Vec<T> {
        let mut triggers = Vec::new();
        for transition in self.table.get(&self.state).into_iter().flatten() {
            if transition.allowed() && !triggers.contains(&transition.trigger) {
                triggers.push(transition.trigger);
            }
        }
        triggers
    }

    pub fn fire(&mut self, trigger: T) -> Result<S> {
        let destination = self
            .find(trigger)
            .map(|t| t.destination)
            .ok_or_else(|| PatternError::TransitionNotPermitted {
                state: format!("{:?}", self.state),
                trigger: format!("{:?}", trigger),
            })?;
        tracing::debug!("{:?}: {:?} -> {:?}", trigger, self.state, destination);
        self.state = destination;
        Ok(destination)
    }
}

pub struct StateConfiguration<'a, S, T> {
    transitions: &'a mut Vec<Transition<S, T>>,
}

impl<S, T> StateConfiguration<'_, S, T> {
    pub fn permit(self, trigger: T, destination: S) -> Self {
        self.transitions.push(Transition {
            trigger,
            destination,
            guard: None,
        });
        self
    }

    pub fn permit_if(self, trigger: T, destination: S, guard: impl Fn() -> bool + 'static) -> Self {
        self.transitions.push(Transition {
            trigger,
            destination,
            guard: Some(Box::new(guard)),
        });
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Health {
    NonReproductive,
    Pregnant,
    Reproductive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    GiveBirth,
    ReachPuberty,
    HaveAbortion,
    HaveUnprotectedSex,
    Hysterectomy,
}

/// Builds the health machine; the guarded transition checks `parents_watching`.
pub fn health_machine(parents_watching: Rc<Cell<bool>>) -> StateMachine<Health, Activity> {
    let mut machine = StateMachine::new(Health::NonReproductive);

    machine
        .configure(Health::NonReproductive)
        .permit(Activity::ReachPuberty, Health::Reproductive);

    machine
        .configure(Health::Reproductive)
        .permit(Activity::Hysterectomy, Health::NonReproductive)
        .permit_if(Activity::HaveUnprotectedSex, Health::Pregnant, move || {
            !parents_watching.get()
        });

    machine
        .configure(Health::Pregnant)
        .permit(Activity::GiveBirth, Health::Reproductive)
        .permit(Activity::HaveAbortion, Health::Reproductive);

    machine
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let parents_watching = Rc::new(Cell::new(true));
    let mut machine = health_machine(Rc::clone(&parents_watching));

    writeln!(out, "Starting as {:?}", machine.state())?;
    let steps = [
        Activity::ReachPuberty,
        Activity::HaveUnprotectedSex,
        Activity::HaveUnprotectedSex,
        Activity::GiveBirth,
    ];
    for (i, activity) in steps.into_iter().enumerate() {
        // Parents look away after the first refused attempt.
        if i == 2 {
            parents_watching.set(false);
        }
        writeln!(out, "Permitted: {:?}", machine.permitted_triggers())?;
        match machine.fire(activity) {
            Ok(state) => writeln!(out, "{activity:?} -> {state:?}")?,
            Err(e) => writeln!(out, "{e}")?,
        }
    }
    Ok(())
}
