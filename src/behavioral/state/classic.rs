//! State: a light switch whose states are objects.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::io::Write;

/// A light state. Transitions consume the current state and hand back the
/// next one, writing what happened into `log`.
pub trait State {
    fn on(self: Box<Self>, log: &mut Vec<&'static str>) -> Box<dyn State>;
    fn off(self: Box<Self>, log: &mut Vec<&'static str>) -> Box<dyn State>;
    fn is_on(&self) -> bool;
}

pub struct OnState;

impl OnState {
    fn enter(log: &mut Vec<&'static str>) -> Box<dyn State> {
        log.push("Light turned on.");
        Box::new(OnState)
    }
}

impl State for OnState {
    fn on(self: Box<Self>, log: &mut Vec<&'static str>) -> Box<dyn State> {
        log.push("Light is already on.");
        self
    }

    fn off(self: Box<Self>, log: &mut Vec<&'static str>) -> Box<dyn State> {
        log.push("Turning light off...");
        OffState::enter(log)
    }

    fn is_on(&self) -> bool {
        true
    }
}

pub struct OffState;

impl OffState {
    fn enter(log: &mut Vec<&'static str>) -> Box<dyn State> {
        log.push("Light turned off.");
        Box::new(OffState)
    }
}

impl State for OffState {
    fn on(self: Box<Self>, log: &mut Vec<&'static str>) -> Box<dyn State> {
        log.push("Turning light on...");
        OnState::enter(log)
    }

    fn off(self: Box<Self>, log: &mut Vec<&'static str>) -> Box<dyn State> {
        log.push("Light is already off.");
        self
    }

    fn is_on(&self) -> bool {
        false
    }
}

pub struct Switch {
    // Only `None` while a transition is in flight.
    state: Option<Box<dyn State>>,
}

impl Switch {
    /// Builds a switch in the off state together with the message the
    /// initial state produced.
    pub fn new() -> (Self, Vec<&'static str>) {
        let mut log = Vec::new();
        let state = OffState::enter(&mut log);
        (Self { state: Some(state) }, log)
    }

    pub fn on(&mut self) -> Vec<&'static str> {
        self.transition(|state, log| state.on(log))
    }

    pub fn off(&mut self) -> Vec<&'static str> {
        self.transition(|state, log| state.off(log))
    }

    pub fn is_on(&self) -> bool {
        self.state.as_ref().is_some_and(|state| state.is_on())
    }

    fn transition(
        &mut self,
        step: impl FnOnce(Box<dyn State>, &mut Vec<&'static str>) -> Box<dyn State>,
    ) -> Vec<&'static str> {
        let mut log = Vec::new();
        if let Some(state) = self.state.take() {
            self.state = Some(step(state, &mut log));
        }
        log
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let (mut light, mut log) = Switch::new();
    log.extend(light.on());
    log.extend(light.off());
    log.extend(light.off());

    for line in log {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
