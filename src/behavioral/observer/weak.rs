//! Observer: strong and weak listeners.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::cell::Cell;
use std::io::Write;
use std::rc::{Rc, Weak};

pub trait ClickListener {
    fn on_click(&self);
}

enum Listener {
    Strong(Rc<dyn ClickListener>),
    Weak(Weak<dyn ClickListener>),
}

/// A button holding on to its click listeners. A strong subscription keeps
/// the listener alive for as long as the button lives; a weak one does not.
#[derive(Default)]
pub struct Button {
    listeners: Vec<Listener>,
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Rc<dyn ClickListener>) {
        self.listeners.push(Listener::Strong(listener));
    }

    pub fn subscribe_weak(&mut self, listener: &Rc<dyn ClickListener>) {
        self.listeners.push(Listener::Weak(Rc::downgrade(listener)));
    }

    /// Notifies every live listener and forgets the dead ones. Returns how
    /// many listeners were notified.
    pub fn fire(&mut self) -> usize {
        let before = self.listeners.len();
        self.listeners.retain(|listener| match listener {
            Listener::Strong(_) => true,
            Listener::Weak(weak) => weak.strong_count() > 0,
        });
        if self.listeners.len() < before {
            tracing::debug!("Pruned {} dead listener(s)", before - self.listeners.len());
        }

        let mut notified = 0;
        for listener in &self.listeners {
            let target = match listener {
                Listener::Strong(rc) => Some(Rc::clone(rc)),
                Listener::Weak(weak) => weak.upgrade(),
            };
            if let Some(target) = target {
                target.on_click();
                notified += 1;
            }
        }
        notified
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

pub struct Window {
    clicks: Cell<u32>,
}

impl Window {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            clicks: Cell::new(0),
        })
    }

    pub fn clicks(&self) -> u32 {
        self.clicks.get()
    }
}

impl ClickListener for Window {
    fn on_click(&self) {
        self.clicks.set(self.clicks.get() + 1);
        tracing::debug!("Button clicked (Window handler)");
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        tracing::debug!("Window finalized");
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    writeln!(out, "=== Strong subscription ===")?;
    let mut button = Button::new();
    let window = Window::new();
    let window_ref = Rc::downgrade(&window);
    button.subscribe(window);
    writeln!(out, "Notified {} listener(s)", button.fire())?;
    writeln!(out, "Dropped our handle to the window")?;
    writeln!(out, "Is window alive? {}", window_ref.upgrade().is_some())?;
    writeln!(out, "Notified {} listener(s)", button.fire())?;
    drop(button);
    writeln!(out, "Button dropped, is window alive? {}", window_ref.upgrade().is_some())?;

    writeln!(out, "\n=== Weak subscription ===")?;
    let mut button = Button::new();
    let window: Rc<dyn ClickListener> = Window::new();
    let window_ref = Rc::downgrade(&window);
    button.subscribe_weak(&window);
    writeln!(out, "Notified {} listener(s)", button.fire())?;
    drop(window);
    writeln!(out, "Dropped our handle to the window")?;
    writeln!(out, "Is window alive? {}", window_ref.upgrade().is_some())?;
    writeln!(out, "Notified {} listener(s)", button.fire())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_subscription_keeps_window_alive() {
        let mut button = Button::new();
        let window = Window::new();
        let probe = Rc::clone(&window);
        button.subscribe(window);

        button.fire();
        button.fire();
        assert_eq!(probe.clicks(), 2);
        let weak = Rc::downgrade(&probe);
        drop(probe);
        assert!(weak.upgrade().is_some());
        drop(button);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_weak_subscription_lets_window_go() {
        let mut button = Button::new();
        let window: Rc<dyn ClickListener> = Window::new();
        button.subscribe_weak(&window);
        assert_eq!(button.fire(), 1);

        drop(window);
        assert_eq!(button.fire(), 0);
        assert_eq!(button.listener_count(), 0);
    }
}
