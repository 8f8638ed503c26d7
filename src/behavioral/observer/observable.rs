//! Observer: observables with drop-to-unsubscribe subscriptions.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::cell::RefCell;
use std::io::Write;
use std::rc::{Rc, Weak};
use uuid::Uuid;

pub trait Observer<E> {
    fn on_next(&self, event: &E);

    fn on_error(&self, _error: &str) {}

    fn on_completed(&self) {}
}

/// Adapts a closure into an observer that only cares about `on_next`.
pub struct FnObserver<F>(pub F);

impl<E, F: Fn(&E)> Observer<E> for FnObserver<F> {
    fn on_next(&self, event: &E) {
        (self.0)(event)
    }
}

type ObserverList<E> = RefCell<Vec<(Uuid, Rc<dyn Observer<E>>)>>;

pub struct Subject<E> {
    observers: Rc<ObserverList<E>>,
}

impl<E> Default for Subject<E> {
    fn default() -> Self {
        Self {
            observers: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<E: 'static> Subject<E> {
    pub fn subscribe(&self, observer: Rc<dyn Observer<E>>) -> Subscription<E> {
        let id = Uuid::new_v4();
        self.observers.borrow_mut().push((id, observer));
        tracing::debug!("Observer {id} subscribed");
        Subscription {
            id,
            observers: Rc::downgrade(&self.observers),
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    // Snapshot first so observers may drop their subscriptions mid-notify.
    fn snapshot(&self) -> Vec<Rc<dyn Observer<E>>> {
        self.observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect()
    }

    pub fn notify(&self, event: &E) {
        for observer in self.snapshot() {
            observer.on_next(event);
        }
    }

    pub fn error(&self, message: &str) {
        for observer in self.snapshot() {
            observer.on_error(message);
        }
    }

    pub fn complete(&self) {
        for observer in self.snapshot() {
            observer.on_completed();
        }
    }
}

/// Unsubscribes on drop.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription<E> {
    id: Uuid,
    observers: Weak<ObserverList<E>>,
}

impl<E> Subscription<E> {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn dispose(self) {}
}

impl<E> Drop for Subscription<E> {
    fn drop(&mut self) {
        if let Some(observers) = self.observers.upgrade() {
            observers.borrow_mut().retain(|(id, _)| *id != self.id);
            tracing::debug!("Observer {} unsubscribed", self.id);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PersonEvent {
    FallsIll { address: String },
    Recovered,
}

#[derive(Default)]
pub struct Person {
    events: Subject<PersonEvent>,
}

impl Person {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, observer: Rc<dyn Observer<PersonEvent>>) -> Subscription<PersonEvent> {
        self.events.subscribe(observer)
    }

    pub fn catch_a_cold(&self) {
        self.events.notify(&PersonEvent::FallsIll {
            address: "123 London Road".to_string(),
        });
    }

    pub fn recover(&self) {
        self.events.notify(&PersonEvent::Recovered);
        self.events.complete();
    }
}

/// Records what it would tell the doctor.
#[derive(Default)]
pub struct Doctor {
    pub calls: RefCell<Vec<String>>,
    pub completed: RefCell<bool>,
}

impl Observer<PersonEvent> for Doctor {
    fn on_next(&self, event: &PersonEvent) {
        if let PersonEvent::FallsIll { address } = event {
            self.calls
                .borrow_mut()
                .push(format!("A doctor has been called to {address}"));
        }
    }

    fn on_completed(&self) {
        *self.completed.borrow_mut() = true;
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let person = Person::new();
    let doctor = Rc::new(Doctor::default());
    let sub = person.subscribe(doctor.clone());

    // Filtering by event kind, done with a closure observer.
    let recoveries = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&recoveries);
    let _recovery_sub = person.subscribe(Rc::new(FnObserver(move |e: &PersonEvent| {
        if matches!(e, PersonEvent::Recovered) {
            *counter.borrow_mut() += 1;
        }
    })));

    person.catch_a_cold();
    sub.dispose();
    person.catch_a_cold();
    person.recover();

    for line in doctor.calls.borrow().iter() {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "Recoveries seen: {}", recoveries.borrow())?;
    writeln!(out, "Doctor saw completion: {}", doctor.completed.borrow())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_drop_unsubscribes() {
        let person = Person::new();
        let doctor = Rc::new(Doctor::default());
        {
            let _sub = person.subscribe(doctor.clone());
            assert_eq!(person.events.observer_count(), 1);
            person.catch_a_cold();
        }
        assert_eq!(person.events.observer_count(), 0);
        person.catch_a_cold();
        assert_eq!(doctor.calls.borrow().len(), 1);
    }

    #[test]
    fn test_completion_reaches_live_observers() {
        let person = Person::new();
        let doctor = Rc::new(Doctor::default());
        let _sub = person.subscribe(doctor.clone());
        person.recover();
        assert!(*doctor.completed.borrow());
        assert!(doctor.calls.borrow().is_empty());
    }

    #[test]
    fn test_subscription_ids_are_unique() {
        let subject: Subject<i32> = Subject::default();
        let a = subject.subscribe(Rc::new(FnObserver(|_: &i32| {})));
        let b = subject.subscribe(Rc::new(FnObserver(|_: &i32| {})));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_subscription_outliving_subject() {
        let subject: Subject<i32> = Subject::default();
        let sub = subject.subscribe(Rc::new(FnObserver(|_: &i32| {})));
        drop(subject);
        drop(sub);
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run(&mut out, &PatternsConfig::quiet()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "A doctor has been called to 123 London Road\nRecoveries seen: 1\nDoctor saw completion: false\n"
        );
    }
}
