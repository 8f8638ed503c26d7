//! Observer: events as callback lists.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler<A> = Box<dyn FnMut(&A)>;

/// Ordered list of handlers invoked on every `emit`.
pub struct Event<A> {
    handlers: Vec<(SubscriptionId, Handler<A>)>,
    next_id: u64,
}

impl<A> Default for Event<A> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }
}

impl<A> Event<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&A) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Returns whether the subscription was still registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(sub, _)| *sub != id);
        before != self.handlers.len()
    }

    pub fn emit(&mut self, args: &A) {
        for (_, handler) in self.handlers.iter_mut() {
            handler(args);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FallsIllEventArgs {
    pub address: String,
}

#[derive(Default)]
pub struct Person {
    pub falls_ill: Event<FallsIllEventArgs>,
}

impl Person {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catch_a_cold(&mut self) {
        self.falls_ill.emit(&FallsIllEventArgs {
            address: "123 London Road".to_string(),
        });
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut person = Person::new();

    let log = Rc::clone(&calls);
    let doctor = person.falls_ill.subscribe(move |args| {
        log.borrow_mut()
            .push(format!("A doctor has been called to {}", args.address));
    });

    person.catch_a_cold();
    person.falls_ill.unsubscribe(doctor);
    // Nobody is listening any more.
    person.catch_a_cold();

    for line in calls.borrow().iter() {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "Subscribers left: {}", person.falls_ill.subscriber_count())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handlers_receive_args_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut event = Event::new();
        let a = Rc::clone(&seen);
        event.subscribe(move |n: &i32| a.borrow_mut().push(("a", *n)));
        let b = Rc::clone(&seen);
        event.subscribe(move |n: &i32| b.borrow_mut().push(("b", *n)));

        event.emit(&7);
        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut person = Person::new();
        let c = Rc::clone(&count);
        let id = person.falls_ill.subscribe(move |_| *c.borrow_mut() += 1);

        person.catch_a_cold();
        assert!(person.falls_ill.unsubscribe(id));
        assert!(!person.falls_ill.unsubscribe(id));
        person.catch_a_cold();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run(&mut out, &PatternsConfig::quiet()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "A doctor has been called to 123 London Road\nSubscribers left: 0\n"
        );
    }
}
