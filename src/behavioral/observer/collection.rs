//! Observer: an observable list.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChanged {
    ItemAdded { index: usize },
    ItemRemoved { index: usize },
    Reset,
}

type Listener<T> = Box<dyn FnMut(&[T], ListChanged)>;

/// A `Vec` wrapper that tells its listeners about every change. Listeners
/// see the list contents after the change.
pub struct ObservableList<T> {
    items: Vec<T>,
    listeners: Vec<Listener<T>>,
}

impl<T> Default for ObservableList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            listeners: Vec::new(),
        }
    }
}

impl<T> ObservableList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_list_changed(&mut self, listener: impl FnMut(&[T], ListChanged) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.raise(ListChanged::ItemAdded {
            index: self.items.len() - 1,
        });
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        self.raise(ListChanged::ItemRemoved { index });
        Some(item)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.raise(ListChanged::Reset);
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    fn raise(&mut self, change: ListChanged) {
        for listener in self.listeners.iter_mut() {
            listener(&self.items, change);
        }
    }
}

/// Stock-market stand-in whose price feed is observable.
#[derive(Default)]
pub struct Market {
    pub prices: ObservableList<f32>,
}

impl Market {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_price(&mut self, price: f32) {
        self.prices.push(price);
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let mut market = Market::new();
    let messages = Rc::new(RefCell::new(Vec::new()));

    let log = Rc::clone(&messages);
    market.prices.on_list_changed(move |prices, change| {
        if let ListChanged::ItemAdded { index } = change {
            log.borrow_mut().push(format!("Added price {}", prices[index]));
        }
    });

    market.add_price(123.0);
    market.add_price(125.5);

    for line in messages.borrow().iter() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_are_reported() {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let mut list = ObservableList::new();
        let c = Rc::clone(&changes);
        list.on_list_changed(move |_items: &[i32], change| c.borrow_mut().push(change));

        list.push(1);
        list.push(2);
        assert_eq!(list.remove(0), Some(1));
        assert_eq!(list.remove(5), None);
        list.clear();

        assert_eq!(
            *changes.borrow(),
            vec![
                ListChanged::ItemAdded { index: 0 },
                ListChanged::ItemAdded { index: 1 },
                ListChanged::ItemRemoved { index: 0 },
                ListChanged::Reset,
            ]
        );
    }

    #[test]
    fn test_listener_sees_new_contents() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut market = Market::new();
        let s = Rc::clone(&seen);
        market.prices.on_list_changed(move |prices, _| s.borrow_mut().push(prices.len()));
        market.add_price(1.0);
        market.add_price(2.0);
        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert_eq!(market.prices.items(), &[1.0, 2.0]);
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run(&mut out, &PatternsConfig::quiet()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Added price 123\nAdded price 125.5\n");
    }
}
