//! Iterator: in-order binary tree traversal
//!
//! A cursor walking parent back-references, and a recursive version.

use crate::config::PatternsConfig;
use crate::error::Result;
use itertools::Itertools;
use std::cell::RefCell;
use std::io::Write;
use std::rc::{Rc, Weak};

pub type NodeRef<T> = Rc<RefCell<Node<T>>>;

pub struct Node<T> {
    pub value: T,
    left: Option<NodeRef<T>>,
    right: Option<NodeRef<T>>,
    parent: Weak<RefCell<Node<T>>>,
}

impl<T> Node<T> {
    pub fn leaf(value: T) -> NodeRef<T> {
        Rc::new(RefCell::new(Node {
            value,
            left: None,
            right: None,
            parent: Weak::new(),
        }))
    }

    /// Builds an inner node and points both children back at it.
    pub fn with_children(value: T, left: NodeRef<T>, right: NodeRef<T>) -> NodeRef<T> {
        let node = Rc::new(RefCell::new(Node {
            value,
            left: Some(Rc::clone(&left)),
            right: Some(Rc::clone(&right)),
            parent: Weak::new(),
        }));
        left.borrow_mut().parent = Rc::downgrade(&node);
        right.borrow_mut().parent = Rc::downgrade(&node);
        node
    }

    pub fn left(&self) -> Option<NodeRef<T>> {
        self.left.clone()
    }

    pub fn right(&self) -> Option<NodeRef<T>> {
        self.right.clone()
    }

    pub fn parent(&self) -> Option<NodeRef<T>> {
        self.parent.upgrade()
    }
}

fn leftmost<T>(mut node: NodeRef<T>) -> NodeRef<T> {
    loop {
        let next = node.borrow().left();
        match next {
            Some(left) => node = left,
            None => return node,
        }
    }
}

/// Cursor-style in-order iterator. It keeps no stack; moving on from a node
/// without a right subtree climbs parent links until it arrives from a left
/// child.
pub struct InOrderIterator<T> {
    root: NodeRef<T>,
    current: Option<NodeRef<T>>,
    yielded_start: bool,
}

impl<T: Clone> InOrderIterator<T> {
    pub fn new(root: NodeRef<T>) -> Self {
        let current = Some(leftmost(Rc::clone(&root)));
        Self {
            root,
            current,
            yielded_start: false,
        }
    }

    pub fn reset(&mut self) {
        self.current = Some(leftmost(Rc::clone(&self.root)));
        self.yielded_start = false;
    }

    pub fn current(&self) -> Option<T> {
        self.current.as_ref().map(|node| node.borrow().value.clone())
    }

    /// Advances the cursor; returns `false` once the traversal is done.
    pub fn move_next(&mut self) -> bool {
        if !self.yielded_start {
            self.yielded_start = true;
            return self.current.is_some();
        }

        let Some(current) = self.current.take() else {
            return false;
        };

        let right = current.borrow().right();
        if let Some(right) = right {
            self.current = Some(leftmost(right));
            return true;
        }

        let mut child = current;
        let mut parent = child.borrow().parent();
        while let Some(p) = parent.clone() {
            let came_from_right = p
                .borrow()
                .right
                .as_ref()
                .is_some_and(|r| Rc::ptr_eq(r, &child));
            if !came_from_right {
                break;
            }
            child = p;
            parent = child.borrow().parent();
        }
        self.current = parent;
        self.current.is_some()
    }
}

impl<T: Clone> Iterator for InOrderIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.move_next() {
            self.current()
        } else {
            None
        }
    }
}

pub struct BinaryTree<T> {
    root: NodeRef<T>,
}

impl<T: Clone> BinaryTree<T> {
    pub fn new(root: NodeRef<T>) -> Self {
        Self { root }
    }

    pub fn in_order(&self) -> InOrderIterator<T> {
        InOrderIterator::new(Rc::clone(&self.root))
    }

    /// Recursive left, node, right traversal.
    pub fn natural_in_order(&self) -> Vec<T> {
        fn traverse<T: Clone>(node: &NodeRef<T>, acc: &mut Vec<T>) {
            let node = node.borrow();
            if let Some(left) = &node.left {
                traverse(left, acc);
            }
            acc.push(node.value.clone());
            if let Some(right) = &node.right {
                traverse(right, acc);
            }
        }

        let mut acc = Vec::new();
        traverse(&self.root, &mut acc);
        acc
    }
}

impl<T: Clone> IntoIterator for &BinaryTree<T> {
    type Item = T;
    type IntoIter = InOrderIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    //   1
    //  / \
    // 2   3
    let root = Node::with_children(1, Node::leaf(2), Node::leaf(3));

    let mut it = InOrderIterator::new(Rc::clone(&root));
    let mut cursor_values = Vec::new();
    while it.move_next() {
        if let Some(value) = it.current() {
            cursor_values.push(value);
        }
    }
    writeln!(out, "Cursor style: {}", cursor_values.iter().join(","))?;

    let tree = BinaryTree::new(root);
    writeln!(out, "Recursive: {}", tree.natural_in_order().iter().join(","))?;

    for value in &tree {
        writeln!(out, "{value}")?;
    }
    Ok(())
}
