//! Scoped values for cascading style keys.

use pagebuilder_style::{StyleKey, StyleValue};
use std::collections::HashMap;

/// A stack of scoped values for one key. The top is the effective value.
#[derive(Debug, Clone, PartialEq)]
pub struct CascadeStack<T> {
    values: Vec<T>,
}

impl<T> Default for CascadeStack<T> {
    fn default() -> Self {
        Self { values: Vec::new() }
    }
}

impl<T> CascadeStack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: T) {
        self.values.push(value);
    }

    /// Removes the top value. Popping an empty stack returns `None`.
    pub fn pop(&mut self) -> Option<T> {
        self.values.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.values.last()
    }

    pub fn depth(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

/// One [`CascadeStack`] per recognized style key.
#[derive(Debug, Clone, Default)]
pub struct CascadeSet {
    stacks: HashMap<StyleKey, CascadeStack<StyleValue>>,
}

impl CascadeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: StyleKey, value: StyleValue) {
        self.stacks.entry(key).or_default().push(value);
    }

    pub fn pop(&mut self, key: StyleKey) -> Option<StyleValue> {
        let popped = self.stacks.get_mut(&key).and_then(CascadeStack::pop);
        if popped.is_none() {
            log::warn!("Cascade for '{}' popped while empty", key);
        }
        popped
    }

    pub fn peek(&self, key: StyleKey) -> Option<&StyleValue> {
        self.stacks.get(&key).and_then(CascadeStack::peek)
    }

    pub fn depth(&self, key: StyleKey) -> usize {
        self.stacks.get(&key).map_or(0, CascadeStack::depth)
    }

    /// Sum of the depths of every stack.
    pub fn total_depth(&self) -> usize {
        self.stacks.values().map(CascadeStack::depth).sum()
    }

    pub fn clear(&mut self) {
        self.stacks.clear();
    }
}
