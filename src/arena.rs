// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// Append-only Vec-backed arena.
//
// Vertices and segments are never freed individually; handles are dense u32
// indices in allocation order and stay valid for the lifetime of the arena.

use std::ops::{Index, IndexMut};

/// Null handle.
pub const INVALID: u32 = u32::MAX;

pub struct Arena<T> {
    items: Vec<T>,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item, returning its handle.
    pub fn alloc(&mut self, item: T) -> u32 {
        let idx = self.items.len() as u32;
        debug_assert!(idx != INVALID, "arena handle space exhausted");
        self.items.push(item);
        idx
    }

    /// Append every item produced by `iter`, returning the handle of the first.
    pub fn alloc_all<I: IntoIterator<Item = T>>(&mut self, iter: I) -> u32 {
        let first = self.items.len() as u32;
        self.items.extend(iter);
        first
    }

    pub fn get(&self, idx: u32) -> Option<&T> {
        self.items.get(idx as usize)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<u32> for Arena<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: u32) -> &T {
        &self.items[idx as usize]
    }
}

impl<T> IndexMut<u32> for Arena<T> {
    #[inline]
    fn index_mut(&mut self, idx: u32) -> &mut T {
        &mut self.items[idx as usize]
    }
}
