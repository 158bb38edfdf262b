//! Union-find over arbitrary copyable items.
//!
//! Items are registered lazily: [`DisjointSet::find`] puts an unseen item in
//! a singleton class. Storage is an arena of parallel vectors indexed by
//! registration order, with union by rank and path halving. Every class also
//! threads its members on a circular list so [`DisjointSet::elements`] can
//! enumerate a class without scanning the whole arena.

use std::collections::HashMap;
use std::hash::Hash;

/// Opaque handle naming one class of a [`DisjointSet`].
///
/// Two items are in the same class iff their handles are equal. A handle is
/// only meaningful until the next `union` or `clear` on the set that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassHandle(usize);

/// A partition of items into disjoint classes.
#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    /// Arena slot by item.
    index: HashMap<T, usize>,
    /// Item stored in each slot.
    items: Vec<T>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    /// Next member of the same class (circular).
    next: Vec<usize>,
}

impl<T: Copy + Eq + Hash> DisjointSet<T> {
    /// Create a new set where every item is a singleton.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            items: Vec::new(),
            parent: Vec::new(),
            rank: Vec::new(),
            next: Vec::new(),
        }
    }

    /// Find the class containing `item`, registering it as a singleton if unseen.
    pub fn find(&mut self, item: T) -> ClassHandle {
        let slot = self.slot_of(item);
        ClassHandle(self.find_root(slot))
    }

    /// Find the class containing `item` without registering it.
    ///
    /// Returns `None` for an item that was never registered; such an item is
    /// implicitly alone in its class.
    pub fn class_of(&self, item: T) -> Option<ClassHandle> {
        self.index
            .get(&item)
            .map(|&slot| ClassHandle(self.root_of(slot)))
    }

    /// Merge two classes and return the handle of the merged class.
    ///
    /// The representative of the result is one of the two input
    /// representatives. Which one is not part of the contract.
    pub fn union(&mut self, a: ClassHandle, b: ClassHandle) -> ClassHandle {
        let (a, b) = (self.find_root(a.0), self.find_root(b.0));
        if a == b {
            return ClassHandle(a);
        }

        let (root, child) = if self.rank[a] < self.rank[b] { (b, a) } else { (a, b) };
        self.parent[child] = root;
        if self.rank[root] == self.rank[child] {
            self.rank[root] = self.rank[root].saturating_add(1);
        }

        // Splice the two circular member lists into one
        self.next.swap(root, child);

        ClassHandle(root)
    }

    /// The item standing for a class.
    pub fn representative(&self, class: ClassHandle) -> T {
        self.items[class.0]
    }

    /// The representative of the class containing `item`.
    ///
    /// An unregistered item is its own representative.
    pub fn representative_of(&self, item: T) -> T {
        self.class_of(item)
            .map(|class| self.representative(class))
            .unwrap_or(item)
    }

    /// Enumerate the members of a class, in unspecified order.
    pub fn elements(&self, class: ClassHandle) -> Elements<'_, T> {
        Elements {
            set: self,
            start: class.0,
            cursor: Some(class.0),
        }
    }

    /// Enumerate one handle per class that has registered members.
    pub fn classes(&self) -> impl Iterator<Item = ClassHandle> + '_ {
        (0..self.items.len())
            .filter(move |&slot| self.parent[slot] == slot)
            .map(ClassHandle)
    }

    /// Reset to the all-singleton state.
    pub fn clear(&mut self) {
        self.index.clear();
        self.items.clear();
        self.parent.clear();
        self.rank.clear();
        self.next.clear();
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no item has been registered since creation or the last `clear`.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn slot_of(&mut self, item: T) -> usize {
        if let Some(&slot) = self.index.get(&item) {
            return slot;
        }
        let slot = self.items.len();
        self.index.insert(item, slot);
        self.items.push(item);
        self.parent.push(slot);
        self.rank.push(0);
        self.next.push(slot);
        slot
    }

    /// Root lookup with path halving.
    fn find_root(&mut self, mut slot: usize) -> usize {
        while self.parent[slot] != slot {
            self.parent[slot] = self.parent[self.parent[slot]];
            slot = self.parent[slot];
        }
        slot
    }

    fn root_of(&self, mut slot: usize) -> usize {
        while self.parent[slot] != slot {
            slot = self.parent[slot];
        }
        slot
    }
}

impl<T: Copy + Eq + Hash> Default for DisjointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the members of one class.
///
/// Created by [`DisjointSet::elements`].
#[derive(Debug, Clone)]
pub struct Elements<'a, T> {
    set: &'a DisjointSet<T>,
    start: usize,
    cursor: Option<usize>,
}

impl<T: Copy> Iterator for Elements<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let slot = self.cursor?;
        let next = self.set.next[slot];
        self.cursor = if next == self.start { None } else { Some(next) };
        Some(self.set.items[slot])
    }
}
