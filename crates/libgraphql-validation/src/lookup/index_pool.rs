use crate::document::Ref;
use std::cell::RefCell;

/// Free list of scratch index buffers, recycled by the pooled iterators a
/// [`Lookup`](crate::Lookup) hands out.
///
/// Interior mutability makes a pool (and so its `Lookup`) `!Sync`. Each
/// concurrent validation owns its own.
#[derive(Debug, Default)]
pub struct IndexPool {
    free: RefCell<Vec<Vec<Ref>>>,
}
impl IndexPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes an empty buffer from the pool, allocating one if the pool is
    /// dry.
    pub fn get(&self) -> Vec<Ref> {
        self.free.borrow_mut().pop().unwrap_or_default()
    }

    pub fn put(&self, mut refs: Vec<Ref>) {
        refs.clear();
        self.free.borrow_mut().push(refs);
    }

    pub fn available(&self) -> usize {
        self.free.borrow().len()
    }
}
