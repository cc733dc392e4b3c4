use std::iter::FusedIterator;

/// Walks every ordering of `items` exactly once, starting with the order given.
///
/// Iterative form of Heap's algorithm
/// (https://en.wikipedia.org/wiki/Heap%27s_algorithm): each step swaps one
/// pair of elements of the working array and hands out an owned copy of it.
/// The walk cannot be restarted; a second pass needs a new
/// `HeapPermutations`.
pub struct HeapPermutations<T> {
    items: Vec<T>,
    counters: Vec<usize>,
    position: usize,
    yielded_identity: bool,
}

impl<T: Clone> HeapPermutations<T> {
    pub fn new(items: Vec<T>) -> Self {
        let counters = vec![0; items.len()];
        Self {
            items,
            counters,
            position: 1,
            yielded_identity: false,
        }
    }
}

impl<T: Clone> Iterator for HeapPermutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if !self.yielded_identity {
            self.yielded_identity = true;
            return Some(self.items.clone());
        }
        while self.position < self.items.len() {
            let i = self.position;
            if self.counters[i] < i {
                let k = if i % 2 == 1 { self.counters[i] } else { 0 };
                self.items.swap(i, k);
                self.counters[i] += 1;
                self.position = 1;
                return Some(self.items.clone());
            }
            self.counters[i] = 0;
            self.position += 1;
        }
        None
    }
}

impl<T: Clone> FusedIterator for HeapPermutations<T> {}
