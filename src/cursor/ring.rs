/// Fixed-capacity circular buffer. Pre-allocated, no heap allocs after init.
/// Once full, pushing evicts the oldest entry (FIFO).
pub struct RingBuffer<T> {
    buf: Vec<T>,
    capacity: usize,
    head: usize,
    len: usize,
}

impl<T: Copy + Default> RingBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: vec![T::default(); capacity],
            capacity,
            head: 0,
            len: 0,
        }
    }

    pub fn push(&mut self, value: T) {
        self.buf[self.head] = value;
        self.head = (self.head + 1) % self.capacity;
        if self.len < self.capacity {
            self.len += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Most recently pushed entry.
    pub fn newest(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        let idx = (self.head + self.capacity - 1) % self.capacity;
        Some(&self.buf[idx])
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let start = if self.len < self.capacity {
            0
        } else {
            self.head
        };
        let cap = self.capacity;
        let len = self.len;
        (0..len).map(move |i| &self.buf[(start + i) % cap])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_iter_in_order() {
        let mut ring = RingBuffer::new(4);
        for i in 0..3u32 {
            ring.push(i);
        }
        let items: Vec<u32> = ring.iter().copied().collect();
        assert_eq!(items, vec![0, 1, 2]);
        assert_eq!(ring.newest(), Some(&2));
    }

    #[test]
    fn overflow_evicts_oldest_first() {
        let mut ring = RingBuffer::new(4);
        for i in 0..7u32 {
            ring.push(i);
        }
        assert_eq!(ring.len(), 4);
        let items: Vec<u32> = ring.iter().copied().collect();
        assert_eq!(items, vec![3, 4, 5, 6]);
        assert_eq!(ring.newest(), Some(&6));
    }

    #[test]
    fn clear_resets() {
        let mut ring = RingBuffer::new(2);
        ring.push(1u32);
        ring.clear();
        assert!(ring.is_empty());
        assert_eq!(ring.newest(), None);
    }
}
