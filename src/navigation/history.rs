//! Navigation history - back/forward stack and current location.

/// Bounded back/forward history of visited locations.
#[derive(Debug)]
pub struct History {
    entries: Vec<String>,
    index: usize,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            index: 0,
            capacity: capacity.max(1),
        }
    }

    /// Record a new location, truncating any forward tail.
    pub fn push(&mut self, location: String) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(location);
        if self.entries.len() > self.capacity {
            self.entries.remove(0);
        }
        self.index = self.entries.len() - 1;
    }

    /// Replace the current entry instead of pushing a new one.
    pub fn replace(&mut self, location: String) {
        if self.entries.is_empty() {
            self.entries.push(location);
            self.index = 0;
        } else {
            self.entries[self.index] = location;
        }
    }

    /// Step back, returning the new current location.
    pub fn back(&mut self) -> Option<&str> {
        if self.entries.is_empty() || self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.entries[self.index].as_str())
    }

    /// Step forward, returning the new current location.
    pub fn forward(&mut self) -> Option<&str> {
        if self.entries.is_empty() || self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.entries[self.index].as_str())
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_back_and_forward() {
        let mut history = History::new(8);
        history.push("/".into());
        history.push("/sponsors".into());
        history.push("/subscribes".into());

        assert_eq!(history.back(), Some("/sponsors"));
        assert_eq!(history.back(), Some("/"));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), Some("/sponsors"));
        assert_eq!(history.current(), Some("/sponsors"));
    }

    #[test]
    fn push_truncates_the_forward_tail() {
        let mut history = History::new(8);
        history.push("/".into());
        history.push("/sponsors".into());
        history.back();
        history.push("/history".into());

        assert_eq!(history.forward(), None);
        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), Some("/history"));
    }

    #[test]
    fn replace_does_not_grow_history() {
        let mut history = History::new(8);
        history.push("/".into());
        history.replace("/sponsors".into());

        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), Some("/sponsors"));
        assert_eq!(history.back(), None);
    }

    #[test]
    fn discards_the_oldest_entry_at_capacity() {
        let mut history = History::new(2);
        history.push("/".into());
        history.push("/sponsors".into());
        history.push("/history".into());

        assert_eq!(history.len(), 2);
        assert_eq!(history.back(), Some("/sponsors"));
        assert_eq!(history.back(), None);
    }
}
