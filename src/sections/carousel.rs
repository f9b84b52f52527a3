use std::collections::BTreeSet;

/// Cursor over an ordered list of slides. Movement wraps in both directions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    /// Starts at `index` if it is in range, otherwise at the first slide.
    pub fn starting_at(len: usize, index: usize) -> Self {
        let mut carousel = Self::new(len);
        carousel.jump_to(index);
        carousel
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn peek_next(&self) -> usize {
        if self.len == 0 {
            return 0;
        }
        (self.index + 1) % self.len
    }

    pub fn peek_prev(&self) -> usize {
        if self.len == 0 {
            return 0;
        }
        (self.index + self.len - 1) % self.len
    }

    pub fn next(&mut self) {
        self.index = self.peek_next();
    }

    pub fn prev(&mut self) {
        self.index = self.peek_prev();
    }

    /// Moves to slide `k`. Returns `false` and stays put when `k` is out of
    /// range.
    pub fn jump_to(&mut self, k: usize) -> bool {
        if k < self.len {
            self.index = k;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum AccordionMode {
    /// Opening an entry closes the others.
    #[default]
    Single,
    Multiple,
}

/// Open/closed state of a list of collapsible entries.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Accordion {
    len: usize,
    mode: AccordionMode,
    open: BTreeSet<usize>,
}

impl Accordion {
    pub fn new(len: usize, mode: AccordionMode) -> Self {
        Self {
            len,
            mode,
            open: BTreeSet::new(),
        }
    }

    pub fn mode(&self) -> AccordionMode {
        self.mode
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    pub fn open_entries(&self) -> impl Iterator<Item = usize> + '_ {
        self.open.iter().copied()
    }

    /// Opens a closed entry or closes an open one. Out-of-range indices are
    /// ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        if self.open.remove(&index) {
            return;
        }
        if self.mode == AccordionMode::Single {
            self.open.clear();
        }
        self.open.insert(index);
    }
}
