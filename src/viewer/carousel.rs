// src/viewer/carousel.rs

/// Horizontal travel (px) a touch must cover to count as a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "prev" => Some(Direction::Prev),
            "next" => Some(Direction::Next),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Prev => "prev",
            Direction::Next => "next",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Direction::Prev),
            "ArrowRight" => Some(Direction::Next),
            _ => None,
        }
    }

    /// A swipe left (finger moving toward smaller x) advances.
    pub fn from_swipe(start_x: f64, end_x: f64) -> Option<Self> {
        let delta = start_x - end_x;
        if delta > SWIPE_THRESHOLD {
            Some(Direction::Next)
        } else if delta < -SWIPE_THRESHOLD {
            Some(Direction::Prev)
        } else {
            None
        }
    }
}

/// Circular index over a card's photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Starts at `index`, wrapped into range.
    pub fn new(len: usize, index: usize) -> Self {
        let index = if len == 0 { 0 } else { index % len };
        Self { index, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn advance(&mut self, direction: Direction) -> usize {
        if self.len == 0 {
            return 0;
        }
        self.index = match direction {
            Direction::Next => (self.index + 1) % self.len,
            Direction::Prev => (self.index + self.len - 1) % self.len,
        };
        self.index
    }
}
