//! Carousel Paging
//!
//! Cyclic paging state: exactly one active item, wrapping in both directions.

/// Paged container as seen by the page
pub trait PagedContainer {
    fn item_count(&self) -> usize;
    fn active_index(&self) -> usize;
    fn go_next(&mut self);
    fn go_prev(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    count: usize,
    active: usize,
}

impl CarouselState {
    pub fn new(count: usize) -> Self {
        Self { count, active: 0 }
    }

    /// Jump to `index`; out-of-range indices are ignored
    pub fn go_to(&mut self, index: usize) {
        if index < self.count {
            self.active = index;
        }
    }
}

impl PagedContainer for CarouselState {
    fn item_count(&self) -> usize {
        self.count
    }

    fn active_index(&self) -> usize {
        self.active
    }

    fn go_next(&mut self) {
        if self.count > 0 {
            self.active = (self.active + 1) % self.count;
        }
    }

    fn go_prev(&mut self) {
        if self.count > 0 {
            self.active = (self.active + self.count - 1) % self.count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_first() {
        let mut carousel = CarouselState::new(3);
        carousel.go_next();
        carousel.go_next();
        assert_eq!(carousel.active_index(), 2);
        carousel.go_next();
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut carousel = CarouselState::new(6);
        carousel.go_prev();
        assert_eq!(carousel.active_index(), 5);
    }

    #[test]
    fn test_go_to_ignores_out_of_range() {
        let mut carousel = CarouselState::new(6);
        carousel.go_to(4);
        carousel.go_to(6);
        assert_eq!(carousel.active_index(), 4);
    }

    #[test]
    fn test_empty_carousel_stays_put() {
        let mut carousel = CarouselState::new(0);
        carousel.go_next();
        carousel.go_prev();
        assert_eq!(carousel.active_index(), 0);
        assert_eq!(carousel.item_count(), 0);
    }
}
