//! Paginated carousel with timed auto-advance
//!
//! The controller is the single owner of `current_page`; the frame loop feeds
//! it the current time through [`CarouselController::tick`] and manual
//! navigation calls the same methods, so no locking is involved. The
//! auto-advance timer is plain data inside the controller: it only exists
//! while the carousel is active and has more than one page.

use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Armed auto-advance schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AdvanceTimer {
    next_due: Instant,
}

#[derive(Debug, Clone)]
pub struct CarouselController<T> {
    items: Vec<T>,
    current_page: usize,
    page_size: usize,
    interval: Duration,
    active: bool,
    timer: Option<AdvanceTimer>,
}

impl<T> CarouselController<T> {
    /// Build an inactive carousel positioned on the first page
    pub fn new(items: Vec<T>, page_size: usize, interval: Duration) -> Self {
        Self {
            items,
            current_page: 0,
            page_size: page_size.max(1),
            interval,
            active: false,
            timer: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[cfg(test)]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// `ceil(items / page_size)`, zero for an empty collection
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// Arrows and dots only make sense with somewhere to go
    pub fn shows_controls(&self) -> bool {
        self.total_pages() > 1
    }

    /// Items on the current page; the last page may be short
    pub fn current_slice(&self) -> &[T] {
        if self.total_pages() == 0 {
            return &[];
        }
        let start = (self.current_page * self.page_size).min(self.items.len());
        let end = (start + self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// Jump to `page`, clamped to the valid range; the timer keeps its cadence
    pub fn go_to_page(&mut self, page: usize) {
        let total = self.total_pages();
        if total == 0 {
            self.current_page = 0;
            return;
        }
        if page >= total {
            debug!(page, total, "Clamping out-of-range carousel page");
        }
        self.current_page = page.min(total - 1);
    }

    pub fn next_page(&mut self) {
        let total = self.total_pages();
        if total <= 1 {
            self.current_page = 0;
            return;
        }
        self.current_page = (self.current_page + 1) % total;
    }

    pub fn previous_page(&mut self) {
        let total = self.total_pages();
        if total <= 1 {
            self.current_page = 0;
            return;
        }
        self.current_page = (self.current_page + total - 1) % total;
    }

    /// Swap the backing collection
    ///
    /// `current_page` is clamped when the page count shrinks, and the timer is
    /// re-armed if the page count changed.
    pub fn replace_items(&mut self, items: Vec<T>, now: Instant) {
        let previous_total = self.total_pages();
        self.items = items;
        let total = self.total_pages();

        if total == 0 {
            self.current_page = 0;
        } else if self.current_page >= total {
            debug!(page = self.current_page, total, "Collection shrank, clamping carousel page");
            self.current_page = total - 1;
        }

        if total != previous_total {
            info!(items = self.items.len(), pages = total, "Carousel collection replaced");
            self.rearm(now);
        }
    }

    /// Start auto-advancing (view became visible)
    pub fn activate(&mut self, now: Instant) {
        self.active = true;
        self.rearm(now);
    }

    /// Stop auto-advancing and drop the timer (view went away)
    pub fn deactivate(&mut self) {
        if self.timer.take().is_some() {
            debug!("Carousel timer cancelled");
        }
        self.active = false;
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether an auto-advance timer is currently scheduled
    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Advance if the timer is due; returns true when the page changed
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        if now < timer.next_due {
            return false;
        }

        // A long stall (suspended window) advances once, not once per missed period
        timer.next_due += self.interval;
        if timer.next_due <= now {
            timer.next_due = now + self.interval;
        }

        let before = self.current_page;
        self.next_page();
        debug!(from = before, to = self.current_page, "Carousel auto-advanced");
        before != self.current_page
    }

    /// Time left before the next automatic advance, for repaint scheduling
    pub fn time_until_advance(&self, now: Instant) -> Option<Duration> {
        self.timer
            .map(|timer| timer.next_due.saturating_duration_since(now))
    }

    fn rearm(&mut self, now: Instant) {
        let pages = self.total_pages();
        self.timer = if self.active && pages > 1 {
            Some(AdvanceTimer {
                next_due: now + self.interval,
            })
        } else {
            None
        };
        debug!(pages, armed = self.timer.is_some(), "Carousel timer re-armed");
    }
}
