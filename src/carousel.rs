//! Announcements carousel
//!
//! Scrolls a vertical list of announcements one row at a time while keeping
//! three rows visible, wrapping back to the top after the last full window.

use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::{debug, info};

/// Rows visible at once
pub const VISIBLE_COUNT: usize = 3;

/// Default delay between two scroll steps
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3000);

/// Scroll position of the announcements slide
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    item_count: usize,
    item_height: f32,
    index: usize,
}

impl Carousel {
    /// Carousel over `item_count` rows of `item_height` px.
    ///
    /// Returns `None` when every row already fits in the window.
    pub fn new(item_count: usize, item_height: f32) -> Option<Self> {
        if item_count <= VISIBLE_COUNT {
            return None;
        }
        Some(Self {
            item_count,
            item_height,
            index: 0,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance one row and return the new index
    pub fn tick(&mut self) -> usize {
        self.index += 1;
        if self.index > self.item_count - VISIBLE_COUNT {
            self.index = 0;
        }
        self.index
    }

    /// Vertical offset of the slide in px
    pub fn offset(&self) -> f32 {
        self.index as f32 * self.item_height
    }

    /// CSS transform for the current position
    pub fn transform(&self) -> String {
        format!("translateY(-{}px)", self.offset())
    }
}

/// One published carousel position
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: usize,
    pub transform: String,
}

impl Frame {
    fn of(carousel: &Carousel) -> Self {
        Self {
            index: carousel.index(),
            transform: carousel.transform(),
        }
    }
}

/// Background task driving a [`Carousel`] on a fixed interval
#[derive(Debug)]
pub struct CarouselTicker {
    frames: watch::Receiver<Frame>,
    handle: Option<JoinHandle<()>>,
}

impl CarouselTicker {
    /// Start ticking; the first step happens one full period after spawning
    pub fn spawn(mut carousel: Carousel, period: Duration) -> Self {
        let (tx, rx) = watch::channel(Frame::of(&carousel));

        let handle = tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            loop {
                ticks.tick().await;
                carousel.tick();
                let frame = Frame::of(&carousel);
                debug!(index = frame.index, transform = %frame.transform, "Carousel advanced");
                if tx.send(frame).is_err() {
                    break;
                }
            }
        });

        info!("Started announcements carousel with interval {:?}", period);
        Self {
            frames: rx,
            handle: Some(handle),
        }
    }

    /// Latest published frame
    pub fn current(&self) -> Frame {
        self.frames.borrow().clone()
    }

    /// Receiver notified on every step
    pub fn subscribe(&self) -> watch::Receiver<Frame> {
        self.frames.clone()
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().map_or(false, |h| !h.is_finished())
    }

    /// Stop the background task
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!("Stopped announcements carousel");
        }
    }
}

impl Drop for CarouselTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_items_never_start() {
        assert!(Carousel::new(0, 20.0).is_none());
        assert!(Carousel::new(3, 20.0).is_none());
    }

    #[test]
    fn test_four_items_cycle() {
        let mut carousel = Carousel::new(4, 20.0).unwrap();
        assert_eq!(carousel.tick(), 1);
        assert_eq!(carousel.transform(), "translateY(-20px)");
        assert_eq!(carousel.tick(), 0);
        assert_eq!(carousel.transform(), "translateY(-0px)");
    }

    #[test]
    fn test_six_items_cover_every_window() {
        let mut carousel = Carousel::new(6, 10.0).unwrap();
        let seen: Vec<usize> = (0..5).map(|_| carousel.tick()).collect();
        assert_eq!(seen, vec![1, 2, 3, 0, 1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_publishes_frames() {
        let carousel = Carousel::new(4, 30.0).unwrap();
        let mut ticker = CarouselTicker::spawn(carousel, DEFAULT_INTERVAL);
        let mut frames = ticker.subscribe();
        assert_eq!(ticker.current().index, 0);

        frames.changed().await.unwrap();
        assert_eq!(frames.borrow().transform, "translateY(-30px)");

        frames.changed().await.unwrap();
        assert_eq!(frames.borrow().index, 0);

        ticker.stop();
        assert!(!ticker.is_running());
    }
}
