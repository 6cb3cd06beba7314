use raylib::prelude::*;

use crate::geometry::{expand, intersection_area, visible_fraction};

#[derive(Debug, Clone, Copy)]
struct Entry<K> {
    key: K,
    threshold: f32,
}

#[derive(Debug)]
pub struct RegionObserver<K> {
    entries: Vec<Entry<K>>,
    root_margin: f32,
}

impl<K: Copy + PartialEq> RegionObserver<K> {
    /// `root_margin` grows the viewport on every side before testing.
    pub fn new(root_margin: f32) -> Self {
        Self { entries: Vec::new(), root_margin }
    }

    /// Watches `key`. A threshold of 0.0 fires on any overlap, otherwise
    /// the visible share of the region must reach `threshold`.
    pub fn observe(&mut self, key: K, threshold: f32) {
        if self.is_observing(key) {
            return;
        }
        self.entries.push(Entry { key, threshold: threshold.clamp(0.0, 1.0) });
    }

    pub fn unobserve(&mut self, key: K) {
        self.entries.retain(|e| e.key != key);
    }

    pub fn is_observing(&self, key: K) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the keys that entered `viewport` and drops them.
    pub fn poll<F>(&mut self, viewport: Rectangle, bounds_of: F) -> Vec<K>
    where
        F: Fn(K) -> Rectangle,
    {
        let root = expand(&viewport, self.root_margin);
        let mut fired = Vec::new();
        self.entries.retain(|entry| {
            let bounds = bounds_of(entry.key);
            let entered = if entry.threshold <= 0.0 {
                intersection_area(&bounds, &root) > 0.0
            } else {
                visible_fraction(&bounds, &root) >= entry.threshold
            };
            if entered {
                fired.push(entry.key);
            }
            !entered
        });
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rectangle = Rectangle { x: 0.0, y: 0.0, width: 100.0, height: 100.0 };

    fn panel(offset: f32) -> Rectangle {
        Rectangle::new(offset, 0.0, 100.0, 100.0)
    }

    #[test]
    fn fires_once_then_unsubscribes() {
        let mut observer = RegionObserver::new(0.0);
        observer.observe(7u32, 0.0);
        assert_eq!(observer.poll(VIEWPORT, |_| panel(50.0)), vec![7]);
        assert!(observer.is_empty());
        assert!(observer.poll(VIEWPORT, |_| panel(0.0)).is_empty());
    }

    #[test]
    fn out_of_view_keeps_waiting() {
        let mut observer = RegionObserver::new(0.0);
        observer.observe(1u32, 0.0);
        assert!(observer.poll(VIEWPORT, |_| panel(100.0)).is_empty());
        assert!(observer.is_observing(1));
    }

    #[test]
    fn threshold_needs_enough_of_the_region() {
        let mut observer = RegionObserver::new(0.0);
        observer.observe(1u32, 0.15);
        assert!(observer.poll(VIEWPORT, |_| panel(90.0)).is_empty());
        assert_eq!(observer.poll(VIEWPORT, |_| panel(80.0)), vec![1]);
    }

    #[test]
    fn root_margin_reaches_neighbours() {
        let mut observer = RegionObserver::new(100.0);
        observer.observe(0u32, 0.0);
        observer.observe(1u32, 0.0);
        observer.observe(2u32, 0.0);
        let offsets = [0.0, 100.0, 200.0];
        let fired = observer.poll(VIEWPORT, |k| panel(offsets[k as usize]));
        assert_eq!(fired, vec![0, 1]);
        assert!(observer.is_observing(2));
    }

    #[test]
    fn unobserve_cancels_and_observe_is_idempotent() {
        let mut observer = RegionObserver::new(0.0);
        observer.observe(3u32, 0.0);
        observer.observe(3u32, 0.0);
        assert_eq!(observer.len(), 1);
        observer.unobserve(3);
        assert!(observer.poll(VIEWPORT, |_| panel(0.0)).is_empty());
    }
}
