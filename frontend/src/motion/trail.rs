use std::collections::VecDeque;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    pub id: u64,
}

/// Rolling window of recent pointer positions, oldest first.
///
/// Points are appended only when the pointer moved further than
/// `min_distance` since the last recorded point. The window never holds more
/// than `capacity` points; `decay` drops the oldest one so the trail fades
/// out while the pointer rests.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailBuffer {
    points: VecDeque<TrailPoint>,
    capacity: usize,
    min_distance: f64,
    last_recorded: (f64, f64),
    next_id: u64,
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::new(config::TRAIL_CAPACITY, config::TRAIL_MIN_DISTANCE_PX)
    }
}

impl TrailBuffer {
    pub fn new(capacity: usize, min_distance: f64) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
            min_distance,
            last_recorded: (0.0, 0.0),
            next_id: 0,
        }
    }

    /// Records a pointer position. Returns whether a point was added.
    pub fn record(&mut self, x: f64, y: f64) -> bool {
        let dx = x - self.last_recorded.0;
        let dy = y - self.last_recorded.1;
        if (dx * dx + dy * dy).sqrt() <= self.min_distance {
            return false;
        }

        self.next_id += 1;
        self.points.push_back(TrailPoint { x, y, id: self.next_id });
        self.last_recorded = (x, y);
        self.evict(self.capacity);
        true
    }

    /// Drops the single oldest point.
    pub fn decay(&mut self) -> Option<TrailPoint> {
        let keep = self.points.len().saturating_sub(1);
        self.evict(keep).into_iter().next()
    }

    // Only place points leave the buffer.
    fn evict(&mut self, keep: usize) -> Vec<TrailPoint> {
        let excess = self.points.len().saturating_sub(keep);
        self.points.drain(..excess).collect()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[cfg(test)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Points paired with their particle look, oldest first.
    pub fn particles(&self) -> impl Iterator<Item = (&TrailPoint, Particle)> + '_ {
        let len = self.points.len();
        self.points
            .iter()
            .enumerate()
            .map(move |(index, point)| (point, Particle::for_age(len - index)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub opacity: f64,
    pub scale: f64,
}

impl Particle {
    /// `age` is the rank from the newest point, starting at 1.
    pub fn for_age(age: usize) -> Self {
        let age = age as f64;
        Self {
            opacity: (0.7 - age * 0.025).max(0.0),
            scale: (1.0 - age * 0.035).max(0.1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zigzag(buffer: &mut TrailBuffer, steps: usize) {
        for i in 0..steps {
            let x = (i * 7) as f64;
            let y = if i % 2 == 0 { 10.0 } else { 40.0 };
            buffer.record(x, y);
        }
    }

    #[test]
    fn small_moves_are_ignored() {
        let mut buffer = TrailBuffer::new(30, 2.0);
        assert!(buffer.record(10.0, 10.0));
        assert!(!buffer.record(11.0, 11.0));
        assert!(!buffer.record(12.0, 10.0));
        assert!(buffer.record(13.0, 10.0));
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn never_exceeds_capacity() {
        let mut buffer = TrailBuffer::new(30, 2.0);
        for i in 0..500 {
            buffer.record(i as f64 * 3.0, (i % 13) as f64 * 5.0);
            assert!(buffer.len() <= buffer.capacity());
        }
        assert_eq!(buffer.len(), 30);
    }

    #[test]
    fn keeps_insertion_order_and_drops_oldest() {
        let mut buffer = TrailBuffer::new(5, 2.0);
        zigzag(&mut buffer, 12);

        let ids: Vec<u64> = buffer.particles().map(|(point, _)| point.id).collect();
        assert_eq!(ids, vec![8, 9, 10, 11, 12]);
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn decay_empties_the_buffer() {
        let mut buffer = TrailBuffer::default();
        zigzag(&mut buffer, 40);
        let first = buffer.particles().next().map(|(point, _)| point.id);

        assert_eq!(buffer.decay().map(|point| point.id), first);
        let mut ticks = 1;
        while buffer.decay().is_some() {
            ticks += 1;
        }
        assert_eq!(ticks, 30);
        assert!(buffer.is_empty());
        assert_eq!(buffer.decay(), None);
    }

    #[test]
    fn ids_keep_increasing_after_decay() {
        let mut buffer = TrailBuffer::new(4, 2.0);
        buffer.record(10.0, 0.0);
        buffer.decay();
        buffer.record(20.0, 0.0);
        let (point, _) = buffer.particles().next().unwrap();
        assert_eq!(point.id, 2);
    }

    #[test]
    fn particles_fade_with_age() {
        let newest = Particle::for_age(1);
        assert!((newest.opacity - 0.675).abs() < 1e-9);
        assert!((newest.scale - 0.965).abs() < 1e-9);

        let old = Particle::for_age(30);
        assert_eq!(old.opacity, 0.0);
        assert!((old.scale - 0.1).abs() < 1e-9);

        let mut buffer = TrailBuffer::new(30, 2.0);
        zigzag(&mut buffer, 10);
        let looks: Vec<Particle> = buffer.particles().map(|(_, look)| look).collect();
        assert!(looks.windows(2).all(|pair| pair[0].opacity <= pair[1].opacity));
        assert_eq!(looks.last().copied(), Some(newest));
    }
}
