//! Scrolling obstacle field.
//!
//! Obstacles are kept oldest first, which is also ascending column order, so
//! spawning pushes at the back and retirement pops from the front.

use std::collections::VecDeque;

use log::debug;
use rand::Rng;

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    pub x: i32,
    /// First open row. The gap spans `gap_top..=gap_top + gap_height`.
    pub gap_top: i32,
}

impl Obstacle {
    /// Whether `row` is solid in this obstacle's column.
    pub fn blocks(&self, row: i32, gap_height: i32) -> bool {
        row < self.gap_top || row > self.gap_top + gap_height
    }
}

#[derive(Debug, Clone, Default)]
pub struct ObstacleField {
    obstacles: VecDeque<Obstacle>,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll, spawn at most one, retire at most one.
    pub fn advance<R: Rng>(&mut self, rng: &mut R, config: &Config) {
        for o in &mut self.obstacles {
            o.x -= 1;
        }

        let should_spawn = self
            .obstacles
            .back()
            .is_none_or(|last| last.x < config.width - config.spawn_distance);
        if should_spawn {
            let gap_top = rng.random_range(0..config.height - config.gap_height);
            debug!("spawn obstacle at x={} gap_top={gap_top}", config.width);
            self.obstacles.push_back(Obstacle {
                x: config.width,
                gap_top,
            });
        }

        if self.obstacles.front().is_some_and(|first| first.x < 0) {
            if let Some(gone) = self.obstacles.pop_front() {
                debug!("retire obstacle gap_top={}", gone.gap_top);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Place an obstacle directly. Keeps column order.
    #[doc(hidden)]
    pub fn insert(&mut self, obstacle: Obstacle) {
        let at = self.obstacles.partition_point(|o| o.x <= obstacle.x);
        self.obstacles.insert(at, obstacle);
    }
}

#[doc(hidden)]
impl FromIterator<Obstacle> for ObstacleField {
    fn from_iter<I: IntoIterator<Item = Obstacle>>(iter: I) -> Self {
        let mut field = ObstacleField::new();
        for o in iter {
            field.insert(o);
        }
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn gaps(seed: u64, ticks: usize) -> Vec<i32> {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut field = ObstacleField::new();
        let mut seen = Vec::new();
        for _ in 0..ticks {
            field.advance(&mut rng, &config);
            if let Some(last) = field.iter().last() {
                if last.x == config.width {
                    seen.push(last.gap_top);
                }
            }
        }
        seen
    }

    #[test]
    fn first_spawn_on_first_tick() {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = ObstacleField::new();
        field.advance(&mut rng, &config);
        assert_eq!(field.len(), 1);
        assert_eq!(field.iter().next().unwrap().x, config.width);
    }

    #[test]
    fn spawns_at_fixed_spacing() {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = ObstacleField::new();
        // Spawned at 40 on tick 1; next when the last drops below 25, i.e. x=24 on tick 17.
        for _ in 0..16 {
            field.advance(&mut rng, &config);
        }
        assert_eq!(field.len(), 1);
        field.advance(&mut rng, &config);
        let xs: Vec<i32> = field.iter().map(|o| o.x).collect();
        assert_eq!(xs, vec![24, 40]);
    }

    #[test]
    fn gap_tops_fit_playfield() {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut field = ObstacleField::new();
        for _ in 0..2000 {
            field.advance(&mut rng, &config);
            for o in field.iter() {
                assert!(o.gap_top >= 0);
                assert!(o.gap_top < config.height - config.gap_height);
            }
        }
    }

    #[test]
    fn retires_leftmost_below_zero() {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut field: ObstacleField = [
            Obstacle { x: 0, gap_top: 4 },
            Obstacle { x: 30, gap_top: 2 },
        ]
        .into_iter()
        .collect();
        field.advance(&mut rng, &config);
        let xs: Vec<i32> = field.iter().map(|o| o.x).collect();
        assert_eq!(xs, vec![29]);
    }

    #[test]
    fn at_most_one_spawn_per_tick() {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(3);
        // Far past the threshold.
        let mut field: ObstacleField = [Obstacle { x: 2, gap_top: 4 }].into_iter().collect();
        field.advance(&mut rng, &config);
        assert_eq!(field.len(), 2);
    }

    #[test]
    fn insert_keeps_column_order() {
        let field: ObstacleField = [
            Obstacle { x: 20, gap_top: 1 },
            Obstacle { x: 5, gap_top: 2 },
            Obstacle { x: 12, gap_top: 3 },
        ]
        .into_iter()
        .collect();
        let xs: Vec<i32> = field.iter().map(|o| o.x).collect();
        assert_eq!(xs, vec![5, 12, 20]);
    }

    #[test]
    fn blocks_outside_gap_only() {
        let o = Obstacle { x: 5, gap_top: 10 };
        assert!(o.blocks(9, 5));
        assert!(!o.blocks(10, 5));
        assert!(!o.blocks(15, 5));
        assert!(o.blocks(16, 5));
    }

    #[test]
    fn same_seed_same_gaps() {
        assert_eq!(gaps(99, 500), gaps(99, 500));
        assert!(!gaps(99, 500).is_empty());
    }

    proptest! {
        #[test]
        fn survivors_move_left_by_one(seed in any::<u64>(), ticks in 1usize..200) {
            let config = Config::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut field = ObstacleField::new();
            for _ in 0..ticks {
                field.advance(&mut rng, &config);
            }
            let before: Vec<Obstacle> = field.iter().copied().collect();
            field.advance(&mut rng, &config);
            let after: Vec<Obstacle> = field.iter().copied().collect();
            let expected: Vec<Obstacle> = before
                .iter()
                .map(|o| Obstacle { x: o.x - 1, ..*o })
                .filter(|o| o.x >= 0)
                .collect();
            prop_assert!(after.len() >= expected.len());
            prop_assert_eq!(&after[..expected.len()], &expected[..]);
            let xs: Vec<i32> = after.iter().map(|o| o.x).collect();
            prop_assert!(xs.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
