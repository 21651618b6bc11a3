// Static stage geometry.

use crate::domain::geometry::Rect;
use crate::domain::ports::{Drawable, Visual};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    rect: Rect,
}

impl Platform {
    pub fn rect(&self) -> &Rect {
        &self.rect
    }
}

impl Drawable for Platform {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn visual(&self) -> Visual {
        Visual::Platform
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LevelError {
    // Platform at `index` has a zero or negative side.
    InvalidPlatform { index: usize, width: f32, height: f32 },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::InvalidPlatform {
                index,
                width,
                height,
            } => write!(
                f,
                "platform {index} has invalid size {width}x{height}; both sides must be positive"
            ),
        }
    }
}

impl std::error::Error for LevelError {}

/// Ordered platform set for one stage. Collision corrections are applied in this order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Level {
    platforms: Vec<Platform>,
}

impl Level {
    pub fn new(rects: impl IntoIterator<Item = Rect>) -> Result<Self, LevelError> {
        let mut platforms = Vec::new();
        for (index, rect) in rects.into_iter().enumerate() {
            // NaN fails both comparisons and is rejected too.
            if !(rect.width > 0.0 && rect.height > 0.0) {
                return Err(LevelError::InvalidPlatform {
                    index,
                    width: rect.width,
                    height: rect.height,
                });
            }
            platforms.push(Platform { rect });
        }
        Ok(Self { platforms })
    }

    /// The built-in arena: five ledges over a 1200x800 screen.
    pub fn stage_one() -> Self {
        let platforms = [
            Rect::new(150.0, 600.0, 210.0, 30.0),
            Rect::new(500.0, 700.0, 210.0, 30.0),
            Rect::new(580.0, 450.0, 210.0, 30.0),
            Rect::new(0.0, 475.0, 100.0, 30.0),
            Rect::new(900.0, 600.0, 300.0, 30.0),
        ]
        .into_iter()
        .map(|rect| Platform { rect })
        .collect();
        Self { platforms }
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Platforms overlapping `rect`, in level order.
    pub fn overlapping<'a>(&'a self, rect: &'a Rect) -> impl Iterator<Item = &'a Platform> + 'a {
        self.platforms.iter().filter(move |p| p.rect.overlaps(rect))
    }

    pub fn any_overlap(&self, rect: &Rect) -> bool {
        self.overlapping(rect).next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_platform_has_zero_width_then_level_is_rejected() {
        let result = Level::new([
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(50.0, 50.0, 0.0, 10.0),
        ]);

        assert_eq!(
            result,
            Err(LevelError::InvalidPlatform {
                index: 1,
                width: 0.0,
                height: 10.0
            })
        );
    }

    #[test]
    fn when_platform_has_negative_height_then_level_is_rejected() {
        let result = Level::new([Rect::new(0.0, 0.0, 10.0, -3.0)]);

        assert!(matches!(
            result,
            Err(LevelError::InvalidPlatform { index: 0, .. })
        ));
    }

    #[test]
    fn when_level_is_empty_then_queries_find_nothing() {
        let level = Level::new([]).expect("empty level is valid");
        let probe = Rect::new(0.0, 0.0, 1000.0, 1000.0);

        assert!(!level.any_overlap(&probe));
        assert_eq!(level.overlapping(&probe).count(), 0);
    }

    #[test]
    fn when_querying_overlaps_then_level_order_is_kept() {
        let level = Level::new([
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(100.0, 0.0, 10.0, 10.0),
            Rect::new(5.0, 5.0, 10.0, 10.0),
        ])
        .expect("valid level");
        let probe = Rect::new(4.0, 4.0, 4.0, 4.0);

        let hits: Vec<f32> = level.overlapping(&probe).map(|p| p.rect().x).collect();

        assert_eq!(hits, vec![0.0, 5.0]);
    }

    #[test]
    fn stage_one_has_five_ledges() {
        assert_eq!(Level::stage_one().platforms().len(), 5);
    }
}
