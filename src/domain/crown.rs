// The crown pickup waiting on the stage until a player first touches it.

use crate::domain::geometry::Rect;
use crate::domain::ports::{Drawable, Visual};

#[derive(Debug, Clone, PartialEq)]
pub struct CrownToken {
    pub rect: Rect,
    pub captured: bool,
}

impl CrownToken {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            captured: false,
        }
    }

    /// Live tokens take part in collisions and are drawn; captured ones never come back.
    pub fn is_live(&self) -> bool {
        !self.captured
    }
}

impl Drawable for CrownToken {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn visual(&self) -> Visual {
        Visual::Crown
    }
}
