//! Bonus and goal zone detection
//!
//! Zones are fixed 16px squares tested against the sprite's center point.
//! Containment is inclusive on both ends, so the hit box reaches one pixel
//! past the drawn square on the far sides.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{BONUS_COORDS, GOAL_X, GOAL_Y, SPRITE_CENTER_OFFSET, ZONE_SIZE};

/// Center pixel of a sprite whose top-left is `position`
#[inline]
pub fn sprite_center(position: IVec2) -> IVec2 {
    position + IVec2::splat(SPRITE_CENTER_OFFSET)
}

/// Inclusive square containment: `origin <= p <= origin + size` on both axes
#[inline]
fn contains_inclusive(origin: IVec2, size: i32, point: IVec2) -> bool {
    let far = origin + IVec2::splat(size);
    point.cmpge(origin).all() && point.cmple(far).all()
}

/// A one-shot bonus square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusZone {
    pub origin: IVec2,
    pub size: i32,
    pub collected: bool,
}

impl BonusZone {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            origin: IVec2::new(x, y),
            size: ZONE_SIZE,
            collected: false,
        }
    }

    pub fn contains(&self, point: IVec2) -> bool {
        contains_inclusive(self.origin, self.size, point)
    }

    /// The standard set of bonus zones, all uncollected
    pub fn standard_set() -> Vec<BonusZone> {
        BONUS_COORDS
            .iter()
            .map(|&(x, y)| BonusZone::new(x, y))
            .collect()
    }
}

/// The finish square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalZone {
    pub origin: IVec2,
    pub size: i32,
}

impl GoalZone {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            origin: IVec2::new(x, y),
            size: ZONE_SIZE,
        }
    }

    pub fn contains(&self, point: IVec2) -> bool {
        contains_inclusive(self.origin, self.size, point)
    }
}

impl Default for GoalZone {
    fn default() -> Self {
        Self::new(GOAL_X, GOAL_Y)
    }
}

/// A bonus pickup produced by [`check_bonus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusEvent {
    /// Index into the zone list
    pub zone: usize,
    pub value: i32,
}

/// Collect every uncollected zone containing `center`.
///
/// Collected zones are permanently inert until the zone list is rebuilt.
pub fn check_bonus(center: IVec2, zones: &mut [BonusZone], value: i32) -> Vec<BonusEvent> {
    let mut events = Vec::new();
    for (index, zone) in zones.iter_mut().enumerate() {
        if !zone.collected && zone.contains(center) {
            zone.collected = true;
            events.push(BonusEvent { zone: index, value });
        }
    }
    events
}

/// True when `center` is inside the goal square
pub fn check_goal(center: IVec2, goal: &GoalZone) -> bool {
    goal.contains(center)
}
