//! Direction selection for enemies.
//! Strategies only pick a step; the turn engine decides what that step means.

use std::cmp::Ordering;
use std::fmt;

use super::*;
use crate::game::pathfinding::astar_path;

/// What a strategy may look at when picking its next step.
pub struct StrategyView<'a> {
    pub map: &'a Map,
    pub from: Pos,
    pub target: Pos,
}

pub trait DirectionStrategy: fmt::Debug {
    fn choose(&mut self, view: &StrategyView<'_>) -> Direction;
}

/// Closes the horizontal gap first, then walks the column.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyChase;

impl DirectionStrategy for GreedyChase {
    fn choose(&mut self, view: &StrategyView<'_>) -> Direction {
        let (from, target) = (view.from, view.target);
        if from.x == target.x {
            match from.y.cmp(&target.y) {
                Ordering::Less => Direction::South,
                Ordering::Greater => Direction::North,
                Ordering::Equal => Direction::Hold,
            }
        } else if target.x > from.x {
            Direction::East
        } else {
            Direction::West
        }
    }
}

/// Follows the first step of a shortest path, falling back to greedy when walled off.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathChase;

impl DirectionStrategy for PathChase {
    fn choose(&mut self, view: &StrategyView<'_>) -> Direction {
        let next = astar_path(view.map, view.from, view.target)
            .and_then(|path| path.first().copied());
        let Some(next) = next else {
            return GreedyChase.choose(view);
        };
        Direction::from_delta(next.x - view.from.x, next.y - view.from.y)
            .unwrap_or(Direction::Hold)
    }
}

pub fn strategy_for(kind: ChaseKind) -> Box<dyn DirectionStrategy> {
    match kind {
        ChaseKind::Greedy => Box::new(GreedyChase),
        ChaseKind::Pathfinding => Box::new(PathChase),
    }
}
