//! Base move primitive shared by every enemy.
//! This module exists so grid rules for a single step live in one place.
//! It does not own direction choice or what happens after contact.

use std::collections::BTreeMap;

use super::*;

/// Enemy positions, kept in step with every relocation.
pub type Occupancy = BTreeMap<Pos, EntityId>;

pub trait MovePrimitive {
    /// Tests the destination and either relocates `pos` or reports what is in the way.
    fn attempt_move(&mut self, mover: EntityId, pos: &mut Pos, dir: Direction) -> MoveOutcome;
}

pub struct GridMover<'a> {
    map: &'a Map,
    occupancy: &'a mut Occupancy,
    player_pos: Pos,
    player_claim: Option<Pos>,
}

impl<'a> GridMover<'a> {
    pub fn new(
        map: &'a Map,
        occupancy: &'a mut Occupancy,
        player_pos: Pos,
        player_claim: Option<Pos>,
    ) -> Self {
        Self { map, occupancy, player_pos, player_claim }
    }
}

impl MovePrimitive for GridMover<'_> {
    fn attempt_move(&mut self, mover: EntityId, pos: &mut Pos, dir: Direction) -> MoveOutcome {
        let from = *pos;
        if dir == Direction::Hold {
            return MoveOutcome::Moved { from, to: from };
        }

        let to = from.step(dir);
        if to == self.player_pos {
            return MoveOutcome::BlockedBy(Occupant::Player);
        }
        if self.player_claim == Some(to) {
            return MoveOutcome::TookOver(Occupant::Player);
        }
        if !self.map.is_walkable(to) {
            return MoveOutcome::Obstructed;
        }
        // Only the player triggers contact hooks; other enemies just block.
        if self.occupancy.get(&to).is_some_and(|other| *other != mover) {
            return MoveOutcome::Obstructed;
        }

        self.occupancy.remove(&from);
        self.occupancy.insert(to, mover);
        *pos = to;
        MoveOutcome::Moved { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::*;

    fn mover_id() -> EntityId {
        let mut ids = slotmap::SlotMap::<EntityId, ()>::with_key();
        ids.insert(())
    }

    #[test]
    fn free_floor_relocates_and_updates_occupancy() {
        let (map, origin) = open_room_fixture();
        let id = mover_id();
        let mut occupancy = Occupancy::from([(origin, id)]);
        let mut mover = GridMover::new(&map, &mut occupancy, Pos { y: 1, x: 1 }, None);
        let mut pos = origin;

        let outcome = mover.attempt_move(id, &mut pos, Direction::East);

        assert_eq!(outcome, MoveOutcome::Moved { from: origin, to: Pos { y: 5, x: 6 } });
        assert_eq!(pos, Pos { y: 5, x: 6 });
        assert_eq!(occupancy.get(&pos), Some(&id));
        assert!(!occupancy.contains_key(&origin));
    }

    #[test]
    fn player_tile_blocks_before_moving() {
        let (map, origin) = open_room_fixture();
        let id = mover_id();
        let mut occupancy = Occupancy::from([(origin, id)]);
        let player = origin.step(Direction::North);
        let mut mover = GridMover::new(&map, &mut occupancy, player, None);
        let mut pos = origin;

        let outcome = mover.attempt_move(id, &mut pos, Direction::North);

        assert_eq!(outcome, MoveOutcome::BlockedBy(Occupant::Player));
        assert_eq!(pos, origin);
    }

    #[test]
    fn player_claim_is_taken_over() {
        let (map, origin) = open_room_fixture();
        let id = mover_id();
        let mut occupancy = Occupancy::from([(origin, id)]);
        let claim = origin.step(Direction::South);
        let mut mover =
            GridMover::new(&map, &mut occupancy, claim.step(Direction::South), Some(claim));
        let mut pos = origin;

        let outcome = mover.attempt_move(id, &mut pos, Direction::South);

        assert_eq!(outcome, MoveOutcome::TookOver(Occupant::Player));
        assert_eq!(pos, origin);
    }

    #[test]
    fn walls_and_other_enemies_obstruct_without_contact() {
        let (map, _) = open_room_fixture();
        let mut ids = slotmap::SlotMap::<EntityId, ()>::with_key();
        let id = ids.insert(());
        let other = ids.insert(());
        let edge = Pos { y: 1, x: 1 };
        let mut occupancy = Occupancy::from([(edge, id), (Pos { y: 1, x: 2 }, other)]);
        let mut mover = GridMover::new(&map, &mut occupancy, Pos { y: 8, x: 8 }, None);
        let mut pos = edge;

        assert_eq!(mover.attempt_move(id, &mut pos, Direction::North), MoveOutcome::Obstructed);
        assert_eq!(mover.attempt_move(id, &mut pos, Direction::East), MoveOutcome::Obstructed);
        assert_eq!(pos, edge);
    }

    #[test]
    fn hold_is_a_move_in_place() {
        let (map, origin) = open_room_fixture();
        let id = mover_id();
        let mut occupancy = Occupancy::from([(origin, id)]);
        let mut mover = GridMover::new(&map, &mut occupancy, Pos { y: 1, x: 1 }, None);
        let mut pos = origin;

        assert_eq!(
            mover.attempt_move(id, &mut pos, Direction::Hold),
            MoveOutcome::Moved { from: origin, to: origin }
        );
    }
}
