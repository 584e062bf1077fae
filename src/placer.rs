//! Greedy seat assignment for a single shuffled ordering.

use itertools::Itertools;
use tracing::trace;

use crate::action::{PlacementError, Seat};
use crate::grid::{Grid, Position};
use crate::model::condition::{Condition, Weight};
use crate::model::entity::Person;

pub struct GreedyPlacer<'a> {
    condition: &'a Condition,
}

impl<'a> GreedyPlacer<'a> {
    pub fn new(condition: &'a Condition) -> GreedyPlacer<'a> {
        GreedyPlacer { condition }
    }

    /// Constrained people first by descending weight (ties keep the shuffled
    /// order), then everyone else in shuffled order.
    pub fn placement_order<'p>(&self, people: &'p [Person]) -> Vec<&'p Person> {
        let weights: Vec<Weight> = people.iter().map(|p| self.condition.weight(&p.name)).collect();
        let (weighted, remainder): (Vec<_>, Vec<_>) = people
            .iter()
            .zip(weights)
            .partition(|(_, weight)| *weight > 0);
        weighted
            .into_iter()
            .sorted_by_key(|(_, weight)| std::cmp::Reverse(*weight))
            .chain(remainder)
            .map(|(person, _)| person)
            .collect()
    }

    /// Seats everyone in `people` on a cleared `grid`.
    pub fn place_all(&self, grid: &mut Grid, people: &[Person]) -> Result<(), PlacementError> {
        grid.clear();
        for person in self.placement_order(people) {
            let seat = self
                .find_seat(grid, person)
                .ok_or_else(|| PlacementError::NoSeat { name: person.name.clone() })?;
            trace!(name = %person.name, seat = ?seat, "seated");
            grid.place(seat.position(), person.clone())?;
        }
        Ok(())
    }

    pub fn find_seat(&self, grid: &Grid, person: &Person) -> Option<Seat> {
        self.seat_near_friend(grid, person)
            .or_else(|| self.first_free_seat(grid, person).map(Seat::Scan))
    }

    fn seat_near_friend(&self, grid: &Grid, person: &Person) -> Option<Seat> {
        self.condition.friends.get(&person.name).iter().find_map(|friend| {
            let at = grid.find(friend)?;
            grid.neighbors(at)
                .find(|next| self.is_acceptable(grid, person, next))
                .map(|position| Seat::NextToFriend { friend: friend.clone(), position })
        })
    }

    fn first_free_seat(&self, grid: &Grid, person: &Person) -> Option<Position> {
        grid.positions().find(|pos| self.is_acceptable(grid, person, pos))
    }

    fn is_acceptable(&self, grid: &Grid, person: &Person, position: &Position) -> bool {
        grid.is_free(position)
            && !self.has_flagged_conflict(grid, person, *position)
            && !self.is_flagged_by_neighbor(grid, person, *position)
    }

    /// Only `person`'s own flagged list is consulted, never the neighbor's.
    pub fn has_flagged_conflict(&self, grid: &Grid, person: &Person, position: Position) -> bool {
        grid.occupied_neighbors(position)
            .any(|(_, neighbor)| self.condition.is_flagged(&person.name, &neighbor.name))
    }

    /// Someone already seated next to `position` has flagged `person`.
    pub fn is_flagged_by_neighbor(&self, grid: &Grid, person: &Person, position: Position) -> bool {
        grid.occupied_neighbors(position)
            .any(|(_, neighbor)| self.condition.is_flagged(&neighbor.name, &person.name))
    }
}
