//! Post-hoc violation counting over a finished grid.
//!
//! The audit reads the grid only. Flagged adjacency is checked from each
//! occupant's own list, so a pair flagged in both directions counts twice.

use std::fmt;

use tracing::warn;

use crate::grid::Grid;
use crate::model::condition::Condition;
use crate::model::entity::Name;

#[derive(Debug, Clone, PartialEq)]
pub struct FlaggedViolation {
    pub person: Name,
    pub neighbor: Name,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViolationReport {
    pub flagged: Vec<FlaggedViolation>,
    pub separated: Vec<Name>,
}

impl ViolationReport {
    pub fn flagged_count(&self) -> usize {
        self.flagged.len()
    }

    pub fn friend_count(&self) -> usize {
        self.separated.len()
    }
}

impl fmt::Display for ViolationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for violation in &self.flagged {
            writeln!(f, "VIOLATION: {} should not be near {}", violation.person, violation.neighbor)?;
        }
        writeln!(f)?;
        writeln!(f, "Total flagged violations: {}", self.flagged_count())?;
        write!(f, "Total friend separation violations: {}", self.friend_count())
    }
}

pub fn flagged_violations(grid: &Grid, condition: &Condition) -> Vec<FlaggedViolation> {
    grid.occupants()
        .flat_map(|(at, person)| {
            grid.occupied_neighbors(at)
                .filter(move |(_, neighbor)| condition.is_flagged(&person.name, &neighbor.name))
                .map(move |(_, neighbor)| FlaggedViolation {
                    person: person.name.clone(),
                    neighbor: neighbor.name.clone(),
                })
        })
        .collect()
}

/// People with a nonempty friend list and no declared friend next to them.
/// Friends who are not seated never count as adjacent.
pub fn separated_people(grid: &Grid, condition: &Condition) -> Vec<Name> {
    grid.occupants()
        .filter(|(at, person)| {
            let friends = condition.friends.get(&person.name);
            !friends.is_empty()
                && !friends.iter().any(|friend| {
                    grid.find(friend).is_some_and(|other| other.is_adjacent(at))
                })
        })
        .map(|(_, person)| person.name.clone())
        .collect()
}

pub fn audit(grid: &Grid, condition: &Condition) -> ViolationReport {
    let flagged = flagged_violations(grid, condition);
    for violation in &flagged {
        warn!(person = %violation.person, neighbor = %violation.neighbor, "flagged pair seated together");
    }
    ViolationReport { flagged, separated: separated_people(grid, condition) }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;
    use crate::model::entity::Person;
    use crate::model::relation::RelationMap;

    fn seat(grid: &mut Grid, row: usize, col: usize, name: &str) {
        grid.place(Position::new(row, col), Person::new(name)).unwrap();
    }

    #[test]
    fn symmetric_flags_count_twice() {
        let flagged = RelationMap::new().with("Alice", &["Eve"]).with("Eve", &["Alice"]);
        let condition = Condition::new(RelationMap::new(), flagged);
        let mut grid = Grid::new(1, 2);
        seat(&mut grid, 0, 0, "Alice");
        seat(&mut grid, 0, 1, "Eve");

        let report = audit(&grid, &condition);
        assert_eq!(report.flagged_count(), 2);
        assert_eq!(report.flagged[0], FlaggedViolation { person: "Alice".into(), neighbor: "Eve".into() });
    }

    #[test]
    fn one_sided_flag_counts_once() {
        let condition = Condition::new(RelationMap::new(), RelationMap::new().with("Bob", &["Frank"]));
        let mut grid = Grid::new(2, 1);
        seat(&mut grid, 0, 0, "Frank");
        seat(&mut grid, 1, 0, "Bob");
        assert_eq!(audit(&grid, &condition).flagged_count(), 1);
    }

    #[test]
    fn diagonal_is_not_adjacent() {
        let friends = RelationMap::new().with("Alice", &["Bob"]).with("Bob", &["Alice"]);
        let flagged = RelationMap::new().with("Alice", &["Bob"]);
        let condition = Condition::new(friends, flagged);
        let mut grid = Grid::new(2, 2);
        seat(&mut grid, 0, 0, "Alice");
        seat(&mut grid, 1, 1, "Bob");

        let report = audit(&grid, &condition);
        assert_eq!(report.flagged_count(), 0);
        assert_eq!(report.separated, vec!["Alice".to_string(), "Bob".to_string()]);
    }

    #[test]
    fn one_adjacent_friend_is_enough() {
        let friends = RelationMap::new().with("Alice", &["Bob", "Charlie"]).with("Dave", &[]);
        let condition = Condition::new(friends, RelationMap::new());
        let mut grid = Grid::new(1, 3);
        seat(&mut grid, 0, 0, "Alice");
        seat(&mut grid, 0, 1, "Charlie");
        seat(&mut grid, 0, 2, "Dave");

        assert_eq!(audit(&grid, &condition).friend_count(), 0);
    }

    #[test]
    fn absent_friends_leave_person_separated() {
        let condition = Condition::new(RelationMap::new().with("Alice", &["Zed"]), RelationMap::new());
        let mut grid = Grid::new(1, 1);
        seat(&mut grid, 0, 0, "Alice");
        assert_eq!(audit(&grid, &condition).separated, vec!["Alice".to_string()]);
    }

    #[test]
    fn audit_is_repeatable() {
        let condition = Condition::new(
            RelationMap::new().with("Alice", &["Bob"]),
            RelationMap::new().with("Alice", &["Charlie"]),
        );
        let mut grid = Grid::new(2, 2);
        seat(&mut grid, 0, 0, "Alice");
        seat(&mut grid, 0, 1, "Charlie");
        seat(&mut grid, 1, 1, "Bob");
        let before = grid.clone();

        assert_eq!(audit(&grid, &condition), audit(&grid, &condition));
        assert_eq!(grid, before);
    }

    #[test]
    fn report_prints_violations_and_totals() {
        let report = ViolationReport {
            flagged: vec![FlaggedViolation { person: "Bob".into(), neighbor: "Frank".into() }],
            separated: vec!["Dave".into()],
        };
        assert_eq!(
            report.to_string(),
            "VIOLATION: Bob should not be near Frank\n\nTotal flagged violations: 1\nTotal friend separation violations: 1"
        );
    }
}
