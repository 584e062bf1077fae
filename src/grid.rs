use std::fmt;

use itertools::iproduct;

use crate::action::ActionError;
use crate::model::entity::Person;

pub type Index = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: Index,
    pub col: Index,
}

impl Position {
    pub fn new(row: Index, col: Index) -> Position {
        Position { row, col }
    }

    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

// up, down, left, right
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const CELL_WIDTH: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: Index,
    cols: Index,
    cells: Vec<Option<Person>>,
}

impl Grid {
    pub fn new(rows: Index, cols: Index) -> Grid {
        Grid { rows, cols, cells: vec![None; rows * cols] }
    }

    pub fn rows(&self) -> Index {
        self.rows
    }

    pub fn cols(&self) -> Index {
        self.cols
    }

    pub fn contains(&self, position: &Position) -> bool {
        position.row < self.rows && position.col < self.cols
    }

    pub fn get(&self, position: &Position) -> Option<&Person> {
        if !self.contains(position) {
            return None;
        }
        self.cells[position.row * self.cols + position.col].as_ref()
    }

    pub fn is_free(&self, position: &Position) -> bool {
        self.contains(position) && self.get(position).is_none()
    }

    /// In-bounds orthogonal neighbors, in the order up, down, left, right.
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        DIRECTIONS.into_iter().filter_map(move |(dr, dc)| {
            let row = position.row.checked_add_signed(dr)?;
            let col = position.col.checked_add_signed(dc)?;
            let next = Position { row, col };
            self.contains(&next).then_some(next)
        })
    }

    pub fn occupied_neighbors(&self, position: Position) -> impl Iterator<Item = (Position, &Person)> + '_ {
        self.neighbors(position)
            .filter_map(move |next| self.get(&next).map(|person| (next, person)))
    }

    /// Every cell, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        iproduct!(0..self.rows, 0..self.cols).map(|(row, col)| Position { row, col })
    }

    pub fn occupants(&self) -> impl Iterator<Item = (Position, &Person)> + '_ {
        self.positions().filter_map(move |pos| self.get(&pos).map(|person| (pos, person)))
    }

    pub fn find(&self, name: &str) -> Option<Position> {
        self.occupants()
            .find(|(_, person)| person.name == name)
            .map(|(pos, _)| pos)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    pub fn place(&mut self, position: Position, person: Person) -> Result<(), ActionError> {
        if !self.contains(&position) {
            return Err(ActionError::OutOfBounds(position));
        }
        if self.get(&position).is_some() {
            return Err(ActionError::Occupied(position));
        }
        if self.find(&person.name).is_some() {
            return Err(ActionError::AlreadySeated(person.name));
        }
        self.cells[position.row * self.cols + position.col] = Some(person);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let position = Position { row, col };
                match self.get(&position) {
                    Some(person) => write!(f, "{:<width$}", person.name, width = CELL_WIDTH)?,
                    None => write!(f, "{:<width$}", format!("Empty {position}"), width = CELL_WIDTH)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Position::new(0, 0), vec![Position::new(1, 0), Position::new(0, 1)])]
    #[case(Position::new(1, 1), vec![Position::new(0, 1), Position::new(2, 1), Position::new(1, 0), Position::new(1, 2)])]
    #[case(Position::new(2, 2), vec![Position::new(1, 2), Position::new(2, 1)])]
    fn neighbors_follow_up_down_left_right(#[case] at: Position, #[case] expected: Vec<Position>) {
        let grid = Grid::new(3, 3);
        assert_eq!(grid.neighbors(at).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn positions_are_row_major() {
        let grid = Grid::new(2, 3);
        let order: Vec<_> = grid.positions().map(|p| (p.row, p.col)).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn place_guards_cells_and_people() {
        let mut grid = Grid::new(2, 2);
        grid.place(Position::new(0, 0), Person::new("Alice")).unwrap();

        assert_eq!(
            grid.place(Position::new(0, 0), Person::new("Bob")),
            Err(ActionError::Occupied(Position::new(0, 0)))
        );
        assert_eq!(
            grid.place(Position::new(1, 1), Person::new("Alice")),
            Err(ActionError::AlreadySeated("Alice".to_string()))
        );
        assert_eq!(
            grid.place(Position::new(2, 0), Person::new("Bob")),
            Err(ActionError::OutOfBounds(Position::new(2, 0)))
        );
        assert_eq!(grid.find("Alice"), Some(Position::new(0, 0)));
        assert_eq!(grid.empty_count(), 3);
    }

    #[test]
    fn clear_empties_every_cell() {
        let mut grid = Grid::new(1, 2);
        grid.place(Position::new(0, 1), Person::new("Bob")).unwrap();
        grid.clear();
        assert_eq!(grid.empty_count(), 2);
        assert_eq!(grid.find("Bob"), None);
    }

    #[test]
    fn display_pads_cells_and_labels_empty_ones() {
        let mut grid = Grid::new(1, 2);
        grid.place(Position::new(0, 0), Person::new("Alice")).unwrap();
        assert_eq!(grid.to_string(), "Alice     Empty 0,1 \n");
    }

    #[test]
    fn adjacency_is_orthogonal_only() {
        let center = Position::new(1, 1);
        assert!(center.is_adjacent(&Position::new(0, 1)));
        assert!(center.is_adjacent(&Position::new(1, 2)));
        assert!(!center.is_adjacent(&Position::new(0, 0)));
        assert!(!center.is_adjacent(&center));
    }
}
