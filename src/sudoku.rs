use colored::Colorize;
use std::{error::Error, fmt::Display};

pub const GRID_SIZE: usize = 9;
pub const BLOCK_SIZE: usize = 3;
pub const EMPTY_CELL: u8 = 0;

const TOTAL_CELLS: usize = GRID_SIZE * GRID_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in self.cells.iter().enumerate() {
            if i.0 == 0 {
                write!(f, "{}", "    0  1  2   3  4  5   6  7  8 \n".italic())?;
                write!(f, "   {}\n", "-----------------------------".blue())?;
            }

            write!(f, "{} {}", i.0.to_string().italic(), "|".blue())?;

            for j in i.1.iter().enumerate() {
                if *j.1 == EMPTY_CELL {
                    write!(f, "   ")?;
                } else {
                    write!(f, " {} ", j.1.to_string().bold())?;
                }

                if (j.0 + 1) % BLOCK_SIZE == 0 {
                    write!(f, "{}", "|".blue())?;
                }
            }

            write!(f, "\n")?;

            if (i.0 + 1) % BLOCK_SIZE == 0 {
                write!(f, "   {}\n", "-----------------------------".blue())?;
            }
        }

        Ok(())
    }
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [[EMPTY_CELL; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Parses the comma separated 81 cell format. An empty field stands for
    /// an empty cell, anything unparsable is treated as empty as well.
    pub fn from_str(inp: &str) -> Result<Self, Box<dyn Error>> {
        let split_cells = inp.split(",").collect::<Vec<&str>>();

        let cell_count = split_cells.len();

        if cell_count != TOTAL_CELLS {
            return Err(format!(
                "invalid input found, expected {} cells, found {}",
                TOTAL_CELLS, cell_count
            )
            .into());
        }

        let mut grid = Grid::new();

        for sc in split_cells.iter().enumerate() {
            let v = sc.1.trim();

            if v.is_empty() {
                continue;
            }

            let val = match v.parse::<u8>() {
                Ok(v) => v,
                Err(_) => continue,
            };

            if val < 1 || val > 9 {
                return Err(
                    "input values cannot contain values less than 1 or greater than 9".into(),
                );
            }

            grid.cells[sc.0 / GRID_SIZE][sc.0 % GRID_SIZE] = val;
        }

        Ok(grid)
    }

    pub fn to_str(&self) -> String {
        let mut fields = Vec::with_capacity(TOTAL_CELLS);

        for row in &self.cells {
            for v in row {
                if *v == EMPTY_CELL {
                    fields.push(String::new());
                } else {
                    fields.push(v.to_string());
                }
            }
        }

        fields.join(",")
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, val: u8) {
        self.cells[row][col] = val;
    }

    pub fn count_empty_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|v| **v == EMPTY_CELL)
            .count()
    }

    pub fn is_complete(&self) -> bool {
        self.count_empty_cells() == 0
    }

    pub fn row_contains(&self, row: usize, val: u8) -> bool {
        for col in 0..GRID_SIZE {
            if self.cells[row][col] == val {
                return true;
            }
        }

        false
    }

    pub fn column_contains(&self, col: usize, val: u8) -> bool {
        for row in 0..GRID_SIZE {
            if self.cells[row][col] == val {
                return true;
            }
        }

        false
    }

    /// `block_row` and `block_col` are the coordinates of the top-left cell
    /// of a 3x3 block.
    pub fn block_contains(&self, block_row: usize, block_col: usize, val: u8) -> bool {
        for i in 0..BLOCK_SIZE {
            for j in 0..BLOCK_SIZE {
                if self.cells[block_row + i][block_col + j] == val {
                    return true;
                }
            }
        }

        false
    }

    pub fn is_placement_valid(&self, row: usize, col: usize, val: u8) -> bool {
        !(self.row_contains(row, val)
            || self.column_contains(col, val)
            || self.block_contains(row - row % BLOCK_SIZE, col - col % BLOCK_SIZE, val))
    }

    /// grid is valid if the number placements obey the row, column and block
    /// rules; empty cells are ignored
    pub fn is_valid(&self) -> bool {
        for unit in 0..GRID_SIZE {
            let mut row_seen = [false; GRID_SIZE + 1];
            let mut col_seen = [false; GRID_SIZE + 1];

            for i in 0..GRID_SIZE {
                let rv = self.cells[unit][i] as usize;
                let cv = self.cells[i][unit] as usize;

                if rv != EMPTY_CELL as usize {
                    if row_seen[rv] {
                        return false;
                    }
                    row_seen[rv] = true;
                }

                if cv != EMPTY_CELL as usize {
                    if col_seen[cv] {
                        return false;
                    }
                    col_seen[cv] = true;
                }
            }
        }

        for block_row in (0..GRID_SIZE).step_by(BLOCK_SIZE) {
            for block_col in (0..GRID_SIZE).step_by(BLOCK_SIZE) {
                let mut seen = [false; GRID_SIZE + 1];

                for i in 0..BLOCK_SIZE {
                    for j in 0..BLOCK_SIZE {
                        let v = self.cells[block_row + i][block_col + j] as usize;

                        if v != EMPTY_CELL as usize {
                            if seen[v] {
                                return false;
                            }
                            seen[v] = true;
                        }
                    }
                }
            }
        }

        true
    }

    pub fn is_solved(&self) -> bool {
        self.is_complete() && self.is_valid()
    }

    fn find_empty_cell(&self) -> Option<(usize, usize)> {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if self.cells[row][col] == EMPTY_CELL {
                    return Some((row, col));
                }
            }
        }

        None
    }

    /// Fills the grid to a complete solution by backtracking and returns
    /// true, or returns false when no completion exists from the current
    /// state. A false return leaves the grid exactly as it was.
    ///
    /// Candidates are tried in ascending order on the first empty cell in
    /// row-major order, so the same input always yields the same solution.
    pub fn solve(&mut self) -> bool {
        let (row, col) = match self.find_empty_cell() {
            Some(pos) => pos,
            None => return true,
        };

        for val in 1..=GRID_SIZE as u8 {
            if self.is_placement_valid(row, col, val) {
                self.cells[row][col] = val;

                if self.solve() {
                    return true;
                }

                // undo the placement before trying the next candidate
                self.cells[row][col] = EMPTY_CELL;
            }
        }

        false
    }
}

#[cfg(test)]
mod test {
    use crate::sudoku::{EMPTY_CELL, Grid, TOTAL_CELLS};

    pub const SOLVED: &str = "5,3,4,6,7,8,9,1,2,6,7,2,1,9,5,3,4,8,1,9,8,3,4,2,5,6,7,8,5,9,7,6,1,4,2,3,4,2,6,8,5,3,7,9,1,7,1,3,9,2,4,8,5,6,9,6,1,5,3,7,2,8,4,2,8,7,4,1,9,6,3,5,3,4,5,2,8,6,1,7,9";

    #[test]
    pub fn parse_and_round_trip() {
        let grid = Grid::from_str(SOLVED);

        assert!(grid.is_ok());

        let grid = grid.expect("didn't expect an error");

        assert!(grid.is_complete());
        assert!(grid.is_valid());
        assert!(grid.is_solved());
        assert_eq!(grid.to_str(), SOLVED);
    }

    #[test]
    pub fn parse_rejects_wrong_cell_count() {
        assert!(Grid::from_str("1,2,3").is_err());
    }

    #[test]
    pub fn parse_rejects_out_of_range_values() {
        let mut fields = vec![""; TOTAL_CELLS];
        fields[40] = "0";

        assert!(Grid::from_str(&fields.join(",")).is_err());
    }

    #[test]
    pub fn placement_checks() {
        let mut grid = Grid::new();

        grid.set(0, 0, 5);
        grid.set(0, 1, 5);

        assert!(grid.row_contains(0, 5));
        assert!(!grid.row_contains(1, 5));
        assert!(grid.column_contains(0, 5));
        assert!(!grid.column_contains(2, 5));
        assert!(grid.block_contains(0, 0, 5));
        assert!(!grid.block_contains(3, 3, 5));

        // row conflict
        assert!(!grid.is_placement_valid(0, 2, 5));
        assert!(grid.is_placement_valid(0, 2, 7));

        // column conflict
        assert!(!grid.is_placement_valid(5, 0, 5));

        // block conflict
        assert!(!grid.is_placement_valid(2, 2, 5));

        assert!(grid.is_placement_valid(5, 5, 5));
    }

    #[test]
    pub fn valid_grid_checks() {
        let mut grid = Grid::from_str(SOLVED).expect("didn't expect an error");

        assert!(grid.is_valid());

        // two 9s in row 0, column 8 and block (0, 6)
        grid.set(0, 8, 9);

        assert!(!grid.is_valid());
        assert!(!grid.is_solved());
    }

    #[test]
    pub fn empty_grid_is_valid_but_not_solved() {
        let grid = Grid::new();

        assert!(grid.is_valid());
        assert!(!grid.is_complete());
        assert_eq!(grid.count_empty_cells(), TOTAL_CELLS);
    }

    #[test]
    pub fn solve_fills_the_only_empty_cell() {
        let mut grid = Grid::from_str(SOLVED).expect("didn't expect an error");

        grid.set(4, 4, EMPTY_CELL);

        assert!(grid.solve());
        assert_eq!(grid.get(4, 4), 5);
        assert!(grid.is_solved());
    }

    #[test]
    pub fn solve_leaves_a_complete_grid_untouched() {
        let mut grid = Grid::from_str(SOLVED).expect("didn't expect an error");
        let before = grid.clone();

        assert!(grid.solve());
        assert_eq!(grid, before);
    }

    #[test]
    pub fn solve_reports_failure_on_a_row_conflict() {
        let mut grid = Grid::from_str(SOLVED).expect("didn't expect an error");

        // the duplicate 9 in row 0 blocks the only candidate left for (8, 8)
        grid.set(0, 8, 9);
        grid.set(8, 8, EMPTY_CELL);

        assert!(!grid.solve());
        assert_eq!(grid.get(8, 8), EMPTY_CELL);
    }

    #[test]
    pub fn solve_from_empty_is_deterministic() {
        let mut first = Grid::new();
        let mut second = Grid::new();

        assert!(first.solve());
        assert!(second.solve());

        assert!(first.is_solved());
        assert_eq!(first, second);
    }
}
