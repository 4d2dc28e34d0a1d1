//! Text notation: the only durable representation of game data.
//!
//! Cells print as column letter plus row label (`a1` top-left, row 10 as
//! `X`); walls append `>` (right) or `v` (down); directions, players, and
//! turns print their names. `Display` and `FromStr` round-trip exactly over
//! every representable value.
//!
//! Standard positional notation (`Move::standard_notation`) is the
//! game-record form anchored at the moving pawn's cell: two pawn actions
//! print only the final landing, a pawn action plus a wall prints landing
//! then wall, two walls print in sorted order. It records displacements, not
//! jump mechanics, so parsing recovers the canonical decomposition.

use std::fmt;
use std::str::FromStr;

use crate::core::{Action, Cell, Direction, Move, Orientation, Player, Step, Turn, TurnPhase, Wall};
use crate::error::ParseError;

const COLUMN_LABELS: [char; 13] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
];
const ROW_LABELS: [char; 10] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', 'X'];

fn parse_column(label: char) -> Result<i32, ParseError> {
    COLUMN_LABELS
        .iter()
        .position(|&c| c == label)
        .map(|i| i as i32)
        .ok_or(ParseError::BadColumn(label))
}

fn parse_row(label: char) -> Result<i32, ParseError> {
    ROW_LABELS
        .iter()
        .position(|&c| c == label)
        .map(|i| i as i32)
        .ok_or(ParseError::BadRow(label))
}

/// Consume a two-character cell from the front of `s`.
fn take_cell(s: &str) -> Result<(Cell, &str), ParseError> {
    let mut chars = s.chars();
    let column = chars.next().ok_or(ParseError::Empty)?;
    let row = chars.next().ok_or(ParseError::Empty)?;
    Ok((Cell::new(parse_column(column)?, parse_row(row)?), chars.as_str()))
}

fn expect_consumed(rest: &str) -> Result<(), ParseError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(ParseError::TrailingInput(rest.to_string()))
    }
}

impl fmt::Display for Cell {
    /// Cells outside the 13x10 notation range have no textual form; writing
    /// one panics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            COLUMN_LABELS[self.column as usize], ROW_LABELS[self.row as usize]
        )
    }
}

impl FromStr for Cell {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (cell, rest) = take_cell(s)?;
        expect_consumed(rest)?;
        Ok(cell)
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = match self.orientation {
            Orientation::Right => '>',
            Orientation::Down => 'v',
        };
        write!(f, "{}{}", self.cell, mark)
    }
}

impl FromStr for Wall {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (cell, rest) = take_cell(s)?;
        let mut chars = rest.chars();
        let mark = chars.next().ok_or(ParseError::Empty)?;
        let orientation = match mark {
            '>' => Orientation::Right,
            'v' => Orientation::Down,
            other => return Err(ParseError::BadWallMark(other)),
        };
        expect_consumed(chars.as_str())?;
        Ok(Wall::new(cell, orientation))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Right => "Right",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Up => "Up",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Right" => Ok(Direction::Right),
            "Down" => Ok(Direction::Down),
            "Left" => Ok(Direction::Left),
            "Up" => Ok(Direction::Up),
            other => Err(ParseError::BadDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::Red => "Red",
            Player::Blue => "Blue",
        })
    }
}

impl FromStr for Player {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Red" => Ok(Player::Red),
            "Blue" => Ok(Player::Blue),
            other => Err(ParseError::BadPlayer(other.to_string())),
        }
    }
}

impl fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TurnPhase::First => "First",
            TurnPhase::Second => "Second",
        })
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.player, self.phase)
    }
}

impl FromStr for Turn {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (player, phase) = s.split_once(':').ok_or_else(|| ParseError::BadTurn(s.to_string()))?;
        let player = player.parse()?;
        let phase = match phase {
            "First" => TurnPhase::First,
            "Second" => TurnPhase::Second,
            _ => return Err(ParseError::BadTurn(s.to_string())),
        };
        Ok(Turn::new(player, phase))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Straight(dir) => write!(f, "{dir}"),
            Step::Diagonal(toward, deflect) => write!(f, "{toward}+{deflect}"),
        }
    }
}

impl FromStr for Step {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('+') {
            Some((toward, deflect)) => Ok(Step::Diagonal(toward.parse()?, deflect.parse()?)),
            None => Ok(Step::Straight(s.parse()?)),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Step(step) => write!(f, "{step}"),
            Action::Wall(wall) => write!(f, "{wall}"),
        }
    }
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Step tokens start with a direction name, wall tokens with a
        // lowercase column label; neither grammar overlaps the other.
        match s.chars().next() {
            None => Err(ParseError::Empty),
            Some(first) if first.is_ascii_uppercase() => Ok(Action::Step(s.parse()?)),
            Some(_) => Ok(Action::Wall(s.parse()?)),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let (Some(first), Some(second), None) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(ParseError::BadMove(s.to_string()));
        };
        Ok(Move::new(first.parse()?, second.parse()?))
    }
}

/// Plain displacement of a step from `cell`: one step per direction
/// component. Straight-jump landings need board context and are recorded by
/// the game driver as displacements, which is what this notation stores.
fn step_offset(cell: Cell, step: Step) -> Cell {
    match step {
        Step::Straight(dir) => cell.step(dir),
        Step::Diagonal(toward, deflect) => cell.step(toward).step(deflect),
    }
}

/// Split a two-action displacement into its canonical direction pair:
/// the column-axis direction first.
fn decompose_displacement(start: Cell, landing: Cell, token: &str) -> Result<(Direction, Direction), ParseError> {
    let dc = landing.column - start.column;
    let dr = landing.row - start.row;
    let column_dir = if dc > 0 { Direction::Right } else { Direction::Left };
    let row_dir = if dr > 0 { Direction::Down } else { Direction::Up };

    match (dc.abs(), dr.abs()) {
        (2, 0) => Ok((column_dir, column_dir)),
        (0, 2) => Ok((row_dir, row_dir)),
        (1, 1) => Ok((column_dir, row_dir)),
        _ => Err(ParseError::BadDisplacement(token.to_string())),
    }
}

fn single_direction(start: Cell, landing: Cell, token: &str) -> Result<Direction, ParseError> {
    let dc = landing.column - start.column;
    let dr = landing.row - start.row;
    match (dc, dr) {
        (1, 0) => Ok(Direction::Right),
        (-1, 0) => Ok(Direction::Left),
        (0, 1) => Ok(Direction::Down),
        (0, -1) => Ok(Direction::Up),
        _ => Err(ParseError::BadDisplacement(token.to_string())),
    }
}

impl Move {
    /// Game-record form anchored at the moving pawn's starting cell.
    pub fn standard_notation(&self, start: Cell) -> String {
        match (self.first, self.second) {
            (Action::Step(a), Action::Step(b)) => {
                step_offset(step_offset(start, a), b).to_string()
            }
            (Action::Step(step), Action::Wall(wall)) | (Action::Wall(wall), Action::Step(step)) => {
                format!("{} {}", step_offset(start, step), wall)
            }
            (Action::Wall(a), Action::Wall(b)) => {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                format!("{lo} {hi}")
            }
        }
    }

    /// Parse the game-record form back into a move. Displacements resolve to
    /// the canonical decomposition (column axis first, step before wall), so
    /// `standard_notation` of the result reproduces `s` for any string this
    /// accepts.
    pub fn from_standard_notation(start: Cell, s: &str) -> Result<Self, ParseError> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        match tokens.as_slice() {
            [token] => {
                let landing: Cell = token.parse()?;
                let (first, second) = decompose_displacement(start, landing, token)?;
                Ok(Move::new(
                    Action::Step(Step::Straight(first)),
                    Action::Step(Step::Straight(second)),
                ))
            }
            [a, b] => match (a.parse::<Wall>(), b.parse::<Wall>()) {
                (Ok(first), Ok(second)) => {
                    Ok(Move::new(Action::Wall(first), Action::Wall(second)))
                }
                (Err(_), Ok(wall)) => {
                    let landing: Cell = a.parse()?;
                    let dir = single_direction(start, landing, a)?;
                    Ok(Move::new(Action::Step(Step::Straight(dir)), Action::Wall(wall)))
                }
                (Ok(wall), Err(_)) => {
                    let landing: Cell = b.parse()?;
                    let dir = single_direction(start, landing, b)?;
                    Ok(Move::new(Action::Step(Step::Straight(dir)), Action::Wall(wall)))
                }
                (Err(_), Err(_)) => Err(ParseError::BadMove(s.to_string())),
            },
            _ => Err(ParseError::BadMove(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cell_format() {
        assert_eq!(Cell::new(0, 0).to_string(), "a1");
        assert_eq!(Cell::new(4, 4).to_string(), "e5");
        assert_eq!(Cell::new(12, 9).to_string(), "mX");
    }

    #[test]
    fn test_cell_parse_errors() {
        assert_eq!("z1".parse::<Cell>(), Err(ParseError::BadColumn('z')));
        assert_eq!("a0".parse::<Cell>(), Err(ParseError::BadRow('0')));
        assert_eq!("a".parse::<Cell>(), Err(ParseError::Empty));
        assert_eq!(
            "a1b".parse::<Cell>(),
            Err(ParseError::TrailingInput("b".to_string()))
        );
    }

    #[test]
    fn test_wall_format() {
        assert_eq!(Wall::new(Cell::new(1, 2), Orientation::Right).to_string(), "b3>");
        assert_eq!(Wall::new(Cell::new(1, 2), Orientation::Down).to_string(), "b3v");
    }

    #[test]
    fn test_wall_parse_errors() {
        assert_eq!("b3^".parse::<Wall>(), Err(ParseError::BadWallMark('^')));
        assert_eq!("b3".parse::<Wall>(), Err(ParseError::Empty));
    }

    #[test]
    fn test_direction_round_trip() {
        for dir in crate::core::DIRECTIONS {
            assert_eq!(dir.to_string().parse::<Direction>().unwrap(), dir);
        }
        assert!("right".parse::<Direction>().is_err());
    }

    #[test]
    fn test_turn_round_trip() {
        let mut turn = Turn::start();
        for _ in 0..4 {
            assert_eq!(turn.to_string().parse::<Turn>().unwrap(), turn);
            turn = turn.next();
        }
        assert_eq!(Turn::start().to_string(), "Red:First");
        assert!("Red".parse::<Turn>().is_err());
        assert!("Red:Third".parse::<Turn>().is_err());
    }

    #[test]
    fn test_step_format() {
        assert_eq!(Step::Straight(Direction::Up).to_string(), "Up");
        assert_eq!(
            Step::Diagonal(Direction::Up, Direction::Left).to_string(),
            "Up+Left"
        );
        assert_eq!("Up+Left".parse::<Step>().unwrap(), Step::Diagonal(Direction::Up, Direction::Left));
    }

    #[test]
    fn test_action_parse_dispatch() {
        assert_eq!(
            "Down".parse::<Action>().unwrap(),
            Action::Step(Step::Straight(Direction::Down))
        );
        assert_eq!(
            "c4v".parse::<Action>().unwrap(),
            Action::Wall(Wall::new(Cell::new(2, 3), Orientation::Down))
        );
        assert!("".parse::<Action>().is_err());
        assert!("Sideways".parse::<Action>().is_err());
    }

    #[test]
    fn test_move_round_trip() {
        let mv = Move::new(
            Action::Step(Step::Straight(Direction::Up)),
            Action::Wall(Wall::new(Cell::new(0, 0), Orientation::Right)),
        );
        assert_eq!(mv.to_string(), "Up a1>");
        assert_eq!("Up a1>".parse::<Move>().unwrap(), mv);
        assert!("Up".parse::<Move>().is_err());
        assert!("Up a1> Down".parse::<Move>().is_err());
    }

    #[test]
    fn test_standard_notation_double_step() {
        let start = Cell::new(4, 4);
        let mv = Move::new(
            Action::Step(Step::Straight(Direction::Right)),
            Action::Step(Step::Straight(Direction::Down)),
        );
        assert_eq!(mv.standard_notation(start), "f6");

        let parsed = Move::from_standard_notation(start, "f6").unwrap();
        assert_eq!(parsed, mv);
    }

    #[test]
    fn test_standard_notation_step_and_wall() {
        let start = Cell::new(4, 4);
        let wall = Wall::new(Cell::new(1, 2), Orientation::Right);
        let mv = Move::new(Action::Step(Step::Straight(Direction::Up)), Action::Wall(wall));
        assert_eq!(mv.standard_notation(start), "e4 b3>");

        // Wall-first prints identically and parses to the canonical order.
        let flipped = Move::new(Action::Wall(wall), Action::Step(Step::Straight(Direction::Up)));
        assert_eq!(flipped.standard_notation(start), "e4 b3>");
        assert_eq!(Move::from_standard_notation(start, "e4 b3>").unwrap(), mv);
    }

    #[test]
    fn test_standard_notation_sorts_walls() {
        let start = Cell::new(0, 0);
        let a = Wall::new(Cell::new(1, 2), Orientation::Down);
        let b = Wall::new(Cell::new(0, 0), Orientation::Right);
        let mv = Move::new(Action::Wall(a), Action::Wall(b));
        assert_eq!(mv.standard_notation(start), "a1> b3v");
    }

    #[test]
    fn test_standard_notation_rejects_bad_displacement() {
        let start = Cell::new(4, 4);
        // Three cells away cannot be two pawn actions.
        assert!(matches!(
            Move::from_standard_notation(start, "h5"),
            Err(ParseError::BadDisplacement(_))
        ));
        // Landing on the anchor is ambiguous and out of grammar.
        assert!(matches!(
            Move::from_standard_notation(start, "e5"),
            Err(ParseError::BadDisplacement(_))
        ));
    }

    fn cell_strategy() -> impl Strategy<Value = Cell> {
        (0..13i32, 0..10i32).prop_map(|(column, row)| Cell::new(column, row))
    }

    fn direction_strategy() -> impl Strategy<Value = Direction> {
        prop::sample::select(crate::core::DIRECTIONS.to_vec())
    }

    fn wall_strategy() -> impl Strategy<Value = Wall> {
        (cell_strategy(), prop::sample::select(vec![Orientation::Right, Orientation::Down]))
            .prop_map(|(cell, orientation)| Wall::new(cell, orientation))
    }

    fn step_strategy() -> impl Strategy<Value = Step> {
        prop_oneof![
            direction_strategy().prop_map(Step::Straight),
            (direction_strategy(), direction_strategy())
                .prop_map(|(toward, deflect)| Step::Diagonal(toward, deflect)),
        ]
    }

    fn action_strategy() -> impl Strategy<Value = Action> {
        prop_oneof![
            step_strategy().prop_map(Action::Step),
            wall_strategy().prop_map(Action::Wall),
        ]
    }

    proptest! {
        #[test]
        fn prop_cell_round_trip(cell in cell_strategy()) {
            prop_assert_eq!(cell.to_string().parse::<Cell>().unwrap(), cell);
        }

        #[test]
        fn prop_wall_round_trip(wall in wall_strategy()) {
            prop_assert_eq!(wall.to_string().parse::<Wall>().unwrap(), wall);
        }

        #[test]
        fn prop_action_round_trip(action in action_strategy()) {
            prop_assert_eq!(action.to_string().parse::<Action>().unwrap(), action);
        }

        #[test]
        fn prop_move_round_trip(first in action_strategy(), second in action_strategy()) {
            let mv = Move::new(first, second);
            prop_assert_eq!(mv.to_string().parse::<Move>().unwrap(), mv);
        }
    }
}
