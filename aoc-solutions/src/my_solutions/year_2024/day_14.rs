//! Day 14: Restroom Redoubt
//!
//! Robots move on a torus. Positions keep the puzzle's `x` in `col` and its
//! `y` in `row`. The input may start with a `cols,rows` line giving the room
//! size; without it the room is 101 wide and 103 tall.

use std::collections::HashSet;
use std::sync::LazyLock;

use anyhow::{Context, anyhow};
use aoc_grid::Position;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError, Solver};
use regex::Regex;

const DEFAULT_ROOM: Room = Room {
    cols: 101,
    rows: 103,
};
const QUADRANT_SECONDS: i64 = 100;

static ROBOT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^p=(-?\d+),(-?\d+) v=(-?\d+),(-?\d+)$").expect("robot pattern is valid")
});
static ROOM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+),(\d+)$").expect("room pattern is valid"));

pub struct Day14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub cols: i64,
    pub rows: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robot {
    pub position: Position,
    pub velocity: Position,
}

#[derive(Debug)]
pub struct SharedData {
    room: Room,
    robots: Vec<Robot>,
    /// Seconds after which every robot is back at its start.
    period: i64,
}

impl Robot {
    /// Where the robot is after `seconds`.
    pub fn after(&self, seconds: i64, room: Room) -> Position {
        Position::new(
            advance(self.position.row, self.velocity.row, seconds, room.rows),
            advance(self.position.col, self.velocity.col, seconds, room.cols),
        )
    }
}

/// `start + velocity * seconds` wrapped into `0..size`, without overflow.
fn advance(start: i64, velocity: i64, seconds: i64, size: i64) -> i64 {
    let size = i128::from(size);
    let moved = i128::from(start) + i128::from(velocity) * i128::from(seconds);
    // The remainder lies in `0..size`, so it fits back into i64.
    moved.rem_euclid(size) as i64
}

impl AocParser for Day14 {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_room(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl PartSolver<1> for Day14 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let Room { cols, rows } = shared.room;
        let (mid_col, mid_row) = (cols / 2, rows / 2);
        let mut quadrants = [0u64; 4];

        for robot in &shared.robots {
            let pos = robot.after(QUADRANT_SECONDS, shared.room);
            // Robots on a middle line belong to no quadrant.
            if pos.col == mid_col || pos.row == mid_row {
                continue;
            }
            let east = usize::from(pos.col > mid_col);
            let south = usize::from(pos.row > mid_row);
            quadrants[south * 2 + east] += 1;
        }

        Ok(quadrants.iter().product::<u64>().to_string())
    }
}

/// First second at which no two robots share a cell.
impl PartSolver<2> for Day14 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let room = shared.room;
        (0..shared.period)
            .find(|&seconds| {
                let mut occupied = HashSet::with_capacity(shared.robots.len());
                shared
                    .robots
                    .iter()
                    .all(|robot| occupied.insert(robot.after(seconds, room)))
            })
            .map(|seconds| seconds.to_string())
            .ok_or_else(|| SolveError::failed("robots never occupy distinct cells"))
    }
}

impl Solver for Day14 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => <Self as PartSolver<1>>::solve(shared),
            2 => <Self as PartSolver<2>>::solve(shared),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn parse_room(input: &str) -> anyhow::Result<SharedData> {
    let mut lines = input.lines().map(str::trim).filter(|l| !l.is_empty()).peekable();

    let room = match lines.peek().copied().and_then(|line| ROOM_RE.captures(line)) {
        Some(caps) => {
            let room = Room {
                cols: caps[1].parse()?,
                rows: caps[2].parse()?,
            };
            lines.next();
            room
        }
        None => DEFAULT_ROOM,
    };
    if room.cols == 0 || room.rows == 0 {
        return Err(anyhow!("room must not be empty"));
    }
    let period = room
        .rows
        .checked_mul(room.cols)
        .ok_or_else(|| anyhow!("room {}x{} is too large", room.cols, room.rows))?;

    let robots = lines
        .enumerate()
        .map(|(idx, line)| parse_robot(line).with_context(|| format!("(robot {}) {line}", idx + 1)))
        .collect::<anyhow::Result<Vec<_>>>()?;
    if robots.is_empty() {
        return Err(anyhow!("no robots in input"));
    }

    Ok(SharedData {
        room,
        robots,
        period,
    })
}

fn parse_robot(line: &str) -> anyhow::Result<Robot> {
    let caps = ROBOT_RE
        .captures(line)
        .ok_or_else(|| anyhow!("expected `p=x,y v=dx,dy`"))?;
    let number = |idx: usize| caps[idx].parse::<i64>();
    Ok(Robot {
        position: Position::new(number(2)?, number(1)?),
        velocity: Position::new(number(4)?, number(3)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
11,7
p=0,4 v=3,-3
p=6,3 v=-1,-3
p=10,3 v=-1,2
p=2,0 v=2,-1
p=0,0 v=1,3
p=3,0 v=-2,-2
p=7,6 v=-1,-3
p=3,0 v=-1,-2
p=9,3 v=2,3
p=7,3 v=-1,2
p=2,4 v=2,-3
p=9,5 v=-3,-3";

    #[test]
    fn test_example_safety_factor() {
        let mut shared = Day14::parse(EXAMPLE).unwrap();
        assert_eq!(shared.room, Room { cols: 11, rows: 7 });
        assert_eq!(<Day14 as PartSolver<1>>::solve(&mut shared).unwrap(), "12");
    }

    #[test]
    fn test_robot_teleports_across_edges() {
        let robot = Robot {
            position: Position::new(4, 2),
            velocity: Position::new(-3, 2),
        };
        let room = Room { cols: 11, rows: 7 };
        assert_eq!(robot.after(1, room), Position::new(1, 4));
        assert_eq!(robot.after(2, room), Position::new(5, 6));
        assert_eq!(robot.after(5, room), Position::new(3, 1));
    }

    #[test]
    fn test_default_room_without_header() {
        let shared = Day14::parse("p=0,4 v=3,-3").unwrap();
        assert_eq!(shared.room, DEFAULT_ROOM);
        assert_eq!(shared.robots[0].position, Position::new(4, 0));
        assert_eq!(shared.robots[0].velocity, Position::new(-3, 3));
    }

    #[test]
    fn test_first_distinct_second() {
        // Both robots start on (0, 0); the second moves away immediately.
        let mut shared = Day14::parse("5,5\np=0,0 v=0,0\np=0,0 v=1,0").unwrap();
        assert_eq!(<Day14 as PartSolver<2>>::solve(&mut shared).unwrap(), "1");

        let mut stuck = Day14::parse("5,5\np=1,1 v=0,0\np=1,1 v=0,0").unwrap();
        assert!(matches!(
            <Day14 as PartSolver<2>>::solve(&mut stuck),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_huge_velocity_wraps_without_overflow() {
        let mut shared = Day14::parse("11,7\np=0,0 v=100000000000000000,1").unwrap();
        // 10^19 % 11 == 10 and 100 % 7 == 2
        assert_eq!(
            shared.robots[0].after(QUADRANT_SECONDS, shared.room),
            Position::new(2, 10)
        );
        assert_eq!(<Day14 as PartSolver<1>>::solve(&mut shared).unwrap(), "0");

        let robot = Robot {
            position: Position::new(i64::MAX, i64::MIN),
            velocity: Position::new(i64::MAX, i64::MIN),
        };
        let pos = robot.after(i64::MAX, DEFAULT_ROOM);
        assert!((0..DEFAULT_ROOM.rows).contains(&pos.row));
        assert!((0..DEFAULT_ROOM.cols).contains(&pos.col));
    }

    #[test]
    fn test_oversized_room_is_rejected() {
        let err = Day14::parse("9223372036854775807,2\np=0,0 v=1,1").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("too large")));
    }

    #[test]
    fn test_bad_robot_line() {
        let err = Day14::parse("11,7\np=1,2 v=3").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("robot 1")));
    }
}
