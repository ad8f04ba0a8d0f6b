use std::time::{Duration, Instant};

pub mod error;
pub mod grid;
pub mod input;

pub use error::{InputError, ParseGridError};
pub use grid::{parse_grid, Grid, Pos};
pub use input::read_input;

/// Runs `f`, returning its result together with how long it took.
pub fn time<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let t0 = Instant::now();
    let res = f();
    (res, t0.elapsed())
}
