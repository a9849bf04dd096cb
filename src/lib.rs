#[macro_use] extern crate log;
#[macro_use] extern crate serde_json;
extern crate pathfinding;
#[cfg(test)] extern crate rand;

mod data;
mod error;
mod grid;
mod disjoint_set;
mod sizer;
mod config;
pub mod flood;
pub mod report;

pub use sizer::ComponentSizer;
pub use disjoint_set::DisjointSet;
pub use grid::{Grid, GMap, parse_line_of_nums, DEFAULT_VALID_MARKER};
pub use data::{Cell, Direction};
pub use error::GridError;
pub use config::{Constants, ReportFormat};
