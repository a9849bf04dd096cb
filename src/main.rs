#[macro_use] extern crate log;
extern crate simplelog;
extern crate island_areas;

use simplelog::*;
use std::io::{BufRead, BufReader, Write, stdin, stdout};
use std::fs::File;
use std::process;

use island_areas::{flood, report, ComponentSizer, Constants, Grid, GridError};

fn log_config() -> Config {
	Config {time: None, level: None, target: None, location: None, time_format: None}
}

// stderr always, plus LOG_FILE if given; stdout is reserved for the report
fn init_logging(constants: &Constants) -> Result<(), GridError> {
	let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
	loggers.push(WriteLogger::new(constants.log_level, log_config(), std::io::stderr()));
	if let Some(ref path) = constants.log_file {
		loggers.push(WriteLogger::new(LevelFilter::Info, log_config(), File::create(path)?));
	}
	CombinedLogger::init(loggers)
		.map_err(|e| GridError::Config { reason: format!("logger: {}", e) })
}

// `setup` runs once the config line is known and before the grid is read
fn session<R, W, F>(input: R, out: &mut W, setup: F) -> Result<(), GridError>
	where R: BufRead, W: Write, F: FnOnce(&Constants) -> Result<(), GridError> {
	let lines: Vec<String> = input.lines().collect::<Result<_, _>>()?;
	let mut lines_iter = lines.into_iter();

	let constants = Constants::parse(&lines_iter.next().unwrap_or_default())?;
	setup(&constants)?;
	for w in &constants.warnings {
		warn!("config: {}", w);
	}

	let grid = Grid::read(&mut lines_iter, 2, constants.valid_marker)?;
	let mut sizer = ComponentSizer::from_grid(grid);
	sizer.build();

	if constants.verify {
		let diff = flood::mismatches(&sizer);
		for &(cell, got, expected) in &diff {
			error!("verify: {:?} union-find area {}, flood fill area {}", cell, got, expected);
		}
		if !diff.is_empty() {
			return Err(GridError::Disagreement { cells: diff.len() });
		}
		info!("verify: flood fill agrees on all {} cells", sizer.grid().num_cells());
	}

	report::write_report(out, &sizer, constants.report)?;
	Ok(())
}

fn run() -> Result<(), GridError> {
	let stdin = stdin();
	let reader = BufReader::new(stdin);
	let stdout = stdout();
	session(reader, &mut stdout.lock(), init_logging)
}

fn main() {
	if let Err(e) = run() {
		error!("{}", e);
		eprintln!("error: {}", e);
		process::exit(1);
	}
}
