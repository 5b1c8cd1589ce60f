use std::{error::Error, io::Write, num::NonZeroUsize};

use clap::Parser;
use log::{info, LevelFilter};
use rand::{rngs::StdRng, SeedableRng};

use pocketcube::prelude::*;

#[cfg(feature = "interactive")]
mod interactive;

/// Scramble length of the interactive `r` key when no --random is given.
/// Longer scrambles take the solver much longer.
#[cfg(feature = "interactive")]
const INTERACTIVE_SCRAMBLE: usize = 6;

/// Pocket cube (2x2x2) solver written in Rust
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Turn the cube interactively
	/// Entered sequences and scrambles are applied first
	#[cfg(feature = "interactive")]
	#[arg(short, long, default_value_t = false)]
	interactive: bool,

	/// Use a sequence to apply on the solved cube, e.g. "xy1 zx0 yz"
	#[arg(short, default_value_t = String::new())]
	sequence: String,

	/// Scramble the cube with the given number of random turns
	#[arg(short, long)]
	random: Option<usize>,

	/// Seed for the scramble, for reproducible cubes
	#[arg(long)]
	seed: Option<u64>,

	/// Solve the cube (the output is a sequence)
	#[arg(long, default_value_t = false)]
	solve: bool,

	/// Output length of sequence (if --solve is used)
	#[arg(short, long, default_value_t = false)]
	length: bool,

	/// Split the search containers into chunks of this many nodes
	#[arg(long, conflicts_with = "parallel")]
	chunk_capacity: Option<NonZeroUsize>,

	/// Expand each search level in parallel
	#[arg(long, default_value_t = false)]
	parallel: bool,

	/// Output the cube as digits rather than colored
	#[arg(short, long, default_value_t = false)]
	char_print: bool,

	/// Print the output to a file rather to the stdout
	#[arg(short, long, default_value_t = String::new())]
	output: String,

	/// More log output (-v info, -vv debug, -vvv trace)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

impl Args {
	fn strategy(&self) -> Strategy {
		match (self.chunk_capacity, self.parallel) {
			(Some(capacity), _) => Strategy::Chunked(capacity),
			(None, true) => Strategy::Parallel,
			(None, false) => Strategy::Plain,
		}
	}

	/// Number of random turns the interactive mode scrambles with
	#[cfg(feature = "interactive")]
	fn scramble_len(&self) -> usize {
		self.random.unwrap_or(INTERACTIVE_SCRAMBLE)
	}
}

fn main() -> Result<(), Box<dyn Error>> {
	let args = Args::parse();

	env_logger::Builder::new()
		.filter_level(match args.verbose {
			0 => LevelFilter::Warn,
			1 => LevelFilter::Info,
			2 => LevelFilter::Debug,
			_ => LevelFilter::Trace,
		})
		.init();

	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn std::io::Write> = if args.output.is_empty() {
		Box::new(std::io::stdout())
	} else {
		Box::new(std::fs::File::create(&args.output)?)
	};

	let mut rng = match args.seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_entropy(),
	};

	let mut cube = CubeState::new();

	// Generate a random input cube
	if let Some(n) = args.random {
		let scramble = random_turns(n, &mut rng);
		info!(
			"Scramble: {}",
			scramble.iter().map(Turn::to_string).collect::<Vec<_>>().join(" ")
		);
		cube = cube.apply_turns(scramble);
	}

	// Applies turns from args
	cube = cube.apply_turns(parse_turns(&args.sequence)?);

	let solver = Solver::new(args.strategy());

	#[cfg(feature = "interactive")]
	if args.interactive {
		cube = interactive::interactive_mode(cube, solver, args.scramble_len(), &mut rng);
	}

	// Solve the cube and only outputs the sequence
	if args.solve {
		let solution = solver.solve(cube)?;

		for turn in solution.turns.iter() {
			write!(out.as_mut(), "{} ", turn)?;
		}
		if args.length {
			writeln!(out.as_mut(), "(len={})", solution.depth)?;
		} else {
			writeln!(out.as_mut())?;
		}
		return Ok(());
	}

	// Print the resulting cube (either as digits or with colors)
	if args.char_print || !args.output.is_empty() {
		writeln!(out.as_mut(), "{}", cube)?;
		writeln!(out.as_mut(), "Is finished: {}", cube.is_finished())?;
	} else {
		cube.print();
		println!("Is finished: {}", cube.is_finished());
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strategy_from_flags() {
		let args = Args::parse_from(["pocket-solver", "--parallel"]);
		assert_eq!(args.strategy(), Strategy::Parallel);

		let args = Args::parse_from(["pocket-solver", "--chunk-capacity", "64"]);
		assert!(matches!(args.strategy(), Strategy::Chunked(c) if c.get() == 64));
	}

	#[test]
	#[cfg(feature = "interactive")]
	/// The r key scrambles as long as --random, or a little by default
	fn interactive_scramble_len() {
		let args = Args::parse_from(["pocket-solver", "-i", "-r", "3"]);
		assert_eq!(args.scramble_len(), 3);

		let args = Args::parse_from(["pocket-solver", "-i"]);
		assert_eq!(args.scramble_len(), INTERACTIVE_SCRAMBLE);
	}
}
