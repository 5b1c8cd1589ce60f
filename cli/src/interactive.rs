use pancurses::*;
use rand::Rng;

use pocketcube::prelude::*;

const OFFSET_X: i32 = 2;
const OFFSET_Y: i32 = 1;

/// Width and height of a sticker on the screen
const CELL_W: i32 = 4;
const CELL_H: i32 = 2;

/// Draw the unfolded cube
fn draw_cube(win: &Window, cube: &CubeState) {
	for (y, line) in cube.net().iter().enumerate() {
		for (x, cell) in line.iter().enumerate() {
			let Some(sticker) = cell else { continue };

			// leave a gap between the faces
			let cx = x as i32 * CELL_W + (x / FACE_DIM) as i32 + OFFSET_X;
			let cy = y as i32 * CELL_H + (y / FACE_DIM) as i32 + OFFSET_Y;

			win.attron(COLOR_PAIR(*sticker as u32));
			win.mvprintw(cy, cx, "███");
			win.mvprintw(cy + 1, cx, "▀▀▀");
		}
	}
	win.attron(COLOR_PAIR(1));
}

/// The line below the cube
fn status_line() -> i32 {
	3 * (FACE_DIM as i32 * CELL_H + 1) + OFFSET_Y + 1
}

fn draw_status(win: &Window, cube: &CubeState, message: &str) {
	let y = status_line();
	win.mv(y, 0);
	win.clrtoeol();

	if cube.is_finished() {
		win.attron(COLOR_PAIR(5));
		win.printw("The cube is finished!");
	} else {
		win.attron(COLOR_PAIR(3));
		win.printw("The cube is not finished");
	}
	win.attron(COLOR_PAIR(1));

	win.mv(y + 1, 0);
	win.clrtoeol();
	win.printw(message);
}

/// Draw the entire screen
fn init(win: &Window, cube: &CubeState) {
	start_color();

	noecho();
	curs_set(0);
	win.keypad(true);

	// Set better colors
	init_color(COLOR_WHITE, 1000, 1000, 1000);
	init_color(COLOR_YELLOW, 1000, 1000, 0);
	init_color(COLOR_GREEN, 0, 600, 0);
	init_color(COLOR_BLUE, 67, 67, 933);
	init_color(COLOR_RED, 933, 0, 0);
	init_color(COLOR_MAGENTA, 1000, 612, 12); // it's orange, there is no COLOR_ORANGE

	// Init color pairs, one per sticker value
	init_pair(1, COLOR_WHITE, COLOR_BLACK);
	init_pair(2, COLOR_YELLOW, COLOR_BLACK);
	init_pair(3, COLOR_RED, COLOR_BLACK);
	init_pair(4, COLOR_MAGENTA, COLOR_BLACK);
	init_pair(5, COLOR_GREEN, COLOR_BLACK);
	init_pair(6, COLOR_BLUE, COLOR_BLACK);

	win.clear();
	draw_cube(win, cube);
	draw_status(win, cube, "");

	win.mv(status_line() + 3, 0);
	win.printw("Turn a layer with the arrow keys or (h,j,k,l)\n");
	win.printw("Turn the other axis with (H,L), rotate the cube with (J,K)\n");
	win.printw("Count the turns to solve with s, scramble with r, reset with C\n\n");
	win.printw("Press (shift+)Q to quit.");
}

/// Map a key to a turn, like the arrow keys do on a physical cube
fn key_turn(key: &Input) -> Option<(Axis, Axis, Option<bool>)> {
	let turn = match key {
		Input::KeyRight | Input::Character('l') => (Axis::Y, Axis::Z, Some(false)),
		Input::KeyLeft | Input::Character('h') => (Axis::Z, Axis::Y, Some(false)),
		Input::KeyUp | Input::Character('k') => (Axis::Z, Axis::X, Some(false)),
		Input::KeyDown | Input::Character('j') => (Axis::X, Axis::Z, Some(false)),
		Input::Character('L') => (Axis::Y, Axis::X, Some(false)),
		Input::Character('H') => (Axis::X, Axis::Y, Some(false)),
		Input::Character('K') => (Axis::Z, Axis::X, None),
		Input::Character('J') => (Axis::X, Axis::Z, None),
		_ => return None,
	};
	Some(turn)
}

/// Handle the interactive mode, returns the cube when quitting.
/// The `r` key scrambles a solved cube with `scramble_len` random turns.
pub fn interactive_mode<R: Rng + ?Sized>(
	start: CubeState,
	solver: Solver,
	scramble_len: usize,
	rng: &mut R,
) -> CubeState {
	let mut cube = start;

	let win = initscr();
	init(&win, &cube);

	while let Some(key) = win.getch() {
		let mut message = String::new();

		if let Some((a1, a2, side)) = key_turn(&key) {
			cube = cube.transform(a1, a2, side);
		} else if let Input::Character(c) = key {
			match c {
				's' => {
					message = match solver.solve(cube) {
						Ok(solution) => format!("{} turns to solve", solution.depth),
						Err(e) => e.to_string(),
					}
				}
				'r' => cube = CubeState::scrambled(scramble_len, rng),
				'C' => cube = CubeState::new(),
				'Q' => break,
				_ => {}
			}
		}

		draw_cube(&win, &cube);
		draw_status(&win, &cube, &message);
	}

	endwin();

	cube
}
