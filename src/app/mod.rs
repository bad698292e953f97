mod renderer;

use std::io::Stdout;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, KeyCode, MouseButton, MouseEventKind},
    execute,
    terminal::{self, ClearType},
};

use crate::{
    generators::generate_maze,
    maze::Marker,
    solvers::{self, Solver},
};
use renderer::{Renderer, Tile};

/// Interactive maze viewer: generates a maze, shows the shortest path between
/// the start and goal markers, and re-renders as the user moves markers with
/// the mouse or regenerates with the keyboard.
///
/// Everything runs synchronously on one thread: a regeneration fully replaces
/// the grid before the path is recomputed, never interleaved with a search.
pub struct App {
    rows: u16,
    cols: u16,
    solver: Solver,
    /// How often to poll for input events
    event_poll_timeout: Duration,
}

impl App {
    /// Builds an app for the given dimensions, or for the largest maze that
    /// fits the terminal when `dims` is `None`. Dimensions are clamped to odd
    /// values of at least 3 so that every room of the generation lattice has
    /// an in-bounds candidate passage.
    pub fn new(dims: Option<(u16, u16)>) -> std::io::Result<Self> {
        // Make sure dimensions are odd and at least 3
        let odd_and_min_3 = |n: u16| if n % 2 == 0 && n > 0 { n - 1 } else { n }.max(3);
        let (rows, cols) = match dims {
            Some((rows, cols)) => (odd_and_min_3(rows), odd_and_min_3(cols)),
            None => {
                let (term_width, term_height) = terminal::size()?;
                (
                    odd_and_min_3(term_height.saturating_sub(Renderer::STATUS_ROWS)),
                    odd_and_min_3(term_width / Tile::CELL_WIDTH),
                )
            }
        };
        Ok(App {
            rows,
            cols,
            solver: Solver::AStar,
            event_poll_timeout: Duration::from_millis(100),
        })
    }

    /// Set a panic hook to restore terminal state on panic
    /// This ensures that the terminal is not left in raw mode or alternate screen on panic
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = App::restore_terminal(&mut std::io::stdout()); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    }

    /// Setup terminal in raw mode, enter alternate screen, and enable mouse
    /// capture. Also sets a panic hook to restore terminal on panic.
    pub fn setup_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        terminal::enable_raw_mode()?;
        App::set_panic_hook();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            cursor::MoveTo(0, 0)
        )?;
        Ok(())
    }

    /// Restore terminal to original state
    /// Release mouse capture, leave alternate screen, and disable raw mode
    pub fn restore_terminal(stdout: &mut Stdout) -> std::io::Result<()> {
        execute!(
            stdout,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Main application loop
    pub fn run(&self) -> std::io::Result<()> {
        let mut renderer = Renderer::new();

        let mut grid = generate_maze(self.rows, self.cols, None);
        tracing::info!(rows = self.rows, cols = self.cols, "generated initial maze");
        if !renderer.check_fit(&grid)? {
            App::wait_for_esc()?;
            return Ok(());
        }
        let mut path = solvers::find_path(&grid, grid.start(), grid.goal(), self.solver);
        renderer.draw(&grid, path.as_deref())?;

        loop {
            if !event::poll(self.event_poll_timeout)? {
                continue;
            }
            match event::read()? {
                event::Event::Key(key_event) if key_event.kind == event::KeyEventKind::Press => {
                    if key_event.code == KeyCode::Esc {
                        tracing::info!("Esc pressed, exiting");
                        break;
                    }
                    // Any other key replaces the maze wholesale; the markers
                    // reset with the new grid
                    grid = generate_maze(self.rows, self.cols, None);
                    tracing::info!(rows = self.rows, cols = self.cols, "regenerated maze");
                    path = solvers::find_path(&grid, grid.start(), grid.goal(), self.solver);
                    renderer.draw(&grid, path.as_deref())?;
                }
                event::Event::Mouse(mouse_event) => {
                    let marker = match mouse_event.kind {
                        MouseEventKind::Down(MouseButton::Left) => Marker::Start,
                        MouseEventKind::Down(MouseButton::Right) => Marker::Goal,
                        _ => continue,
                    };
                    let (row, col) = (mouse_event.row, mouse_event.column / Tile::CELL_WIDTH);
                    // Clicks on walls, the other marker, or outside the grid
                    // are silently ignored and leave the markers in place
                    if grid.relocate_marker(marker, row, col) {
                        tracing::debug!(?marker, row, col, "relocated marker");
                        path = solvers::find_path(&grid, grid.start(), grid.goal(), self.solver);
                        renderer.draw(&grid, path.as_deref())?;
                    }
                }
                event::Event::Resize(_, _) => {
                    // Redraw once the terminal fits the maze again; the
                    // too-small notice stays up until then
                    if renderer.check_fit(&grid)? {
                        renderer.draw(&grid, path.as_deref())?;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Wait for the user to press the Esc key
    /// This function blocks until Esc is pressed
    fn wait_for_esc() -> std::io::Result<()> {
        loop {
            if let event::Event::Key(event::KeyEvent { code, kind, .. }) = event::read()? {
                if code == KeyCode::Esc && kind == event::KeyEventKind::Press {
                    break;
                }
            }
        }
        Ok(())
    }
}
