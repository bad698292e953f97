use std::collections::HashSet;
use std::fmt;
use std::io::{Stdout, Write};

use crossterm::{
    QueueableCommand, cursor, queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::maze::{Coord, Grid};

/// What a grid cell looks like on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tile {
    Wall,
    Open,
    /// Part of the current shortest path.
    Route,
    Start,
    Goal,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Open => "  ".with(Color::Reset),
            Tile::Route => "· ".with(Color::Yellow),
            Tile::Start => "🟩".with(Color::Green),
            Tile::Goal => "🟥".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::CELL_WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

pub struct Renderer {
    /// Standard output handle to write to the terminal
    stdout: Stdout,
}

impl Renderer {
    /// Rows below the maze reserved for the status and controls lines.
    pub const STATUS_ROWS: u16 = 2;

    pub fn new() -> Self {
        Renderer {
            stdout: std::io::stdout(),
        }
    }

    /// Whether a terminal of the given size can show the grid plus the status
    /// lines. Compared in u32, since a user-supplied dimension near u16::MAX
    /// would overflow the required width/height otherwise.
    fn fits(term_size: (u16, u16), grid: &Grid) -> bool {
        term_size.0 as u32 >= grid.cols() as u32 * Tile::CELL_WIDTH as u32
            && term_size.1 as u32 >= grid.rows() as u32 + Renderer::STATUS_ROWS as u32
    }

    /// Check if the terminal is large enough to show the grid plus the status
    /// lines. If not, display a message asking the user to resize and return
    /// Ok(false).
    pub fn check_fit(&mut self, grid: &Grid) -> std::io::Result<bool> {
        let (term_width, term_height) = terminal::size()?;
        if !Renderer::fits((term_width, term_height), grid) {
            let msg = format!(
                "Terminal size is too small ({}x{}) for the {}x{} maze to display. Please resize the terminal.\r\n",
                term_width,
                term_height,
                grid.rows(),
                grid.cols()
            );
            queue!(
                self.stdout,
                terminal::Clear(ClearType::All),
                cursor::MoveTo(0, 0),
                style::PrintStyledContent(msg.with(Color::Yellow).attribute(Attribute::Bold)),
                style::PrintStyledContent(
                    "Press Esc to exit...\r\n"
                        .with(Color::Blue)
                        .attribute(Attribute::Bold)
                )
            )?;
            self.stdout.flush()?;
            return Ok(false);
        }
        Ok(true)
    }

    /// Draw a full frame: every grid cell, the path overlay, both markers, and
    /// the status lines below the maze.
    pub fn draw(&mut self, grid: &Grid, path: Option<&[Coord]>) -> std::io::Result<()> {
        let on_path: HashSet<Coord> = path
            .map(|p| p.iter().copied().collect())
            .unwrap_or_default();

        queue!(
            self.stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let coord = (row, col);
                let tile = if coord == grid.start() {
                    Tile::Start
                } else if coord == grid.goal() {
                    Tile::Goal
                } else if grid[coord].wall {
                    Tile::Wall
                } else if on_path.contains(&coord) {
                    Tile::Route
                } else {
                    Tile::Open
                };
                self.stdout.queue(style::Print(tile))?;
            }
            self.stdout.queue(style::Print("\r\n"))?;
        }

        let status = match path {
            Some(path) => format!("Path: {} steps", path.len() - 1)
                .with(Color::Green)
                .attribute(Attribute::Bold),
            None => "No path between start and goal"
                .to_string()
                .with(Color::Red)
                .attribute(Attribute::Bold),
        };
        queue!(
            self.stdout,
            style::PrintStyledContent(status),
            style::Print("\r\n"),
            style::PrintStyledContent(
                "Left/right click: move start/goal | any key: new maze | Esc: exit"
                    .with(Color::Cyan)
            ),
        )?;
        self.stdout.flush()?;
        Ok(())
    }
}
