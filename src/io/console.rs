//! Line-oriented command front-end
//!
//! Stands in for the graphical input layer: each command matches one key
//! binding or mouse action and calls the session API. Commands:
//!
//! ```text
//! help | status | list | quit
//! mode [aabb|point|edge]        cycle or pick the edit mode
//! tile next|prev|<id>           move between tiles, growing past the end
//! class up|down|<n>             move between bitmask classes
//! class of [up left ... br]     jump to the class for a set of neighbors
//! click X Y                     left click on a grid cell
//! rclick X Y                    right click on a grid cell
//! res +w|-w|+h|-h               grow or shrink the resolution
//! ```

use std::io::{BufRead, Write};

use crate::geometry::shapes::Point;
use crate::io::configuration::{CONSOLE_PROMPT, MAX_TILE_COUNT};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::GuideImage;
use crate::session::editor::EditorSession;
use crate::session::mode::{DeleteOutcome, EditMode, EditOutcome};
use crate::store::bitmask::{BitmaskClass, Neighbor, Neighbors};

const HELP_TEXT: &str = "\
Commands: help, status, list, quit
  mode [aabb|point|edge]   cycle or select the edit mode
  tile next|prev|<id>      select tile (next past the end adds a tile)
  class up|down|<n>        select bitmask class 0-46
  class of <neighbors>     select the class for neighbors (up left right down tl tr bl br)
  click X Y                add: first/second pick, or a point
  rclick X Y               remove the shape under X Y, or cancel a pick
  res +w|-w|+h|-h          change the resolution";

/// Relative or absolute move through tiles or classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One forward
    Next,
    /// One back
    Previous,
    /// Jump to an index
    To(usize),
}

/// One parsed console command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the command list
    Help,
    /// Show the cursor state
    Status,
    /// Show the shapes of the current slot
    List,
    /// Cycle modes, or select one
    Mode(Option<EditMode>),
    /// Move between tiles
    Tile(Step),
    /// Move between bitmask classes
    Class(Step),
    /// Jump to the class matching a neighbor configuration
    ClassFor(Neighbors),
    /// Left click on a cell
    Click(Point),
    /// Right click on a cell
    RightClick(Point),
    /// Change the resolution by the given width and height deltas
    Resize(i32, i32),
    /// Leave the loop
    Quit,
}

impl Command {
    /// Parse one input line; blank lines yield `None`
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending word for unknown commands or
    /// malformed arguments.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match (name.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("help" | "?", []) => Self::Help,
            ("status", []) => Self::Status,
            ("list" | "ls", []) => Self::List,
            ("quit" | "q" | "exit", []) => Self::Quit,
            ("mode" | "m", []) => Self::Mode(None),
            ("mode" | "m", [mode]) => Self::Mode(Some(
                EditMode::from_name(mode)
                    .ok_or_else(|| invalid_parameter("mode", mode, &"expected aabb, point or edge"))?,
            )),
            ("tile", [step]) => Self::Tile(parse_step(step, "tile", ["next", "prev"])?),
            ("class", ["of", names @ ..]) => Self::ClassFor(parse_neighbors(names)?),
            ("class", [step]) => Self::Class(parse_step(step, "class", ["down", "up"])?),
            ("click", [x, y]) => Self::Click(parse_point(x, y)?),
            ("rclick", [x, y]) => Self::RightClick(parse_point(x, y)?),
            ("res", [axis]) => match *axis {
                "+w" => Self::Resize(1, 0),
                "-w" => Self::Resize(-1, 0),
                "+h" => Self::Resize(0, 1),
                "-h" => Self::Resize(0, -1),
                other => {
                    return Err(invalid_parameter(
                        "res",
                        &other,
                        &"expected +w, -w, +h or -h",
                    ));
                }
            },
            _ => {
                return Err(invalid_parameter(
                    "command",
                    &line.trim(),
                    &"unknown command or wrong number of arguments, try help",
                ));
            }
        };

        Ok(Some(command))
    }
}

fn parse_step(word: &str, parameter: &'static str, [forward, back]: [&str; 2]) -> Result<Step> {
    if word == forward {
        return Ok(Step::Next);
    }
    if word == back {
        return Ok(Step::Previous);
    }
    word.parse()
        .map(Step::To)
        .map_err(|e| invalid_parameter(parameter, &word, &e))
}

fn parse_neighbors(names: &[&str]) -> Result<Neighbors> {
    names.iter().try_fold(Neighbors::empty(), |neighbors, name| {
        Neighbor::from_name(name)
            .map(|neighbor| neighbors.with(neighbor))
            .ok_or_else(|| {
                invalid_parameter(
                    "neighbor",
                    name,
                    &"expected up, left, right, down, tl, tr, bl or br",
                )
            })
    })
}

fn parse_point(x: &str, y: &str) -> Result<Point> {
    let x = x.parse().map_err(|e| invalid_parameter("x", &x, &e))?;
    let y = y.parse().map_err(|e| invalid_parameter("y", &y, &e))?;
    Ok(Point::new(x, y))
}

/// Command loop around an editor session
pub struct Console {
    session: EditorSession,
    guide: Option<GuideImage>,
}

impl Console {
    /// Wrap a session and optional guide image
    pub const fn new(session: EditorSession, guide: Option<GuideImage>) -> Self {
        Self { session, guide }
    }

    /// Session being driven
    pub const fn session(&self) -> &EditorSession {
        &self.session
    }

    /// Give back the session once the loop is done
    pub fn into_session(self) -> EditorSession {
        self.session
    }

    /// Read and execute commands until `quit` or end of input
    ///
    /// Malformed commands are reported on `output` and the loop continues.
    ///
    /// # Errors
    ///
    /// Returns an error if reading `input` or writing `output` fails.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        writeln!(output, "{HELP_TEXT}")?;
        let mut line = String::new();

        loop {
            write!(output, "{CONSOLE_PROMPT}")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            match Command::parse(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => writeln!(output, "{}", self.execute(command))?,
                Ok(None) => {}
                Err(error) => writeln!(output, "{error}")?,
            }
        }

        Ok(())
    }

    /// Apply one command and describe what happened
    pub fn execute(&mut self, command: Command) -> String {
        match command {
            Command::Help => HELP_TEXT.to_string(),
            Command::Status => self.status(),
            Command::List => self.list(),
            Command::Mode(None) => format!("Mode: {}", self.session.cycle_mode()),
            Command::Mode(Some(mode)) => {
                self.session.set_mode(mode);
                format!("Mode: {mode}")
            }
            Command::Tile(step) => {
                let moved = match step {
                    Step::Next => self.session.next_tile(),
                    Step::Previous => {
                        self.session.previous_tile();
                        true
                    }
                    Step::To(tile) => self.session.set_tile(tile),
                };
                if moved {
                    format!("Current ID: {}", self.session.current_tile())
                } else {
                    format!(
                        "Tile IDs run from 0 to {}, staying on {}",
                        MAX_TILE_COUNT - 1,
                        self.session.current_tile()
                    )
                }
            }
            Command::Class(Step::Next) => {
                self.session.next_class();
                format!("Bitmask: {}", self.session.current_class())
            }
            Command::Class(Step::Previous) => {
                self.session.previous_class();
                format!("Bitmask: {}", self.session.current_class())
            }
            Command::Class(Step::To(index)) => {
                if self.session.set_class(index) {
                    format!("Bitmask: {}", self.session.current_class())
                } else {
                    format!("No bitmask class {index}, classes run from 0 to 46")
                }
            }
            Command::ClassFor(neighbors) => {
                let class = BitmaskClass::from_neighbors(neighbors);
                self.session.set_class(class.index());
                format!("Bitmask: {class}")
            }
            Command::Click(point) => match self.session.click(point) {
                EditOutcome::AnchorSet => format!("First pick at {point}"),
                EditOutcome::Inserted(shape) => format!("Added {shape}"),
                EditOutcome::AlreadyPresent(shape) => format!("Already present: {shape}"),
                EditOutcome::Degenerate => "Edge has zero length, pick another point".to_string(),
                EditOutcome::NoAnchor => "Nothing to complete".to_string(),
            },
            Command::RightClick(point) => match self.session.delete_at(point) {
                DeleteOutcome::Removed(shape) => format!("Removed {shape}"),
                DeleteOutcome::Cancelled => "Selection cancelled".to_string(),
                DeleteOutcome::Missed => format!("Nothing to remove at {point}"),
            },
            Command::Resize(delta_width, delta_height) => format!(
                "Resolution: {}",
                self.session.resize_resolution(delta_width, delta_height)
            ),
            Command::Quit => "Bye".to_string(),
        }
    }

    fn status(&self) -> String {
        let mut text = self.session.status();
        if let Some(guide) = &self.guide {
            let (width, height) = guide.dimensions();
            let (cell_width, cell_height) = guide.cell_size(self.session.resolution());
            text.push_str(&format!(
                "\nGuide: {} ({width}x{height} px, {cell_width}x{cell_height} px per cell)",
                guide.path().display()
            ));
        }
        text
    }

    fn list(&self) -> String {
        let session = &self.session;
        let (tile, class) = (session.current_tile(), session.current_class());
        let tiles = session.tiles();

        let mut lines = vec![format!("Tile {tile}, bitmask {class}:")];
        lines.extend(tiles.aabbs(tile, class).iter().map(|aabb| format!("  {aabb}")));
        lines.extend(tiles.points(tile, class).iter().map(|point| format!("  point {point}")));
        lines.extend(tiles.edges(tile, class).iter().map(|edge| format!("  {edge}")));
        if lines.len() == 1 {
            lines.push("  (empty)".to_string());
        }
        lines.join("\n")
    }
}
