use anyhow::Result;
use code_jumble_config::Config;
use code_jumble_engine::{
    editing::{BlockId, Cmd, Jumble, Snapshot},
    io,
    models::JumbleExercise,
};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use relative_path::RelativePathBuf;
use std::{env, io::stdout, path::PathBuf, process};

/// The terminal stand-in for the browser widget: the keyboard plays the
/// pointer, and every keypress becomes the same engine command the page's
/// drag handlers would emit.
struct App {
    exercise: JumbleExercise,
    jumble: Jumble,
    snapshot: Snapshot,
    /// Cursor over workspace blocks followed by trash blocks.
    cursor: usize,
}

impl App {
    fn new(exercise: JumbleExercise) -> Result<Self> {
        let jumble = Jumble::from_exercise(&exercise)?;
        let snapshot = jumble.snapshot();
        Ok(Self {
            exercise,
            jumble,
            snapshot,
            cursor: 0,
        })
    }

    /// Blocks in navigation order: workspace first, then trash.
    fn nav_order(&self) -> Vec<BlockId> {
        self.snapshot
            .workspace
            .iter()
            .chain(&self.snapshot.trash)
            .map(|b| b.id)
            .collect()
    }

    fn cursor_block(&self) -> Option<BlockId> {
        self.nav_order().get(self.cursor).copied()
    }

    fn refresh(&mut self) {
        self.snapshot = self.jumble.snapshot();
        let len = self.nav_order().len();
        if len > 0 && self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    fn move_cursor(&mut self, forward: bool) {
        let order = self.nav_order();
        if order.is_empty() {
            return;
        }
        let left = self.cursor_block();

        self.cursor = if forward {
            (self.cursor + 1) % order.len()
        } else if self.cursor == 0 {
            order.len() - 1
        } else {
            self.cursor - 1
        };

        // While a drag is live the cursor is the pointer: emit the same
        // leave/enter pair the page would.
        if !self.jumble.session().is_idle() {
            if let Some(block) = left {
                self.jumble.apply(Cmd::DragLeave { block });
            }
            if let Some(block) = self.cursor_block() {
                self.jumble.apply(Cmd::DragEnter { block });
            }
        }
        self.refresh();
    }

    /// Space/Enter: pick the block up, or drop the held block here.
    fn grab_or_drop(&mut self) {
        let Some(block) = self.cursor_block() else {
            return;
        };
        if self.jumble.session().is_idle() {
            self.jumble.apply(Cmd::DragStart { block });
        } else {
            // Dropping on the held block itself is the engine's no-op,
            // which doubles as cancel.
            self.jumble.apply(Cmd::Drop { target: block });
            self.jumble.apply(Cmd::DragEnd);
            self.refresh();
            // Keep the cursor on the drop target wherever it ended up.
            if let Some(pos) = self.nav_order().iter().position(|&id| id == block) {
                self.cursor = pos;
            }
            return;
        }
        self.refresh();
    }

    fn cancel_drag(&mut self) {
        self.jumble.apply(Cmd::DragEnd);
        self.refresh();
    }

    fn change_indent(&mut self, delta: i8) {
        if let Some(block) = self.cursor_block() {
            self.jumble.apply(Cmd::ChangeIndent { block, delta });
            self.refresh();
        }
    }
}

fn main() -> Result<()> {
    // Determine exercise path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let exercises_path;
    let from_config;

    if args.len() == 2 {
        exercises_path = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        match Config::load() {
            Ok(Some(config)) => {
                exercises_path = config.exercises_path;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No exercise path provided and no config file found");
                eprintln!("Usage: {} <exercise-file-or-folder>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <exercise-file-or-folder>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [exercise-file-or-folder]", args[0]);
        process::exit(1);
    };

    let exercise = match load_exercise(&exercises_path) {
        Ok(exercise) => exercise,
        Err(e) => {
            let source = if from_config {
                format!(" from config file '{}'", config_path.display())
            } else {
                String::new()
            };
            eprintln!(
                "Error: Exercise path '{}'{} is invalid: {e}",
                exercises_path.display(),
                source
            );
            process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(exercise)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Load an exercise from a file path, or the first exercise found in a
/// folder.
fn load_exercise(path: &PathBuf) -> Result<JumbleExercise> {
    if path.is_file() {
        let root = path.parent().unwrap_or_else(|| std::path::Path::new("."));
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        return Ok(io::read_exercise(&RelativePathBuf::from(name), root)?);
    }

    io::validate_exercises_dir(path)?;
    let files = io::scan_exercise_files(path)?;
    let first = files
        .first()
        .ok_or_else(|| anyhow::anyhow!("no .toml exercise files in {}", path.display()))?;
    let name = first
        .strip_prefix(path)
        .unwrap_or(first)
        .to_string_lossy()
        .to_string();
    Ok(io::read_exercise(&RelativePathBuf::from(name), path)?)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.move_cursor(true),
                KeyCode::Up | KeyCode::Char('k') => app.move_cursor(false),
                KeyCode::Enter | KeyCode::Char(' ') => app.grab_or_drop(),
                KeyCode::Esc => app.cancel_drag(),
                KeyCode::Right | KeyCode::Char(']') => app.change_indent(1),
                KeyCode::Left | KeyCode::Char('[') => app.change_indent(-1),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)].as_ref())
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)].as_ref())
        .split(vertical[0]);

    let nav = app.nav_order();
    let cursor_id = nav.get(app.cursor).copied();

    let render_list = |blocks: &[code_jumble_engine::editing::RenderBlock]| {
        blocks
            .iter()
            .map(|b| {
                let code = app.exercise.code_of(b.id).unwrap_or("<unknown block>");
                let indent = "    ".repeat(b.indent as usize);

                // The page's highlight classes, in terminal colors: hint is
                // yellow, active is red, the dragged block is dimmed.
                let mut style = Style::default();
                if b.hinted {
                    style = style.fg(Color::Yellow);
                }
                if b.active {
                    style = style.bg(Color::Red).fg(Color::White);
                }
                if b.dragged {
                    style = style.add_modifier(Modifier::DIM | Modifier::ITALIC);
                }
                if cursor_id == Some(b.id) {
                    style = style.add_modifier(Modifier::REVERSED);
                }

                ListItem::new(Line::from(vec![Span::styled(
                    format!("{indent}{code}"),
                    style,
                )]))
            })
            .collect::<Vec<_>>()
    };

    let workspace = List::new(render_list(&app.snapshot.workspace)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Workspace"),
    );
    f.render_widget(workspace, panes[0]);

    let trash = List::new(render_list(&app.snapshot.trash))
        .block(Block::default().borders(Borders::ALL).title("Trash"));
    f.render_widget(trash, panes[1]);

    let holding = match app.jumble.session().selected() {
        Some(id) => format!("holding block {id}"),
        None => "idle".to_string(),
    };
    let status = vec![
        Line::from(vec![
            Span::raw(format!("{} | ", holding)),
            Span::raw(format!("response: {}", app.snapshot.response)),
        ]),
        Line::from(vec![Span::raw(
            "q: Quit | ↑/↓: Move | Space: Grab/Drop | Esc: Cancel | ←/→: Indent",
        )]),
    ];
    let status =
        Paragraph::new(status).block(Block::default().borders(Borders::ALL).title(
            app.exercise.prompt.as_str(),
        ));
    f.render_widget(status, vertical[1]);
}
