//! Breadboard placement editor (default binary).
//!
//! Loads an IC list (and optionally its saved placements), then either prints
//! a JSON report or opens the interactive editor. The editor uses crossterm
//! for input and the framebuffer renderer from `bread_placer::term`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};

use bread_placer::core::Session;
use bread_placer::engine::{apply_action, ActionOutcome};
use bread_placer::format::{
    load_project_file, read_ic_list, save_project_file, PlacementReport, ProjectPaths,
};
use bread_placer::input::{handle_key_event, is_actionable, should_quit, should_save};
use bread_placer::term::{BoardView, StatusBar, TerminalRenderer, Viewport};
use bread_placer::{init_logging, resolve_policy, COLLISION_ENV, LOG_PATH_ENV};

/// Place dual-in-line ICs on a three-lane breadboard
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// `.ics_list` to start a fresh layout, or `.icprj` to continue one
    input: PathBuf,

    /// Print the placement report as JSON and exit
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Collision policy: `interval` (default) or `endpoints`
    #[arg(long, value_name = "POLICY")]
    collision: Option<String>,

    /// Do not write the project file when quitting
    #[arg(long)]
    no_save: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_path = std::env::var_os(LOG_PATH_ENV).map(PathBuf::from);
    init_logging(args.verbose, !args.json, log_path.as_deref())?;

    let env_policy = std::env::var(COLLISION_ENV).ok();
    let policy = resolve_policy(args.collision.as_deref(), env_policy.as_deref())?;

    let paths = ProjectPaths::from_input(&args.input)?;
    let ics = read_ic_list(&paths.ics_list)
        .with_context(|| format!("failed to read {}", paths.ics_list.display()))?;
    log::info!(
        "loaded {} ICs from {} (collision policy: {})",
        ics.len(),
        paths.ics_list.display(),
        policy.as_str()
    );

    let mut session = Session::with_policy(ics, policy);
    if paths.read_project {
        let load = load_project_file(&paths.project, &mut session)
            .with_context(|| format!("failed to read {}", paths.project.display()))?;
        log::info!(
            "applied {} placements from {}",
            load.applied,
            paths.project.display()
        );
    }

    if args.json {
        let report = PlacementReport::from_session(&session);
        println!("{}", report.to_json_pretty()?);
        return Ok(());
    }

    let mut editor = Editor::new(session, paths);

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = editor.run(&mut term);
    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    if !args.no_save {
        editor.save()?;
    }
    Ok(())
}

struct Editor {
    session: Session,
    paths: ProjectPaths,
    project_name: String,
    dirty: bool,
    message: Option<String>,
}

impl Editor {
    fn new(session: Session, paths: ProjectPaths) -> Self {
        let project_name = paths
            .project
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            session,
            paths,
            project_name,
            dirty: false,
            message: None,
        }
    }

    fn run(&mut self, term: &mut TerminalRenderer) -> Result<()> {
        let view = BoardView::new();

        loop {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let status = StatusBar {
                project: &self.project_name,
                dirty: self.dirty,
                message: self.message.as_deref(),
            };
            let mut fb = view.render(&self.session, status, Viewport::new(w, h));
            term.present(&mut fb)?;

            match event::read()? {
                Event::Resize(..) => term.invalidate(),
                Event::Key(key) if is_actionable(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if should_save(key) {
                        self.message = Some(match self.save() {
                            Ok(()) => format!("saved {}", self.paths.project.display()),
                            Err(err) => format!("{err:#}"),
                        });
                        continue;
                    }
                    if let Some(action) = handle_key_event(key) {
                        self.apply(action);
                    }
                }
                _ => {}
            }
        }
    }

    fn apply(&mut self, action: bread_placer::types::PlacerAction) {
        match apply_action(&mut self.session, action) {
            Ok(outcome) => {
                self.dirty |= outcome.changes_placement();
                self.message = self.describe(outcome);
            }
            Err(err) => {
                log::debug!("{} rejected: {}", action.as_str(), err.code());
                self.message = Some(err.message().to_owned());
            }
        }
    }

    fn describe(&self, outcome: ActionOutcome) -> Option<String> {
        let name = |id| {
            self.session
                .ic(id)
                .map(|ic| ic.display_name().to_owned())
                .unwrap_or_default()
        };
        match outcome {
            ActionOutcome::CursorMoved | ActionOutcome::IcMoved(_) => None,
            ActionOutcome::Rotated(id) => Some(format!("rotated {}", name(id))),
            ActionOutcome::Attached(id) => Some(format!("holding {}", name(id))),
            ActionOutcome::Released => Some("released".to_owned()),
            ActionOutcome::SentOutside(id) => Some(format!("{} moved outside", name(id))),
            ActionOutcome::BroughtInside(id) => Some(format!("{} placed", name(id))),
            ActionOutcome::PoolPicked(id) => Some(format!("next to place: {}", name(id))),
        }
    }

    fn save(&mut self) -> Result<()> {
        save_project_file(&self.paths.project, self.session.ics())
            .with_context(|| format!("failed to write {}", self.paths.project.display()))?;
        log::info!("saved {}", self.paths.project.display());
        self.dirty = false;
        Ok(())
    }
}
