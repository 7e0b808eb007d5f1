//! Menu-driven interaction state machine.
//!
//! # Responsibility
//! - Render menus, read commands and dispatch to capture/delete/complete/move
//!   flows.
//! - Validate user input before touching the store.
//! - Persist after every successful mutation.
//!
//! # Invariants
//! - Every failure is turned into a user-visible notice; nothing here
//!   terminates the process.
//! - Reopening a closed task requires an explicit `Y`.
//! - The move flow addresses the task by id after selection, so an aborted
//!   destination prompt leaves the task where it was.
//! - End of input walks back up the menu tree until `Terminated`.

use crate::model::category::Category;
use crate::model::task::TaskStatus;
use crate::store::persist::{load_store, save_store};
use crate::store::task_store::TaskStore;
use crate::store::{parse_index, StoreResult};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

pub mod confirm;
pub mod menu;
pub mod terminal;

use confirm::Confirmation;
use menu::{category_header, task_line, CategoryCommand, InspectCommand, MenuState, TopCommand};
use terminal::Terminal;

/// Banner shown at the top of the main menu.
pub const BANNER: &str = "Welcome to your GTD app";

const REOPEN_QUESTION: &str = "You are about to reopen a closed task. Are you sure? [Y]es/[N]o";
const LIST_RULE: &str = "~~~~~~~~~~~~~~";

/// One interactive run bound to a store file and a terminal.
pub struct Session<T: Terminal> {
    store: TaskStore,
    store_path: PathBuf,
    terminal: T,
    state: MenuState,
    notices: Vec<String>,
}

impl<T: Terminal> Session<T> {
    /// Loads the store at `store_path` (with repair) and starts at `Top`.
    ///
    /// Load diagnostics are shown on the first repaint.
    pub fn open(store_path: impl Into<PathBuf>, terminal: T) -> Self {
        let store_path = store_path.into();
        let loaded = load_store(&store_path);
        let mut session = Self::with_store(loaded.store, store_path, terminal);
        session
            .notices
            .extend(loaded.issues.iter().map(ToString::to_string));
        session
    }

    /// Starts a session over an already loaded store.
    pub fn with_store(store: TaskStore, store_path: impl Into<PathBuf>, terminal: T) -> Self {
        Self {
            store,
            store_path: store_path.into(),
            terminal,
            state: MenuState::Top,
            notices: Vec::new(),
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Notices queued for the next repaint.
    pub fn pending_notices(&self) -> &[String] {
        &self.notices
    }

    pub fn into_parts(self) -> (TaskStore, T) {
        (self.store, self.terminal)
    }

    /// Runs until the user quits from the main menu or input ends.
    pub fn run(&mut self) {
        info!("event=session_run module=session status=start");
        while self.state != MenuState::Terminated {
            self.step();
        }
        info!("event=session_run module=session status=ok");
    }

    /// Renders the current menu, handles one command and returns the new state.
    pub fn step(&mut self) -> MenuState {
        let next = match self.state {
            MenuState::Top => self.top_menu(),
            MenuState::Inspect => self.inspect_menu(),
            MenuState::Category(category) => self.category_menu(category),
            MenuState::Terminated => MenuState::Terminated,
        };
        if next != self.state {
            debug!(
                "event=session_state module=session status=ok from={} to={}",
                self.state.name(),
                next.name()
            );
        }
        self.state = next;
        next
    }

    fn top_menu(&mut self) -> MenuState {
        self.repaint(BANNER, None);
        let Some(input) = self.terminal.prompt(TopCommand::PROMPT) else {
            return MenuState::Top.parent();
        };
        match TopCommand::parse(&input) {
            Some(TopCommand::Capture) => {
                self.capture(Category::Inbox);
                MenuState::Top
            }
            Some(TopCommand::Inspect) => MenuState::Inspect,
            Some(TopCommand::Quit) => MenuState::Terminated,
            None => {
                self.unrecognized(&input);
                MenuState::Top
            }
        }
    }

    fn inspect_menu(&mut self) -> MenuState {
        self.repaint(BANNER, None);
        for category in Category::ALL {
            let line = format!("{} ({})", category.menu_entry(), self.store.len(category));
            self.terminal.write_line(&line);
        }
        self.terminal.write_line("[B]ack");
        let Some(input) = self.terminal.prompt(InspectCommand::PROMPT) else {
            return MenuState::Inspect.parent();
        };
        match InspectCommand::parse(&input) {
            Some(InspectCommand::Open(category)) => MenuState::Category(category),
            Some(InspectCommand::Back) => MenuState::Top,
            None => {
                self.unrecognized(&input);
                MenuState::Inspect
            }
        }
    }

    fn category_menu(&mut self, category: Category) -> MenuState {
        let state = MenuState::Category(category);
        self.repaint(&category_header(category), Some(category));
        let Some(input) = self.terminal.prompt(CategoryCommand::PROMPT) else {
            return state.parent();
        };
        match CategoryCommand::parse(&input) {
            Some(CategoryCommand::Add) => self.capture(category),
            Some(CategoryCommand::Delete) => self.delete(category),
            Some(CategoryCommand::Complete) => self.complete(category),
            Some(CategoryCommand::Move) => self.move_task(category),
            Some(CategoryCommand::Back) => return state.parent(),
            None => self.unrecognized(&input),
        }
        state
    }

    /// Prompts for a title and appends it to `category`.
    pub fn capture(&mut self, category: Category) {
        let Some(title) = self.terminal.prompt("Enter task: ") else {
            return;
        };
        let outcome = self.store.append(category, &title).map(|_| ());
        if self.report(outcome, "task_capture", category) {
            self.notice("Added task");
            self.persist();
        }
    }

    /// Prompts for a position and deletes that task.
    pub fn delete(&mut self, category: Category) {
        let Some(index) = self.read_index("Task number to delete: ") else {
            return;
        };
        let outcome = self
            .store
            .task_id_at(category, index)
            .and_then(|task_id| self.store.remove_by_id(category, task_id))
            .map(|_| ());
        if self.report(outcome, "task_delete", category) {
            self.notice("Done");
            self.persist();
        }
    }

    /// Prompts for a position and toggles its status.
    ///
    /// Closing is immediate; reopening asks for confirmation first and a `N`
    /// leaves the task closed without saving.
    pub fn complete(&mut self, category: Category) {
        let Some(index) = self.read_index("Task number to complete: ") else {
            return;
        };
        let selected = self
            .store
            .task_id_at(category, index)
            .and_then(|task_id| Ok((task_id, self.store.is_reopen(category, index)?)));
        let (task_id, reopen) = match selected {
            Ok(selected) => selected,
            Err(err) => {
                self.notice(format!("ERROR: {err}"));
                return;
            }
        };
        if reopen && Confirmation::ask(&mut self.terminal, REOPEN_QUESTION) == Confirmation::No {
            self.notice("Task left closed");
            return;
        }

        match self.store.toggle_status_by_id(category, task_id) {
            Ok(status) => {
                info!(
                    "event=task_toggle module=session status=ok category={:?} task_status={:?}",
                    category.label(),
                    status
                );
                self.notice(match status {
                    TaskStatus::Closed => "Marked task complete",
                    TaskStatus::Open => "Reopened task",
                });
                self.persist();
            }
            Err(err) => self.notice(format!("ERROR: {err}")),
        }
    }

    /// Lists tasks, asks which one to move and where, then moves it.
    pub fn move_task(&mut self, source: Category) {
        self.terminal.clear();
        self.terminal.write_line("Tasks:");
        self.terminal.write_line("");
        self.write_listing(source);

        let Some(index) = self.read_index("Which task would you like to move? ") else {
            return;
        };
        let task_id = match self.store.task_id_at(source, index) {
            Ok(task_id) => task_id,
            Err(err) => {
                self.notice(format!("ERROR: {err}"));
                return;
            }
        };

        self.terminal.write_line("Where would you like to move this to?");
        for category in Category::ALL.into_iter().filter(|dest| *dest != source) {
            self.terminal.write_line(&category.menu_entry());
        }
        let Some(answer) = self.terminal.read_line() else {
            return;
        };
        let dest = match Category::from_code(&answer) {
            Ok(dest) => dest,
            Err(err) => {
                self.notice(format!("ERROR: {err}"));
                return;
            }
        };

        let outcome = self.store.move_by_id(source, task_id, dest);
        if self.report(outcome, "task_move", source) {
            self.notice(format!("Moved task to {dest}"));
            self.persist();
        }
    }

    /// Saves the store; failures become a notice and memory stays as is.
    fn persist(&mut self) {
        if let Err(err) = save_store(&self.store, &self.store_path) {
            self.notice(format!("ERROR: {err}. Check permissions."));
        }
    }

    fn read_index(&mut self, prompt: &str) -> Option<usize> {
        let input = self.terminal.prompt(prompt)?;
        match parse_index(&input) {
            Ok(index) => Some(index),
            Err(err) => {
                self.notice(format!("ERROR: {err}"));
                None
            }
        }
    }

    /// Logs a mutation outcome and queues its error; returns success.
    fn report(
        &mut self,
        outcome: StoreResult<()>,
        event: &str,
        category: Category,
    ) -> bool {
        match outcome {
            Ok(()) => {
                info!(
                    "event={event} module=session status=ok category={:?}",
                    category.label()
                );
                true
            }
            Err(err) => {
                warn!(
                    "event={event} module=session status=rejected category={:?} error={}",
                    category.label(),
                    err
                );
                self.notice(format!("ERROR: {err}"));
                false
            }
        }
    }

    fn unrecognized(&mut self, input: &str) {
        self.notice(format!("Option not recognized: `{}`", input.trim()));
    }

    fn notice(&mut self, message: impl Into<String>) {
        self.notices.push(message.into());
    }

    fn repaint(&mut self, title: &str, listing: Option<Category>) {
        self.terminal.clear();
        self.terminal.write_line(title);
        for notice in self.notices.drain(..) {
            self.terminal.write_line(&notice);
        }
        if let Some(category) = listing {
            self.terminal.write_line("");
            self.write_listing(category);
            self.terminal.write_line(LIST_RULE);
            self.terminal.write_line("");
        }
    }

    fn write_listing(&mut self, category: Category) {
        for (index, task) in self.store.tasks(category).iter().enumerate() {
            self.terminal.write_line(&task_line(index, task));
        }
    }
}
