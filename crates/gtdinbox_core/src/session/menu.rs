//! Menu states, command parsing and listing lines.

use crate::model::category::Category;
use crate::model::task::Task;

/// Where the session currently is.
///
/// `Terminated` is only reachable from `Top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Top,
    Inspect,
    Category(Category),
    Terminated,
}

impl MenuState {
    /// Parent state reached by back/quit or end of input.
    pub fn parent(self) -> Self {
        match self {
            Self::Top | Self::Terminated => Self::Terminated,
            Self::Inspect => Self::Top,
            Self::Category(_) => Self::Inspect,
        }
    }

    /// Short name used in log events.
    pub fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Inspect => "inspect",
            Self::Category(_) => "category",
            Self::Terminated => "terminated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopCommand {
    Capture,
    Inspect,
    Quit,
}

impl TopCommand {
    pub const PROMPT: &'static str = "Would you like to [C]apture, [I]nspect or [Q]uit?";

    pub fn parse(input: &str) -> Option<Self> {
        match normalize_command(input).as_str() {
            "C" => Some(Self::Capture),
            "I" => Some(Self::Inspect),
            "Q" => Some(Self::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectCommand {
    Open(Category),
    Back,
}

impl InspectCommand {
    pub const PROMPT: &'static str = "What would you like to inspect?";

    pub fn parse(input: &str) -> Option<Self> {
        let command = normalize_command(input);
        match command.as_str() {
            // `Q` kept as an alias; the menu used to label this entry "[Q]uit".
            "B" | "Q" => Some(Self::Back),
            other => Category::from_code(other).ok().map(Self::Open),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryCommand {
    Add,
    Delete,
    Complete,
    Move,
    Back,
}

impl CategoryCommand {
    pub const PROMPT: &'static str =
        "Would you like to [A]dd, [D]elete, [C]omplete, [M]ove or go [B]ack?";

    pub fn parse(input: &str) -> Option<Self> {
        match normalize_command(input).as_str() {
            "A" => Some(Self::Add),
            "D" => Some(Self::Delete),
            "C" => Some(Self::Complete),
            "M" => Some(Self::Move),
            "B" => Some(Self::Back),
            _ => None,
        }
    }
}

/// Trims and upper-cases raw input for command dispatch.
pub fn normalize_command(input: &str) -> String {
    input.trim().to_uppercase()
}

/// One listing row: `0. [ ] Buy milk (created: 2024-01-01 09:00:00)`.
pub fn task_line(index: usize, task: &Task) -> String {
    format!(
        "{index}. {} {} (created: {})",
        task.status().glyph(),
        task.title(),
        task.created_at_display()
    )
}

/// Header framing a category listing, e.g. `~~~~NEXT ACTIONS~~~~`.
pub fn category_header(category: Category) -> String {
    format!("~~~~{}~~~~", category.label().to_uppercase())
}
