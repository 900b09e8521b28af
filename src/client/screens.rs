//! Screen state and list-screen commands

use crate::model::Material;

/// The single active screen of the form client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Table of all materials
    List,
    /// Empty form for a new material
    Create,
    /// Form preloaded with an existing material
    Edit(Material),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::List => "list",
            Screen::Create => "create",
            Screen::Edit(_) => "edit",
        }
    }
}

/// What a screen asks the application to do after handling one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Go(Screen),
    Quit,
}

/// A command typed on the list screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListCommand {
    New,
    Refresh,
    Quit,
    /// Edit the row with this id; `None` when no id was given
    Edit(Option<i32>),
    /// Delete the row with this id; `None` when no id was given
    Delete(Option<i32>),
    Unknown(String),
}

impl ListCommand {
    pub fn parse(input: &str) -> Self {
        let mut parts = input.split_whitespace();
        let verb = parts.next().unwrap_or("").to_lowercase();
        let id = parts.next().and_then(|s| s.parse::<i32>().ok());

        match verb.as_str() {
            "n" | "new" => ListCommand::New,
            "r" | "refresh" => ListCommand::Refresh,
            "q" | "quit" => ListCommand::Quit,
            "e" | "edit" => ListCommand::Edit(id),
            "d" | "delete" => ListCommand::Delete(id),
            _ => ListCommand::Unknown(input.trim().to_string()),
        }
    }
}

/// An action typed below a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Save,
    Clear,
    Back,
    Unknown,
}

impl FormAction {
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "s" | "save" => FormAction::Save,
            "c" | "clear" | "cancel" => FormAction::Clear,
            "b" | "back" => FormAction::Back,
            _ => FormAction::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_commands() {
        assert_eq!(ListCommand::parse("n"), ListCommand::New);
        assert_eq!(ListCommand::parse(" R "), ListCommand::Refresh);
        assert_eq!(ListCommand::parse("q"), ListCommand::Quit);
        assert_eq!(ListCommand::parse("e 3"), ListCommand::Edit(Some(3)));
        assert_eq!(ListCommand::parse("delete 12"), ListCommand::Delete(Some(12)));
        assert_eq!(ListCommand::parse("d"), ListCommand::Delete(None));
        assert_eq!(ListCommand::parse("e abc"), ListCommand::Edit(None));
        assert_eq!(
            ListCommand::parse("zap"),
            ListCommand::Unknown("zap".to_string())
        );
    }

    #[test]
    fn test_parse_form_actions() {
        assert_eq!(FormAction::parse("s"), FormAction::Save);
        assert_eq!(FormAction::parse("cancel"), FormAction::Clear);
        assert_eq!(FormAction::parse("b"), FormAction::Back);
        assert_eq!(FormAction::parse("x"), FormAction::Unknown);
    }
}
