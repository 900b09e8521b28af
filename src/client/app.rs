//! # Form Application
//!
//! Three screens over one [`MaterialsApi`]. Exactly one [`Screen`] is active
//! at a time and [`FormApp::navigate`] is the only way to change it.

use tracing::{debug, warn};

use crate::model::{Material, MaterialPatch, NewMaterial};

use super::api::MaterialsApi;
use super::console::{Console, DialogKind};
use super::errors::ClientResult;
use super::messages as msg;
use super::placeholder::placeholder_materials;
use super::screens::{FormAction, ListCommand, Screen, Transition};

/// The interactive materials client
pub struct FormApp<A, C> {
    api: A,
    console: C,
    screen: Screen,
    materials: Vec<Material>,
    offline_fallback: bool,
}

impl<A: MaterialsApi, C: Console> FormApp<A, C> {
    pub fn new(api: A, console: C) -> Self {
        Self {
            api,
            console,
            screen: Screen::List,
            materials: Vec::new(),
            offline_fallback: false,
        }
    }

    /// Show placeholder data on the list screen when the API is unreachable
    pub fn with_offline_fallback(mut self, enabled: bool) -> Self {
        self.offline_fallback = enabled;
        self
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Materials currently shown on the list screen
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn into_parts(self) -> (A, C) {
        (self.api, self.console)
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> ClientResult<()> {
        self.console.title(msg::APP_TITLE)?;
        self.navigate(Screen::List)?;

        loop {
            let transition = match self.screen.clone() {
                Screen::List => self.list_screen()?,
                Screen::Create => self.create_screen()?,
                Screen::Edit(material) => self.edit_screen(&material)?,
            };

            match transition {
                Transition::Stay => {}
                Transition::Go(screen) => self.navigate(screen)?,
                Transition::Quit => return Ok(()),
            }
        }
    }

    /// Activate a screen. Entering the list reloads it from the API.
    pub fn navigate(&mut self, screen: Screen) -> ClientResult<()> {
        debug!(from = self.screen.name(), to = screen.name(), "navigate");
        if screen == Screen::List {
            self.load_materials()?;
        }
        self.screen = screen;
        Ok(())
    }

    fn load_materials(&mut self) -> ClientResult<()> {
        match self.api.list() {
            Ok(materials) => self.materials = materials,
            Err(e) if e.is_unreachable() && self.offline_fallback => {
                warn!(error = %e, "API unreachable, showing placeholder data");
                self.console
                    .dialog(DialogKind::Warning, msg::DIALOG_WARNING, msg::OFFLINE_FALLBACK)?;
                self.materials = placeholder_materials();
            }
            Err(e) => {
                self.console.dialog(
                    DialogKind::Error,
                    msg::DIALOG_ERROR,
                    &msg::with_detail(msg::ERROR_API, &e),
                )?;
                self.materials.clear();
            }
        }
        Ok(())
    }

    fn selected(&self, id: Option<i32>) -> Option<Material> {
        let id = id?;
        self.materials.iter().find(|m| m.id == id).cloned()
    }

    // ==================
    // List Screen
    // ==================

    fn list_screen(&mut self) -> ClientResult<Transition> {
        self.console.title(msg::TITLE_LIST)?;
        self.console.table(&self.materials)?;
        self.console.line(msg::LIST_COMMANDS)?;

        let input = match self.console.prompt("> ")? {
            Some(input) => input,
            None => return Ok(Transition::Quit),
        };

        match ListCommand::parse(&input) {
            ListCommand::New => Ok(Transition::Go(Screen::Create)),
            ListCommand::Refresh => {
                self.load_materials()?;
                Ok(Transition::Stay)
            }
            ListCommand::Quit => Ok(Transition::Quit),
            ListCommand::Edit(id) => match self.selected(id) {
                Some(material) => Ok(Transition::Go(Screen::Edit(material))),
                None => {
                    self.console
                        .dialog(DialogKind::Warning, msg::DIALOG_WARNING, msg::SELECT_MATERIAL)?;
                    Ok(Transition::Stay)
                }
            },
            ListCommand::Delete(id) => {
                match self.selected(id) {
                    Some(material) => self.delete_material(&material)?,
                    None => self.console.dialog(
                        DialogKind::Warning,
                        msg::DIALOG_WARNING,
                        msg::SELECT_MATERIAL,
                    )?,
                }
                Ok(Transition::Stay)
            }
            ListCommand::Unknown(_) => {
                self.console
                    .dialog(DialogKind::Warning, msg::DIALOG_WARNING, msg::UNKNOWN_COMMAND)?;
                Ok(Transition::Stay)
            }
        }
    }

    fn delete_material(&mut self, material: &Material) -> ClientResult<()> {
        let question = msg::confirm_delete(&material.name);
        if !self.console.confirm(msg::DIALOG_CONFIRM_DELETE, &question)? {
            return Ok(());
        }

        match self.api.delete(material.id) {
            Ok(_) => {
                self.console
                    .dialog(DialogKind::Info, msg::DIALOG_SUCCESS, msg::SUCCESS_DELETE)?;
                self.load_materials()
            }
            Err(e) => self.console.dialog(
                DialogKind::Error,
                msg::DIALOG_ERROR,
                &msg::with_detail(msg::ERROR_DELETE, &e),
            ),
        }
    }

    // ==================
    // Create Screen
    // ==================

    fn create_screen(&mut self) -> ClientResult<Transition> {
        self.console.title(msg::TITLE_CREATE)?;

        let Some(name) = self.console.prompt("Name: ")? else {
            return Ok(Transition::Quit);
        };
        let Some(description) = self.console.prompt("Description: ")? else {
            return Ok(Transition::Quit);
        };
        let Some(action) = self.console.prompt(&format!("{}: ", msg::CREATE_ACTIONS))? else {
            return Ok(Transition::Quit);
        };

        match FormAction::parse(&action) {
            FormAction::Save => {
                let (name, description) = (name.trim(), description.trim());
                if !self.check_required(name, description)? {
                    return Ok(Transition::Stay);
                }

                match self.api.create(&NewMaterial::new(name, description)) {
                    Ok(_) => self
                        .console
                        .dialog(DialogKind::Info, msg::DIALOG_SUCCESS, msg::SUCCESS_CREATE)?,
                    Err(e) => self.console.dialog(
                        DialogKind::Error,
                        msg::DIALOG_ERROR,
                        &msg::with_detail(msg::ERROR_CREATE, &e),
                    )?,
                }
                Ok(Transition::Stay)
            }
            FormAction::Clear | FormAction::Unknown => Ok(Transition::Stay),
            FormAction::Back => Ok(Transition::Go(Screen::List)),
        }
    }

    /// Client-side required-field check; shows the error dialog on failure
    fn check_required(&mut self, name: &str, description: &str) -> ClientResult<bool> {
        if name.is_empty() {
            self.console
                .dialog(DialogKind::Error, msg::DIALOG_ERROR, msg::REQUIRED_NAME)?;
            return Ok(false);
        }
        if description.is_empty() {
            self.console
                .dialog(DialogKind::Error, msg::DIALOG_ERROR, msg::REQUIRED_DESCRIPTION)?;
            return Ok(false);
        }
        Ok(true)
    }

    // ==================
    // Edit Screen
    // ==================

    fn edit_screen(&mut self, material: &Material) -> ClientResult<Transition> {
        self.console
            .title(&format!("{} - {}", msg::TITLE_EDIT, material.name))?;
        self.console.line(&format!("ID: {}", material.id))?;

        let Some(name) = self.console.prompt(&format!("Name [{}]: ", material.name))? else {
            return Ok(Transition::Quit);
        };
        let Some(description) = self
            .console
            .prompt(&format!("Description [{}]: ", material.description))?
        else {
            return Ok(Transition::Quit);
        };
        let Some(action) = self.console.prompt(&format!("{}: ", msg::EDIT_ACTIONS))? else {
            return Ok(Transition::Quit);
        };

        match FormAction::parse(&action) {
            FormAction::Save => {
                let name = keep_or_replace(&material.name, &name);
                let description = keep_or_replace(&material.description, &description);
                if !self.check_required(name, description)? {
                    return Ok(Transition::Stay);
                }

                let mut patch = MaterialPatch::default();
                if name != material.name {
                    patch = patch.name(name);
                }
                if description != material.description {
                    patch = patch.description(description);
                }
                if patch.is_empty() {
                    self.console
                        .dialog(DialogKind::Warning, msg::DIALOG_WARNING, msg::NO_CHANGES)?;
                    return Ok(Transition::Stay);
                }

                match self.api.update(material.id, &patch) {
                    Ok(_) => {
                        self.console
                            .dialog(DialogKind::Info, msg::DIALOG_SUCCESS, msg::SUCCESS_UPDATE)?;
                        Ok(Transition::Go(Screen::List))
                    }
                    Err(e) => {
                        self.console.dialog(
                            DialogKind::Error,
                            msg::DIALOG_ERROR,
                            &msg::with_detail(msg::ERROR_UPDATE, &e),
                        )?;
                        Ok(Transition::Stay)
                    }
                }
            }
            FormAction::Clear | FormAction::Back => Ok(Transition::Go(Screen::List)),
            FormAction::Unknown => Ok(Transition::Stay),
        }
    }
}

/// A blank answer keeps the current value
fn keep_or_replace<'a>(current: &'a str, answer: &'a str) -> &'a str {
    let answer = answer.trim();
    if answer.is_empty() {
        current.trim()
    } else {
        answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keep_or_replace() {
        assert_eq!(keep_or_replace("Porca M6", ""), "Porca M6");
        assert_eq!(keep_or_replace("Porca M6", "  "), "Porca M6");
        assert_eq!(keep_or_replace("Porca M6", " Porca M8 "), "Porca M8");
    }
}
