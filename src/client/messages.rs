//! User-facing texts of the form client

pub const APP_TITLE: &str = "Materials Management";

pub const TITLE_LIST: &str = "Materials";
pub const TITLE_CREATE: &str = "New Material";
pub const TITLE_EDIT: &str = "Edit Material";

pub const DIALOG_SUCCESS: &str = "Success";
pub const DIALOG_ERROR: &str = "Error";
pub const DIALOG_WARNING: &str = "Warning";
pub const DIALOG_CONFIRM_DELETE: &str = "Confirm Deletion";

pub const SUCCESS_CREATE: &str = "Material created successfully!";
pub const SUCCESS_UPDATE: &str = "Material updated successfully!";
pub const SUCCESS_DELETE: &str = "Material deleted successfully!";
pub const ERROR_CREATE: &str = "Error creating material.";
pub const ERROR_UPDATE: &str = "Error updating material.";
pub const ERROR_DELETE: &str = "Error deleting material.";
pub const ERROR_API: &str = "Error connecting to the API";
pub const REQUIRED_NAME: &str = "The material name is required.";
pub const REQUIRED_DESCRIPTION: &str = "The material description is required.";
pub const SELECT_MATERIAL: &str = "Select a material for this operation.";
pub const NO_CHANGES: &str = "No changes to save.";
pub const OFFLINE_FALLBACK: &str = "The API is unreachable. Showing placeholder data; changes cannot be saved.";
pub const UNKNOWN_COMMAND: &str = "Unknown command.";

pub const LIST_COMMANDS: &str = "[n] new  [e <id>] edit  [d <id>] delete  [r] refresh  [q] quit";
pub const CREATE_ACTIONS: &str = "[s]ave  [c]lear  [b]ack";
pub const EDIT_ACTIONS: &str = "[s]ave  [c]ancel";

pub fn confirm_delete(name: &str) -> String {
    format!("Do you really want to delete the material '{}'?", name)
}

/// Append the underlying failure to a headline message
pub fn with_detail(headline: &str, detail: &dyn std::fmt::Display) -> String {
    format!("{}\n{}", headline, detail)
}
