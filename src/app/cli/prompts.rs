use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input, Select};

use crate::domain::{AppError, Platform};

pub(super) fn prompt_platform() -> Result<Option<Platform>, AppError> {
    let items: Vec<&str> = Platform::ALL.iter().map(|platform| platform.dir_name()).collect();
    let selection = Select::new()
        .with_prompt("Select platform")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Validation(format!("Failed to select platform: {}", err)))?;

    Ok(selection.map(|index| Platform::ALL[index]))
}

pub(super) fn prompt_project_name(default: &str) -> Result<Option<String>, AppError> {
    match Input::<String>::new()
        .with_prompt("Project name")
        .default(default.to_string())
        .interact_text()
    {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Validation(format!("Failed to read project name: {}", err))),
    }
}

pub(super) fn prompt_project_dir() -> Result<Option<String>, AppError> {
    match Input::<String>::new().with_prompt("Project directory").interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Validation(format!("Failed to read project directory: {}", err))),
    }
}
