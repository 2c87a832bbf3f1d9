/// Check if a command exists in PATH (or is a path to an executable)
pub fn command_exists(command: &str) -> bool {
    let found = which::which(command).is_ok();
    if !found {
        log::debug!("{} not found in PATH", command);
    }
    found
}
