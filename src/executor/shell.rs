use std::path::Path;
use std::process::Command;

/// The program that interprets command lines, plus the flag that
/// introduces the command string (`sh -c`, `cmd /C`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    program: String,
    command_flag: String,
}

impl Shell {
    /// `sh` on Unix, `cmd` on Windows
    pub fn platform_default() -> Self {
        if cfg!(windows) {
            Self::from_program("cmd")
        } else {
            Self::from_program("sh")
        }
    }

    pub fn from_program(program: &str) -> Self {
        let stem = Path::new(program)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(program)
            .to_ascii_lowercase();

        let command_flag = match stem.as_str() {
            "cmd" => "/C",
            "powershell" | "pwsh" => "-Command",
            _ => "-c",
        };

        Self {
            program: program.to_string(),
            command_flag: command_flag.to_string(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Build a child process running `line` with `dir` as its working directory.
    /// The caller's own working directory is left untouched.
    pub fn command(&self, line: &str, dir: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(&self.command_flag).arg(line).current_dir(dir);
        cmd
    }
}
