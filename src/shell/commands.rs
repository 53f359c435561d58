/// A line typed at the shell prompt, after normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    Compute,
    Quit,
    Empty,
    Unknown(String), // trimmed text as the user typed it
}

impl ShellCommand {
    /// Trim and case-fold `input`, then match it against the known aliases
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.to_lowercase().as_str() {
            "help" | "h" | "ayuda" => ShellCommand::Help,
            "calcular" | "calc" | "c" => ShellCommand::Compute,
            "salir" | "exit" | "quit" | "q" => ShellCommand::Quit,
            "" => ShellCommand::Empty,
            _ => ShellCommand::Unknown(trimmed.to_string()),
        }
    }
}
