pub mod commands;
pub mod input;
pub mod prompts;
pub mod repl;
