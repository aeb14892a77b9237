pub mod cli;
pub mod options;
pub mod plugin;
pub mod text;
