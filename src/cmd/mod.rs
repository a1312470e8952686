pub mod chart;
pub mod expenses;
pub mod persona;
pub mod schema;
pub mod summary;
pub mod tax;
pub mod theme;

use crate::core::{Category, Persona};
use crate::state::Session;
use crate::storage::FileStorage;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Options shared by every command
#[derive(Args, Debug)]
pub struct GlobalOpts {
    /// Directory holding the saved state
    #[arg(
        long,
        global = true,
        env = "SMARTPOCKET_DATA_DIR",
        default_value = ".smartpocket"
    )]
    pub data_dir: PathBuf,

    /// Use the dark theme when no theme has been chosen yet
    #[arg(long, global = true, env = "SMARTPOCKET_PREFERS_DARK")]
    pub prefers_dark: bool,
}

impl GlobalOpts {
    pub fn open_session(&self) -> Session<FileStorage> {
        let storage = FileStorage::new(&self.data_dir);
        log::debug!("Using data directory {}", storage.dir().display());
        Session::open(storage, self.prefers_dark)
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PersonaArg {
    Student,
    Professional,
    Senior,
}

impl From<PersonaArg> for Persona {
    fn from(arg: PersonaArg) -> Self {
        match arg {
            PersonaArg::Student => Persona::Student,
            PersonaArg::Professional => Persona::Professional,
            PersonaArg::Senior => Persona::Senior,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Bills,
    Health,
    Education,
    Other,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Food => Category::Food,
            CategoryArg::Transport => Category::Transport,
            CategoryArg::Entertainment => Category::Entertainment,
            CategoryArg::Shopping => Category::Shopping,
            CategoryArg::Bills => Category::Bills,
            CategoryArg::Health => Category::Health,
            CategoryArg::Education => Category::Education,
            CategoryArg::Other => Category::Other,
        }
    }
}
