use crate::core::Theme;
use crate::state::Session;
use crate::storage::Storage;
use clap::{Args, ValueEnum};

#[derive(Args, Debug)]
pub struct ThemeCommand {
    /// Change the theme; shows the current one when omitted
    #[arg(value_enum)]
    action: Option<ThemeAction>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeAction {
    Toggle,
    Light,
    Dark,
}

impl ThemeCommand {
    pub fn exec<S: Storage>(&self, session: &mut Session<S>) -> anyhow::Result<()> {
        match self.action {
            None => println!("{} mode", label(session.theme())),
            Some(ThemeAction::Toggle) => {
                let next = session.toggle_theme()?;
                println!("Switched to {} mode", next);
            }
            Some(ThemeAction::Light) => {
                session.set_theme(Theme::Light)?;
                println!("Switched to light mode");
            }
            Some(ThemeAction::Dark) => {
                session.set_theme(Theme::Dark)?;
                println!("Switched to dark mode");
            }
        }
        Ok(())
    }
}

fn label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "Light",
        Theme::Dark => "Dark",
    }
}
