//! Persona selection and savings tips

use super::PersonaArg;
use crate::core::{tips_for, Persona};
use crate::state::Session;
use crate::storage::Storage;
use clap::Args;

#[derive(Args, Debug)]
pub struct PersonaCommand {
    /// Age group to select
    #[arg(value_enum)]
    persona: PersonaArg,
}

impl PersonaCommand {
    pub fn exec<S: Storage>(&self, session: &mut Session<S>) -> anyhow::Result<()> {
        let persona: Persona = self.persona.into();
        session.select_persona(persona)?;
        println!("Selected {}", persona.label());
        print_tips(Some(persona));
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct TipsCommand {}

impl TipsCommand {
    pub fn exec<S: Storage>(&self, session: &Session<S>) -> anyhow::Result<()> {
        print_tips(session.state().age_group);
        Ok(())
    }
}

fn print_tips(persona: Option<Persona>) {
    match persona {
        Some(persona) => {
            println!();
            println!("SAVINGS TIPS ({})", persona.label());
            for tip in tips_for(Some(persona)) {
                println!("  - {}", tip);
            }
            println!();
        }
        None => println!("Select an age group to see savings tips: smartpocket persona <student|professional|senior>"),
    }
}
