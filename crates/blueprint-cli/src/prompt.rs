use blueprint::{Collision, ResolveCollision, Suffix};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

/// Asks for a replacement whenever a relationship name is already taken.
///
/// The suggested answer is the name [`Suffix`] would pick. Names that are
/// still taken on the table are refused at the prompt.
#[derive(Debug, Default)]
pub struct Prompt;

impl ResolveCollision for Prompt {
    fn resolve(&mut self, collision: &Collision<'_>) -> blueprint::Result<String> {
        let suggestion = Suffix.resolve(collision)?;
        let theme = theme();

        println!(
            "  {} relationship {} is already defined on {}",
            style("!").yellow().bold(),
            style(collision.proposed).cyan(),
            style(collision.table).cyan().bold()
        );

        let name = Input::<String>::with_theme(&theme)
            .with_prompt("Relationship name")
            .default(suggestion)
            .validate_with(|input: &String| -> Result<(), String> {
                if input.trim().is_empty() {
                    Err("name must not be empty".to_string())
                } else if collision.is_taken(input.trim()) {
                    Err(format!("`{}` is already taken", input.trim()))
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map_err(anyhow::Error::from)?;

        Ok(name.trim().to_string())
    }
}

/// Asks a yes/no question defaulting to no. `assume_yes` answers without
/// prompting.
pub(crate) fn confirm(question: &str, assume_yes: bool) -> anyhow::Result<bool> {
    if assume_yes {
        return Ok(true);
    }

    Ok(Confirm::with_theme(&theme())
        .with_prompt(question)
        .default(false)
        .interact()?)
}

/// Prompt theme shared by every interactive question
pub(crate) fn theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_style: console::Style::new().bold(),
        prompt_prefix: style("?".to_string()).yellow().bold(),
        success_prefix: style("✔".to_string()).green().bold(),
        error_prefix: style("✖".to_string()).red().bold(),
        hint_style: console::Style::new().dim(),
        values_style: console::Style::new().cyan(),
        defaults_style: console::Style::new().cyan().dim(),
        ..Default::default()
    }
}
