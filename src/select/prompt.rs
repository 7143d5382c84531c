use std::io::{self, BufRead, IsTerminal, Write};

use tracing::debug;

use crate::profile::ProfileCatalog;

use super::{ProfileSelector, SelectionError, ValueSelector};

const PROFILE_TITLE: &str = "Select an AWS profile";

/// Numbered-list picker on stderr/stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptSelector;

impl ProfileSelector for PromptSelector {
    fn select_profile(
        &self,
        catalog: &ProfileCatalog,
        pattern: &str,
    ) -> Result<String, SelectionError> {
        let candidates = catalog.filter(pattern);
        let labels: Vec<&str> = candidates
            .iter()
            .map(|profile| profile.display_profile_name.as_str())
            .collect();

        let index = choose(PROFILE_TITLE, &labels)?;
        Ok(candidates[index].profile_name.clone())
    }
}

impl ValueSelector for PromptSelector {
    fn select_value(&self, values: &[String], title: &str) -> Result<String, SelectionError> {
        let labels: Vec<&str> = values.iter().map(String::as_str).collect();
        let index = choose(title, &labels)?;
        Ok(values[index].clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Index(usize),
    Quit,
}

fn choose(title: &str, labels: &[&str]) -> Result<usize, SelectionError> {
    match labels.len() {
        0 => return Err(SelectionError::Failed("no matching entries".to_string())),
        1 => {
            debug!(entry = labels[0], "single candidate, selecting without prompt");
            return Ok(0);
        }
        _ => {}
    }

    if !io::stdin().is_terminal() {
        return Err(SelectionError::Failed(
            "interactive selection requires a terminal".to_string(),
        ));
    }

    let mut stderr = io::stderr();
    writeln!(stderr, "{title}")?;
    for (index, label) in labels.iter().enumerate() {
        writeln!(stderr, "{:>3}. {label}", index + 1)?;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        write!(stderr, "choice [1-{}, q to quit]: ", labels.len())?;
        stderr.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(SelectionError::Cancelled);
        }

        match parse_choice(&line, labels.len()) {
            Ok(Choice::Index(index)) => return Ok(index),
            Ok(Choice::Quit) => return Err(SelectionError::Cancelled),
            Err(message) => writeln!(stderr, "{message}")?,
        }
    }
}

fn parse_choice(input: &str, count: usize) -> Result<Choice, String> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return Ok(Choice::Quit);
    }

    match input.parse::<usize>() {
        Ok(number) if (1..=count).contains(&number) => Ok(Choice::Index(number - 1)),
        _ => Err(format!("enter a number between 1 and {count}, or q to quit")),
    }
}
