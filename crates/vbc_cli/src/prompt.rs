//! Terminal decision source.
//!
//! Asks the user how to resolve each collision. Generic over the reader and
//! writer so tests can drive it from memory.

use std::io::{BufRead, Write};

use vbc_core::phonemes::{Collision, Decision, DecisionSource, PhonemePair};

/// Prompts on a line-based terminal.
///
/// Once input is closed every question gets its default answer: first
/// label keeps, other labels keep, duplicates are refused.
pub struct TerminalDecisions<R, W> {
    input: R,
    output: W,
    closed: bool,
}

impl<R: BufRead, W: Write> TerminalDecisions<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            closed: false,
        }
    }

    /// Print `prompt` and read one trimmed line. `None` once input is closed.
    fn ask(&mut self, prompt: &str) -> Option<String> {
        if self.closed {
            return None;
        }

        // A broken terminal just means no more answers.
        if write!(self.output, "{}", prompt).and_then(|_| self.output.flush()).is_err() {
            self.closed = true;
            return None;
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => {
                tracing::warn!("Input closed, using default answers");
                self.closed = true;
                None
            }
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn say(&mut self, message: &str) {
        if writeln!(self.output, "{}", message).is_err() {
            self.closed = true;
        }
    }
}

/// Parse `"consonant vowel"`.
fn parse_pair(answer: &str) -> Option<PhonemePair> {
    let mut tokens = answer.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(consonant), Some(vowel), None) => Some(PhonemePair::new(consonant, vowel)),
        _ => None,
    }
}

impl<R: BufRead, W: Write> DecisionSource for TerminalDecisions<R, W> {
    fn choose_keeper(&mut self, collision: &Collision) -> Option<String> {
        self.say(&format!("\nLabels sharing [{}]:", collision.pair));
        for (i, label) in collision.labels.iter().enumerate() {
            self.say(&format!("  {}) {}", i + 1, label));
        }

        loop {
            let answer = self.ask("Label to keep this pair [1]: ")?;
            if answer.is_empty() {
                return None;
            }
            if let Ok(n) = answer.parse::<usize>() {
                if (1..=collision.labels.len()).contains(&n) {
                    return Some(collision.labels[n - 1].clone());
                }
            }
            if collision.labels.contains(&answer) {
                return Some(answer);
            }
            self.say("Enter a number from the list or one of the labels.");
        }
    }

    fn resolve(&mut self, label: &str, collision: &Collision) -> Decision {
        loop {
            let prompt = format!(
                "New 'consonant vowel' for '{}' (empty keeps [{}]): ",
                label, collision.pair
            );
            let Some(answer) = self.ask(&prompt) else {
                return Decision::Keep;
            };
            if answer.is_empty() {
                return Decision::Keep;
            }
            match parse_pair(&answer) {
                Some(pair) => return Decision::Assign(pair),
                None => self.say("Expected two symbols separated by a space, e.g. 'dj i'."),
            }
        }
    }

    fn rejected(&mut self, _label: &str, pair: &PhonemePair, holder: &str) {
        self.say(&format!("[{}] is already used by '{}'.", pair, holder));
    }

    fn accept_duplicates(&mut self, remaining: &[Collision]) -> bool {
        self.say(&format!("\n{} collisions remain:", remaining.len()));
        for collision in remaining {
            self.say(&format!("  [{}] {}", collision.pair, collision.labels.join(", ")));
        }

        match self.ask("Keep them as duplicates? [y/N]: ") {
            Some(answer) => matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"),
            None => false,
        }
    }
}
