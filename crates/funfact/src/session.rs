use crate::client::FactSource;
use crate::display::display_fact;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

pub const PROMPT: &str = "Would you like another fact? (y/n): ";
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user answered something other than `y`/`yes`.
    Declined,
    /// Input ended before the user answered.
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub outcome: Outcome,
    pub displayed: usize,
}

/// Returns true when a prompt answer asks for another fact.
pub fn is_continue(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// The interactive fetch / display / prompt loop.
pub struct Session<S, R, W> {
    source: S,
    input: R,
    output: W,
    pause: Duration,
}

impl<S, R, W> Session<S, R, W>
where
    S: FactSource,
    R: BufRead,
    W: Write,
{
    pub fn new(source: S, input: R, output: W) -> Self {
        Self {
            source,
            input,
            output,
            pause: DEFAULT_PAUSE,
        }
    }

    /// Sets the delay before each fetch after the first.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    pub fn run(&mut self) -> io::Result<Summary> {
        writeln!(self.output, "Welcome to the Fun Fact Generator!")?;
        writeln!(self.output, "Fetching a random fact for you...\n")?;

        let mut displayed = 0;
        loop {
            if self.fetch_and_show()? {
                displayed += 1;
            }

            let Some(answer) = self.prompt()? else {
                writeln!(self.output, "\n\nGoodbye! 👋")?;
                return Ok(Summary {
                    outcome: Outcome::Interrupted,
                    displayed,
                });
            };

            if !is_continue(&answer) {
                writeln!(self.output, "\nThanks for using the Fun Fact Generator! 👋")?;
                return Ok(Summary {
                    outcome: Outcome::Declined,
                    displayed,
                });
            }

            writeln!(self.output, "\nFetching another fact...")?;
            self.output.flush()?;
            if !self.pause.is_zero() {
                thread::sleep(self.pause);
            }
        }
    }

    fn fetch_and_show(&mut self) -> io::Result<bool> {
        match self.source.fetch_fact() {
            Ok(fact) => {
                debug!(len = fact.len(), "fact fetched");
                display_fact(&mut self.output, &fact)?;
                Ok(!fact.is_empty())
            }
            Err(e) => {
                warn!(kind = e.kind(), error = %e, "no fact this round");
                if e.is_parse() {
                    writeln!(self.output, "Error parsing JSON response: {}", e)?;
                } else {
                    writeln!(self.output, "Error fetching fact: {}", e)?;
                }
                writeln!(self.output, "Failed to fetch a fact. Please try again.")?;
                Ok(false)
            }
        }
    }

    /// Returns `None` once input is exhausted.
    fn prompt(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "\n{}", PROMPT)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
