//! Interactive session: participants are entered line by line, then the
//! players look up their recipients.
//!
//! The session is an explicit state machine. `Setup` collects names,
//! `Playing` owns the current assignment, and `edit` moves back to `Setup`
//! with the roster intact.

use crate::core::derangement;
use crate::core::rng::make_rng;
use crate::domain::model::Assignment;
use crate::domain::roster::{AddOutcome, Roster};
use crate::utils::error::Result;
use crate::utils::names::normalize_name;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};

pub const DEFAULT_MIN_PARTICIPANTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Setup,
    Playing(Assignment),
    Ended,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupCommand {
    Help,
    List,
    Remove(String),
    Done,
    End,
    Add(String),
}

impl SetupCommand {
    /// 空白行回傳 None
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        let lowered = trimmed.to_lowercase();
        let command = match lowered.as_str() {
            "help" => SetupCommand::Help,
            "list" => SetupCommand::List,
            "done" => SetupCommand::Done,
            "end" => SetupCommand::End,
            _ => match lowered.strip_prefix("remove ") {
                Some(rest) => SetupCommand::Remove(normalize_name(rest)),
                None => SetupCommand::Add(normalize_name(trimmed)),
            },
        };
        Some(command)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Help,
    Edit,
    GetMySanta,
    NewSolution,
    End,
    Lookup(String),
}

impl PlayCommand {
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        let command = match trimmed.to_lowercase().as_str() {
            "help" => PlayCommand::Help,
            "edit" => PlayCommand::Edit,
            "get my santa" => PlayCommand::GetMySanta,
            "generate new solution" => PlayCommand::NewSolution,
            "end" => PlayCommand::End,
            _ => PlayCommand::Lookup(normalize_name(trimmed)),
        };
        Some(command)
    }
}

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub min_participants: usize,
    pub seed: Option<u64>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            min_participants: DEFAULT_MIN_PARTICIPANTS,
            seed: None,
        }
    }
}

pub struct Session<R: BufRead, W: Write> {
    input: R,
    output: W,
    roster: Roster,
    min_participants: usize,
    rng: StdRng,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, options: SessionOptions) -> Self {
        Self {
            input,
            output,
            roster: Roster::new(),
            min_participants: options.min_participants.max(derangement::MIN_PARTICIPANTS),
            rng: make_rng(options.seed),
            state: SessionState::Setup,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Drives the session until `end` or end of input.
    pub fn run(&mut self) -> Result<()> {
        tracing::debug!("Interactive session started");
        self.print_setup_usage()?;

        loop {
            let state = std::mem::replace(&mut self.state, SessionState::Ended);
            self.state = match state {
                SessionState::Setup => {
                    writeln!(
                        self.output,
                        "\nType: a participant's name, \"done\" to play, or \"help\" to get usage."
                    )?;
                    match self.read_line()? {
                        Some(line) => self.handle_setup(&line)?,
                        None => SessionState::Ended,
                    }
                }
                SessionState::Playing(assignment) => {
                    writeln!(self.output, "\nParticipants: {}", self.roster.display_list())?;
                    writeln!(self.output, "What is your name, Santa?")?;
                    match self.read_line()? {
                        Some(line) => self.handle_play(assignment, &line)?,
                        None => SessionState::Ended,
                    }
                }
                SessionState::Ended => break,
            };
        }

        self.output.flush()?;
        tracing::debug!("Interactive session ended");
        Ok(())
    }

    fn handle_setup(&mut self, line: &str) -> Result<SessionState> {
        let Some(command) = SetupCommand::parse(line) else {
            return Ok(SessionState::Setup);
        };

        match command {
            SetupCommand::Help => self.print_setup_usage()?,
            SetupCommand::List => {
                if self.roster.is_empty() {
                    writeln!(self.output, "There are currently no participants in the list.")?;
                } else {
                    writeln!(self.output, "{}", self.roster.display_list())?;
                }
            }
            SetupCommand::Remove(name) => match self.roster.remove(&name) {
                Some(removed) => {
                    writeln!(self.output, "{} was removed from the participants list.", removed)?
                }
                None => writeln!(self.output, "{} is not in the participants list.", name)?,
            },
            SetupCommand::Done => {
                if let Err(e) = self.roster.ensure_minimum(self.min_participants) {
                    writeln!(self.output, "{}", e.user_friendly_message())?;
                } else {
                    let assignment = derangement::generate_with_rng(self.roster.names(), &mut self.rng)?;
                    tracing::info!("🎁 Drew names for {} participants", assignment.len());
                    self.print_game_usage()?;
                    return Ok(SessionState::Playing(assignment));
                }
            }
            SetupCommand::End => return Ok(SessionState::Ended),
            SetupCommand::Add(name) => match self.roster.add(&name) {
                AddOutcome::Added(added) => {
                    tracing::debug!("Added participant {}", added);
                }
                AddOutcome::Duplicate(existing) => writeln!(
                    self.output,
                    "The name \"{}\" is already in your participants list. Please type a unique name.",
                    existing
                )?,
                AddOutcome::Empty => {}
            },
        }

        Ok(SessionState::Setup)
    }

    fn handle_play(&mut self, assignment: Assignment, line: &str) -> Result<SessionState> {
        let Some(command) = PlayCommand::parse(line) else {
            return Ok(SessionState::Playing(assignment));
        };

        match command {
            PlayCommand::Help => self.print_game_usage()?,
            PlayCommand::Edit => {
                tracing::debug!("Returning to setup; current assignment discarded");
                self.print_setup_usage()?;
                return Ok(SessionState::Setup);
            }
            PlayCommand::GetMySanta => {
                writeln!(self.output, "What is your name, Human?")?;
                if let Some(line) = self.read_line()? {
                    let human = normalize_name(&line);
                    match assignment.giver_of(&human) {
                        Some(santa) => writeln!(self.output, "Your santa is {}", santa)?,
                        None => self.print_not_participant(&human)?,
                    }
                } else {
                    return Ok(SessionState::Ended);
                }
            }
            PlayCommand::NewSolution => {
                let fresh = derangement::generate_with_rng(self.roster.names(), &mut self.rng)?;
                writeln!(self.output, "A new set of Santa and Human pairs was generated.")?;
                return Ok(SessionState::Playing(fresh));
            }
            PlayCommand::End => {
                writeln!(self.output, "\nThanks for playing!")?;
                return Ok(SessionState::Ended);
            }
            PlayCommand::Lookup(santa) => match assignment.recipient_of(&santa) {
                Some(human) => writeln!(self.output, "Your human is {}", human)?,
                None => self.print_not_participant(&santa)?,
            },
        }

        Ok(SessionState::Playing(assignment))
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn print_not_participant(&mut self, name: &str) -> Result<()> {
        writeln!(
            self.output,
            "{} is not a participant. Please enter a valid name.",
            name
        )?;
        Ok(())
    }

    fn print_setup_usage(&mut self) -> Result<()> {
        writeln!(self.output, "Usage:")?;
        writeln!(self.output, "\t\"Help\" to print usage")?;
        writeln!(self.output, "\t\"List\" to get current participant list")?;
        writeln!(self.output, "\t\"Remove {{name}}\" to remove that name from the list")?;
        writeln!(self.output, "\t\"Done\" when participants list is complete")?;
        writeln!(self.output, "\t\"End\" to end the program")?;
        Ok(())
    }

    fn print_game_usage(&mut self) -> Result<()> {
        writeln!(self.output, "\nParticipants: {}", self.roster.display_list())?;
        writeln!(self.output, "Regular Usage:")?;
        writeln!(self.output, "\tType in your name, Santa, to get your Human.")?;
        writeln!(self.output, "Other Usage:")?;
        writeln!(self.output, "\t\"Help\" to print usage")?;
        writeln!(
            self.output,
            "\t\"Edit\" to edit the participants list and generate a new solution"
        )?;
        writeln!(self.output, "\t\"Get my santa\" to enter a Human and get their Santa")?;
        writeln!(
            self.output,
            "\t\"Generate new solution\" to generate a new set of Santa and Human pairs."
        )?;
        writeln!(self.output, "\t\"End\" to end the program")?;
        Ok(())
    }
}
