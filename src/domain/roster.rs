use crate::utils::error::{Result, SantaError};
use crate::utils::names::normalize_name;

/// Outcome of adding a name to the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(String),
    Duplicate(String),
    Empty,
}

/// Ordered list of unique, normalized participant names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// 建立名單，重複或空白名字直接回傳錯誤
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Self::new();
        for raw in names {
            match roster.add(raw.as_ref()) {
                AddOutcome::Added(_) => {}
                AddOutcome::Duplicate(name) => {
                    return Err(SantaError::invalid_input(format!(
                        "The name \"{}\" is listed more than once",
                        name
                    )));
                }
                AddOutcome::Empty => {
                    return Err(SantaError::invalid_input("Participant names cannot be empty"));
                }
            }
        }
        Ok(roster)
    }

    pub fn add(&mut self, raw: &str) -> AddOutcome {
        let name = normalize_name(raw);
        if name.is_empty() {
            return AddOutcome::Empty;
        }
        if self.contains(&name) {
            return AddOutcome::Duplicate(name);
        }
        self.names.push(name.clone());
        AddOutcome::Added(name)
    }

    /// Removes a participant, returning the normalized name if it was present.
    pub fn remove(&mut self, raw: &str) -> Option<String> {
        let name = normalize_name(raw);
        let index = self.names.iter().position(|n| *n == name)?;
        Some(self.names.remove(index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn display_list(&self) -> String {
        self.names.join(", ")
    }

    pub fn ensure_minimum(&self, minimum: usize) -> Result<()> {
        if self.len() < minimum {
            return Err(SantaError::invalid_input(format!(
                "Please have at least {} participants. Current: {}",
                minimum,
                self.len()
            )));
        }
        Ok(())
    }
}
