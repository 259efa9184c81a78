use crate::utils::error::{Result, SantaError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub giver: String,
    pub recipient: String,
}

/// A complete derangement of the participant set: every participant gives to
/// exactly one other participant and receives from exactly one.
///
/// Pairs are stored in giver input order; lookups in both directions go
/// through the two maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pairs: Vec<Pairing>,
    giver_to_recipient: HashMap<String, String>,
    recipient_to_giver: HashMap<String, String>,
}

impl Assignment {
    /// Builds an assignment from `(giver, recipient)` pairs, checking that
    /// the pairs form a bijection with no fixed points.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self> {
        let mut giver_to_recipient = HashMap::with_capacity(pairs.len());
        let mut recipient_to_giver = HashMap::with_capacity(pairs.len());
        let mut ordered = Vec::with_capacity(pairs.len());

        for (giver, recipient) in pairs {
            if giver == recipient {
                return Err(SantaError::InvariantViolation {
                    message: format!("{} was paired with themselves", giver),
                });
            }
            if giver_to_recipient
                .insert(giver.clone(), recipient.clone())
                .is_some()
            {
                return Err(SantaError::InvariantViolation {
                    message: format!("{} appears twice as a giver", giver),
                });
            }
            if recipient_to_giver
                .insert(recipient.clone(), giver.clone())
                .is_some()
            {
                return Err(SantaError::InvariantViolation {
                    message: format!("{} appears twice as a recipient", recipient),
                });
            }
            ordered.push(Pairing { giver, recipient });
        }

        // 送禮者與收禮者必須是同一組人
        if let Some(stray) = recipient_to_giver
            .keys()
            .find(|recipient| !giver_to_recipient.contains_key(*recipient))
        {
            return Err(SantaError::InvariantViolation {
                message: format!("{} receives a gift but never gives one", stray),
            });
        }

        Ok(Self {
            pairs: ordered,
            giver_to_recipient,
            recipient_to_giver,
        })
    }

    pub fn recipient_of(&self, giver: &str) -> Option<&str> {
        self.giver_to_recipient.get(giver).map(String::as_str)
    }

    pub fn giver_of(&self, recipient: &str) -> Option<&str> {
        self.recipient_to_giver.get(recipient).map(String::as_str)
    }

    pub fn contains(&self, participant: &str) -> bool {
        self.giver_to_recipient.contains_key(participant)
    }

    pub fn pairs(&self) -> &[Pairing] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["text", "csv", "json"];
}

impl FromStr for OutputFormat {
    type Err = SantaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(SantaError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: s.to_string(),
                reason: format!("Valid formats: {}", OutputFormat::NAMES.join(", ")),
            }),
        }
    }
}
