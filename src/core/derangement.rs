//! Randomized derangement of a participant list.
//!
//! Givers are processed in input order against a shrinking pool of
//! recipients. Every step is a single draw from the candidates that are
//! still legal for the current giver, and the last giver is protected from
//! being left alone with their own name: once only two recipients remain
//! and one of them is the last giver, that recipient goes to the
//! second-to-last giver.

use crate::domain::model::Assignment;
use crate::utils::error::{Result, SantaError};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Smallest participant count for which a derangement exists.
pub const MIN_PARTICIPANTS: usize = 2;

/// Generates a fresh assignment using the thread-local RNG.
pub fn generate(participants: &[String]) -> Result<Assignment> {
    generate_with_rng(participants, &mut rand::thread_rng())
}

/// Same contract as [`generate`]; every call draws fresh randomness.
pub fn regenerate(participants: &[String]) -> Result<Assignment> {
    generate(participants)
}

pub fn generate_with_rng<R: Rng + ?Sized>(
    participants: &[String],
    rng: &mut R,
) -> Result<Assignment> {
    check_participants(participants)?;

    let last_giver = &participants[participants.len() - 1];
    let mut pool: Vec<&String> = participants.iter().collect();
    let mut pairs = Vec::with_capacity(participants.len());

    for giver in participants {
        let last_giver_slot = if pool.len() == 2 {
            pool.iter().position(|candidate| *candidate == last_giver)
        } else {
            None
        };

        let recipient = if pool.len() == 1 {
            pool[0]
        } else if let Some(index) = last_giver_slot {
            pool.swap_remove(index)
        } else {
            let candidates: Vec<usize> = (0..pool.len())
                .filter(|&index| pool[index] != giver)
                .collect();
            let index = *candidates
                .choose(rng)
                .ok_or_else(|| SantaError::InvariantViolation {
                    message: format!("no eligible recipient left for {}", giver),
                })?;
            pool.swap_remove(index)
        };

        tracing::trace!("{} -> {}", giver, recipient);
        pairs.push((giver.clone(), recipient.clone()));
    }

    let assignment = Assignment::from_pairs(pairs)?;
    tracing::debug!(
        "Generated assignment for {} participants",
        assignment.len()
    );
    Ok(assignment)
}

fn check_participants(participants: &[String]) -> Result<()> {
    if participants.len() < MIN_PARTICIPANTS {
        return Err(SantaError::invalid_input(format!(
            "At least {} participants are required to draw names. Current: {}",
            MIN_PARTICIPANTS,
            participants.len()
        )));
    }

    let mut seen = HashSet::with_capacity(participants.len());
    for name in participants {
        if !seen.insert(name.as_str()) {
            return Err(SantaError::invalid_input(format!(
                "The name \"{}\" appears more than once",
                name
            )));
        }
    }
    Ok(())
}
