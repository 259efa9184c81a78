use crate::core::derangement::{self, MIN_PARTICIPANTS};
use crate::core::rng::make_rng;
use crate::core::DrawSettings;
use crate::domain::model::Assignment;
use crate::domain::roster::Roster;
use crate::utils::error::Result;

/// Runs a single non-interactive draw from a settings provider.
pub struct DrawEngine<S: DrawSettings> {
    settings: S,
}

impl<S: DrawSettings> DrawEngine<S> {
    pub fn new(settings: S) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    pub fn run(&self) -> Result<Assignment> {
        tracing::info!("🎁 Starting Secret Santa draw");

        let roster = Roster::from_names(self.settings.participants())?;
        roster.ensure_minimum(MIN_PARTICIPANTS)?;
        tracing::info!("👥 {} participants: {}", roster.len(), roster.display_list());

        let mut rng = make_rng(self.settings.seed());
        let assignment = derangement::generate_with_rng(roster.names(), &mut rng)?;

        tracing::info!("✅ Drew {} pairings", assignment.len());
        Ok(assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::OutputFormat;
    use crate::utils::error::SantaError;

    struct FixedSettings {
        participants: Vec<String>,
        seed: Option<u64>,
    }

    impl FixedSettings {
        fn new(names: &[&str], seed: Option<u64>) -> Self {
            Self {
                participants: names.iter().map(|s| s.to_string()).collect(),
                seed,
            }
        }
    }

    impl DrawSettings for FixedSettings {
        fn participants(&self) -> &[String] {
            &self.participants
        }

        fn min_participants(&self) -> usize {
            3
        }

        fn seed(&self) -> Option<u64> {
            self.seed
        }

        fn output_format(&self) -> OutputFormat {
            OutputFormat::Text
        }
    }

    #[test]
    fn test_run_normalizes_names() {
        let engine = DrawEngine::new(FixedSettings::new(&["alice", " BOB ", "charlie"], None));
        let assignment = engine.run().unwrap();
        assert!(assignment.contains("Alice"));
        assert!(assignment.contains("Bob"));
        assert!(assignment.contains("Charlie"));
    }

    #[test]
    fn test_run_rejects_case_insensitive_duplicates() {
        let engine = DrawEngine::new(FixedSettings::new(&["alice", "ALICE", "bob"], None));
        assert!(matches!(engine.run(), Err(SantaError::InvalidInput { .. })));
    }

    #[test]
    fn test_run_allows_two_participants() {
        let engine = DrawEngine::new(FixedSettings::new(&["alice", "bob"], None));
        let assignment = engine.run().unwrap();
        assert_eq!(assignment.recipient_of("Alice"), Some("Bob"));
    }

    #[test]
    fn test_run_with_seed_is_reproducible() {
        let names = ["a", "b", "c", "d", "e", "f", "g"];
        let first = DrawEngine::new(FixedSettings::new(&names, Some(11))).run().unwrap();
        let second = DrawEngine::new(FixedSettings::new(&names, Some(11))).run().unwrap();
        assert_eq!(first, second);
    }
}
