pub mod iphone;
pub mod samsung;

use std::collections::HashSet;

/// Targets for one generation run.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    /// Number of unique user agents to collect.
    pub target: usize,
    /// Attempt budget for the Samsung flavor; the iPhone flavor derives its
    /// own non-termination guard from `target` instead.
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            target: 5000,
            max_attempts: 100_000,
        }
    }
}

/// Result of a completed generation run.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub user_agents: HashSet<String>,
    pub attempts: usize,
}

impl GenerationOutcome {
    /// True when the run collected fewer user agents than asked for. For the
    /// Samsung flavor this is a valid best-effort outcome, not a failure.
    pub fn under_target(&self, config: &GeneratorConfig) -> bool {
        self.user_agents.len() < config.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.target, 5000);
        assert_eq!(config.max_attempts, 100_000);
    }

    #[test]
    fn test_under_target() {
        let config = GeneratorConfig {
            target: 10,
            max_attempts: 100,
        };
        let outcome = GenerationOutcome {
            user_agents: HashSet::from(["a".to_string()]),
            attempts: 100,
        };
        assert!(outcome.under_target(&config));
    }
}
