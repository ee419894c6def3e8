use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// Writes every collected user agent to a newline-terminated text file, one
/// per line in set order, replacing any existing file at the path.
pub fn write_user_agents(path: &Path, user_agents: &HashSet<String>) -> Result<()> {
    let mut buffer = String::new();
    for ua in user_agents {
        buffer.push_str(ua);
        buffer.push('\n');
    }

    fs::write(path, buffer).with_context(|| format!("failed to write {}", path.display()))?;
    info!("Wrote {} user agents to {}", user_agents.len(), path.display());
    Ok(())
}
