//! Delegation command and label synthesis. Purely presentational: the
//! produced strings are opaque to the engine and consumed by the
//! downstream process spawner.

/// Maximum label length in characters.
pub const LABEL_MAX_CHARS: usize = 40;

/// Derive a short slug from the task text: the first four words,
/// lower-cased, stripped to alphanumerics, joined with `-`.
#[must_use]
pub fn label(text: &str) -> String {
    let joined = text
        .to_lowercase()
        .split_whitespace()
        .take(4)
        .map(|word| {
            word.chars()
                .filter(|letter| letter.is_alphanumeric() || *letter == ' ')
                .collect::<String>()
        })
        .filter(|cleaned| !cleaned.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    joined.chars().take(LABEL_MAX_CHARS).collect()
}

/// Format the delegation invocation for the plain spawn path.
#[must_use]
pub fn spawn_command(task: &str, worker: &str, label: &str) -> String {
    format!("sessions_spawn --task '{task}' --worker '{worker}' --label '{label}'")
}

/// Format the delegation invocation for the notification-capable path,
/// which also carries the recommended timeout.
#[must_use]
pub fn notify_command(task: &str, worker: &str, label: &str, timeout_seconds: u32) -> String {
    format!(
        "spawn-notify.sh --task '{task}' --worker '{worker}' --label '{label}' --timeout {timeout_seconds}"
    )
}
