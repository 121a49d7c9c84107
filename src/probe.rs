//! Tool availability checks

use crate::ui::Host;

/// Whether `name` resolves on the host's search path
///
/// Runs `command -v <name>` through the host; a zero exit status means the
/// tool is available. A host that cannot run the probe at all is treated
/// as not having the tool.
pub fn have<H: Host + ?Sized>(host: &H, name: &str) -> bool {
    let Ok(quoted) = shlex::try_quote(name) else {
        return false;
    };
    let probe = format!("command -v {quoted}");

    match host.execute(&probe) {
        Ok(result) => {
            tracing::debug!(tool = name, available = result.success(), "probed tool");
            result.success()
        }
        Err(e) => {
            tracing::warn!(tool = name, error = %e, "tool probe failed");
            false
        }
    }
}

/// First of `candidates` that resolves, if any
pub fn first_available<'a, H: Host + ?Sized>(host: &H, candidates: &[&'a str]) -> Option<&'a str> {
    candidates.iter().copied().find(|name| have(host, name))
}
