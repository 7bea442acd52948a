use std::{
    env,
    path::Path,
    process::{Command, Stdio},
    time::Duration,
};
use tracing::{debug, warn};
use wait_timeout::ChildExt;

// how long we watch the viewer child for an immediate failure
const VIEWER_GRACE: Duration = Duration::from_millis(250);

/// true when a graphical session is reachable from this process
pub fn available() -> bool {
    env::var_os("DISPLAY").is_some() || env::var_os("WAYLAND_DISPLAY").is_some()
}

/// Hand a finished chart to the desktop viewer.
/// Headless environments skip this, and a missing or failing viewer is only
/// logged; the chart is already on disk either way.
pub fn show(path: &Path) {
    if !available() {
        debug!(path = ?path, "no display reachable, skipping interactive view");
        return;
    }

    match Command::new("xdg-open")
        .arg(path)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(mut child) => match child.wait_timeout(VIEWER_GRACE) {
            Ok(Some(status)) if !status.success() => {
                warn!(path = ?path, "viewer exited with {status}");
            }
            // still running or exited cleanly, the viewer owns the window now
            Ok(_) => {}
            Err(error) => warn!(error = ?error, "failed to wait on viewer"),
        },
        Err(error) => warn!(error = ?error, path = ?path, "failed to spawn viewer"),
    }
}
