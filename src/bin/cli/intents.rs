use std::process::Command;

use tracing::{debug, warn};

/// Hand a URI to whatever the platform registered for it and move on.
///
/// Fire-and-forget: nothing is reported back to the screens, a launch that
/// fails only leaves a log line.
pub fn launch(uri: &str) {
    let openers = ["xdg-open", "open", "wslview"];
    let opener = match openers.iter().find_map(|exe| which::which(exe).ok()) {
        Some(path) => path,
        None => {
            warn!("no URI handler found in PATH, cannot open {uri}");
            return;
        }
    };
    debug!("launching {uri} via {}", opener.display());
    if let Err(err) = Command::new(&opener).arg(uri).spawn() {
        warn!("failed to launch {uri}: {err}");
    }
}

pub fn dial(number: &str) {
    let digits: String = number
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    launch(&format!("tel:{digits}"));
}

pub fn email(address: &str) {
    launch(&format!("mailto:{address}"));
}

/// Shop search for a title, like the original's "Buy Now" button.
pub fn shop_search(base: &str, title: &str) {
    match reqwest::Url::parse_with_params(base, &[("k", title)]) {
        Ok(url) => launch(url.as_str()),
        Err(err) => warn!("unusable shop search url {base}: {err}"),
    }
}
