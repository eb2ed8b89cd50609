use colored::*;
use std::io::{self, IsTerminal};

// Warnings and errors get their `[WARNING]`/`[ERROR]` marker from the log formatter.

pub fn success(msg: &str) {
    tracing::info!("{} {}", "[OK]".green(), msg.green());
}

pub fn error(msg: &str) {
    tracing::error!("{}", msg.red());
}

pub fn info(msg: &str) {
    tracing::info!("{}", msg);
}

pub fn warning(msg: &str) {
    tracing::warn!("{}", msg.yellow());
}

pub fn tip(msg: &str) {
    tracing::info!("{} {}", "Tip:".dimmed(), msg.dimmed());
}

/// Turns colours on or off for the rest of the process.
pub fn configure_colors() {
    let enabled = detect_color_support(io::stdout().is_terminal(), |key| {
        std::env::var_os(key).and_then(|value| value.into_string().ok())
    });
    colored::control::set_override(enabled);
}

fn detect_color_support(is_terminal: bool, get_env: impl Fn(&str) -> Option<String>) -> bool {
    if get_env("CLICOLOR_FORCE").is_some_and(|v| v != "0") {
        true
    } else if get_env("NO_COLOR").is_some() {
        false
    } else {
        is_terminal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn force_color_wins_over_no_color() {
        let env = HashMap::from([("CLICOLOR_FORCE", "1"), ("NO_COLOR", "1")]);
        assert!(detect_color_support(false, |key| {
            env.get(key).map(ToString::to_string)
        }));
    }

    #[test]
    fn no_color_disables_on_terminal() {
        let env = HashMap::from([("NO_COLOR", "")]);
        assert!(!detect_color_support(true, |key| {
            env.get(key).map(ToString::to_string)
        }));
    }

    #[test]
    fn follows_terminal_without_hints() {
        let env = HashMap::from([("CLICOLOR_FORCE", "0")]);
        assert!(detect_color_support(true, |key| env.get(key).map(ToString::to_string)));
        assert!(!detect_color_support(false, |_| None));
    }
}
