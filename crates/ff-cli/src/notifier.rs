use ff_app::{Alert, Notifier};

use crate::ui;

/// Prints alerts to stderr so they never mix with rendered output.
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&self, alert: &Alert) {
        eprintln!("{}", format_alert(alert, ui::prefs().alert_color));
    }
}

fn format_alert(alert: &Alert, color: bool) -> String {
    if color {
        format!("\u{1b}[31malert:\u{1b}[0m {}", alert.message)
    } else {
        format!("alert: {}", alert.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_alert_has_prefix() {
        assert_eq!(
            format_alert(&Alert::create_venue_failed(), false),
            "alert: Could not create restaurant."
        );
    }

    #[test]
    fn colored_alert_keeps_message() {
        let line = format_alert(&Alert::login_failed(), true);
        assert!(line.starts_with("\u{1b}[31m"));
        assert!(line.ends_with("Login failed. Please check your credentials."));
    }
}
