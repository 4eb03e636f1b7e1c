//! User-facing notices that are not part of the listing

use hexlist::ConfigWarning;

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        match &w.suggestion {
            Some(suggestion) => tracing::warn!(
                key = %w.key,
                %location,
                "unknown config key, did you mean '{}'?",
                suggestion
            ),
            None => tracing::warn!(key = %w.key, %location, "unknown config key"),
        }
    }
}
