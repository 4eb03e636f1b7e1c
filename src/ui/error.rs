//! Error rendering for the terminal and for JSON mode

use std::io::ErrorKind;

use hexlist::HexlistError;

pub fn format_hexlist_error(err: &HexlistError) -> String {
    match err {
        HexlistError::FileAccess { path, source } if source.kind() == ErrorKind::NotFound => {
            format!(
                "error: {}\n  hint: check that {} exists relative to the current directory\n",
                err,
                path.display()
            )
        }
        HexlistError::FileAccess { source, .. } if source.kind() == ErrorKind::InvalidData => {
            format!("error: {}\n  hint: the input must be UTF-8 text\n", err)
        }
        HexlistError::InvalidConfig { file, .. } => format!(
            "error: {}\n  hint: fix or remove {}\n",
            err,
            file.display()
        ),
        other => format!("error: {}\n", other),
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    if let Some(hexlist) = err.downcast_ref::<HexlistError>() {
        return format_hexlist_error(hexlist);
    }

    format!("error: {:#}\n", err)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let file = err
            .downcast_ref::<HexlistError>()
            .and_then(|e| e.file())
            .map(|p| p.display().to_string());
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
            "file": file,
        });
        let _ = crate::ui::json::emit_stderr(output);
        return;
    }

    eprint!("{}", format_error(err));
}

/// Writes into a closed pipe (`hexlist | head`) end the run quietly.
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<HexlistError>(),
        Some(HexlistError::Output(io)) if io.kind() == ErrorKind::BrokenPipe
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn missing_input_gets_hint() {
        let err = HexlistError::FileAccess {
            path: PathBuf::from("firmware.hex"),
            source: io::Error::new(ErrorKind::NotFound, "No such file or directory"),
        };
        let text = format_hexlist_error(&err);
        assert!(text.starts_with("error: cannot read firmware.hex: No such file or directory\n"));
        assert!(text.contains("hint: check that firmware.hex exists"));
    }

    #[test]
    fn non_hexlist_errors_are_plain() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(format_error(&err), "error: boom\n");
    }

    #[test]
    fn broken_pipe_detection() {
        let err: anyhow::Error =
            HexlistError::Output(io::Error::new(ErrorKind::BrokenPipe, "pipe")).into();
        assert!(is_broken_pipe(&err));

        let err: anyhow::Error =
            HexlistError::Output(io::Error::new(ErrorKind::Other, "disk")).into();
        assert!(!is_broken_pipe(&err));
    }
}
