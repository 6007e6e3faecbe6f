//! Preview presentation: wrap rendered pages in an HTML shell, write them as
//! timestamped artifacts, and hand them to the system browser.
//!
//! Writing and opening are separate steps; what happens to an artifact is
//! the caller's decision.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;

use crate::error::PreviewError;

fn esc(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn html_shell(title: &str, svg: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1.0"/>
<title>{}</title>
<style>
body {{ margin: 0; padding: 16px 0; background: #f3f3f3; display: flex; justify-content: center; }}
.paper {{ background: #fff; box-shadow: 0 1px 4px rgba(0,0,0,0.25); }}
@media print {{
  body {{ padding: 0; background: #fff; }}
  .paper {{ box-shadow: none; }}
}}
</style>
</head>
<body><div class="paper">{}</div></body>
</html>"##,
        esc(title),
        svg
    )
}

/// Write a preview artifact under `dir` and return its path.
///
/// The file is named `<kind>_<UTC timestamp>.html`; `dir` is created if
/// missing. Nothing is opened here.
pub fn write_preview_file(dir: &Path, kind: &str, svg: &str) -> Result<PathBuf, PreviewError> {
    fs::create_dir_all(dir)?;
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S%3f");
    let filename = format!("{kind}_{timestamp}.html");
    let path = dir.join(filename);
    fs::write(&path, html_shell(kind, svg))?;
    info!(path = %path.display(), "preview artifact written");
    Ok(path)
}

/// Open a previously written artifact in the user's browser.
pub fn open_preview(path: &Path) -> Result<(), PreviewError> {
    let target = path
        .to_str()
        .ok_or_else(|| PreviewError::InvalidPath(path.to_string_lossy().into_owned()))?;
    webbrowser::open(target)?;
    info!(path = %path.display(), "preview opened in browser");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("thermal-receipt-{tag}-{}", std::process::id()))
    }

    #[test]
    fn writes_artifact_with_shell_and_payload() {
        let dir = scratch_dir("artifact");
        let path = write_preview_file(&dir, "bill", "<svg>payload</svg>").expect("write artifact");
        assert!(path.file_name().expect("file name").to_string_lossy().starts_with("bill_"));
        assert_eq!(path.extension().expect("extension"), "html");

        let written = fs::read_to_string(&path).expect("read artifact");
        assert!(written.contains("<svg>payload</svg>"));
        assert!(written.contains("<!DOCTYPE html>"));
        fs::remove_dir_all(&dir).expect("cleanup");
    }

    #[test]
    fn escapes_title_kind() {
        let dir = scratch_dir("escape");
        let path = write_preview_file(&dir, "bill&kot", "<svg/>").expect("write artifact");
        let written = fs::read_to_string(&path).expect("read artifact");
        assert!(written.contains("<title>bill&amp;kot</title>"));
        fs::remove_dir_all(&dir).expect("cleanup");
    }
}
