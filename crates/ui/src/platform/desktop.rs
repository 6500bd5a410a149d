use std::fs;
use std::io;
use std::path::Path;

use dioxus::document::eval;

use super::PlatformServices;

/// Desktop implementation: plain filesystem access, clipboard and
/// fullscreen through the webview.
pub struct DesktopPlatform;

impl PlatformServices for DesktopPlatform {
    fn read_text_file(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_text_file(&self, path: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)
    }

    fn copy_text(&self, text: &str) {
        let literal = js_string_literal(text);
        let script = format!(
            r"try {{
                if (navigator.clipboard && navigator.clipboard.writeText) {{
                    await navigator.clipboard.writeText({literal});
                }}
            }} catch (_) {{}}"
        );
        let _ = eval(&script);
    }

    fn enter_fullscreen(&self) {
        let script = r"try {
            const el = document.documentElement;
            if (el.requestFullscreen) el.requestFullscreen();
        } catch (_) {}";
        let _ = eval(script);
    }
}

impl DesktopPlatform {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn js_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}
