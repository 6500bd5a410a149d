//! Environment-specific operations behind a small interface, so the views
//! and the presentation state machine stay free of direct filesystem,
//! clipboard, and window calls.

use std::io;
use std::path::Path;
use std::sync::Arc;

mod desktop;

pub trait PlatformServices: Send + Sync {
    /// # Errors
    ///
    /// Propagates filesystem errors.
    fn read_text_file(&self, path: &Path) -> io::Result<String>;

    /// # Errors
    ///
    /// Propagates filesystem errors.
    fn write_text_file(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Best-effort clipboard write.
    fn copy_text(&self, text: &str);

    /// Best-effort fullscreen request for the presentation window.
    fn enter_fullscreen(&self);
}

pub type PlatformRef = Arc<dyn PlatformServices>;

pub use desktop::DesktopPlatform;
