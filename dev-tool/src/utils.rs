use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

/// Shows a spinner with the file name while `func` runs.
pub(crate) fn spin_while_loading<R>(path: &Path, func: impl FnOnce() -> R) -> R {
    let progress_bar = ProgressBar::new_spinner().with_style(
        ProgressStyle::default_spinner().template("{msg} {elapsed:>6} {spinner:.green}"),
    );
    let name = path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    );
    progress_bar.set_message(format!("Loading {}", name));
    progress_bar.enable_steady_tick(100);
    let res = func();
    progress_bar.finish_and_clear();
    res
}
