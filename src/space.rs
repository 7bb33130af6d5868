//! Free-disk-space query.

use std::path::Path;

/// Return the number of bytes available to unprivileged users on the
/// filesystem containing `directory`.
///
/// Never fails: `None` means the figure is unavailable (missing path,
/// unsupported platform, or a failing `statvfs` call).
pub fn free_disk_space(directory: impl AsRef<Path>) -> Option<f64> {
    let directory = directory.as_ref();
    #[cfg(unix)]
    {
        match nix::sys::statvfs::statvfs(directory) {
            Ok(stat) => Some(stat.blocks_available() as f64 * stat.fragment_size() as f64),
            Err(e) => {
                tracing::warn!("free space of {} unavailable: {}", directory.display(), e);
                None
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = directory;
        None
    }
}
