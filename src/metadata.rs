//! Permission-mode and ownership changes.

use std::fmt;
use std::path::Path;

use crate::error::{FsError, Result};

/// The user a path should be handed to, either by name or by raw uid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Owner {
    Name(String),
    Id(u32),
}

impl From<&str> for Owner {
    fn from(name: &str) -> Self {
        Owner::Name(name.to_string())
    }
}

impl From<String> for Owner {
    fn from(name: String) -> Self {
        Owner::Name(name)
    }
}

impl From<u32> for Owner {
    fn from(uid: u32) -> Self {
        Owner::Id(uid)
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Name(n) => f.write_str(n),
            Owner::Id(id) => write!(f, "{}", id),
        }
    }
}

/// Set the permission bits of `path` to `bits`.
///
/// `bits` are raw octal permission bits (e.g. `0o644`); a digit-wise mode
/// from [`crate::permissions::calculate`] must go through
/// [`crate::permissions::to_bits`] first.
#[cfg(unix)]
pub fn change_mode(path: impl AsRef<Path>, bits: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let path = path.as_ref();
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(bits))
        .map_err(|e| FsError::path("change mode", path, e))?;
    tracing::debug!("changed mode of {} to {:o}", path.display(), bits);
    Ok(())
}

#[cfg(not(unix))]
pub fn change_mode(path: impl AsRef<Path>, bits: u32) -> Result<()> {
    let _ = bits;
    Err(FsError::Message(format!(
        "cannot change mode on `{}`: not supported on this platform",
        path.as_ref().display()
    )))
}

/// Change the owner of `path` to `owner` (a user name or a raw uid).
///
/// Names are resolved through the system user database. Changing ownership
/// usually requires elevated privileges, so expect `EPERM` when running
/// unprivileged.
#[cfg(unix)]
pub fn change_owner(path: impl AsRef<Path>, owner: impl Into<Owner>) -> Result<()> {
    use nix::unistd::{chown, Uid, User};
    use std::io;

    let path = path.as_ref();
    let owner = owner.into();

    let uid = match &owner {
        Owner::Id(id) => Uid::from_raw(*id),
        Owner::Name(name) => {
            let user = User::from_name(name)
                .map_err(|e| {
                    FsError::path("change owner", path, io::Error::from_raw_os_error(e as i32))
                })?
                .ok_or_else(|| {
                    FsError::Message(format!(
                        "cannot change owner on `{}`: no such user `{}`",
                        path.display(),
                        name
                    ))
                })?;
            user.uid
        }
    };

    chown(path, Some(uid), None).map_err(|e| {
        FsError::path("change owner", path, io::Error::from_raw_os_error(e as i32))
    })?;
    tracing::debug!("changed owner of {} to {}", path.display(), owner);
    Ok(())
}

#[cfg(not(unix))]
pub fn change_owner(path: impl AsRef<Path>, owner: impl Into<Owner>) -> Result<()> {
    let _ = owner.into();
    Err(FsError::Message(format!(
        "cannot change owner on `{}`: not supported on this platform",
        path.as_ref().display()
    )))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::{MetadataExt, PermissionsExt};
    use tempfile::tempdir;

    #[test]
    fn change_mode_sets_permission_bits() {
        let td = tempdir().expect("tempdir");
        let f = td.path().join("f.txt");
        fs::write(&f, b"x").expect("write");

        change_mode(&f, 0o600).expect("chmod");
        let mode = fs::metadata(&f).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o600);

        change_mode(&f, 0o754).expect("chmod");
        let mode = fs::metadata(&f).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o754);
    }

    #[test]
    fn change_mode_on_missing_path_errors() {
        let td = tempdir().expect("tempdir");
        let err = change_mode(td.path().join("ghost"), 0o644).expect_err("should fail");
        assert!(err.to_string().contains("change mode"));
    }

    #[test]
    fn change_owner_to_current_uid_is_a_noop() {
        let td = tempdir().expect("tempdir");
        let f = td.path().join("mine.txt");
        fs::write(&f, b"x").expect("write");

        let uid = fs::metadata(&f).expect("metadata").uid();
        change_owner(&f, uid).expect("chown to self");
        assert_eq!(fs::metadata(&f).expect("metadata").uid(), uid);
    }

    #[test]
    fn change_owner_unknown_user_errors() {
        let td = tempdir().expect("tempdir");
        let f = td.path().join("f.txt");
        fs::write(&f, b"x").expect("write");

        let err = change_owner(&f, "no_such_user_hopefully_xyz").expect_err("should fail");
        assert!(err.to_string().contains("no such user"));
    }
}
