//! Thin wrappers around OS filesystem primitives.
//!
//! Each operation delegates to a single underlying OS call and converts
//! failure into the uniform [`FsError`], which always names the operand
//! path(s). Boolean queries (`exists`, `is_dir`, `is_file`,
//! `is_executable`) never fail; absence is an answer, not a fault.
//!
//! The [`permissions`] module builds digit-wise permission modes from rwx
//! flag sets; pass them through [`permissions::to_bits`] before handing
//! them to [`change_mode`] or [`make_directory`].

pub mod create;
pub mod error;
pub mod metadata;
pub mod mv;
pub mod permissions;
pub mod remove;
pub mod space;
pub mod stat;

pub use crate::create::{create_file, make_directory};
pub use crate::error::{FsError, Result};
pub use crate::metadata::{change_mode, change_owner, Owner};
pub use crate::mv::{copy_file, move_file, rename};
pub use crate::permissions::{calculate, to_bits, Flag};
pub use crate::remove::remove;
pub use crate::space::free_disk_space;
pub use crate::stat::{exists, file_size, file_type, is_dir, is_executable, is_file, FileKind};
