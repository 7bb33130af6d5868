//! Permission flags and the digit-wise mode calculator.
//!
//! A mode is built by summing the flag values of each class (owner, group,
//! others) and concatenating the three sums as decimal digits, e.g.
//! read+write for the owner, read for the group and execute for others
//! gives `641`. The result is decimal-rendered; use [`to_bits`] to turn it
//! into the raw octal permission bits `chmod` expects.

/// A single POSIX permission flag.
///
/// Values are the classic rwx bit weights, so any set of distinct flags
/// sums to a single octal digit (0..=7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Flag {
    None = 0,
    Read = 4,
    Write = 2,
    Execute = 1,
}

/// Combine three flag sets into one digit-wise mode integer.
///
/// Sums each class independently and concatenates the sums as decimal
/// digits in owner, group, others order. No bounds checking is performed:
/// passing the same flag twice in one class is caller error and produces a
/// numerically nonsensical (but non-panicking) result.
///
/// ```
/// use fsops::permissions::{calculate, Flag};
/// let mode = calculate(
///     &[Flag::Read, Flag::Write],
///     &[Flag::Read],
///     &[Flag::Execute],
/// );
/// assert_eq!(mode, 641);
/// ```
pub fn calculate(user: &[Flag], group: &[Flag], others: &[Flag]) -> u32 {
    let sum = |flags: &[Flag]| flags.iter().map(|f| *f as u32).sum::<u32>();
    sum(user) * 100 + sum(group) * 10 + sum(others)
}

/// Reinterpret a digit-wise decimal mode as octal permission bits.
///
/// `641` becomes `0o641`. Digits above 7 are caller error and are not
/// rejected here, matching [`calculate`]'s no-validation contract.
pub fn to_bits(mode: u32) -> u32 {
    let owner = mode / 100 % 10;
    let group = mode / 10 % 10;
    let others = mode % 10;
    (owner << 6) | (group << 3) | others
}
