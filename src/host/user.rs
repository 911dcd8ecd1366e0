//! Resolution of the user running the scan.
//!
//! Failing to resolve the user is the one fatal host condition: probe
//! messages and the superuser check depend on it, so no result would be
//! trustworthy without it.

use crate::error::{Result, RtcheckError};

use super::types::UserIdentity;

/// Environment variables consulted when the password database has no
/// entry for the effective uid, in lookup order.
const USER_ENV_VARS: &[&str] = &["LOGNAME", "USER", "LNAME", "USERNAME"];

/// Resolve the effective user of this process.
pub fn resolve_user() -> Result<UserIdentity> {
    let uid = effective_uid();
    resolve_user_with(uid, passwd_name, |key| std::env::var(key))
}

/// Resolve a user from a uid with injectable lookups.
///
/// The password database wins; the environment is only a fallback so a
/// scan inside a minimal container without `/etc/passwd` still works.
pub fn resolve_user_with<P, E>(uid: u32, passwd_fn: P, env_fn: E) -> Result<UserIdentity>
where
    P: Fn(u32) -> Option<String>,
    E: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    if let Some(name) = passwd_fn(uid) {
        return Ok(UserIdentity::new(name, uid));
    }

    USER_ENV_VARS
        .iter()
        .filter_map(|key| env_fn(key).ok())
        .find(|name| !name.is_empty())
        .map(|name| UserIdentity::new(name, uid))
        .ok_or_else(|| RtcheckError::UserUnresolved {
            message: format!(
                "no password entry for uid {} and none of {} is set",
                uid,
                USER_ENV_VARS.join(", ")
            ),
        })
}

#[cfg(unix)]
fn effective_uid() -> u32 {
    // SAFETY: geteuid() is a simple syscall that returns the effective user ID
    unsafe { libc::geteuid() }
}

#[cfg(not(unix))]
fn effective_uid() -> u32 {
    u32::MAX
}

#[cfg(unix)]
fn passwd_name(uid: u32) -> Option<String> {
    use std::ffi::CStr;

    // SAFETY: passwd is a plain C struct; getpwuid_r fills it in.
    let mut entry: libc::passwd = unsafe { std::mem::zeroed() };
    let mut buf = vec![0 as libc::c_char; 4096];
    let mut result: *mut libc::passwd = std::ptr::null_mut();

    // SAFETY: every pointer refers to memory owned by this frame and buf's
    // length is passed alongside it.
    let rc = unsafe { libc::getpwuid_r(uid, &mut entry, buf.as_mut_ptr(), buf.len(), &mut result) };
    if rc != 0 || result.is_null() || entry.pw_name.is_null() {
        return None;
    }

    // SAFETY: pw_name points into buf and is NUL terminated on success.
    let name = unsafe { CStr::from_ptr(entry.pw_name) }
        .to_string_lossy()
        .into_owned();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

#[cfg(not(unix))]
fn passwd_name(_uid: u32) -> Option<String> {
    None
}
