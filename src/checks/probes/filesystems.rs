//! Mounted filesystem suitability check.

use crate::checks::{see_also, CheckContext, Probe, ProbeError, ProbeOutput};
use crate::config::FilesystemRules;
use crate::host::MountEntry;

/// Sorts mounts into good and bad homes for audio data.
///
/// Records a passing finding naming the good mounts and, separately, a
/// failing finding naming the bad ones, so one run can hold both.
pub struct FilesystemsProbe;

/// Where a mount lands.
#[derive(Debug, PartialEq, Eq)]
enum Verdict {
    Good,
    Bad,
    Neutral,
}

fn is_ignored(mount_point: &str, rules: &FilesystemRules) -> bool {
    rules.ignored_prefixes.iter().any(|prefix| {
        let prefix = prefix.trim_end_matches('/');
        if prefix.is_empty() {
            return false;
        }
        mount_point == prefix
            || mount_point
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

fn classify(mount: &MountEntry, rules: &FilesystemRules) -> Verdict {
    let fs = mount.base_fs_type();
    let listed = |list: &[String], value: &str| list.iter().any(|v| v == value);

    if listed(&rules.disapproved_mounts, &mount.mount_point) || listed(&rules.disapproved, fs) {
        Verdict::Bad
    } else if listed(&rules.approved, fs) {
        Verdict::Good
    } else {
        Verdict::Neutral
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

impl Probe for FilesystemsProbe {
    fn key(&self) -> &'static str {
        "filesystems"
    }

    fn headline(&self) -> &'static str {
        "Filesystems"
    }

    fn description(&self) -> &'static str {
        "Mounted filesystems are suitable for audio data"
    }

    fn run(&self, ctx: &CheckContext<'_>, out: &mut ProbeOutput) -> Result<(), ProbeError> {
        let rules = &ctx.config.filesystems;
        let mounts = ctx.host.mount_table().require("the mount table")?;

        let mut good = Vec::new();
        let mut bad = Vec::new();
        for mount in mounts.iter().filter(|m| !is_ignored(&m.mount_point, rules)) {
            match classify(mount, rules) {
                Verdict::Good => push_unique(&mut good, &mount.mount_point),
                Verdict::Bad => push_unique(&mut bad, &mount.mount_point),
                Verdict::Neutral => {}
            }
        }

        if good.is_empty() {
            out.fail(format!(
                "None of the mounts uses a filesystem suited for audio purposes ({}). {}",
                rules.approved.join(", "),
                see_also("filesystems")
            ));
        } else {
            out.pass(format!(
                "The following mounts can be used for audio purposes: {}",
                good.join(", ")
            ));
        }

        if !bad.is_empty() {
            out.fail(format!(
                "The following mounts should be avoided for audio purposes: {}. {}",
                bad.join(", "),
                see_also("filesystems")
            ));
        }
        Ok(())
    }
}
