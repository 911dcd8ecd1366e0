//! Parsers for the text formats exposed under `/proc`.
//!
//! Every function here is pure so it can be tested against captured file
//! contents. Rows that do not fit the expected shape are skipped rather
//! than failing the whole table.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{InterruptLine, LimitValue, MountEntry, ResourceKind, ResourceLimit};

/// Split `/proc/cmdline` into tokens.
pub fn parse_cmdline(text: &str) -> Vec<String> {
    text.lines()
        .next()
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Count the lines of `/proc/swaps`, header included.
pub fn count_swap_entries(text: &str) -> usize {
    text.lines().filter(|l| !l.trim().is_empty()).count()
}

/// Parse `/proc/sys/vm/swappiness`.
pub fn parse_swappiness(text: &str) -> Option<u32> {
    text.lines().next()?.trim().parse().ok()
}

/// Parse the first line of a single-value sysfs or procfs file.
pub fn first_line(text: &str) -> Option<String> {
    let line = text.lines().next()?.trim();
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}

/// Parse `/proc/mounts`.
pub fn parse_mounts(text: &str) -> Vec<MountEntry> {
    text.lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let device = fields.next()?;
            let mount_point = fields.next()?;
            let fs_type = fields.next()?;
            Some(MountEntry::new(
                unescape_mount_field(device),
                unescape_mount_field(mount_point),
                fs_type,
            ))
        })
        .collect()
}

/// Decode the octal escapes (`\040` for space, ...) the kernel uses in
/// mount table fields.
fn unescape_mount_field(field: &str) -> String {
    let bytes = field.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 4 <= bytes.len() {
            let octal = std::str::from_utf8(&bytes[i + 1..i + 4])
                .ok()
                .and_then(|digits| u8::from_str_radix(digits, 8).ok());
            if let Some(value) = octal {
                out.push(value);
                i += 4;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

static COLUMN_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// Parse `/proc/interrupts` into interrupt lines.
///
/// Columns are separated by two or more spaces; the first column is the
/// interrupt id followed by a colon and the last column is the device
/// action list. The CPU header row has no colon and is skipped.
pub fn parse_interrupts(text: &str) -> Vec<InterruptLine> {
    text.lines()
        .filter_map(|line| {
            let columns: Vec<&str> = COLUMN_SEPARATOR.split(line.trim()).collect();
            if columns.len() < 2 {
                return None;
            }
            let irq = columns[0].strip_suffix(':')?.trim();
            let action = columns[columns.len() - 1].trim();
            if irq.is_empty() || action.is_empty() {
                return None;
            }
            Some(InterruptLine::new(irq, action))
        })
        .collect()
}

/// Parse one resource row from `/proc/<pid>/limits`.
pub fn parse_limits(text: &str, kind: ResourceKind) -> Option<ResourceLimit> {
    let label = kind.limits_label();
    let line = text.lines().find(|l| l.starts_with(label))?;
    let mut values = line[label.len()..].split_whitespace();
    let soft = parse_limit_value(values.next()?)?;
    let hard = parse_limit_value(values.next()?)?;
    Some(ResourceLimit::new(soft, hard))
}

fn parse_limit_value(field: &str) -> Option<LimitValue> {
    if field == "unlimited" {
        Some(LimitValue::Unlimited)
    } else {
        field.parse().ok().map(LimitValue::Value)
    }
}

/// Render a raw `/proc/<pid>/cmdline` as a space separated string.
pub fn decode_process_cmdline(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .replace('\0', " ")
        .trim()
        .to_string()
}
