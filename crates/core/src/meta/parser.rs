//! Tokenizer for the metadata file format.
//!
//! The format is line-oriented: a bracketing start line, entries separated by
//! semicolons (the final entry terminated by a period), and a bracketing end
//! line:
//!
//! ```text
//! Start Program Meta-Data Code:
//! S(start)0; A(start)0; P(run)6;
//! I(hard drive)10; O(monitor)4; A(end)0;
//! S(end)0.
//! End Program Meta-Data Code.
//! ```
//!
//! Codes and descriptors are case-insensitive, and two-word descriptors may be
//! written with or without the interior space (`hard drive` / `harddrive`).

use crate::common::error::{SimError, SimResult};
use crate::meta::{Descriptor, Metadata, OpCode};

/// Bracketing line that opens the metadata section.
const META_START_SYNTAX: &str = "Start Program Meta-Data Code";
/// Bracketing line that closes the metadata section.
const META_END_SYNTAX: &str = "End Program Meta-Data Code";

/// Parses metadata text into an ordered entry list.
///
/// Text outside the bracketing lines is ignored; a missing bracket is a
/// [`SimError::MetaBracketing`] error. Entry errors carry the offending entry
/// text and its source line.
pub fn parse_metadata(text: &str) -> SimResult<Vec<Metadata>> {
    let mut entries = Vec::new();
    let mut in_body = false;
    let mut saw_end = false;

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();

        if !in_body {
            if line.starts_with(META_START_SYNTAX) {
                in_body = true;
            }
            continue;
        }
        if line.starts_with(META_END_SYNTAX) {
            saw_end = true;
            break;
        }

        for piece in line.split(';') {
            let entry = piece.trim().trim_end_matches('.').trim();
            if entry.is_empty() {
                continue;
            }
            entries.push(parse_entry(entry, line_no)?);
        }
    }

    if !in_body || !saw_end {
        return Err(SimError::MetaBracketing);
    }
    Ok(entries)
}

/// Parses a single entry of the form `<code>(<descriptor>)<cycles>`.
fn parse_entry(entry: &str, line: usize) -> SimResult<Metadata> {
    let code = match entry.chars().next().map(|c| c.to_ascii_uppercase()) {
        Some('S') => OpCode::System,
        Some('A') => OpCode::Program,
        Some('P') => OpCode::Process,
        Some('I') => OpCode::Input,
        Some('O') => OpCode::Output,
        Some('M') => OpCode::Memory,
        _ => {
            return Err(SimError::UnknownCode {
                entry: entry.to_string(),
                line,
            })
        }
    };

    let (open, close) = match (entry.find('('), entry.rfind(')')) {
        (Some(open), Some(close)) if open < close => (open, close),
        _ => {
            return Err(SimError::UnknownDescriptor {
                entry: entry.to_string(),
                line,
            })
        }
    };

    let descriptor = parse_descriptor(&entry[open + 1..close]).ok_or_else(|| {
        SimError::UnknownDescriptor {
            entry: entry.to_string(),
            line,
        }
    })?;

    let cycles: u32 =
        entry[close + 1..]
            .trim()
            .parse()
            .map_err(|_| SimError::InvalidCycles {
                entry: entry.to_string(),
                line,
            })?;

    Ok(Metadata {
        code,
        descriptor,
        cycles,
        line,
    })
}

/// Matches a descriptor token, case-insensitively and whitespace-normalized.
fn parse_descriptor(raw: &str) -> Option<Descriptor> {
    let normalized = raw
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase();

    let descriptor = match normalized.as_str() {
        "start" => Descriptor::Start,
        "run" => Descriptor::Run,
        "end" => Descriptor::End,
        "allocate" => Descriptor::Allocate,
        "printer" => Descriptor::Printer,
        "keyboard" => Descriptor::Keyboard,
        "hard drive" | "harddrive" => Descriptor::HardDrive,
        "monitor" => Descriptor::Monitor,
        "cache" => Descriptor::Cache,
        _ => return None,
    };
    Some(descriptor)
}
