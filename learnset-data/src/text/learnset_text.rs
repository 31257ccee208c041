use anyhow::{
    Error,
    Result,
};
use log::warn;

use crate::{
    DetailAtom,
    LearnMethodKind,
    Learner,
    MoveLearners,
};

/// Placeholder line written for a method with no learners.
const EMPTY_SECTION: &str = "NONE";
/// Placeholder line written when a method section could not be extracted.
const FAILED_SECTION: &str = "ERROR WITH DATA";

fn section_kind(header: &str) -> Option<LearnMethodKind> {
    match header {
        "Via Level Up" => Some(LearnMethodKind::LevelUp),
        "Via TM" | "Via HM" => Some(LearnMethodKind::TeachableItem),
        "Via Breeding" => Some(LearnMethodKind::Breeding),
        "Via Special Event" => Some(LearnMethodKind::SpecialEvent),
        _ => None,
    }
}

fn parse_level(level: &str) -> Option<DetailAtom> {
    let level = level.trim();
    let level = level.strip_prefix("Lv.").unwrap_or(level).trim();
    if level.is_empty() {
        return None;
    }
    let atom = DetailAtom::from(level);
    Some(match atom.as_integer() {
        Some(level) => DetailAtom::Integer(level),
        None => atom,
    })
}

/// Parses a level-up line, such as `Charmander: Lv. 1 | Lv. 1`.
///
/// Levels for each game version are separated by `|`. A single version may list multiple levels
/// separated by `,`. All levels are kept in order, including duplicates across versions.
fn parse_level_up_line(line: &str) -> Option<Learner> {
    let (name, levels) = line.split_once(": Lv")?;
    let levels = format!("Lv{levels}");
    Some(Learner::with_details(
        name.trim(),
        levels
            .split(['|', ','])
            .filter_map(parse_level)
            .collect::<Vec<_>>(),
    ))
}

/// Parses a learnset text report for a single move.
///
/// A report consists of a title line followed by sections, each starting with a method header
/// (`Via Level Up:`, `Via TM:`, `Via HM:`, `Via Breeding:`, or `Via Special Event:`). Each line
/// in a section names one Mon. Level-up lines also list levels (`Name: Lv. 12 | Lv. 15`). Sections
/// with no learners contain the line `NONE`.
pub fn parse_learnset_text(input: &str) -> Result<MoveLearners> {
    let mut learners = MoveLearners::new();
    let mut current = None;
    for line in input.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }
        if let Some(header) = line.strip_suffix(':').filter(|line| line.starts_with("Via ")) {
            let kind = section_kind(header)
                .ok_or_else(|| Error::msg(format!("invalid learn method section: {header}")))?;
            learners.add_section(kind);
            current = Some(kind);
            continue;
        }
        let Some(kind) = current else {
            // Title line.
            continue;
        };
        if line == EMPTY_SECTION || line == FAILED_SECTION {
            continue;
        }
        match kind {
            LearnMethodKind::LevelUp => match parse_level_up_line(line) {
                Some(learner) => learners.push(kind, learner),
                None => warn!("Skipping level-up line with no levels: {line}"),
            },
            _ => learners.push(kind, Learner::new(line)),
        }
    }
    Ok(learners)
}
