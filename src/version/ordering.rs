use std::cmp::Ordering;

/// One piece of a version string: either a run of digits or a run of letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Number(&'a str),
    Qualifier(&'a str),
}

/// Compare two version strings segment by segment.
///
/// Versions are split on `.`, `-` and `_` and at every digit/letter
/// transition, so `1.0.0.Beta2` becomes `1 0 0 beta 2`. Every segment gets a
/// weight: pre-release qualifiers, then `0` together with the release
/// qualifiers (`Final`, `GA`, `Release`), then `SP`, then positive numbers.
/// A missing trailing segment counts as `0`, so `1`, `1.0` and `1.Final` are
/// all equal.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let left = segments(a);
    let right = segments(b);

    for i in 0..left.len().max(right.len()) {
        let l = left.get(i).copied().unwrap_or(ZERO);
        let r = right.get(i).copied().unwrap_or(ZERO);
        let ordering = compare_segments(l, r);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}

fn segments(version: &str) -> Vec<Segment<'_>> {
    let mut result = Vec::new();

    for part in version.split(['.', '-', '_']).filter(|p| !p.is_empty()) {
        let mut start = 0;
        let mut digits = None;
        for (idx, ch) in part.char_indices() {
            let is_digit = ch.is_ascii_digit();
            if let Some(prev) = digits {
                if prev != is_digit {
                    result.push(segment(&part[start..idx], prev));
                    start = idx;
                }
            }
            digits = Some(is_digit);
        }
        if let Some(prev) = digits {
            result.push(segment(&part[start..], prev));
        }
    }

    result
}

fn segment(text: &str, digits: bool) -> Segment<'_> {
    if digits {
        let trimmed = text.trim_start_matches('0');
        Segment::Number(if trimmed.is_empty() { "0" } else { trimmed })
    } else {
        Segment::Qualifier(text)
    }
}

const ZERO: Segment<'static> = Segment::Number("0");

const UNKNOWN_RANK: u8 = 5;
const RELEASE_RANK: u8 = 6;
const NUMBER_RANK: u8 = 8;

fn compare_segments(a: Segment<'_>, b: Segment<'_>) -> Ordering {
    let ordering = rank(a).cmp(&rank(b));
    if ordering != Ordering::Equal {
        return ordering;
    }
    match (a, b) {
        // leading zeros are already stripped, so length orders first
        (Segment::Number(x), Segment::Number(y)) => x.len().cmp(&y.len()).then_with(|| x.cmp(y)),
        (Segment::Qualifier(x), Segment::Qualifier(y)) if rank(a) == UNKNOWN_RANK => {
            x.to_ascii_lowercase().cmp(&y.to_ascii_lowercase())
        }
        _ => Ordering::Equal,
    }
}

fn rank(segment: Segment<'_>) -> u8 {
    match segment {
        Segment::Number("0") => RELEASE_RANK,
        Segment::Number(_) => NUMBER_RANK,
        Segment::Qualifier(q) => match q.to_ascii_lowercase().as_str() {
            "alpha" | "a" => 0,
            "beta" | "b" => 1,
            "milestone" | "m" => 2,
            "rc" | "cr" => 3,
            "snapshot" => 4,
            "final" | "ga" | "release" => RELEASE_RANK,
            "sp" => 7,
            _ => UNKNOWN_RANK,
        },
    }
}
