//! Visual reordering with the Unicode bidirectional algorithm.

use unicode_bidi::BidiInfo;

/// Mirrored counterpart of a paired punctuation character.
fn mirror(c: char) -> char {
    match c {
        '(' => ')',
        ')' => '(',
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        '<' => '>',
        '>' => '<',
        '\u{00AB}' => '\u{00BB}',
        '\u{00BB}' => '\u{00AB}',
        _ => c,
    }
}

/// Reorder one logical line into left-to-right visual order.
///
/// The paragraph direction is taken from the first strong character.
/// Right-to-left runs are reversed and their brackets mirrored; embedded
/// left-to-right runs (digits, Latin words) keep their internal order.
pub(crate) fn visual_line(line: &str) -> String {
    if line.is_empty() {
        return String::new();
    }

    let info = BidiInfo::new(line, None);
    let mut out = String::with_capacity(line.len());

    for para in &info.paragraphs {
        let (levels, runs) = info.visual_runs(para, para.range.clone());
        for run in runs {
            let segment = &line[run.clone()];
            if levels[run.start].is_rtl() {
                out.extend(segment.chars().rev().map(mirror));
            } else {
                out.push_str(segment);
            }
        }
    }

    out
}
