//! Contextual letter-form joining for Arabic-family scripts.
//!
//! Each letter is replaced by its isolated, initial, medial or final
//! presentation form depending on whether its neighbours connect to it.
//! Lam followed by an alef variant becomes a single ligature.

/// How a character participates in cursive joining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Joining {
    /// Connects on both sides (beh, seen, lam, ...)
    Dual,
    /// Connects only to the preceding letter (alef, dal, reh, waw, ...)
    Right,
    /// Forces joining on both sides without changing form (tatweel, ZWJ)
    Causing,
    /// Combining marks; skipped when looking for neighbours
    Transparent,
    /// Does not join
    None,
}

/// Presentation forms: isolated, final, initial, medial.
///
/// Right-joining letters have no initial or medial form.
struct Forms {
    isolated: char,
    fin: char,
    initial: Option<char>,
    medial: Option<char>,
}

const fn dual(isolated: char, fin: char, initial: char, medial: char) -> Forms {
    Forms {
        isolated,
        fin,
        initial: Some(initial),
        medial: Some(medial),
    }
}

const fn right(isolated: char, fin: char) -> Forms {
    Forms {
        isolated,
        fin,
        initial: None,
        medial: None,
    }
}

const LAM: char = '\u{0644}';
const ZWJ: char = '\u{200D}';
const TATWEEL: char = '\u{0640}';

fn forms(c: char) -> Option<Forms> {
    let forms = match c {
        '\u{0621}' => right('\u{FE80}', '\u{FE80}'),
        '\u{0622}' => right('\u{FE81}', '\u{FE82}'),
        '\u{0623}' => right('\u{FE83}', '\u{FE84}'),
        '\u{0624}' => right('\u{FE85}', '\u{FE86}'),
        '\u{0625}' => right('\u{FE87}', '\u{FE88}'),
        '\u{0626}' => dual('\u{FE89}', '\u{FE8A}', '\u{FE8B}', '\u{FE8C}'),
        '\u{0627}' => right('\u{FE8D}', '\u{FE8E}'),
        '\u{0628}' => dual('\u{FE8F}', '\u{FE90}', '\u{FE91}', '\u{FE92}'),
        '\u{0629}' => right('\u{FE93}', '\u{FE94}'),
        '\u{062A}' => dual('\u{FE95}', '\u{FE96}', '\u{FE97}', '\u{FE98}'),
        '\u{062B}' => dual('\u{FE99}', '\u{FE9A}', '\u{FE9B}', '\u{FE9C}'),
        '\u{062C}' => dual('\u{FE9D}', '\u{FE9E}', '\u{FE9F}', '\u{FEA0}'),
        '\u{062D}' => dual('\u{FEA1}', '\u{FEA2}', '\u{FEA3}', '\u{FEA4}'),
        '\u{062E}' => dual('\u{FEA5}', '\u{FEA6}', '\u{FEA7}', '\u{FEA8}'),
        '\u{062F}' => right('\u{FEA9}', '\u{FEAA}'),
        '\u{0630}' => right('\u{FEAB}', '\u{FEAC}'),
        '\u{0631}' => right('\u{FEAD}', '\u{FEAE}'),
        '\u{0632}' => right('\u{FEAF}', '\u{FEB0}'),
        '\u{0633}' => dual('\u{FEB1}', '\u{FEB2}', '\u{FEB3}', '\u{FEB4}'),
        '\u{0634}' => dual('\u{FEB5}', '\u{FEB6}', '\u{FEB7}', '\u{FEB8}'),
        '\u{0635}' => dual('\u{FEB9}', '\u{FEBA}', '\u{FEBB}', '\u{FEBC}'),
        '\u{0636}' => dual('\u{FEBD}', '\u{FEBE}', '\u{FEBF}', '\u{FEC0}'),
        '\u{0637}' => dual('\u{FEC1}', '\u{FEC2}', '\u{FEC3}', '\u{FEC4}'),
        '\u{0638}' => dual('\u{FEC5}', '\u{FEC6}', '\u{FEC7}', '\u{FEC8}'),
        '\u{0639}' => dual('\u{FEC9}', '\u{FECA}', '\u{FECB}', '\u{FECC}'),
        '\u{063A}' => dual('\u{FECD}', '\u{FECE}', '\u{FECF}', '\u{FED0}'),
        '\u{0641}' => dual('\u{FED1}', '\u{FED2}', '\u{FED3}', '\u{FED4}'),
        '\u{0642}' => dual('\u{FED5}', '\u{FED6}', '\u{FED7}', '\u{FED8}'),
        '\u{0643}' => dual('\u{FED9}', '\u{FEDA}', '\u{FEDB}', '\u{FEDC}'),
        '\u{0644}' => dual('\u{FEDD}', '\u{FEDE}', '\u{FEDF}', '\u{FEE0}'),
        '\u{0645}' => dual('\u{FEE1}', '\u{FEE2}', '\u{FEE3}', '\u{FEE4}'),
        '\u{0646}' => dual('\u{FEE5}', '\u{FEE6}', '\u{FEE7}', '\u{FEE8}'),
        '\u{0647}' => dual('\u{FEE9}', '\u{FEEA}', '\u{FEEB}', '\u{FEEC}'),
        '\u{0648}' => right('\u{FEED}', '\u{FEEE}'),
        '\u{0649}' => right('\u{FEEF}', '\u{FEF0}'),
        '\u{064A}' => dual('\u{FEF1}', '\u{FEF2}', '\u{FEF3}', '\u{FEF4}'),
        // Persian additions
        '\u{067E}' => dual('\u{FB56}', '\u{FB57}', '\u{FB58}', '\u{FB59}'),
        '\u{0686}' => dual('\u{FB7A}', '\u{FB7B}', '\u{FB7C}', '\u{FB7D}'),
        '\u{0698}' => right('\u{FB8A}', '\u{FB8B}'),
        '\u{06A9}' => dual('\u{FB8E}', '\u{FB8F}', '\u{FB90}', '\u{FB91}'),
        '\u{06AF}' => dual('\u{FB92}', '\u{FB93}', '\u{FB94}', '\u{FB95}'),
        '\u{06CC}' => dual('\u{FBFC}', '\u{FBFD}', '\u{FBFE}', '\u{FBFF}'),
        _ => return None,
    };
    Some(forms)
}

fn joining(c: char) -> Joining {
    match c {
        TATWEEL | ZWJ => Joining::Causing,
        '\u{064B}'..='\u{065F}' | '\u{0670}' => Joining::Transparent,
        _ => match forms(c) {
            Some(Forms { initial: Some(_), .. }) => Joining::Dual,
            Some(_) if c == '\u{0621}' => Joining::None,
            Some(_) => Joining::Right,
            None => Joining::None,
        },
    }
}

/// Lam-alef ligature (isolated, final) for the alef variant `c`.
fn lam_alef(c: char) -> Option<(char, char)> {
    match c {
        '\u{0622}' => Some(('\u{FEF5}', '\u{FEF6}')),
        '\u{0623}' => Some(('\u{FEF7}', '\u{FEF8}')),
        '\u{0625}' => Some(('\u{FEF9}', '\u{FEFA}')),
        '\u{0627}' => Some(('\u{FEFB}', '\u{FEFC}')),
        _ => None,
    }
}

/// Nearest non-transparent neighbour before `index`.
fn prev_joiner(chars: &[char], index: usize) -> Joining {
    chars[..index]
        .iter()
        .rev()
        .map(|&c| joining(c))
        .find(|j| *j != Joining::Transparent)
        .unwrap_or(Joining::None)
}

/// Nearest non-transparent neighbour after `index`.
fn next_joiner(chars: &[char], index: usize) -> Joining {
    chars[index + 1..]
        .iter()
        .map(|&c| joining(c))
        .find(|j| *j != Joining::Transparent)
        .unwrap_or(Joining::None)
}

/// Replace Arabic-family letters with their contextual presentation forms.
///
/// Characters outside the joining tables pass through untouched.
pub(crate) fn reshape(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let Some(letter) = forms(c) else {
            out.push(c);
            i += 1;
            continue;
        };

        let joins_prev = matches!(prev_joiner(&chars, i), Joining::Dual | Joining::Causing);

        if c == LAM {
            // harakat may sit between lam and alef
            let alef_at = (i + 1..chars.len()).find(|&j| joining(chars[j]) != Joining::Transparent);
            if let Some((j, (isolated, fin))) =
                alef_at.and_then(|j| lam_alef(chars[j]).map(|forms| (j, forms)))
            {
                out.push(if joins_prev { fin } else { isolated });
                out.extend(&chars[i + 1..j]);
                i = j + 1;
                continue;
            }
        }

        let joins_next = letter.initial.is_some()
            && matches!(
                next_joiner(&chars, i),
                Joining::Dual | Joining::Right | Joining::Causing
            );

        let shaped = match (joins_prev, joins_next) {
            (true, true) => letter.medial.unwrap_or(letter.fin),
            (true, false) => letter.fin,
            (false, true) => letter.initial.unwrap_or(letter.isolated),
            (false, false) => letter.isolated,
        };
        out.push(shaped);
        i += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_passes_through() {
        assert_eq!(reshape("Hello, world 123"), "Hello, world 123");
    }

    #[test]
    fn test_single_letter_is_isolated() {
        assert_eq!(reshape("\u{0628}"), "\u{FE8F}");
    }

    #[test]
    fn test_three_dual_letters() {
        // beh + teh + theh -> initial, medial, final
        assert_eq!(
            reshape("\u{0628}\u{062A}\u{062B}"),
            "\u{FE91}\u{FE98}\u{FE9A}"
        );
    }

    #[test]
    fn test_right_joining_breaks_the_chain() {
        // beh + alef + beh: alef takes final form and does not join forward
        assert_eq!(
            reshape("\u{0628}\u{0627}\u{0628}"),
            "\u{FE91}\u{FE8E}\u{FE8F}"
        );
    }

    #[test]
    fn test_lam_alef_ligature() {
        assert_eq!(reshape("\u{0644}\u{0627}"), "\u{FEFB}");
        // after a joining letter the ligature takes its final form
        assert_eq!(reshape("\u{0628}\u{0644}\u{0627}"), "\u{FE91}\u{FEFC}");
    }

    #[test]
    fn test_lam_alef_ligature_across_fatha() {
        // lam, fatha, alef: the mark follows the ligature
        assert_eq!(reshape("\u{0644}\u{064E}\u{0627}"), "\u{FEFB}\u{064E}");
        assert_eq!(
            reshape("\u{0628}\u{0644}\u{064E}\u{0627}"),
            "\u{FE91}\u{FEFC}\u{064E}"
        );
    }

    #[test]
    fn test_persian_letters() {
        // peh + yeh (Persian) -> initial peh, final yeh
        assert_eq!(reshape("\u{067E}\u{06CC}"), "\u{FB58}\u{FBFD}");
        // gaf alone
        assert_eq!(reshape("\u{06AF}"), "\u{FB92}");
    }

    #[test]
    fn test_transparent_marks_are_skipped() {
        // beh + fatha + teh: the mark does not break joining
        assert_eq!(
            reshape("\u{0628}\u{064E}\u{062A}"),
            "\u{FE91}\u{064E}\u{FE96}"
        );
    }

    #[test]
    fn test_space_separates_words() {
        assert_eq!(reshape("\u{0628} \u{0628}"), "\u{FE8F} \u{FE8F}");
    }
}
