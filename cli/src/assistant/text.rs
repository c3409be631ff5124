//! # Text Helpers
//!
//! File: cli/src/assistant/text.rs
//!
//! ## Overview
//!
//! Word-boundary title-casing for preference values shown in responses
//! ("general fitness" → "General Fitness").
//!
//! A word is a run of *cased* characters (uppercase, lowercase or titlecase
//! letters). The first character of each run takes its titlecase form and the
//! rest are lowercased; uncased characters such as digits, punctuation or CJK
//! ideographs end the run and pass through unchanged. Titlecase differs from
//! uppercase for Latin digraphs (`ǆ` → `ǅ`), ligatures (`ﬁ` → `Fi`), `ß` → `Ss`,
//! and Greek letters carrying an iota subscript.
//!

/// Title-cases `text` word by word.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if in_word {
            out.extend(c.to_lowercase());
        } else {
            push_titlecase(&mut out, c);
        }
        in_word = is_cased(c);
    }
    out
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase() || is_titlecase(c)
}

/// Members of the Unicode `Lt` (titlecase letter) category.
fn is_titlecase(c: char) -> bool {
    matches!(
        c,
        '\u{01C5}'
            | '\u{01C8}'
            | '\u{01CB}'
            | '\u{01F2}'
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}'
            | '\u{1FCC}'
            | '\u{1FFC}'
    )
}

/// Appends the titlecase mapping of `c`. Only characters whose titlecase
/// differs from their uppercase are listed; the rest use `to_uppercase`.
fn push_titlecase(out: &mut String, c: char) {
    let mapped: &str = match c {
        // Latin digraphs DŽ, LJ, NJ, DZ.
        '\u{01C4}'..='\u{01C6}' => "\u{01C5}",
        '\u{01C7}'..='\u{01C9}' => "\u{01C8}",
        '\u{01CA}'..='\u{01CC}' => "\u{01CB}",
        '\u{01F1}'..='\u{01F3}' => "\u{01F2}",
        'ß' => "Ss",
        // Latin ligatures.
        '\u{FB00}' => "Ff",
        '\u{FB01}' => "Fi",
        '\u{FB02}' => "Fl",
        '\u{FB03}' => "Ffi",
        '\u{FB04}' => "Ffl",
        '\u{FB05}' | '\u{FB06}' => "St",
        // Armenian ligatures.
        '\u{0587}' => "\u{0535}\u{0582}",
        '\u{FB13}' => "\u{0544}\u{0576}",
        '\u{FB14}' => "\u{0544}\u{0565}",
        '\u{FB15}' => "\u{0544}\u{056B}",
        '\u{FB16}' => "\u{054E}\u{0576}",
        '\u{FB17}' => "\u{0544}\u{056D}",
        // Greek with ypogegrammeni: lowercase forms map to the prosgegrammeni
        // capitals, which are already titlecase.
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            if let Some(title) = char::from_u32(c as u32 + 8) {
                out.push(title);
                return;
            }
            ""
        }
        '\u{1FB3}' => "\u{1FBC}",
        '\u{1FC3}' => "\u{1FCC}",
        '\u{1FF3}' => "\u{1FFC}",
        '\u{1FB2}' => "\u{1FBA}\u{0345}",
        '\u{1FB4}' => "\u{0386}\u{0345}",
        '\u{1FB7}' => "\u{0391}\u{0342}\u{0345}",
        '\u{1FC2}' => "\u{1FCA}\u{0345}",
        '\u{1FC4}' => "\u{0389}\u{0345}",
        '\u{1FC7}' => "\u{0397}\u{0342}\u{0345}",
        '\u{1FF2}' => "\u{1FFA}\u{0345}",
        '\u{1FF4}' => "\u{038F}\u{0345}",
        '\u{1FF7}' => "\u{03A9}\u{0342}\u{0345}",
        c if is_titlecase(c) => {
            out.push(c);
            return;
        }
        _ => "",
    };
    if mapped.is_empty() {
        out.extend(c.to_uppercase());
    } else {
        out.push_str(mapped);
    }
}
