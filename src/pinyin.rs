/// Tone marked vowels, one row per vowel family, columns are tones 1 to 4
const TONE_MARKS: [[char; 4]; 6] = [
    ['ā', 'á', 'ǎ', 'à'],
    ['ē', 'é', 'ě', 'è'],
    ['ī', 'í', 'ǐ', 'ì'],
    ['ō', 'ó', 'ǒ', 'ò'],
    ['ū', 'ú', 'ǔ', 'ù'],
    ['ǖ', 'ǘ', 'ǚ', 'ǜ'],
];

/// Base letter for each row of `TONE_MARKS`, ü is written as v
const TONE_BASES: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'v'];

/// Convert pinyin with tone marks to pinyin with a trailing tone number, e.g. "zhōng" -> "zhong1", "lǜ" -> "lv4".
///
/// Pinyin without any tone mark is returned unchanged (no tone number is added for the neutral tone).
/// Only lowercase marks of the six vowel families are recognized, everything else is copied as is.
///
/// Known anomaly: if the input contains more than one tone mark, all of them are replaced by their
/// base letter but the tone number is taken from the last one ("āí" -> "ai2"). This is kept so that
/// the output stays compatible with existing data.
pub fn pinyin_num_from_mark(pinyin_mark: &str) -> String {
    let (mut pinyin, tone) = strip_tone_marks(pinyin_mark);
    if let Some(tone_digit) = tone.and_then(|t| char::from_digit(t, 10)) {
        pinyin.push(tone_digit);
    }
    pinyin
}

/// Replace every tone marked vowel by its base letter, returns the result and the tone (1-4) of the last
/// tone mark found, if any
pub fn strip_tone_marks(pinyin_mark: &str) -> (String, Option<u32>) {
    let mut pinyin = String::with_capacity(pinyin_mark.len());
    let mut tone = None;
    for c in pinyin_mark.chars() {
        match find_tone_mark(c) {
            Some((base, t)) => {
                pinyin.push(base);
                tone = Some(t);
            }
            None => pinyin.push(c),
        }
    }
    (pinyin, tone)
}

fn find_tone_mark(c: char) -> Option<(char, u32)> {
    TONE_MARKS
        .iter()
        .zip(TONE_BASES)
        .find_map(|(marks, base)| {
            marks
                .iter()
                .position(|&m| m == c)
                .and_then(|idx| u32::try_from(idx + 1).ok())
                .map(|tone| (base, tone))
        })
}
