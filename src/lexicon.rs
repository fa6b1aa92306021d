//! Word tables shared by the namer, the speller and the reader
//!
//! Two 1000-entry tables are built once, on first use:
//!
//! - **natural words**: English short-scale spelling of 0..=999 ("twenty-three",
//!   "nine hundred ninety-nine"); entry 0 is empty because a zero period is never spelled
//! - **period prefixes**: the Conway-Wechsler Latin prefix for every base-1000 digit of
//!   a zillion value, stored without its final vowel so that prefixes join with `illi`
//!   and close with `illion`
//!
//! Both tables carry reverse indexes for the reading direction.

use std::collections::HashMap;
use std::sync::LazyLock;

const ONES: [&str; 20] = [
    "",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Irregular prefixes of the first ten zillions.
///
/// Entry 0 never names a period on its own (zillion 0 is "thousand"); it only
/// appears inside compounds such as "millinillion".
const SMALL_PREFIXES: [&str; 10] = [
    "n", "m", "b", "tr", "quadr", "quint", "sext", "sept", "oct", "non",
];

// Sound-change markers carried by tens and hundreds components
const S: u8 = 0b0001;
const M: u8 = 0b0010;
const N: u8 = 0b0100;
const X: u8 = 0b1000;

const UNIT_COMPONENTS: [&str; 10] = [
    "", "un", "duo", "tre", "quattuor", "quinqua", "se", "septe", "octo", "nove",
];

const TEN_COMPONENTS: [(&str, u8); 10] = [
    ("", 0),
    ("deci", N),
    ("viginti", M | S),
    ("triginta", N | S),
    ("quadraginta", N | S),
    ("quinquaginta", N | S),
    ("sexaginta", N),
    ("septuaginta", N),
    ("octoginta", M | X),
    ("nonaginta", 0),
];

const HUNDRED_COMPONENTS: [(&str, u8); 10] = [
    ("", 0),
    ("centi", N | X),
    ("ducenti", N),
    ("trecenti", N | S),
    ("quadringenti", N | S),
    ("quingenti", N | S),
    ("sescenti", N),
    ("septingenti", N),
    ("octingenti", M | X),
    ("nongenti", 0),
];

struct Lexicon {
    words: Vec<String>,
    word_values: HashMap<String, u16>,
    prefixes: Vec<String>,
    prefix_values: HashMap<String, u16>,
}

static LEXICON: LazyLock<Lexicon> = LazyLock::new(Lexicon::build);

impl Lexicon {
    fn build() -> Self {
        let words: Vec<String> = (0..1000).map(spell_below_thousand).collect();
        let prefixes: Vec<String> = (0..1000).map(compose_prefix).collect();

        let word_values = index_of(&words);
        let prefix_values = index_of(&prefixes);

        Self {
            words,
            word_values,
            prefixes,
            prefix_values,
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn index_of(table: &[String]) -> HashMap<String, u16> {
    table
        .iter()
        .enumerate()
        .map(|(i, entry)| (entry.clone(), i as u16))
        .collect()
}

fn spell_below_thousand(n: usize) -> String {
    let (hundreds, rest) = (n / 100, n % 100);

    let rest_word = match rest {
        0..=19 => ONES[rest].to_string(),
        _ if rest % 10 == 0 => TENS[rest / 10].to_string(),
        _ => format!("{}-{}", TENS[rest / 10], ONES[rest % 10]),
    };

    match (hundreds, rest_word.is_empty()) {
        (0, _) => rest_word,
        (h, true) => format!("{} hundred", ONES[h]),
        (h, false) => format!("{} hundred {rest_word}", ONES[h]),
    }
}

/// Compose the prefix for a base-1000 digit: units, then tens, then hundreds.
///
/// The units component takes an extra letter depending on the markers of the
/// component that immediately follows it (tens if present, otherwise hundreds):
/// `tre` → `tres` before S or X, `se` → `ses`/`sex` before S/X,
/// `septe`/`nove` gain `m` or `n` before M or N.
fn compose_prefix(n: usize) -> String {
    if n < 10 {
        return SMALL_PREFIXES[n].to_string();
    }

    let (units, tens, hundreds) = (n % 10, n / 10 % 10, n / 100);
    let (ten, ten_markers) = TEN_COMPONENTS[tens];
    let (hundred, hundred_markers) = HUNDRED_COMPONENTS[hundreds];
    let markers = if tens == 0 {
        hundred_markers
    } else {
        ten_markers
    };

    let unit = UNIT_COMPONENTS[units];
    let extra = match units {
        3 if markers & (S | X) != 0 => "s",
        6 if markers & S != 0 => "s",
        6 if markers & X != 0 => "x",
        7 | 9 if markers & M != 0 => "m",
        7 | 9 if markers & N != 0 => "n",
        _ => "",
    };

    let mut prefix = format!("{unit}{extra}{ten}{hundred}");
    // Every tens/hundreds component ends in a vowel that `illi`/`illion` absorbs
    prefix.pop();
    prefix
}

/// English words for `n` in 0..=999 (empty for 0)
#[must_use]
pub(crate) fn natural_word(n: u16) -> &'static str {
    &LEXICON.words[usize::from(n)]
}

/// Reverse lookup of [`natural_word`]
#[must_use]
pub(crate) fn natural_value(word: &str) -> Option<u16> {
    LEXICON.word_values.get(word).copied()
}

/// Latin prefix for a base-1000 digit of a zillion value
#[must_use]
pub(crate) fn period_prefix(n: u16) -> &'static str {
    &LEXICON.prefixes[usize::from(n)]
}

/// Reverse lookup of [`period_prefix`]
#[must_use]
pub(crate) fn prefix_value(prefix: &str) -> Option<u16> {
    LEXICON.prefix_values.get(prefix).copied()
}
