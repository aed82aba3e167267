//! 各语言 0 到 10 的拼写表。
//!
//! `Spellings` 以数值为下标给出解码时使用的拼写；编码时这些拼写同样可读，
//! 额外的同义写法放在各语言的 `*_ALIASES` 中。

/// 以数值为下标的拼写表。
pub type Spellings = [&'static str; 11];

pub(crate) static ENGLISH: Spellings = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

pub(crate) static SPANISH: Spellings = [
    "cero", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve", "diez",
];

pub(crate) static HAITIAN_CREOLE: Spellings = [
    "zèro", "en", "de", "twa", "kat", "senk", "sis", "sèt", "wit", "nèf", "dis",
];

pub(crate) static KLINGON: Spellings = [
    "pagh", "wa’", "cha’", "wej", "loS", "vagh", "jav", "Soch", "chorgh", "Hut", "wa’maH",
];

pub(crate) static GA: Spellings = [
    "ekobɛ", "ekome", "enyɔ", "etɛ", "ejwɛ", "enumɔ", "ekpaa", "kpawo", "kpaanyɔ", "nɛɛhu",
    "nyɔŋma",
];

pub(crate) static HAWAIIAN: Spellings = [
    "῾ole", "῾ekahi", "῾elua", "῾ekolu", "῾ehā", "῾elima", "῾eono", "῾ehiku", "῾ewalu", "῾eiwa",
    "῾umi",
];

pub(crate) const HAWAIIAN_ALIASES: &[(&str, i64)] = &[
    ("akahi", 1),
    ("῾alima", 5),
    ("῾awalu", 8),
    ("iwa", 9),
    ("῾aiwa", 9),
];

pub(crate) static JAPANESE_COMMON: Spellings = [
    "rei", "ichi", "ni", "san", "shi", "go", "roku", "nana", "hachi", "kyu", "ju",
];

pub(crate) static JAPANESE_KUNYOMI: Spellings = [
    "zero", "hito", "futa", "mi", "yon", "itsu", "mu", "nana", "ya", "kokono", "to",
];

pub(crate) static JAPANESE_KUNYOMI2: Spellings = [
    "zero", "hito", "futa", "mi", "yo", "itsu", "mu", "nano", "yo", "kokono", "so",
];

pub(crate) static JAPANESE_ONYOMI: Spellings = [
    "rei", "ichi", "ni", "san", "shi", "go", "roku", "shichi", "hachi", "kyu", "ju",
];

pub(crate) static JAPANESE_ONYOMI2: Spellings = [
    "rei", "itsu", "ji", "zo", "shi", "go", "riku", "shichi", "hachi", "ku", "ju",
];

pub(crate) static JAPANESE_KANJI: Spellings = [
    "零", "一", "二", "三", "四", "五", "六", "七", "八", "九", "十",
];

/// 日语可读写法中不属于常用拼写表的部分。
///
/// 读法表之间存在冲突（`itsu` 在 onyomi2 中表示 1，`yo` 在 kunyomi2 中同时表示 4 与 8），
/// 编码一律按这里给出的数值解读。
pub(crate) const JAPANESE_ALIASES: &[(&str, i64)] = &[
    ("ji", 2),
    ("zo", 3),
    ("riku", 6),
    ("shichi", 7),
    ("ku", 9),
    ("zero", 0),
    ("hito", 1),
    ("futa", 2),
    ("mi", 3),
    ("yon", 4),
    ("itsu", 5),
    ("mu", 6),
    ("nano", 7),
    ("ya", 8),
    ("yo", 8),
    ("kokono", 9),
    ("to", 10),
    ("so", 10),
    ("零", 0),
    ("一", 1),
    ("二", 2),
    ("三", 3),
    ("四", 4),
    ("五", 5),
    ("六", 6),
    ("七", 7),
    ("八", 8),
    ("九", 9),
    ("十", 10),
];
