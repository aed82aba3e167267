//! 使用 `spoke-tck` 对语言编解码族进行契约回归。

use spoke_codec_lang::{
    Phrase, english_codec, ga_codec, haitian_creole_codec, hawaiian_codec, japanese_codec,
    klingon_codec, language_codecs, spanish_codec,
};
use spoke_core::Interpreter;

fn phrases(items: &[&str]) -> Vec<Phrase> {
    items.iter().copied().map(Phrase::from).collect()
}

#[test]
fn tck_case_insensitive_languages() {
    spoke_tck::assert_codec_contract(
        &english_codec(),
        &phrases(&["one two", "TEN", "zero"]),
        &phrases(&["eleven", "one  two", "uno"]),
    );
    spoke_tck::assert_codec_contract(
        &spanish_codec(),
        &phrases(&["dos cinco uno", "Diez"]),
        &phrases(&["two", "once"]),
    );
    spoke_tck::assert_codec_contract(
        &haitian_creole_codec(),
        &phrases(&["nèf senk twa", "Zèro"]),
        &phrases(&["nef"]),
    );
    spoke_tck::assert_codec_contract(
        &ga_codec(),
        &phrases(&["ekome enyɔ etɛ"]),
        &phrases(&["one"]),
    );
}

#[test]
fn tck_languages_with_custom_spelling_rules() {
    spoke_tck::assert_codec_contract(
        &klingon_codec(),
        &phrases(&["wej vagh Soch", "wa' cha` wa’maH"]),
        &phrases(&["wej vagh soch", "WEJ"]),
    );
    spoke_tck::assert_codec_contract(
        &hawaiian_codec(),
        &phrases(&["'ekahi ’elua", "῾UMI iwa"]),
        &phrases(&["ekahi"]),
    );
    spoke_tck::assert_codec_contract(
        &japanese_codec(),
        &phrases(&["三 五 七", "san go nana", "yon itsu hito zero"]),
        &phrases(&["three", "san go eleven"]),
    );
}

#[test]
fn tck_canonical_spellings_round_trip() {
    let counting = |words: &[&str]| phrases(&[words.join(" ").as_str()]);
    spoke_tck::assert_lossless_roundtrip(
        &english_codec(),
        &counting(&[
            "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
        ]),
    );
    spoke_tck::assert_lossless_roundtrip(
        &klingon_codec(),
        &phrases(&["loS vagh wa’ pagh", "wa’maH Hut"]),
    );
    spoke_tck::assert_lossless_roundtrip(&spanish_codec(), &phrases(&["", "cero", "uno dos tres"]));
    spoke_tck::assert_lossless_roundtrip(&japanese_codec(), &phrases(&["shi go ichi rei"]));
}

#[test]
fn tck_language_interpreter_laws() {
    let interpreter = Interpreter::new(language_codecs()).expect("语言族应可构造");
    spoke_tck::assert_interpreter_laws(
        &interpreter,
        &phrases(&["one two", "三 五", "wej vagh Soch", "FooBar", "῾umi"]),
    );
}
