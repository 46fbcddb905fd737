use insta::assert_snapshot;
use numeral_reader_rust::{Language, OutputFormat, format_output, read_text};

#[test]
fn ten_million_text_snapshot() {
    let output = read_text("10000000", &Language::ALL).unwrap();
    let text = format_output(&output, &[], OutputFormat::Text).unwrap();
    assert_snapshot!(text, @r"
    [ja]
    romanized: issenman
    hiragana: いっせんまん
    katakana: イッセンマン
    kanji: 一千万

    [th]
    romanized: sip lan
    native: สิบล้าน
    native digits: ๑๐๐๐๐๐๐๐
    arabic: 10,000,000
    ");
}

#[test]
fn thai_json_snapshot() {
    let output = read_text(" 121\n", &[Language::Thai]).unwrap();
    let json = format_output(&output, &[], OutputFormat::Json).unwrap();
    assert_snapshot!(json, @r#"
    {
      "number": "121",
      "readings": [
        {
          "language": "th",
          "romanized": "nueng roi yi sip et",
          "native": "หนึ่งร้อยยี่สิบเอ็ด",
          "native_digits": "๑๒๑",
          "arabic_formatted": "121"
        }
      ]
    }
    "#);
}

#[test]
fn upper_bound_json_keeps_precision() {
    let output = read_text("10000000000000000", &[Language::Japanese]).unwrap();
    let json = format_output(&output, &[], OutputFormat::Json).unwrap();
    assert_snapshot!(json, @r#"
    {
      "number": "10000000000000000",
      "readings": [
        {
          "language": "ja",
          "romanized": "ikkei",
          "hiragana": "いっけい",
          "katakana": "イッケイ",
          "kanji": "一京"
        }
      ]
    }
    "#);
}
