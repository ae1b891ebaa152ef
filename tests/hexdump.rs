//! Tests for the hex/ASCII dump table.

use hwlog::fmt::hexdump::{HEADER, render};

fn rows(dump: &[u8]) -> Vec<String> {
    let text = std::str::from_utf8(dump).unwrap();
    text.strip_prefix(HEADER)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn header_layout() {
    assert!(HEADER.starts_with("Displacement    ++00++01"));
    assert!(HEADER.ends_with("++15++  ++ASCII  Value++\n"));
}

#[test]
fn short_row_pads_hex_but_not_ascii() {
    let dump = render(&[0x41, 0x09, 0x00]);
    let expected = format!(
        "00000(00000)      41  09  00  {}  A..",
        "    ".repeat(13)
    );
    assert_eq!(rows(&dump), vec![expected.as_str()]);
}

#[test]
fn exactly_one_full_row() {
    let dump = render(b"0123456789ABCDEF");
    assert_eq!(
        rows(&dump),
        vec![
            "00000(00000)      30  31  32  33  34  35  36  37  38  39  41  42  43  44  45  46    0123456789ABCDEF"
        ]
    );
}

#[test]
fn seventeen_bytes_start_a_second_row() {
    let dump = render(b"0123456789ABCDEFG");
    let rows = rows(&dump);
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("00000(00000)      "));
    assert_eq!(
        rows[1],
        format!("00016(00010)      47  {}  G", "    ".repeat(15))
    );
}

#[test]
fn hex_offsets_are_uppercase() {
    let dump = render(&[0u8; 0xA0 + 1]);
    let rows = rows(&dump);
    assert_eq!(rows.len(), 11);
    assert!(rows[10].starts_with("00160(000A0)      00  "));
}

#[test]
fn columns_stay_aligned() {
    let dump = render(&[0x20; 40]);
    let rows = rows(&dump);
    assert_eq!(rows.len(), 3);
    for row in &rows {
        assert_eq!(&row[18..20], "20");
    }
    // hex column plus gutter is the same width on full and partial rows
    assert_eq!(rows[0].len() - 16, rows[2].len() - 8);
}

#[test]
fn empty_payload_is_header_only() {
    assert_eq!(render(&[]), HEADER.as_bytes());
}

#[test]
fn high_bytes_pass_through_unchanged() {
    let dump = render(&[0x41, 0xFF, 0x80]);
    let last_row = dump[HEADER.len()..].to_vec();
    assert!(last_row.ends_with(&[b' ', b' ', 0x41, 0xFF, 0x80, b'\n']));
    assert_eq!(last_row.len(), 18 + 16 * 4 + 2 + 3 + 1);
}
