//! Fixed 16-column hex + ASCII rendering of binary payloads.

use std::io::Write;

/// Bytes per row.
pub const ROW_WIDTH: usize = 16;

/// Column ruler printed above the first row.
pub const HEADER: &str = "Displacement    ++00++01++02++03++04++05++06++07++08++09++10++11++12++13++14++15++  ++ASCII  Value++\n";

/// Renders `data` as a header line followed by one row per 16-byte chunk.
///
/// Each row starts with the decimal and hex offset, then the hex bytes, a two-space
/// gutter, and the bytes as text with control characters shown as `.`. A short final
/// row pads the hex columns to keep the gutter aligned but prints only the bytes it has.
///
/// The ASCII column carries the payload bytes themselves, so the result is not
/// necessarily UTF-8.
#[must_use]
pub fn render(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(rendered_len(data.len()));
    render_into(&mut out, data);
    out
}

/// Appends the table for `data` to `out`.
pub fn render_into(out: &mut Vec<u8>, data: &[u8]) {
    out.extend_from_slice(HEADER.as_bytes());

    for (index, chunk) in data.chunks(ROW_WIDTH).enumerate() {
        let offset = index * ROW_WIDTH;
        // Writing into a Vec cannot fail.
        let _ = write!(out, "{offset:05}({offset:05X})      ");

        for byte in chunk {
            let _ = write!(out, "{byte:02X}  ");
        }
        for _ in chunk.len()..ROW_WIDTH {
            out.extend_from_slice(b"    ");
        }

        out.extend_from_slice(b"  ");
        out.extend(chunk.iter().map(|&b| printable(b)));
        out.push(b'\n');
    }
}

/// Exact size of the table for a payload of `len` bytes.
#[must_use]
pub const fn rendered_len(len: usize) -> usize {
    let full = len / ROW_WIDTH;
    let rest = len % ROW_WIDTH;
    let mut total = HEADER.len() + full * (18 + ROW_WIDTH * 4 + 2 + ROW_WIDTH + 1);
    if rest > 0 {
        total += 18 + ROW_WIDTH * 4 + 2 + rest + 1;
    }
    total
}

/// Control bytes would break the row layout, so they're masked. Everything else
/// is written through unchanged.
const fn printable(byte: u8) -> u8 {
    if byte < 0x20 { b'.' } else { byte }
}
