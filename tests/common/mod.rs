fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|w| w == needle)
}

fn inflate(data: &[u8]) -> Option<Vec<u8>> {
    miniz_oxide::inflate::decompress_to_vec_zlib(data).ok()
}

/// Decompressed page content streams, in page order. Walks `stream` ..
/// `endstream` pairs and keeps whatever inflates cleanly, which is exactly
/// the Flate-compressed content streams.
pub fn content_streams(pdf: &[u8]) -> Vec<Vec<u8>> {
    let mut streams = Vec::new();
    let mut pos = 0;
    while let Some(found) = find_from(pdf, pos, b"stream") {
        // Skip the tail of an `endstream` keyword.
        if found > 0 && pdf[found - 1] == b'd' {
            pos = found + 1;
            continue;
        }
        let mut data_start = found + b"stream".len();
        if pdf.get(data_start) == Some(&b'\r') {
            data_start += 1;
        }
        if pdf.get(data_start) == Some(&b'\n') {
            data_start += 1;
        }
        let Some(end_kw) = find_from(pdf, data_start, b"endstream") else {
            break;
        };
        let mut data_end = end_kw;
        while data_end > data_start && (pdf[data_end - 1] == b'\n' || pdf[data_end - 1] == b'\r')
        {
            data_end -= 1;
        }
        if let Some(raw) = inflate(&pdf[data_start..data_end]) {
            streams.push(raw);
        }
        pos = end_kw + b"endstream".len();
    }
    streams
}

fn find_from(haystack: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    if from >= haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|i| from + i)
}

/// (width, height) of every /MediaBox entry, in order of appearance.
pub fn media_boxes(pdf: &[u8]) -> Vec<(f32, f32)> {
    let mut boxes = Vec::new();
    let mut pos = 0;
    while let Some(found) = find_from(pdf, pos, b"/MediaBox") {
        pos = found + b"/MediaBox".len();
        let Some(open) = find_from(pdf, pos, b"[") else {
            break;
        };
        let Some(close) = find_from(pdf, open, b"]") else {
            break;
        };
        let nums: Vec<f32> = String::from_utf8_lossy(&pdf[open + 1..close])
            .split_whitespace()
            .filter_map(|s| s.parse().ok())
            .collect();
        if nums.len() == 4 {
            boxes.push((nums[2] - nums[0], nums[3] - nums[1]));
        }
        pos = close;
    }
    boxes
}

/// Whitespace-separated tokens of a decompressed content stream, for
/// asserting on operators and their operands.
pub fn tokens(stream: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stream)
        .split_whitespace()
        .map(|s| s.to_string())
        .collect()
}

/// Latin-1 byte view of `text`, matching how line text is WinAnsi-encoded
/// into the output.
pub fn winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) < 0x100 { c as u8 } else { b'?' })
        .collect()
}

/// True when a content stream shows the given encoded text: literal strings
/// for all-ASCII output, hex strings (either case) otherwise.
pub fn shows_text(stream: &[u8], winansi_bytes: &[u8]) -> bool {
    if contains(stream, winansi_bytes) {
        return true;
    }
    let upper: String = winansi_bytes.iter().map(|b| format!("{b:02X}")).collect();
    let lower = upper.to_ascii_lowercase();
    contains(stream, upper.as_bytes()) || contains(stream, lower.as_bytes())
}
