/// Byte for `c` in WinAnsiEncoding, if the code page has it.
///
/// Latin-1 maps straight through. The typographic punctuation in the
/// 0x80-0x9F block is mapped explicitly.
fn win_ansi_byte(c: char) -> Option<u8> {
    let byte = match c {
        '€' => 0x80,
        '‚' => 0x82,
        '„' => 0x84,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
        _ => return None,
    };
    Some(byte)
}

/// Encodes text for a WinAnsiEncoding Type1 font. Characters outside the
/// code page become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(|c| win_ansi_byte(c).unwrap_or(b'?')).collect()
}

/// Characters of `s` that `to_win_ansi` would replace, in order.
pub fn unencodable_chars(s: &str) -> Vec<char> {
    s.chars().filter(|&c| win_ansi_byte(c).is_none()).collect()
}
