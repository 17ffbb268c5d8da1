// crates/domain/src/pad.rs

/// Left-pad `s` with `pad` until it is at least `width` characters long.
///
/// Never truncates: when `s` already reaches `width` (or `width` is zero) it
/// is returned unchanged. Width is measured in `char`s.
pub fn left_pad(s: &str, width: usize, pad: char) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_owned();
    }

    let mut padded = String::with_capacity(s.len() + (width - len) * pad.len_utf8());
    padded.extend(std::iter::repeat_n(pad, width - len));
    padded.push_str(s);
    padded
}
