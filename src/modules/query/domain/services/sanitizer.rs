/// Characters that could open or close markup when echoed back
const STRIPPED: [char; 5] = ['<', '>', '"', '\'', '&'];

/// Delete markup-significant characters. Deletes rather than escapes, so the
/// output can be shorter than the input.
pub fn sanitize(input: &str) -> String {
    input.chars().filter(|c| !STRIPPED.contains(c)).collect()
}

/// Delete ASCII control characters (0x00-0x1F and 0x7F)
pub fn strip_control(input: &str) -> String {
    input.chars().filter(|c| !c.is_ascii_control()).collect()
}
