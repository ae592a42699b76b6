/// Field separators in an alog line
const SEPARATORS: [char; 2] = [' ', '\t'];

fn is_separator(ch: char) -> bool {
    SEPARATORS.contains(&ch)
}

/// Pull the next whitespace-delimited token out of `line` starting at `*pos`.
///
/// On success `*pos` is left just past the token, so repeated calls walk the
/// line field by field. Returns `None` once only separators remain.
pub fn next_token<'a>(line: &'a str, pos: &mut usize) -> Option<&'a str> {
    let rest = line.get(*pos..)?;
    let start = *pos + rest.find(|c: char| !is_separator(c))?;
    let len = line[start..]
        .find(is_separator)
        .unwrap_or(line.len() - start);

    *pos = start + len;
    Some(&line[start..start + len])
}

/// The `n`th (zero-based) whitespace-delimited field of `line`
pub fn nth_field(line: &str, n: usize) -> Option<&str> {
    let mut pos = 0;
    for _ in 0..n {
        next_token(line, &mut pos)?;
    }
    next_token(line, &mut pos)
}
