/*!
Splitting a buffer into line views.

The persistence and lexer description formats are both line oriented. This
splitter hands out borrowed views into the source buffer, excluding each
`\n` terminator and including any trailing line without one. Carriage
returns get no special treatment.
*/

/// Return an iterator over the lines of `source`.
pub fn split_lines(source: &str) -> Lines<'_> {
    Lines { rest: Some(source) }
}

/// An iterator over the lines of a buffer, created by [`split_lines`].
#[derive(Clone, Debug)]
pub struct Lines<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        match memchr::memchr(b'\n', rest.as_bytes()) {
            Some(i) => {
                self.rest = Some(&rest[i + 1..]);
                Some(&rest[..i])
            }
            None => {
                self.rest = None;
                if rest.is_empty() {
                    None
                } else {
                    Some(rest)
                }
            }
        }
    }
}
