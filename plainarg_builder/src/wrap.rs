use std::borrow::Cow;

/// Greedily wrap `text` into lines of at most `width` characters.
///
/// Existing line breaks are honoured.
/// Every line but the last is terminated by `'\n'`, which is not counted towards `width`.
/// When a line is broken at a space, that space is replaced by the `'\n'`.
///
/// The returned iterator is lazy and may be cloned to restart it.
/// The text is expected to contain neither words longer than `width` nor runs of multiple spaces.
/// When it does, the output is still finite, but some lines will exceed `width`.
///
/// ### Example
/// ```
/// # use plainarg_builder as plainarg;
/// use plainarg::wrap;
///
/// let lines: Vec<String> = wrap("hello world", 5).map(|line| line.into_owned()).collect();
/// assert_eq!(lines, vec!["hello\n", "world"]);
/// ```
pub fn wrap(text: &str, width: usize) -> Lines<'_> {
    Lines {
        remaining: text,
        width,
    }
}

/// The lines of a wrapped text.
/// See [`wrap`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    remaining: &'a str,
    width: usize,
}

impl<'a> Iterator for Lines<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }

        let text = self.remaining;
        let mut last_space: Option<usize> = None;

        // Only the first `width + 1` characters are candidates for a break.
        for (index, (offset, c)) in text.char_indices().enumerate() {
            if index > self.width {
                break;
            }

            match c {
                '\n' => return Some(self.split_keep(offset)),
                ' ' => last_space = Some(offset),
                _ => {}
            }
        }

        if text.chars().count() <= self.width {
            self.remaining = "";
            return Some(Cow::Borrowed(text));
        }

        match last_space {
            Some(offset) => Some(self.split_replace(offset)),
            None => {
                // The leading word is too long for the line.
                // Break at the first opportunity after it.
                match text.char_indices().find(|(_, c)| *c == ' ' || *c == '\n') {
                    Some((offset, ' ')) => Some(self.split_replace(offset)),
                    Some((offset, _)) => Some(self.split_keep(offset)),
                    None => {
                        self.remaining = "";
                        Some(Cow::Borrowed(text))
                    }
                }
            }
        }
    }
}

impl<'a> Lines<'a> {
    // Emit up to and including the line break at `offset`.
    fn split_keep(&mut self, offset: usize) -> Cow<'a, str> {
        let (line, remaining) = self.remaining.split_at(offset + 1);
        self.remaining = remaining;
        Cow::Borrowed(line)
    }

    // Emit up to the space at `offset`, with the space swapped for a line break.
    fn split_replace(&mut self, offset: usize) -> Cow<'a, str> {
        let line = &self.remaining[..offset];
        self.remaining = &self.remaining[offset + 1..];
        Cow::Owned(format!("{line}\n"))
    }
}
