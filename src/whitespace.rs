use std::borrow::Cow;

#[inline]
fn already_collapsed(text: &str) -> bool {
    let mut prev_space = true;
    for c in text.chars() {
        if c.is_whitespace() {
            if prev_space || c != ' ' {
                return false;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
    }
    !prev_space || text.is_empty()
}

#[inline(never)]
fn do_collapse(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(word);
    }
    result
}

/// Replace every run of whitespace with a single space and trim both ends.
pub fn collapse(text: &str) -> Cow<str> {
    if already_collapsed(text) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(do_collapse(text))
    }
}

/// Whitespace that is leading, trailing, or follows other whitespace.
pub fn count_unnecessary(text: &str) -> usize {
    let mut count = 0;
    let mut prev_space = false;
    let mut chars = text.chars().enumerate().peekable();

    while let Some((i, c)) = chars.next() {
        let space = c.is_whitespace();
        if space && (i == 0 || prev_space || chars.peek().is_none()) {
            count += 1;
        }
        prev_space = space;
    }

    count
}
