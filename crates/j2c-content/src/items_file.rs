//! Line classification for `.items` files.

/// One line of an `.items` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemsFileLine<'a> {
    /// Declares a group; never matched against channel links.
    Group,
    /// Declares an item named by the second whitespace-delimited token.
    Item { name: &'a str },
    /// Blank lines and lines with fewer than two tokens.
    Other,
}

impl<'a> ItemsFileLine<'a> {
    pub fn classify(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Other;
        }
        if is_group_line(trimmed) {
            return Self::Group;
        }
        match search_name_in_line(trimmed) {
            Some(name) => Self::Item { name },
            None => Self::Other,
        }
    }

    /// The declared item name, for item lines only.
    pub fn item_name(&self) -> Option<&'a str> {
        match self {
            Self::Item { name } => Some(name),
            _ => None,
        }
    }
}

fn is_group_line(trimmed: &str) -> bool {
    trimmed
        .get(..5)
        .is_some_and(|head| head.eq_ignore_ascii_case("group"))
}

/// Second whitespace-delimited token of `line`, if it has one.
pub fn search_name_in_line(line: &str) -> Option<&str> {
    line.split_whitespace().nth(1)
}

/// Names of every item declared in `lines`, in order, duplicates included.
pub fn item_names<'a, I>(lines: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter_map(|line| ItemsFileLine::classify(line).item_name())
        .collect()
}
