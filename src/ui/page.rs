use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Page {
    #[default]
    Home,
    Services,
    About,
    Contact,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Services, Page::About, Page::Contact];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Services => "Services",
            Page::About => "About",
            Page::Contact => "Contact",
        }
    }

    /// Page bound to a digit key, `1` through `4`.
    pub fn from_digit(ch: char) -> Option<Page> {
        let index = ch.to_digit(10)? as usize;
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_pages() {
        assert_eq!(Page::from_digit('1'), Some(Page::Home));
        assert_eq!(Page::from_digit('4'), Some(Page::Contact));
        assert_eq!(Page::from_digit('0'), None);
        assert_eq!(Page::from_digit('5'), None);
        assert_eq!(Page::from_digit('x'), None);
    }
}
