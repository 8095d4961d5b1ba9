//! Main menu choices

/// One entry of the interactive main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Summary,
    Monthly,
    Export,
    Exit,
}

impl MenuChoice {
    /// All choices in display order
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Add,
        MenuChoice::List,
        MenuChoice::Summary,
        MenuChoice::Monthly,
        MenuChoice::Export,
        MenuChoice::Exit,
    ];

    /// Parse the user's menu selection
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::List),
            "3" => Some(Self::Summary),
            "4" => Some(Self::Monthly),
            "5" => Some(Self::Export),
            "0" | "q" | "quit" | "exit" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Add => "1",
            Self::List => "2",
            Self::Summary => "3",
            Self::Monthly => "4",
            Self::Export => "5",
            Self::Exit => "0",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add record",
            Self::List => "List records",
            Self::Summary => "Show summary",
            Self::Monthly => "Monthly summary",
            Self::Export => "Export to CSV",
            Self::Exit => "Exit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_keys() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::parse(choice.key()), Some(choice));
        }
    }

    #[test]
    fn test_parse_exit_aliases() {
        assert_eq!(MenuChoice::parse(" q "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("exit"), Some(MenuChoice::Exit));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(MenuChoice::parse("9"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }
}
