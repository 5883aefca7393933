use std::str::FromStr;

/// Known job categories offered in the category selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Carpentry,
    Plumbing,
    Painting,
    Electrical,
    Cleaning,
    Gardening,
    Photography,
    Transport,
}

impl Category {
    /// Display name, also the tag stored on job records
    pub fn name(&self) -> &str {
        match self {
            Self::Carpentry => "Carpentry",
            Self::Plumbing => "Plumbing",
            Self::Painting => "Painting",
            Self::Electrical => "Electrical",
            Self::Cleaning => "Cleaning",
            Self::Gardening => "Gardening",
            Self::Photography => "Photography",
            Self::Transport => "Transport",
        }
    }

    /// Selector id, lowercase
    pub fn id(&self) -> &str {
        match self {
            Self::Carpentry => "carpentry",
            Self::Plumbing => "plumbing",
            Self::Painting => "painting",
            Self::Electrical => "electrical",
            Self::Cleaning => "cleaning",
            Self::Gardening => "gardening",
            Self::Photography => "photography",
            Self::Transport => "transport",
        }
    }

    pub fn icon(&self) -> &str {
        match self {
            Self::Carpentry => "🔨",
            Self::Plumbing => "🔧",
            Self::Painting => "🖌",
            Self::Electrical => "⚡",
            Self::Cleaning => "🧹",
            Self::Gardening => "🌱",
            Self::Photography => "📷",
            Self::Transport => "🚚",
        }
    }

    pub fn all() -> [Category; 8] {
        [
            Self::Carpentry,
            Self::Plumbing,
            Self::Painting,
            Self::Electrical,
            Self::Cleaning,
            Self::Gardening,
            Self::Photography,
            Self::Transport,
        ]
    }

    /// Looks up a free-form category tag, ignoring case
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(tag))
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| format!("Unknown category: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_lowercase_names() {
        for category in Category::all() {
            assert_eq!(category.id(), category.name().to_lowercase());
        }
    }

    #[test]
    fn test_from_tag_ignores_case() {
        assert_eq!(Category::from_tag("PLUMBING"), Some(Category::Plumbing));
        assert_eq!("painting".parse::<Category>(), Ok(Category::Painting));
        assert!(Category::from_tag("welding").is_none());
    }
}
