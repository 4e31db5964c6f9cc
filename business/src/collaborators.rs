//! Collaborator badges: turn the delimited collaborator string into short labels.

/// Literal separator between names in `Patient::collaborators`.
pub const COLLABORATOR_SEPARATOR: &str = ", ";

/// Badges shown before collapsing the rest into a single `+N` badge.
pub const DEFAULT_MAX_BADGES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollaboratorBadges {
    pub visible: Vec<Badge>,
    /// `+N` badge whose tooltip lists the hidden names.
    pub overflow: Option<Badge>,
}

impl CollaboratorBadges {
    /// Total badges rendered, including the overflow badge.
    fn len(&self) -> usize {
        self.visible.len() + usize::from(self.overflow.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits `collaborators` and builds at most `max` name badges plus an overflow badge.
///
/// An empty field produces no badges. Otherwise every piece between
/// separators counts as a name, even an empty one.
pub fn collaborator_badges(collaborators: &str, max: usize) -> CollaboratorBadges {
    if collaborators.is_empty() {
        return CollaboratorBadges::default();
    }
    let names: Vec<&str> = collaborators.split(COLLABORATOR_SEPARATOR).collect();

    let shown = names.len().min(max);
    let visible = names[..shown]
        .iter()
        .map(|name| Badge {
            label: collaborator_label(name),
            tooltip: (*name).to_owned(),
        })
        .collect();

    let hidden = &names[shown..];
    let overflow = (!hidden.is_empty()).then(|| Badge {
        label: format!("+{}", hidden.len()),
        tooltip: hidden.join(COLLABORATOR_SEPARATOR),
    });

    CollaboratorBadges { visible, overflow }
}

/// Short display token for one collaborator.
///
/// - anything containing "dr" (any case): `DR` + uppercased last word
/// - several words: uppercased initials
/// - a single word: its first two characters, uppercased
pub fn collaborator_label(name: &str) -> String {
    if name.to_lowercase().contains("dr") {
        let last = name.split_whitespace().last().unwrap_or_default();
        return format!("DR {}", last.to_uppercase());
    }

    if name.contains(' ') {
        return name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect();
    }

    name.chars().take(2).flat_map(char::to_uppercase).collect()
}
