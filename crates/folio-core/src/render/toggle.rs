/// Visibility of the overflow cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleState {
    #[default]
    Collapsed,
    Expanded,
}

/// The "show more" control under the project grid.
///
/// Each rendered page owns its own toggle; it starts collapsed and flips on
/// every activation for as long as the page lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverflowToggle {
    hidden: usize,
    state: ToggleState,
}

impl OverflowToggle {
    /// A collapsed toggle for `hidden` overflow cards, or `None` when there is
    /// nothing to reveal.
    pub fn new(hidden: usize) -> Option<Self> {
        (hidden > 0).then_some(Self {
            hidden,
            state: ToggleState::Collapsed,
        })
    }

    pub fn activate(&mut self) -> ToggleState {
        self.state = match self.state {
            ToggleState::Collapsed => ToggleState::Expanded,
            ToggleState::Expanded => ToggleState::Collapsed,
        };
        self.state
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn overflow_visible(&self) -> bool {
        self.state == ToggleState::Expanded
    }

    pub fn label(&self) -> String {
        match self.state {
            ToggleState::Collapsed => self.collapsed_label(),
            ToggleState::Expanded => self.expanded_label().to_string(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.state {
            ToggleState::Collapsed => self.collapsed_icon(),
            ToggleState::Expanded => self.expanded_icon(),
        }
    }

    pub fn collapsed_label(&self) -> String {
        let noun = if self.hidden == 1 { "Project" } else { "Projects" };
        format!("Show {} More {}", self.hidden, noun)
    }

    pub fn expanded_label(&self) -> &'static str {
        "Show Less"
    }

    pub fn collapsed_icon(&self) -> &'static str {
        "fa-chevron-down"
    }

    pub fn expanded_icon(&self) -> &'static str {
        "fa-chevron-up"
    }
}
