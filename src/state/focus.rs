#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Form,
    List,
}

impl Focus {
    /// Two panes, so next and prev coincide.
    pub fn next(&self) -> Focus {
        match self {
            Focus::Form => Focus::List,
            Focus::List => Focus::Form,
        }
    }

    pub fn prev(&self) -> Focus {
        self.next()
    }
}
