/// What a visitor typed into the join form.
///
/// Fields are kept as entered; nothing downstream consumes them yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub interest: String,
}

impl Inquiry {
    pub fn is_blank(&self) -> bool {
        [&self.name, &self.email, &self.interest]
            .iter()
            .all(|s| s.trim().is_empty())
    }

    /// Name used in the acknowledgment, falling back to a generic greeting
    pub fn greeting_name(&self) -> &str {
        match self.name.trim() {
            "" => "explorer",
            name => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_when_every_field_is_whitespace() {
        let inquiry = Inquiry {
            name: "  ".into(),
            email: String::new(),
            interest: "\t".into(),
        };
        assert!(inquiry.is_blank());
        assert!(Inquiry::default().is_blank());
    }

    #[test]
    fn any_field_makes_it_non_blank() {
        let inquiry = Inquiry {
            interest: "Drones".into(),
            ..Default::default()
        };
        assert!(!inquiry.is_blank());
    }

    #[test]
    fn values_are_kept_verbatim() {
        let inquiry = Inquiry {
            name: "Asha".into(),
            email: "not-an-email".into(),
            interest: "AI, IoT".into(),
        };
        assert_eq!(inquiry.email, "not-an-email");
        assert_eq!(inquiry.greeting_name(), "Asha");
        assert_eq!(Inquiry::default().greeting_name(), "explorer");
    }
}
