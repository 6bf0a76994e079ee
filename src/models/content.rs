/// Glyphs drawn inline as SVG
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Rocket,
    Brain,
    Cog,
    Users,
    Trophy,
    Award,
    Star,
    Zap,
    Play,
    ArrowRight,
    Menu,
    Close,
    Instagram,
    Linkedin,
    Github,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Rocket => "rocket",
            Icon::Brain => "brain",
            Icon::Cog => "cog",
            Icon::Users => "users",
            Icon::Trophy => "trophy",
            Icon::Award => "award",
            Icon::Star => "star",
            Icon::Zap => "zap",
            Icon::Play => "play",
            Icon::ArrowRight => "arrow-right",
            Icon::Menu => "menu",
            Icon::Close => "x",
            Icon::Instagram => "instagram",
            Icon::Linkedin => "linkedin",
            Icon::Github => "github",
        }
    }

    pub fn all() -> Vec<Icon> {
        vec![
            Icon::Rocket,
            Icon::Brain,
            Icon::Cog,
            Icon::Users,
            Icon::Trophy,
            Icon::Award,
            Icon::Star,
            Icon::Zap,
            Icon::Play,
            Icon::ArrowRight,
            Icon::Menu,
            Icon::Close,
            Icon::Instagram,
            Icon::Linkedin,
            Icon::Github,
        ]
    }
}

/// Two-stop gradient used for card badges and icon tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gradient {
    BlueCyan,
    PurplePink,
    GreenEmerald,
    OrangeRed,
    YellowOrange,
    BluePurple,
    GreenCyan,
}

impl Gradient {
    pub fn class(&self) -> &'static str {
        match self {
            Gradient::BlueCyan => "grad-blue-cyan",
            Gradient::PurplePink => "grad-purple-pink",
            Gradient::GreenEmerald => "grad-green-emerald",
            Gradient::OrangeRed => "grad-orange-red",
            Gradient::YellowOrange => "grad-yellow-orange",
            Gradient::BluePurple => "grad-blue-purple",
            Gradient::GreenCyan => "grad-green-cyan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    pub title: &'static str,
    pub icon: Icon,
    pub description: &'static str,
    pub gradient: Gradient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: Option<&'static str>,
    pub tech: &'static [&'static str],
    pub achievement: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub color: Gradient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub avatar: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
    pub hover_class: &'static str,
}

/// Which side of the timeline spine an entry sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Timeline entries alternate, starting on the left
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// In-page anchor targets, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Vision,
    Projects,
    Achievements,
    Join,
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Vision => "Vision",
            Section::Projects => "Projects",
            Section::Achievements => "Achievements",
            Section::Join => "Join",
        }
    }

    /// Fragment identifier: the label in lowercase
    pub fn anchor(&self) -> String {
        self.label().to_lowercase()
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn all() -> Vec<Section> {
        vec![
            Section::Home,
            Section::Vision,
            Section::Projects,
            Section::Achievements,
            Section::Join,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_anchors_are_lowercase_labels() {
        let anchors: Vec<String> = Section::all().iter().map(Section::anchor).collect();
        assert_eq!(anchors, ["home", "vision", "projects", "achievements", "join"]);
        assert_eq!(Section::Join.href(), "#join");
    }

    #[test]
    fn icon_names_are_distinct() {
        let mut names: Vec<&str> = Icon::all().iter().map(Icon::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Icon::all().len());
    }

    #[test]
    fn timeline_sides_alternate() {
        let sides: Vec<Side> = (0..4).map(Side::for_index).collect();
        assert_eq!(sides, [Side::Left, Side::Right, Side::Left, Side::Right]);
    }
}
