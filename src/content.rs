//! Display copy for the landing page.
//!
//! Order matters: achievements render top-to-bottom as a timeline and
//! testimonials rotate in listed order.

use crate::models::{
    Achievement, Capability, Gradient, Icon, Project, SocialLink, Testimonial,
};

pub const BRAND: &str = "AdAstra";
pub const TAGLINE: &str = "Rise Above. Build Beyond.";
pub const HERO_BLURB: &str =
    "The official Robotics & Drone Club of CIT – where innovation takes flight across Bharat";

pub const CAPABILITIES: &[Capability] = &[
    Capability {
        title: "Drone Development",
        icon: Icon::Rocket,
        description: "Advanced UAV systems for surveillance, delivery, and agricultural applications across India",
        gradient: Gradient::BlueCyan,
    },
    Capability {
        title: "AI + Robotics",
        icon: Icon::Brain,
        description: "Intelligent automation solutions for Indian manufacturing and service industries",
        gradient: Gradient::PurplePink,
    },
    Capability {
        title: "Industrial Tie-ups",
        icon: Icon::Cog,
        description: "Partnerships with Tata, Mahindra, and emerging Indian tech startups",
        gradient: Gradient::GreenEmerald,
    },
    Capability {
        title: "Workshops + Training",
        icon: Icon::Users,
        description: "Skill development programs aligned with Digital India and Make in India initiatives",
        gradient: Gradient::OrangeRed,
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Swadeshi Surveillance Drone",
        description: "Indigenous border monitoring system for Indian Armed Forces",
        image: None,
        tech: &["Python", "OpenCV", "ROS", "TensorFlow"],
        achievement: "Selected for DefExpo 2024",
    },
    Project {
        title: "Kisan Mitra AgriBot",
        description: "AI-powered farming assistant for precision agriculture in rural India",
        image: None,
        tech: &["IoT", "Machine Learning", "Arduino", "React"],
        achievement: "Winner - Smart India Hackathon 2023",
    },
    Project {
        title: "Urban Delivery Swarm",
        description: "Multi-drone coordination system for last-mile delivery in Indian cities",
        image: None,
        tech: &["ROS", "Python", "5G", "Cloud"],
        achievement: "Funded by Startup India",
    },
];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        year: "2024",
        title: "National Robotics Championship",
        description: "1st Place - All India Council for Technical Education (AICTE)",
        icon: Icon::Trophy,
        color: Gradient::YellowOrange,
    },
    Achievement {
        year: "2023",
        title: "Smart India Hackathon",
        description: "Grand Winner - Ministry of Electronics & IT",
        icon: Icon::Award,
        color: Gradient::BluePurple,
    },
    Achievement {
        year: "2023",
        title: "IIT Bombay TechFest",
        description: "Best Innovation Award - Robotics Category",
        icon: Icon::Star,
        color: Gradient::GreenCyan,
    },
    Achievement {
        year: "2022",
        title: "AdAstra Foundation",
        description: "Established with support from CIT Alumni Network",
        icon: Icon::Rocket,
        color: Gradient::PurplePink,
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Arjun Sharma",
        role: "Alumni, Software Engineer at Flipkart",
        quote: "AdAstra transformed me from a curious first-year to a confident robotics engineer. The hands-on projects prepared me for real-world challenges in the Indian tech ecosystem.",
        avatar: None,
    },
    Testimonial {
        name: "Dr. Priya Nair",
        role: "Faculty Advisor, Dept. of Electronics",
        quote: "These students consistently push boundaries. Their work on indigenous drone technology is contributing to India's self-reliance in defense and agriculture.",
        avatar: None,
    },
    Testimonial {
        name: "Rahul Gupta",
        role: "Final Year, Placed at Tata Consultancy Services",
        quote: "From zero coding knowledge to building AI-powered robots - AdAstra's mentorship and project-based learning made the impossible possible!",
        avatar: None,
    },
];

pub const HASHTAGS: &[&str] = &[
    "#AdAstraRoar",
    "#SilentAchievers",
    "#MakeInIndia",
    "#DigitalBharat",
    "#InnovateIndia",
];

pub const QUICK_LINKS: &[&str] = &["Team", "Events", "Resources", "Certificates", "Gallery"];

pub const PARTNERS: &[&str] = &[
    "Tata Group",
    "Mahindra Tech",
    "Startup India",
    "DRDO",
    "IIT Alumni Network",
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: Icon::Instagram,
        label: "Instagram",
        href: "https://instagram.com",
        hover_class: "hover-pink",
    },
    SocialLink {
        icon: Icon::Linkedin,
        label: "LinkedIn",
        href: "https://linkedin.com",
        hover_class: "hover-blue",
    },
    SocialLink {
        icon: Icon::Github,
        label: "GitHub",
        href: "https://github.com",
        hover_class: "hover-grey",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_sizes_match_the_page() {
        assert_eq!(CAPABILITIES.len(), 4);
        assert_eq!(PROJECTS.len(), 3);
        assert_eq!(ACHIEVEMENTS.len(), 4);
        assert_eq!(TESTIMONIALS.len(), 3);
    }

    #[test]
    fn achievements_are_newest_first() {
        let years: Vec<&str> = ACHIEVEMENTS.iter().map(|a| a.year).collect();
        let mut sorted = years.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(years, sorted);
    }

    #[test]
    fn every_project_lists_its_stack() {
        assert!(PROJECTS.iter().all(|p| !p.tech.is_empty()));
    }

    #[test]
    fn testimonials_have_quotes() {
        assert!(TESTIMONIALS
            .iter()
            .all(|t| !t.name.is_empty() && !t.quote.is_empty()));
    }
}
