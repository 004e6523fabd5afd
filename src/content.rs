//! Copy for the landing page.

pub struct Objective {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub delay_ms: u32,
}

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub gradient: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub delay_ms: u32,
}

pub struct EventListing {
    pub title: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub delay_ms: u32,
}

pub struct Member {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub quote: &'static str,
    pub delay_ms: u32,
}

pub struct ContactChannel {
    pub title: &'static str,
    pub lines: &'static [&'static str],
    pub monospace: bool,
}

pub const FOCUS_AREAS: &[&str] = &[
    "Artificial Intelligence",
    "Renewable Energy",
    "Smart Infrastructure",
    "Quantum Computing",
    "Biomedical Engineering",
    "Robotic Systems",
];

pub const ABOUT_TAGS: &[&str] = &["AI", "Robotics", "Sustainable"];

pub const OBJECTIVES: &[Objective] = &[
    Objective {
        title: "Advanced Skill Development",
        description: "Cutting-edge workshops and training in emerging technologies from AI to quantum computing",
        icon: "⚙️",
        delay_ms: 150,
    },
    Objective {
        title: "Future Industry Connections",
        description: "Strategic partnerships with cutting-edge tech companies and innovation labs worldwide",
        icon: "🌐",
        delay_ms: 300,
    },
    Objective {
        title: "Research Excellence",
        description: "Student-led innovation labs creating real-world solutions to engineering challenges",
        icon: "🔬",
        delay_ms: 450,
    },
];

pub const STATS: &[Stat] = &[
    Stat { number: "500+", label: "Student Members", gradient: "linear-gradient(90deg, #f59e0b, #fcd34d)" },
    Stat { number: "35+", label: "Tech Projects", gradient: "linear-gradient(90deg, #f43f5e, #f59e0b)" },
    Stat { number: "12+", label: "Industry Partners", gradient: "linear-gradient(90deg, #0ea5e9, #a855f7)" },
    Stat { number: "24+", label: "Annual Events", gradient: "linear-gradient(90deg, #a855f7, #0ea5e9)" },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Quantum Neural Networks",
        category: "AI & Quantum Computing",
        image: "/assets/project1.jpg",
        description: "Pioneering research combining quantum computing principles with neural network architectures",
        delay_ms: 150,
    },
    Project {
        title: "Biomedical Nanorobots",
        category: "Biotechnology",
        image: "/assets/project2.jpg",
        description: "Microscopic robotic systems designed for targeted drug delivery and cellular repair",
        delay_ms: 300,
    },
    Project {
        title: "Smart City Infrastructure",
        category: "Civil Engineering",
        image: "/assets/project3.jpg",
        description: "Integrated urban systems with adaptive AI for optimal resource management",
        delay_ms: 450,
    },
];

pub const EVENTS: &[EventListing] = &[
    EventListing {
        title: "Quantum Computing Symposium",
        date: "March 15, 2025",
        location: "Advanced Tech Hub, JKUAT",
        description: "Exploring the revolutionary potential of quantum systems in solving complex engineering problems",
        tags: &["Quantum", "AI", "Computing"],
        delay_ms: 150,
    },
    EventListing {
        title: "Sustainable Tech Hackathon",
        date: "April 2, 2025",
        location: "Innovation Lab 3B",
        description: "A 48-hour challenge to develop next-gen solutions for environmental sustainability",
        tags: &["Green Tech", "Innovation", "Competition"],
        delay_ms: 300,
    },
    EventListing {
        title: "Robotics & Automation Expo",
        date: "April 18, 2025",
        location: "Central Engineering Complex",
        description: "Showcase of cutting-edge robotics systems and autonomous technologies",
        tags: &["Robotics", "AI", "Automation"],
        delay_ms: 450,
    },
];

pub const MEMBERS: &[Member] = &[
    Member {
        name: "Alex Kamau",
        role: "Quantum Computing Lead",
        image: "/assets/student1.jpg",
        quote: "We're not just learning engineering; we're reinventing it for the future.",
        delay_ms: 150,
    },
    Member {
        name: "Mercy Wanjiru",
        role: "AI & Neural Networks",
        image: "/assets/student2.jpg",
        quote: "SES creates a space where imagination meets technical expertise to solve real-world problems.",
        delay_ms: 300,
    },
    Member {
        name: "Ibrahim Omar",
        role: "Smart Infrastructure Design",
        image: "/assets/student3.jpg",
        quote: "The collaborative environment at SES helped me develop technologies I never thought possible as a student.",
        delay_ms: 450,
    },
];

pub const MEMBER_SOCIALS: &[&str] = &["github", "linkedin", "twitter"];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        title: "Innovation Hub",
        lines: &["Engineering Students Center", "School of Engineering, JKUAT", "Juja, Kenya"],
        monospace: false,
    },
    ContactChannel {
        title: "Digital Communications",
        lines: &["ses@students.jkuat.ac.ke"],
        monospace: true,
    },
    ContactChannel {
        title: "Direct Line",
        lines: &["+254 711 123 456"],
        monospace: true,
    },
    ContactChannel {
        title: "Office Hours",
        lines: &["Monday - Friday", "09:00 - 17:00"],
        monospace: false,
    },
];

pub const CONTACT_SOCIALS: &[&str] = &["github", "twitter", "instagram", "linkedin"];

pub const FOOTER_SOCIALS: &[&str] = &["facebook", "twitter", "instagram", "linkedin"];

pub const FUTURE_TECH: &[&str] = &[
    "Quantum Computing",
    "Neural Interfaces",
    "Nanomaterials",
    "Fusion Energy",
    "Autonomous Systems",
    "Biotechnology",
];

/// Lowercases and turns each run of whitespace into a single `-`.
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut in_space = false;
    for c in label.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.extend(c.to_lowercase());
            in_space = false;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_footer_programs() {
        let slugs: Vec<String> = FUTURE_TECH.iter().map(|p| slugify(p)).collect();
        assert_eq!(
            slugs,
            vec![
                "quantum-computing",
                "neural-interfaces",
                "nanomaterials",
                "fusion-energy",
                "autonomous-systems",
                "biotechnology",
            ]
        );
    }

    #[test]
    fn slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("Green \t Tech"), "green-tech");
        assert_eq!(slugify(" Lead"), "-lead");
    }

    #[test]
    fn reveal_delays_step_by_150ms() {
        let delays: Vec<u32> = PROJECTS.iter().map(|p| p.delay_ms).collect();
        assert_eq!(delays, vec![150, 300, 450]);
        assert!(EVENTS.iter().zip(MEMBERS).all(|(e, m)| e.delay_ms == m.delay_ms));
    }
}
