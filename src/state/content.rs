//! Static site content.

/// A showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub category: &'static str,
    /// Image path relative to the asset directory.
    pub image: &'static str,
}

/// One row of the services accordion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoCard {
    pub label: &'static str,
    pub icon: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const OWNER_NAME: &str = "VINOD RAJA";
pub const ROLE: &str = "ML Engineer & Django Developer";
pub const GREETING: &str = "Hello, I'm";
pub const TAGLINE: &str = "Building Intelligent Web Solutions";
pub const HERO_IMAGE: &str = "assets/hero-portrait.jpg";
pub const ABOUT_IMAGE: &str = "assets/about-portrait.jpg";
pub const CONTACT_EMAIL: &str = "iamvinodraja@gmail.com";

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "I'm Vinod Raja, a passionate Machine Learning Engineer and Full-Stack Developer specializing in building intelligent web applications with Django.",
    "With expertise in both ML algorithms and modern web development, I bridge the gap between data science and production-ready applications. From training complex neural networks to deploying scalable Django APIs, I love turning ideas into reality.",
    "My tech stack includes Python, TensorFlow, PyTorch, Django, React, and cloud platforms. I believe in clean code, robust architecture, and creating solutions that make a real impact.",
];

pub const PROJECTS: [ProjectEntry; 4] = [
    ProjectEntry {
        title: "ML Predictive Analytics",
        category: "Machine Learning",
        image: "assets/project-1.jpg",
    },
    ProjectEntry {
        title: "Django E-Commerce API",
        category: "Backend",
        image: "assets/project-2.jpg",
    },
    ProjectEntry {
        title: "AI Chatbot Platform",
        category: "Full-Stack",
        image: "assets/project-3.jpg",
    },
    ProjectEntry {
        title: "Data Pipeline System",
        category: "Data Engineering",
        image: "assets/project-4.jpg",
    },
];

pub const SERVICES: [ServiceEntry; 4] = [
    ServiceEntry {
        title: "Machine Learning",
        description: "Building intelligent systems with cutting-edge ML algorithms. From predictive models to deep learning solutions, I develop AI-powered applications that solve real-world problems using TensorFlow, PyTorch, and scikit-learn.",
        icon: "◎",
    },
    ServiceEntry {
        title: "Django Development",
        description: "Creating robust, scalable web applications with Django. RESTful APIs, authentication systems, database design, and deployment to cloud platforms. Clean architecture with test-driven development.",
        icon: "</>",
    },
    ServiceEntry {
        title: "Full-Stack Web Dev",
        description: "End-to-end web development combining powerful backends with modern React frontends. Responsive, performant, and user-friendly applications that deliver exceptional experiences.",
        icon: "▤",
    },
    ServiceEntry {
        title: "Data Engineering",
        description: "Designing data pipelines and infrastructure for ML workflows. ETL processes, database optimization, and cloud-based solutions that handle large-scale data efficiently.",
        icon: "⛁",
    },
];

pub const NAV_LINKS: [Link; 5] = [
    Link { label: "Home", href: "#hero" },
    Link { label: "About", href: "#about" },
    Link { label: "Works", href: "#works" },
    Link { label: "Services", href: "#services" },
    Link { label: "Contact", href: "#contact" },
];

pub const LEGAL_LINKS: [Link; 2] = [
    Link { label: "Privacy", href: "#" },
    Link { label: "Terms", href: "#" },
];

pub const SOCIAL_LINKS: [Link; 3] = [
    Link { label: "GitHub", href: "https://www.github.com/iamvinodraja" },
    Link { label: "LinkedIn", href: "https://www.linkedin.com/iamvinodraja" },
    Link { label: "Twitter", href: "https://www.x.com/iamvinodraja" },
];

pub const INFO_CARDS: [InfoCard; 3] = [
    InfoCard {
        label: "Email",
        icon: "✉",
        value: CONTACT_EMAIL,
        href: Some("mailto:iamvinodraja@gmail.com"),
    },
    InfoCard {
        label: "Phone",
        icon: "☎",
        value: "+92 349 0369520",
        href: Some("tel:+923490369520"),
    },
    InfoCard {
        label: "Location",
        icon: "⌖",
        value: "Pakistan",
        href: None,
    },
];

/// Links in the footer grid, in render order: navigation, legal, social,
/// then the contact email.
pub fn footer_link_count() -> usize {
    NAV_LINKS.len() + LEGAL_LINKS.len() + SOCIAL_LINKS.len() + 1
}

/// `mailto:` link with a prefilled subject.
pub fn mailto_with_subject(subject: &str) -> String {
    format!("mailto:{}?subject={}", CONTACT_EMAIL, urlencoding::encode(subject))
}

/// Two-digit list index, e.g. `01`.
pub fn list_index(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_link_count_matches_columns() {
        assert_eq!(footer_link_count(), 11);
    }

    #[test]
    fn test_mailto_subject_is_encoded() {
        assert_eq!(
            mailto_with_subject("Machine Learning & more"),
            "mailto:iamvinodraja@gmail.com?subject=Machine%20Learning%20%26%20more"
        );
    }

    #[test]
    fn test_list_index_is_two_digits() {
        assert_eq!(list_index(0), "01");
        assert_eq!(list_index(9), "10");
    }
}
