pub const PROFILE_PHOTO: &str = "/profile.jpg";
pub const PROFILE_PHOTO_PLACEHOLDER: &str =
    "https://placehold.co/256x320/6366F1/FFFFFF?text=Sahil+Gupta";
pub const MOCKUP_PLACEHOLDER: &str =
    "https://placehold.co/800x450/1E293B/9CA3AF?text=Image+Not+Found";

/// An image path with a placeholder swapped in once the path fails to load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSource {
    primary: &'static str,
    fallback: &'static str,
    failed: bool,
}

impl ImageSource {
    pub fn new(primary: &'static str, fallback: &'static str) -> Self {
        Self {
            primary,
            fallback,
            failed: false,
        }
    }

    pub fn current(&self) -> &'static str {
        if self.failed {
            self.fallback
        } else {
            self.primary
        }
    }

    pub fn fail(&mut self) -> bool {
        if self.failed {
            return false;
        }
        self.failed = true;
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Globe,
    Code,
    Zap,
    BookOpen,
    Github,
    Linkedin,
    Mail,
    AtSign,
    MapPin,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Send,
    CheckCircle,
    Close,
    Menu,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Globe => "◍",
            Self::Code => "</>",
            Self::Zap => "ϟ",
            Self::BookOpen => "❐",
            Self::Github => "GH",
            Self::Linkedin => "in",
            Self::Mail => "✉",
            Self::AtSign => "@",
            Self::MapPin => "⌖",
            Self::ArrowLeft => "←",
            Self::ArrowRight => "→",
            Self::ArrowUp => "↑",
            Self::ArrowDown => "↓",
            Self::Send => "➤",
            Self::CheckCircle => "✓",
            Self::Close => "✕",
            Self::Menu => "☰",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct RotatingSkill {
    pub label: &'static str,
    pub icon: Icon,
}

#[derive(Debug, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub tech_stack: &'static [&'static str],
    pub rotating_skills: &'static [RotatingSkill],
}

impl Profile {
    pub fn name_parts(&self) -> (&'static str, &'static str) {
        let name: &'static str = self.name;
        name.split_once(' ').unwrap_or((name, ""))
    }
}

#[derive(Debug, PartialEq)]
pub struct JourneyEntry {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct About {
    /// Completes "Hi, I'm {name}, ...".
    pub role: &'static str,
    pub description: &'static str,
    pub journey: &'static [JourneyEntry],
}

#[derive(Debug, PartialEq)]
pub struct SkillCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: Icon,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    /// (skill name, proficiency 0..=100)
    pub items: &'static [(&'static str, u8)],
}

#[derive(Debug, PartialEq)]
pub struct EducationEntry {
    pub years: &'static str,
    pub degree: &'static str,
    pub institution: &'static str,
    pub description: &'static str,
    pub percentage: Option<&'static str>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub modal_description: Option<&'static str>,
    pub tags: &'static [&'static str],
    pub link: Option<&'static str>,
    pub mockup: &'static str,
    pub gallery: &'static [&'static str],
}

impl Project {
    pub fn has_gallery(&self) -> bool {
        !self.gallery.is_empty()
    }

    pub fn detail_text(&self) -> &'static str {
        self.modal_description.unwrap_or(self.description)
    }
}

#[derive(Debug, PartialEq)]
pub struct ContactInfo {
    pub email: &'static str,
    pub location: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ContactCopy {
    pub heading: &'static str,
    pub intro: &'static str,
    pub pitch: &'static str,
    pub prompt: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct FooterCopy {
    pub heading: &'static str,
    pub owner: &'static str,
    pub credit: &'static str,
}

impl FooterCopy {
    pub fn copyright(&self, year: u32) -> String {
        format!("© {year} {}. All rights reserved.", self.owner)
    }
}

#[derive(Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Portfolio {
    pub profile: Profile,
    pub about: About,
    pub skills_subtitle: &'static str,
    pub skills: &'static [SkillCategory],
    pub education: &'static [EducationEntry],
    pub projects: &'static [Project],
    pub contact: ContactInfo,
    pub contact_copy: ContactCopy,
    pub footer: FooterCopy,
    pub nav: &'static [NavItem],
}

impl Portfolio {
    pub fn project(&self, id: u32) -> Option<&'static Project> {
        let projects: &'static [Project] = self.projects;
        projects.iter().find(|project| project.id == id)
    }

    pub fn skill_ids(&self) -> Vec<&'static str> {
        self.skills.iter().map(|skill| skill.id).collect()
    }
}

pub static PORTFOLIO: Portfolio = Portfolio {
    profile: Profile {
        name: "Sahil Gupta",
        initials: "SG",
        title: "B.Tech CSE Student & Full Stack Developer",
        tagline: "Passionate about creating innovative solutions and building the future of technology.",
        tech_stack: &[
            "React", "Next.js", "Node.js", "Springboot", "Java", "JavaScript", "Python", "MySQL",
        ],
        rotating_skills: &[RotatingSkill {
            label: "SIH Finalist 2025",
            icon: Icon::Globe,
        }],
    },
    about: About {
        role: "a passionate Software Developer",
        description: "I am a Final-year B.Tech student specializing in Full Stack Development with a robust foundation in data structures and object-oriented programming. My passion lies in building scalable, high-performance web applications using modern technologies like React, Node.js, Spring Boot, and MySQL. I thrive on solving complex, real-world problems, optimizing code for efficiency, and contributing clean, functional solutions to drive ambitious visions forward.",
        journey: &[
            JourneyEntry {
                title: "Industry Experience",
                description: "Developed and maintained web applications using the Spring Boot framework, Java, React, and MySQL during my Full Stack internship.",
            },
            JourneyEntry {
                title: "Technical Skills",
                description: "Possessing a strong foundation in core computer science principles, with a focus on scalable data structures and efficient, object-oriented programming.",
            },
            JourneyEntry {
                title: "Venture Explore",
                description: "Specialized in architecting performant, responsive web interfaces using React/Next.js and ensuring robust backend scalability with Node.js and Spring Boot.",
            },
            JourneyEntry {
                title: "SIH 2025 Finalist",
                description: "Team Inno-Vision shortlisted for the Smart India Hackathon Grand Finale, tackling a critical cyber security challenge for the Ministry of Defence (MoD) - Army Cyber Group.",
            },
        ],
    },
    skills_subtitle: "Mastering the technologies that power the future of web and cloud expansion.",
    skills: &[
        SkillCategory {
            id: "frontend",
            title: "Frontend Development",
            icon: Icon::Code,
            description: "Creating stunning user interfaces and experiences.",
            tags: &["HTML", "CSS", "TailwindCSS", "React.js", "Next.js", "Bootstrap"],
            items: &[
                ("HTML", 90),
                ("CSS", 90),
                ("TailwindCSS", 95),
                ("React.js", 85),
                ("Next.js", 80),
                ("Bootstrap", 80),
            ],
        },
        SkillCategory {
            id: "backend",
            title: "Backend Development",
            icon: Icon::Zap,
            description: "Building scalable and robust server-side applications.",
            tags: &["Springboot", "Node.js", "Express.js", "Rest API"],
            items: &[
                ("Springboot", 85),
                ("Node.js", 80),
                ("Express.js", 75),
                ("Rest API", 80),
            ],
        },
        SkillCategory {
            id: "database",
            title: "Database Architecture",
            icon: Icon::Globe,
            description: "Designing efficient and secure storage solutions.",
            tags: &["MySQL", "ORM", "Hibernate"],
            items: &[("MySQL", 85), ("ORM", 80), ("Hibernate", 75)],
        },
        SkillCategory {
            id: "languages",
            title: "Programming Languages",
            icon: Icon::Code,
            description: "Mastering fundamental programming capabilities.",
            tags: &["Java", "JavaScript", "Python", "C"],
            items: &[("Java", 90), ("JavaScript", 85), ("Python", 75), ("C", 70)],
        },
    ],
    education: &[
        EducationEntry {
            years: "2022-2026",
            degree: "B.Tech in Computer Science & Engineering",
            institution: "IMS Engineering College",
            description: "Applying theoretical knowledge of computer science to build practical solutions. My coursework and personal projects focus on software development, algorithmic efficiency, and creating user-centric applications.",
            percentage: Some("77.02%"),
        },
        EducationEntry {
            years: "2021-2022",
            degree: "Intermediate Education (12th Grade)",
            institution: "Model Higher Secondary School",
            description: "Focused on Physics, Chemistry, and Mathematics (PCM). Developed strong analytical and problem-solving abilities.",
            percentage: Some("81%"),
        },
        EducationEntry {
            years: "2019-2020",
            degree: "Secondary Education (10th Grade)",
            institution: "Chandmari Higher Secondary School",
            description: "Completed secondary education with a strong performance in science and mathematics. Cultivated a passion for technology and coding.",
            percentage: Some("80%"),
        },
    ],
    projects: &[
        Project {
            id: 1,
            title: "Sensai - AI Career Coach",
            description: "A powerful AI-driven platform providing personalized career coaching and interview preparation tools to accelerate professional growth.",
            modal_description: Some("Sensai leverages the Gemini API to offer tailored advice, mock interviews, and skill gap analysis, making it an essential tool for career advancement in tech."),
            tags: &["Next.js", "Tailwind CSS", "Prisma", "PostgreSQL", "Google's Gemini AI"],
            link: Some("https://sensai-aicoach.vercel.app/"),
            mockup: "/Sensai.png",
            gallery: &[],
        },
        Project {
            id: 3,
            title: "QuickShow - Movie Ticket Booking System",
            description: "Refactored 1,200+ lines of legacy JS code into modern React components, contributing to a 37% reduction in page load times.",
            modal_description: Some("Developed complex components (real-time seat map, TMDB filtering) that project inventory error reductions by 99%. Architected MERN system logic, supporting Clerk (Auth) and Ingest automation, accelerating checkout by 32% and reducing manual communication by over 80%."),
            tags: &["React", "Tailwind CSS", "Clerk", "MERN Stack"],
            link: Some("https://quickk-showw-client-u3rt.vercel.app/"),
            mockup: "/Quick.png",
            gallery: &[],
        },
        Project {
            id: 5,
            title: "HealthConnect",
            description: "A full-featured healthcare appointment system simplifying doctor discovery and health service booking via search, booking, and video consultations.",
            modal_description: Some("HealthConnect offers features like search and recommendations for nearby doctors, easy online appointment booking, video consultations, and lab test booking. The stack utilizes Node.js, Express.js, and MongoDB for a robust and scalable backend architecture."),
            tags: &["Node.js", "Express.js", "MongoDB", "HTML", "CSS", "JavaScript"],
            link: Some("https://healthconnect-sg.netlify.app/"),
            mockup: "/health.png",
            gallery: &[],
        },
        Project {
            id: 2,
            title: "ShelfTrack - Library Management System",
            description: "A comprehensive library system built to manage book inventory, member records, and borrowing history efficiently. Not deployed live.",
            modal_description: Some("ShelfTrack is a modern, responsive, and robust Library Management System built with Spring Boot and Thymeleaf. It allows library administrators to efficiently manage books, students, and issue records with real-time analytics. This project showcases full-stack development skills by automating day-to-day library tasks and providing a clean, user-friendly interface for different user roles."),
            tags: &["Spring Boot", "Thymeleaf", "JPA", "MySQL"],
            link: None,
            mockup: "/Shelf.png",
            gallery: &["/Shelf1.png", "/Shelf2.png", "/Shelf3.jpg", "/Shelf4.jpg"],
        },
        Project {
            id: 4,
            title: "Expense Tracker",
            description: "A responsive, feature-rich daily expense tracker built with React Hooks and Tailwind CSS, demonstrating robust state management and optimization.",
            modal_description: Some("The app comes with smart input handling and real-time validation. Optimized for performance using `useMemo()` and `useCallback()`, it maintains a responsive UI even as data grows. Features include a dynamic filtering system and a Dark Mode Toggle for enhanced UX/UI."),
            tags: &["React Hooks", "Tailwind CSS", "useMemo", "useCallback", "localStorage"],
            link: Some("https://expense-tracker-mu-two-19.vercel.app/"),
            mockup: "/expense.png",
            gallery: &[],
        },
    ],
    contact: ContactInfo {
        email: "sg2145984@gmail.com",
        location: "Ghaziabad, India",
        linkedin: "https://www.linkedin.com/in/sahil-gupta-baa310274/",
        github: "https://github.com/sahil-123455",
    },
    contact_copy: ContactCopy {
        heading: "Let's Connect",
        intro: "I'm always open to discussing new projects, creative ideas, or opportunities to be part of an ambitious vision.",
        pitch: "Let's build the future together.",
        prompt: "Have a project in mind or just want to say hi? My inbox is always open.",
    },
    footer: FooterCopy {
        heading: "Start a Conversation",
        owner: "Sahil Gupta",
        credit: "Designed & Built with ♥",
    },
    nav: &[
        NavItem { label: "About", anchor: "about" },
        NavItem { label: "Skills", anchor: "skills" },
        NavItem { label: "Education", anchor: "education" },
        NavItem { label: "Projects", anchor: "projects" },
        NavItem { label: "Contact", anchor: "contact" },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn project_ids_are_unique() {
        let ids: HashSet<u32> = PORTFOLIO.projects.iter().map(|project| project.id).collect();
        assert_eq!(ids.len(), PORTFOLIO.projects.len());
    }

    #[test]
    fn skill_ids_are_unique_and_ordered() {
        assert_eq!(
            PORTFOLIO.skill_ids(),
            vec!["frontend", "backend", "database", "languages"]
        );
    }

    #[test]
    fn proficiencies_stay_within_percent_range() {
        for skill in PORTFOLIO.skills {
            for (name, percentage) in skill.items {
                assert!(*percentage <= 100, "{name} exceeds 100%");
            }
        }
    }

    #[test]
    fn only_undeployed_project_carries_a_gallery() {
        let with_gallery: Vec<u32> = PORTFOLIO
            .projects
            .iter()
            .filter(|project| project.has_gallery())
            .map(|project| project.id)
            .collect();
        assert_eq!(with_gallery, vec![2]);

        let shelf = PORTFOLIO.project(2).expect("ShelfTrack is listed");
        assert!(shelf.link.is_none());
        assert_eq!(shelf.gallery.len(), 4);
    }

    #[test]
    fn project_lookup_misses_unknown_id() {
        assert!(PORTFOLIO.project(42).is_none());
    }

    #[test]
    fn name_splits_into_first_and_last() {
        assert_eq!(PORTFOLIO.profile.name_parts(), ("Sahil", "Gupta"));
    }

    #[test]
    fn nav_targets_every_section_anchor() {
        let anchors: Vec<&str> = PORTFOLIO.nav.iter().map(|item| item.anchor).collect();
        assert_eq!(
            anchors,
            vec!["about", "skills", "education", "projects", "contact"]
        );
    }

    #[test]
    fn failed_image_swaps_to_placeholder_once() {
        let mut image = ImageSource::new("/Sensai.png", MOCKUP_PLACEHOLDER);
        assert_eq!(image.current(), "/Sensai.png");

        assert!(image.fail());
        assert_eq!(image.current(), MOCKUP_PLACEHOLDER);
        assert!(!image.fail());
        assert_eq!(image.current(), MOCKUP_PLACEHOLDER);
    }

    #[test]
    fn next_mockup_starts_from_its_own_path() {
        let projects = PORTFOLIO.projects;
        let mut first = ImageSource::new(projects[0].mockup, MOCKUP_PLACEHOLDER);
        first.fail();

        let second = ImageSource::new(projects[1].mockup, MOCKUP_PLACEHOLDER);
        assert_eq!(second.current(), projects[1].mockup);
    }

    #[test]
    fn copyright_line_carries_year_and_owner() {
        assert_eq!(
            PORTFOLIO.footer.copyright(2026),
            "© 2026 Sahil Gupta. All rights reserved."
        );
    }

    #[test]
    fn sequences_backing_selectors_are_non_empty() {
        assert!(!PORTFOLIO.profile.rotating_skills.is_empty());
        assert!(!PORTFOLIO.skills.is_empty());
        assert!(!PORTFOLIO.projects.is_empty());
        assert!(!PORTFOLIO.education.is_empty());
    }
}
