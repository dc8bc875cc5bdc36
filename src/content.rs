//! Static page content: sample records, profile links and the page's anchor
//! and tab model. Replace the sample data with your own.

use std::{fmt, str::FromStr};

use thiserror::Error;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub bio: &'static str,
    pub hero_image: &'static str,
    pub linkedin: &'static str,
    pub email: &'static str,
    pub resume_document: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const PROFILE: Profile = Profile {
    name: "Your Name",
    tagline: "I'm a passionate developer specializing in creating beautiful, functional web experiences.",
    bio: "With over 5 years of experience in web development, I focus on building responsive, accessible, and performant applications. I love solving complex problems and turning ideas into reality through code.",
    hero_image: "/placeholder.svg?height=800&width=1600",
    linkedin: "https://linkedin.com",
    email: "your.email@example.com",
    resume_document: "/resume.pdf",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub link: &'static str,
}

impl Project {
    pub fn image_or_placeholder(&self) -> &'static str {
        if self.image.is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            self.image
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub position: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-commerce Platform",
        category: "Web Development",
        description: "A full-stack e-commerce platform built with Next.js and Stripe integration.",
        image: "/placeholder.svg?height=200&width=350",
        link: "#",
    },
    Project {
        title: "Mobile Banking App",
        category: "Mobile Development",
        description: "A secure banking application with real-time transaction tracking.",
        image: "/placeholder.svg?height=200&width=350",
        link: "#",
    },
    Project {
        title: "AI Content Generator",
        category: "Machine Learning",
        description: "An AI-powered tool that generates high-quality content for marketing teams.",
        image: "/placeholder.svg?height=200&width=350",
        link: "#",
    },
    Project {
        title: "Health & Fitness Tracker",
        category: "Mobile Development",
        description: "A comprehensive fitness tracking application with personalized recommendations.",
        image: "/placeholder.svg?height=200&width=350",
        link: "#",
    },
    Project {
        title: "Real Estate Platform",
        category: "Web Development",
        description: "A platform connecting property buyers with sellers, featuring virtual tours.",
        image: "/placeholder.svg?height=200&width=350",
        link: "#",
    },
    Project {
        title: "Social Media Dashboard",
        category: "Data Visualization",
        description: "A dashboard for tracking and analyzing social media performance across platforms.",
        image: "/placeholder.svg?height=200&width=350",
        link: "#",
    },
];

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        position: "Senior Frontend Developer",
        company: "Tech Solutions Inc.",
        period: "2020 - Present",
        description: "Lead the frontend development team in creating responsive and accessible web applications. Implemented modern frontend practices and improved performance by 40%.",
    },
    Experience {
        position: "Web Developer",
        company: "Digital Creations",
        period: "2018 - 2020",
        description: "Developed and maintained client websites using React and Next.js. Collaborated with designers to implement pixel-perfect interfaces.",
    },
    Experience {
        position: "Junior Developer",
        company: "StartUp Innovations",
        period: "2016 - 2018",
        description: "Assisted in the development of web applications. Gained experience in frontend technologies and agile development methodologies.",
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "Master of Computer Science",
        institution: "Tech University",
        period: "2014 - 2016",
        description: "Specialized in web technologies and software engineering. Graduated with honors.",
    },
    Education {
        degree: "Bachelor of Science in Information Technology",
        institution: "State University",
        period: "2010 - 2014",
        description: "Focused on programming fundamentals, database management, and web development.",
    },
];

pub const SKILLS: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Next.js",
    "Node.js",
    "HTML/CSS",
    "Tailwind CSS",
    "Git",
    "REST APIs",
    "GraphQL",
    "SQL",
    "MongoDB",
];

pub const LANGUAGES: &[&str] = &["English (Native)", "Spanish (Fluent)", "French (Basic)"];

pub fn skills_line() -> String {
    SKILLS.join(", ")
}

pub fn languages_line() -> String {
    LANGUAGES.join(" • ")
}

/// Top level sections reachable through in-page anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSection {
    About,
    Projects,
    Resume,
}

impl PageSection {
    pub const ALL: [PageSection; 3] = [Self::About, Self::Projects, Self::Resume];

    pub fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Resume => "resume",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Resume => "Resume",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown resume tab: {0}")]
pub struct UnknownTab(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResumeTab {
    #[default]
    Experience,
    Education,
    Skills,
}

impl ResumeTab {
    pub const ALL: [ResumeTab; 3] = [Self::Experience, Self::Education, Self::Skills];

    pub fn value(self) -> &'static str {
        match self {
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Skills => "skills",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Skills => "Skills",
        }
    }
}

impl FromStr for ResumeTab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.value() == s)
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

impl fmt::Display for ResumeTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}
