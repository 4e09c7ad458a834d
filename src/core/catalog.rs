// Static page content: projects, experience, skills and contact links.

use fnv::FnvHashSet;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Ml,
    Cloud,
    Finance,
    Iot,
    Analytical,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Ml,
        Category::Cloud,
        Category::Finance,
        Category::Iot,
        Category::Analytical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Ml => "ML",
            Category::Cloud => "Cloud",
            Category::Finance => "Finance",
            Category::Iot => "IoT",
            Category::Analytical => "Analytical",
        }
    }

    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub tech: &'static [&'static str],
    pub link: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Experience {
    pub id: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    /// Percentage, 0..=100.
    pub level: u8,
    pub category: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactLink {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResearchHighlight {
    pub title: &'static str,
    pub summary: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "1",
        title: "Distributed TensorFlow Training",
        description: "Scaled large-scale neural network training across multi-node Kubernetes clusters.",
        category: Category::Ml,
        tech: &["TensorFlow", "Kubernetes", "Python", "GCP"],
        link: None,
    },
    Project {
        id: "2",
        title: "FinEdge Analytics",
        description: "Real-time stock prediction and portfolio risk assessment using LSTM and AWS Lambda.",
        category: Category::Finance,
        tech: &["LSTM", "AWS", "Python", "React"],
        link: None,
    },
    Project {
        id: "3",
        title: "SmartCity IoT Gateway",
        description: "Unified dashboard for 500+ IoT sensors managing traffic and energy.",
        category: Category::Iot,
        tech: &["C++", "MQTT", "Node.js", "PostgreSQL"],
        link: None,
    },
    Project {
        id: "4",
        title: "CloudSec Vault",
        description: "Automated IAM and secret rotations with Terraform and HashiCorp Vault.",
        category: Category::Cloud,
        tech: &["Terraform", "Vault", "AWS", "IAM"],
        link: None,
    },
];

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        id: "exp1",
        role: "Cloud Engineering Intern",
        company: "NextGen Systems",
        period: "2023 - Present",
        bullets: &[
            "Architected multi-region AWS infrastructure with Terraform.",
            "Optimized Kubernetes cluster costs by 35% using preemptible nodes.",
            "Implemented Canary deployments using Istio.",
        ],
    },
    Experience {
        id: "exp2",
        role: "ML Research Fellow",
        company: "KIIT AI Lab",
        period: "2022 - 2023",
        bullets: &[
            "Published research on efficient transformer architectures for edge devices.",
            "Collaborated with senior researchers on patent-pending CV algorithms.",
        ],
    },
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "AWS / GCP / Azure", level: 90, category: "Cloud" },
    Skill { name: "Kubernetes & Docker", level: 85, category: "DevOps" },
    Skill { name: "Terraform & Ansible", level: 80, category: "DevOps" },
    Skill { name: "PyTorch & TensorFlow", level: 85, category: "AI/ML" },
    Skill { name: "CI/CD Pipelines", level: 90, category: "DevOps" },
    Skill { name: "Python / Go / JS", level: 95, category: "Programming" },
];

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink { name: "LinkedIn", url: "https://linkedin.com" },
    ContactLink { name: "GitHub", url: "https://github.com" },
    ContactLink { name: "Email", url: "mailto:sourish@example.com" },
];

pub const RESEARCH_HIGHLIGHTS: &[ResearchHighlight] = &[
    ResearchHighlight {
        title: "Distributed Training",
        summary: "Horovod + TensorFlow for cluster-wide synchronization.",
    },
    ResearchHighlight {
        title: "Zero-Trust Infrastructure",
        summary: "Terraform-defined VPCs with mTLS and IAM least privilege.",
    },
    ResearchHighlight {
        title: "Serverless Orchestration",
        summary: "Event-driven pipelines using AWS Step Functions and Lambda.",
    },
];

pub const CREDENTIALS: &[&str] = &[
    "AWS Solutions Architect",
    "TensorFlow Certified",
    "Kubernetes Expert",
];

/// Project grid filter; `All` is the initial state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(Category),
}

impl ProjectFilter {
    pub const LABEL_ALL: &'static str = "All";

    /// Every filter button, in display order.
    pub fn options() -> impl Iterator<Item = ProjectFilter> {
        std::iter::once(ProjectFilter::All).chain(Category::ALL.into_iter().map(ProjectFilter::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => Self::LABEL_ALL,
            ProjectFilter::Only(c) => c.label(),
        }
    }

    pub fn from_label(label: &str) -> Option<ProjectFilter> {
        if label == Self::LABEL_ALL {
            return Some(ProjectFilter::All);
        }
        Category::from_label(label).map(ProjectFilter::Only)
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Only(c) => project.category == c,
        }
    }
}

pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> SmallVec<[&Project; 8]> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("skill '{name}' has level {level}, expected 0..=100")]
    SkillLevel { name: &'static str, level: u8 },
    #[error("duplicate project id '{0}'")]
    DuplicateProject(&'static str),
    #[error("duplicate experience id '{0}'")]
    DuplicateExperience(&'static str),
    #[error("project '{0}' lists no technologies")]
    EmptyTech(&'static str),
}

/// Check the invariants the section renderers rely on.
pub fn validate(
    projects: &[Project],
    experience: &[Experience],
    skills: &[Skill],
) -> Result<(), CatalogError> {
    let mut ids = FnvHashSet::default();
    for p in projects {
        if !ids.insert(p.id) {
            return Err(CatalogError::DuplicateProject(p.id));
        }
        if p.tech.is_empty() {
            return Err(CatalogError::EmptyTech(p.id));
        }
    }
    let mut ids = FnvHashSet::default();
    for e in experience {
        if !ids.insert(e.id) {
            return Err(CatalogError::DuplicateExperience(e.id));
        }
    }
    if let Some(s) = skills.iter().find(|s| s.level > 100) {
        return Err(CatalogError::SkillLevel {
            name: s.name,
            level: s.level,
        });
    }
    Ok(())
}
