// Markup for the content layer. Everything here returns HTML strings so the
// layout can be checked off-browser; the front-end only mounts them.

use super::catalog::{
    filter_projects, ContactLink, Experience, Project, ProjectFilter, ResearchHighlight, Skill,
};
use std::fmt::Write;

pub const SECTION_HERO: &str = "hero";
pub const SECTION_ABOUT: &str = "about";
pub const SECTION_EXPERIENCE: &str = "experience";
pub const SECTION_PROJECTS: &str = "projects";
pub const SECTION_RESEARCH: &str = "research";
pub const SECTION_SHELL: &str = "shell";
pub const SECTION_SKILLS: &str = "skills";
pub const SECTION_CREDENTIALS: &str = "credentials";
pub const SECTION_CONTACT: &str = "contact";

pub const PROJECT_GRID_ID: &str = "project-grid";
pub const PROJECT_FILTERS_ID: &str = "project-filters";
pub const TERMINAL_LOG_ID: &str = "terminal-log";
pub const TERMINAL_FORM_ID: &str = "terminal-form";
pub const TERMINAL_INPUT_ID: &str = "terminal-input";

/// Navigation label -> section it scrolls to.
pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("About", SECTION_ABOUT),
    ("Work", SECTION_EXPERIENCE),
    ("Logic", SECTION_RESEARCH),
    ("Shell", SECTION_SHELL),
    ("Contact", SECTION_CONTACT),
];

pub fn nav_target(label: &str) -> Option<&'static str> {
    NAV_ITEMS
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, section)| *section)
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn nav_html() -> String {
    let mut html = String::from(
        "<div class=\"brand\">SD<span class=\"dim\">.ENG</span></div><div class=\"nav-items\">",
    );
    for (label, _) in NAV_ITEMS {
        _ = write!(
            html,
            "<button class=\"nav-item\" data-nav=\"{label}\">{label}</button>"
        );
    }
    html.push_str("</div>");
    html
}

pub fn hero_html() -> String {
    format!(
        "<section id=\"{SECTION_HERO}\" class=\"section hero\">\
         <div id=\"reveal-hero\" class=\"reveal\">\
         <span class=\"badge\">Available for Engineering Roles</span>\
         <h1>Hi, I'm <span class=\"accent-gradient\">Sourish Dey</span></h1>\
         <h2 class=\"mono muted\">Cloud | AI/ML | DevOps Engineer</h2>\
         <p class=\"faint\">Building intelligent, scalable, and secure digital ecosystems. \
         Specialized in distributed systems and high-performance ML pipelines.</p>\
         <div class=\"actions\">\
         <button class=\"btn primary\" data-nav=\"Contact\">Contact Me &rarr;</button>\
         <button class=\"btn glass\">Download Resume</button>\
         </div></div></section>"
    )
}

pub fn about_html() -> String {
    format!(
        "<section id=\"{SECTION_ABOUT}\" class=\"section about\">\
         <div id=\"reveal-about\" class=\"reveal narrow\">\
         <h2>Professional Profile</h2>\
         <p class=\"lead\">Results-driven engineer pursuing B.Tech at <span class=\"bright\">KIIT University</span>. \
         Focused on the intersection of <span class=\"cyan\">Cloud Infrastructure</span> and \
         <span class=\"blue\">Machine Learning</span>.</p>\
         <div class=\"stats\">\
         <div><div class=\"stat cyan\">3+</div><div class=\"stat-label\">Years Experience</div></div>\
         <div><div class=\"stat blue\">10+</div><div class=\"stat-label\">Projects Deployed</div></div>\
         </div></div></section>"
    )
}

pub fn experience_html(entries: &[Experience]) -> String {
    let mut html = format!(
        "<section id=\"{SECTION_EXPERIENCE}\" class=\"section\">\
         <h2 class=\"center\">Engineering Timeline</h2><div class=\"timeline\">"
    );
    for (index, exp) in entries.iter().enumerate() {
        // entries alternate sides along the centre line
        let side = if index % 2 == 0 { "reverse" } else { "forward" };
        _ = write!(
            html,
            "<div id=\"reveal-exp-{id}\" class=\"reveal timeline-entry {side}\">\
             <div class=\"timeline-dot\"></div><div class=\"glass card\">\
             <span class=\"mono cyan small\">{period}</span><h3>{role}</h3>\
             <p class=\"muted\">{company}</p><ul>",
            id = escape_html(exp.id),
            period = escape_html(exp.period),
            role = escape_html(exp.role),
            company = escape_html(exp.company),
        );
        for point in exp.bullets {
            _ = write!(html, "<li>{}</li>", escape_html(point));
        }
        html.push_str("</ul></div></div>");
    }
    html.push_str("</div></section>");
    html
}

pub fn filter_bar_html(active: ProjectFilter) -> String {
    let mut html = String::new();
    for filter in ProjectFilter::options() {
        let class = if filter == active {
            "filter active"
        } else {
            "filter"
        };
        _ = write!(
            html,
            "<button class=\"{class}\" data-filter=\"{label}\">{label}</button>",
            label = filter.label()
        );
    }
    html
}

pub fn project_card_html(project: &Project) -> String {
    let mut html = format!(
        "<div id=\"reveal-project-{id}\" class=\"reveal glass card project\">\
         <span class=\"tag cyan\">{category}</span><h3>{title}</h3>\
         <p class=\"faint\">{description}</p><div class=\"tech\">",
        id = escape_html(project.id),
        category = project.category.label(),
        title = escape_html(project.title),
        description = escape_html(project.description),
    );
    for t in project.tech {
        _ = write!(html, "<span class=\"tech-tag\">{}</span>", escape_html(t));
    }
    html.push_str("</div>");
    if let Some(link) = project.link {
        _ = write!(
            html,
            "<a class=\"project-link\" href=\"{}\">&#8599;</a>",
            escape_html(link)
        );
    }
    html.push_str("</div>");
    html
}

pub fn project_grid_html(projects: &[Project], filter: ProjectFilter) -> String {
    filter_projects(projects, filter)
        .into_iter()
        .map(project_card_html)
        .collect()
}

pub fn projects_html(projects: &[Project], filter: ProjectFilter) -> String {
    format!(
        "<section id=\"{SECTION_PROJECTS}\" class=\"section\">\
         <div class=\"projects-header\"><div><h2>Engineering Projects</h2>\
         <p class=\"faint\">Scalable solutions across multiple domains.</p></div>\
         <div id=\"{PROJECT_FILTERS_ID}\" class=\"filters\">{filters}</div></div>\
         <div id=\"{PROJECT_GRID_ID}\" class=\"grid two\">{grid}</div></section>",
        filters = filter_bar_html(filter),
        grid = project_grid_html(projects, filter),
    )
}

const RESEARCH_SNIPPET: &[&str] = &[
    "<div class=\"cyan\">// infra/k8s/canary.tf</div>",
    "<div><span class=\"kw\">resource</span> \"kubernetes_deployment\" \"canary\" {</div>",
    "<div class=\"indent\">name = <span class=\"str\">\"app-v2\"</span></div>",
    "<div class=\"indent\">replicas = <span class=\"num\">1</span></div>",
    "<div class=\"indent\">template { ... }</div>",
    "<div>}</div>",
    "<div class=\"cyan gap\">// ml/training/dist.py</div>",
    "<div><span class=\"kw\">import</span> tensorflow <span class=\"kw\">as</span> tf</div>",
    "<div>strategy = tf.distribute.MirroredStrategy()</div>",
    "<div><span class=\"kw\">with</span> strategy.scope():</div>",
    "<div class=\"indent\">model = create_model()</div>",
    "<div class=\"indent\">model.compile(...)</div>",
];

pub fn research_html(highlights: &[ResearchHighlight]) -> String {
    let mut html = format!(
        "<section id=\"{SECTION_RESEARCH}\" class=\"section research\"><div class=\"grid two\">\
         <div id=\"reveal-research\" class=\"reveal\"><h2>Engineering Logic</h2><div class=\"highlights\">"
    );
    for h in highlights {
        _ = write!(
            html,
            "<div class=\"highlight\"><h4>{}</h4><p class=\"faint small\">{}</p></div>",
            escape_html(h.title),
            escape_html(h.summary)
        );
    }
    html.push_str("</div></div><div id=\"reveal-snippet\" class=\"reveal code mono\">");
    html.extend(RESEARCH_SNIPPET.iter().copied());
    html.push_str("</div></div></section>");
    html
}

pub fn shell_html() -> String {
    format!(
        "<section id=\"{SECTION_SHELL}\" class=\"section centered\">\
         <h2 class=\"center\">Interactive Shell</h2>\
         <div class=\"glass terminal\">\
         <div class=\"terminal-bar\"><div class=\"lights\"><i class=\"red\"></i><i class=\"yellow\"></i><i class=\"green\"></i></div>\
         <div class=\"mono tiny faint\">bash &mdash; 80x24</div></div>\
         <div class=\"terminal-body mono\"><div id=\"{TERMINAL_LOG_ID}\"></div>\
         <form id=\"{TERMINAL_FORM_ID}\" class=\"terminal-line\"><span class=\"green\">{prompt}</span>\
         <input id=\"{TERMINAL_INPUT_ID}\" type=\"text\" autocomplete=\"off\" autofocus /></form>\
         </div></div></section>",
        prompt = super::terminal::PROMPT,
    )
}

pub fn terminal_log_html(history: &[String]) -> String {
    history
        .iter()
        .map(|line| format!("<div>{}</div>", escape_html(line)))
        .collect()
}

pub fn skills_html(skills: &[Skill]) -> String {
    let mut html = format!(
        "<section id=\"{SECTION_SKILLS}\" class=\"section\"><h2>Technical Arsenal</h2><div class=\"grid two\">"
    );
    for (i, skill) in skills.iter().enumerate() {
        let level = skill.level.min(100);
        _ = write!(
            html,
            "<div id=\"reveal-skill-{i}\" class=\"reveal skill\" style=\"--level:{level}%;--delay:{delay:.1}s\">\
             <div class=\"skill-head mono\"><span class=\"muted\">{name}</span><span class=\"cyan\">{level}%</span></div>\
             <div class=\"skill-track\"><div class=\"skill-fill\"></div></div></div>",
            delay = i as f32 * 0.1,
            name = escape_html(skill.name),
        );
    }
    html.push_str("</div></section>");
    html
}

pub fn credentials_html(credentials: &[&str]) -> String {
    let mut html = format!(
        "<section id=\"{SECTION_CREDENTIALS}\" class=\"section\"><h2 class=\"center\">Credentials &amp; Honors</h2>\
         <div class=\"grid three\">"
    );
    for (i, cert) in credentials.iter().enumerate() {
        _ = write!(
            html,
            "<div id=\"reveal-cert-{i}\" class=\"reveal glass card credential\"><h4>{}</h4>\
             <p class=\"mono tiny faint\">Verified Credential</p></div>",
            escape_html(cert)
        );
    }
    html.push_str("</div></section>");
    html
}

pub fn contact_html(links: &[ContactLink]) -> String {
    let mut html = format!(
        "<section id=\"{SECTION_CONTACT}\" class=\"section centered\"><div id=\"reveal-contact\" class=\"reveal\">\
         <h2 class=\"huge\">Let's Build the <span class=\"cyan\">Future.</span></h2>\
         <p class=\"lead faint\">Currently looking for opportunities in High-Performance Computing, \
         Cloud Native Engineering, and Scalable AI.</p><div class=\"contact-links\">"
    );
    for link in links {
        _ = write!(
            html,
            "<a class=\"contact-link\" href=\"{url}\"><div class=\"glass bubble\">{initial}</div>\
             <span class=\"mono tiny\">{name}</span></a>",
            url = escape_html(link.url),
            initial = escape_html(&link.name.chars().take(2).collect::<String>()),
            name = escape_html(link.name),
        );
    }
    html.push_str(
        "</div><footer class=\"mono tiny faint\">&copy; 2024 Sourish Dey | Designed for Engineering Excellence</footer>\
         </div></section>",
    );
    html
}

/// The whole scrollable content layer in page order.
pub fn content_html(filter: ProjectFilter) -> String {
    use super::catalog::{CONTACT_LINKS, CREDENTIALS, EXPERIENCE, PROJECTS, RESEARCH_HIGHLIGHTS, SKILLS};
    [
        hero_html(),
        about_html(),
        experience_html(EXPERIENCE),
        projects_html(PROJECTS, filter),
        research_html(RESEARCH_HIGHLIGHTS),
        shell_html(),
        skills_html(SKILLS),
        credentials_html(CREDENTIALS),
        contact_html(CONTACT_LINKS),
    ]
    .concat()
}
