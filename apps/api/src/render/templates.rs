//! HTML templates for the generated portfolio site.
//!
//! All three layouts share one document structure. `CreativeBold` and
//! `TechModern` differ from `MinimalProfessional` only in their stylesheet.
//! Every caller-supplied string goes through `escape_html` before it is
//! interpolated.

use std::fmt;

use chrono::Datelike;

use crate::models::portfolio::{Education, Experience, Portfolio, Project, Skill};

/// The fixed set of visual layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TemplateKind {
    #[default]
    MinimalProfessional,
    CreativeBold,
    TechModern,
}

impl TemplateKind {
    /// Exact-match lookup. Anything unrecognised falls back to the default layout.
    pub fn from_name(name: &str) -> Self {
        match name {
            "minimal-professional" => TemplateKind::MinimalProfessional,
            "creative-bold" => TemplateKind::CreativeBold,
            "tech-modern" => TemplateKind::TechModern,
            _ => TemplateKind::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::MinimalProfessional => "minimal-professional",
            TemplateKind::CreativeBold => "creative-bold",
            TemplateKind::TechModern => "tech-modern",
        }
    }

    fn stylesheet(&self) -> String {
        match self {
            TemplateKind::MinimalProfessional => BASE_CSS.to_string(),
            TemplateKind::CreativeBold => BASE_CSS.replace(SKILL_TAG_FILL, CREATIVE_SKILL_TAG_FILL),
            TemplateKind::TechModern => BASE_CSS.replace(BODY_FONT_STACK, MONO_FONT_STACK),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders a complete single-page HTML document for `portfolio`.
pub fn render_html(portfolio: &Portfolio, template_name: &str) -> String {
    let kind = TemplateKind::from_name(template_name);
    let p = &portfolio.data;
    let name = escape_html(&p.name);

    let mut contact = format!("<span>{}</span>", escape_html(&p.email));
    if !p.phone.is_empty() {
        contact.push_str(&format!(
            "<span>•</span><span>{}</span>",
            escape_html(&p.phone)
        ));
    }

    let mut html = String::with_capacity(BASE_CSS.len() * 2);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str(&format!("    <title>{name} - Portfolio</title>\n"));
    html.push_str("    <style>");
    html.push_str(&kind.stylesheet());
    html.push_str("    </style>\n</head>\n<body>\n");

    html.push_str(&format!(
        r#"    <section class="hero">
        <h1>{name}</h1>
        <p class="title">{title}</p>
        <div class="contact">
            {contact}
        </div>
    </section>
"#,
        title = escape_html(&p.title),
    ));

    push_section(&mut html, "About", true, &format!("<p>{}</p>", escape_html(&p.about)));
    push_section(
        &mut html,
        "Skills",
        false,
        &format!("<div>{}</div>", render_skills(&p.skills)),
    );
    push_section(&mut html, "Projects", true, &render_projects(&p.projects));
    push_section(&mut html, "Experience", false, &render_experience(&p.experience));
    push_section(&mut html, "Education", true, &render_education(&p.education));

    html.push_str(&format!(
        "    <footer>\n        <p>© {} {name}. All rights reserved.</p>\n    </footer>\n",
        portfolio.created_at.year()
    ));
    html.push_str("</body>\n</html>");
    html
}

fn push_section(html: &mut String, heading: &str, gray: bool, body: &str) {
    let class = if gray { " class=\"bg-gray\"" } else { "" };
    html.push_str(&format!(
        "    <section{class}>\n        <div class=\"container\">\n            <h2>{heading}</h2>\n            {body}\n        </div>\n    </section>\n"
    ));
}

fn render_skills(skills: &[Skill]) -> String {
    skills
        .iter()
        .map(|s| format!("<span class=\"skill-tag\">{}</span>", escape_html(&s.name)))
        .collect()
}

fn render_projects(projects: &[Project]) -> String {
    projects
        .iter()
        .map(|proj| {
            let mut item = format!(
                "<div class=\"project-item\"><h3>{}</h3><p>{}</p>",
                escape_html(&proj.title),
                escape_html(&proj.description)
            );
            if !proj.technologies.is_empty() {
                item.push_str(&format!(
                    "<p class=\"tech\">Tech: {}</p>",
                    escape_html(&proj.technologies)
                ));
            }
            if let Some(link) = safe_link(&proj.link) {
                item.push_str(&format!(
                    "<a href=\"{}\" target=\"_blank\">View Project →</a>",
                    escape_html(link)
                ));
            }
            item.push_str("</div>");
            item
        })
        .collect()
}

fn render_experience(experience: &[Experience]) -> String {
    experience
        .iter()
        .map(|exp| {
            format!(
                "<div class=\"exp-item\"><div class=\"exp-header\"><div><h3>{}</h3><p class=\"company\">{}</p></div><span class=\"duration\">{}</span></div><p>{}</p></div>",
                escape_html(&exp.position),
                escape_html(&exp.company),
                escape_html(&exp.duration),
                escape_html(&exp.description)
            )
        })
        .collect()
}

fn render_education(education: &[Education]) -> String {
    education
        .iter()
        .map(|edu| {
            let mut item = format!(
                "<div class=\"edu-item\"><div class=\"edu-header\"><div><h3>{}</h3><p class=\"institution\">{}</p></div><span class=\"year\">{}</span></div>",
                escape_html(&edu.degree),
                escape_html(&edu.institution),
                escape_html(&edu.year)
            );
            if !edu.description.is_empty() {
                item.push_str(&format!(
                    "<p class=\"edu-desc\">{}</p>",
                    escape_html(&edu.description)
                ));
            }
            item.push_str("</div>");
            item
        })
        .collect()
}

const LINK_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Only absolute `http`, `https` and `mailto` URLs become anchors, so a
/// `javascript:` or `data:` link never reaches the page.
fn safe_link(link: &str) -> Option<&str> {
    let link = link.trim();
    let (scheme, _) = link.split_once(':')?;
    LINK_SCHEMES
        .iter()
        .any(|allowed| scheme.eq_ignore_ascii_case(allowed))
        .then_some(link)
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const SKILL_TAG_FILL: &str = "background: #000;\n            color: #fff;";
const CREATIVE_SKILL_TAG_FILL: &str =
    "background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);\n            color: #fff;";
const BODY_FONT_STACK: &str = "font-family: -apple-system";
const MONO_FONT_STACK: &str = "font-family: \"SF Mono\", \"Monaco\", \"Inconsolata\", \"Roboto Mono\"";

const BASE_CSS: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
            line-height: 1.6;
            color: #000;
            background: #fff;
        }
        .container {
            max-width: 1000px;
            margin: 0 auto;
            padding: 0 2rem;
        }
        section {
            padding: 4rem 0;
        }
        .hero {
            text-align: center;
            padding: 6rem 2rem;
        }
        .hero h1 {
            font-size: 4rem;
            font-weight: 300;
            margin-bottom: 1rem;
            letter-spacing: -0.02em;
        }
        .hero .title {
            font-size: 1.5rem;
            color: #666;
            font-weight: 300;
            margin-bottom: 2rem;
        }
        .hero .contact {
            display: flex;
            justify-content: center;
            gap: 1.5rem;
            font-size: 0.9rem;
            color: #666;
        }
        .bg-gray {
            background: #f5f5f5;
        }
        h2 {
            font-size: 2rem;
            font-weight: 300;
            margin-bottom: 2rem;
        }
        p {
            color: #666;
            font-weight: 300;
            line-height: 1.8;
        }
        .skill-tag {
            display: inline-block;
            padding: 0.5rem 1rem;
            background: #000;
            color: #fff;
            border-radius: 2rem;
            font-size: 0.9rem;
            font-weight: 300;
            margin: 0.5rem 0.5rem 0.5rem 0;
        }
        .project-item {
            border-left: 2px solid #000;
            padding-left: 1.5rem;
            margin-bottom: 2rem;
        }
        .project-item h3 {
            font-size: 1.3rem;
            font-weight: 300;
            margin-bottom: 0.5rem;
        }
        .project-item .tech {
            font-size: 0.9rem;
            color: #999;
            margin: 0.5rem 0;
        }
        .project-item a {
            font-size: 0.9rem;
            color: #000;
            text-decoration: underline;
        }
        .exp-item, .edu-item {
            margin-bottom: 2rem;
        }
        .exp-header, .edu-header {
            display: flex;
            justify-content: space-between;
            margin-bottom: 0.5rem;
        }
        .exp-header h3, .edu-header h3 {
            font-size: 1.3rem;
            font-weight: 300;
        }
        .company, .institution {
            color: #666;
            font-weight: 300;
        }
        .duration, .year {
            font-size: 0.9rem;
            color: #999;
        }
        .edu-desc {
            font-size: 0.9rem;
            margin-top: 0.5rem;
        }
        footer {
            text-align: center;
            padding: 3rem 2rem;
            border-top: 1px solid #e0e0e0;
        }
        footer p {
            font-size: 0.9rem;
            color: #666;
        }
        @media (max-width: 768px) {
            .hero h1 { font-size: 2.5rem; }
            .hero .title { font-size: 1.2rem; }
            .hero .contact { flex-direction: column; gap: 0.5rem; }
            .exp-header, .edu-header { flex-direction: column; }
        }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::PortfolioData;

    fn portfolio_with(data: PortfolioData) -> Portfolio {
        Portfolio::new(data, "minimal-professional".to_string())
    }

    fn sample_data() -> PortfolioData {
        PortfolioData {
            name: "Margaret Hamilton".to_string(),
            title: "Software Engineer".to_string(),
            email: "margaret@mit.edu".to_string(),
            phone: String::new(),
            about: "Led the Apollo flight software team.".to_string(),
            education: vec![Education {
                institution: "Earlham College".to_string(),
                degree: "BA Mathematics".to_string(),
                year: "1958".to_string(),
                description: String::new(),
            }],
            skills: vec![Skill {
                name: "Assembly".to_string(),
                level: "expert".to_string(),
                description: String::new(),
            }],
            projects: vec![Project {
                title: "Apollo Guidance Computer".to_string(),
                description: "On-board flight software.".to_string(),
                technologies: String::new(),
                link: String::new(),
            }],
            experience: vec![Experience {
                company: "MIT Instrumentation Lab".to_string(),
                position: "Director".to_string(),
                duration: "1965-1972".to_string(),
                description: "Software engineering division.".to_string(),
            }],
        }
    }

    #[test]
    fn test_from_name_exact_match() {
        assert_eq!(
            TemplateKind::from_name("minimal-professional"),
            TemplateKind::MinimalProfessional
        );
        assert_eq!(TemplateKind::from_name("creative-bold"), TemplateKind::CreativeBold);
        assert_eq!(TemplateKind::from_name("tech-modern"), TemplateKind::TechModern);
    }

    #[test]
    fn test_from_name_is_case_sensitive_and_defaults() {
        assert_eq!(
            TemplateKind::from_name("Tech-Modern"),
            TemplateKind::MinimalProfessional
        );
        assert_eq!(TemplateKind::from_name(""), TemplateKind::MinimalProfessional);
    }

    #[test]
    fn test_as_str_round_trips_through_from_name() {
        for kind in [
            TemplateKind::MinimalProfessional,
            TemplateKind::CreativeBold,
            TemplateKind::TechModern,
        ] {
            assert_eq!(TemplateKind::from_name(kind.as_str()), kind);
        }
    }

    #[test]
    fn test_unknown_template_renders_default() {
        let portfolio = portfolio_with(sample_data());
        assert_eq!(
            render_html(&portfolio, "neon-brutalist"),
            render_html(&portfolio, "minimal-professional")
        );
    }

    #[test]
    fn test_variants_differ_only_in_style() {
        let portfolio = portfolio_with(sample_data());
        let minimal = render_html(&portfolio, "minimal-professional");
        let creative = render_html(&portfolio, "creative-bold");
        let tech = render_html(&portfolio, "tech-modern");

        assert!(minimal.contains("background: #000;"));
        assert!(!minimal.contains("linear-gradient"));
        assert!(creative.contains("linear-gradient(135deg, #667eea 0%, #764ba2 100%)"));
        assert!(tech.contains("\"SF Mono\""));
        assert!(!tech.contains("-apple-system"));
        assert_ne!(minimal, creative);
        assert_ne!(minimal, tech);
    }

    #[test]
    fn test_renders_all_sections() {
        let portfolio = portfolio_with(sample_data());
        let html = render_html(&portfolio, "minimal-professional");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Margaret Hamilton - Portfolio</title>"));
        assert!(html.contains("<h1>Margaret Hamilton</h1>"));
        assert!(html.contains("<span class=\"skill-tag\">Assembly</span>"));
        assert!(html.contains("<h3>Apollo Guidance Computer</h3>"));
        assert!(html.contains("<p class=\"company\">MIT Instrumentation Lab</p>"));
        assert!(html.contains("<span class=\"year\">1958</span>"));
        for heading in ["About", "Skills", "Projects", "Experience", "Education"] {
            assert!(html.contains(&format!("<h2>{heading}</h2>")));
        }
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_optional_fields_omitted_when_empty() {
        let portfolio = portfolio_with(sample_data());
        let html = render_html(&portfolio, "minimal-professional");

        assert!(!html.contains("<span>•</span>"));
        assert!(!html.contains("class=\"tech\""));
        assert!(!html.contains("View Project"));
        assert!(!html.contains("class=\"edu-desc\""));
    }

    #[test]
    fn test_optional_fields_included_when_present() {
        let mut data = sample_data();
        data.phone = "+1 555 0100".to_string();
        data.projects[0].technologies = "AGC assembly".to_string();
        data.projects[0].link = "https://example.com/agc".to_string();
        data.education[0].description = "Minor in philosophy".to_string();

        let html = render_html(&portfolio_with(data), "creative-bold");

        assert!(html.contains("<span>•</span><span>+1 555 0100</span>"));
        assert!(html.contains("<p class=\"tech\">Tech: AGC assembly</p>"));
        assert!(html.contains("<a href=\"https://example.com/agc\" target=\"_blank\">"));
        assert!(html.contains("<p class=\"edu-desc\">Minor in philosophy</p>"));
    }

    #[test]
    fn test_user_input_is_escaped() {
        let mut data = sample_data();
        data.name = "<script>alert('x')</script>".to_string();
        data.projects[0].link = "https://example.com/\" onmouseover=\"steal()".to_string();

        let html = render_html(&portfolio_with(data), "tech-modern");

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("href=\"https://example.com/&quot; onmouseover=&quot;steal()\""));
    }

    #[test]
    fn test_script_links_are_dropped() {
        for link in [
            "javascript:alert(document.cookie)",
            " JavaScript:alert(1)",
            "data:text/html,<script>alert(1)</script>",
            "vbscript:msgbox(1)",
            "example.com/no-scheme",
        ] {
            let mut data = sample_data();
            data.projects[0].link = link.to_string();

            let html = render_html(&portfolio_with(data), "minimal-professional");

            assert!(!html.contains("<a href"), "link {link:?} was rendered");
            assert!(!html.to_lowercase().contains("javascript:"));
        }
    }

    #[test]
    fn test_safe_link_allows_web_and_mail_schemes() {
        assert_eq!(safe_link("https://example.com"), Some("https://example.com"));
        assert_eq!(safe_link("HTTP://example.com"), Some("HTTP://example.com"));
        assert_eq!(safe_link(" mailto:a@b.com "), Some("mailto:a@b.com"));
        assert_eq!(safe_link("javascript:alert(1)"), None);
        assert_eq!(safe_link(""), None);
    }

    #[test]
    fn test_escape_html_ampersand_first() {
        assert_eq!(escape_html("R&D <b>"), "R&amp;D &lt;b&gt;");
    }

    #[test]
    fn test_footer_uses_creation_year() {
        let portfolio = portfolio_with(sample_data());
        let html = render_html(&portfolio, "minimal-professional");
        assert!(html.contains(&format!(
            "© {} Margaret Hamilton. All rights reserved.",
            portfolio.created_at.year()
        )));
    }
}
