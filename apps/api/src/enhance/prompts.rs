// LLM prompt constants for the enhancement module.

/// Enhancement prompt template.
/// Replace: {name}, {title}, {about}, {skills}, {projects}, {experience}
pub const ENHANCE_PROMPT_TEMPLATE: &str = r#"You are a professional career advisor and content writer. Analyze the following portfolio information and enhance it for maximum impact.

Name: {name}
Title: {title}
About: {about}

Skills: {skills}

Projects:
{projects}

Experience:
{experience}

Provide the following in JSON format:
1. Enhanced 'about' section (2-3 sentences, professional and impactful)
2. For each skill, add a brief 'description' (one short phrase about proficiency)
3. For each project, enhance the 'description' with quantifiable achievements and impact
4. Provide 2-3 actionable 'suggestions' for improvement

Return ONLY valid JSON in this exact format:
{
  "about": "enhanced about text",
  "skills": [
    {"name": "skill name", "description": "brief description"}
  ],
  "projects": [
    {"title": "project title", "description": "enhanced description"}
  ],
  "suggestions": ["suggestion 1", "suggestion 2", "suggestion 3"]
}"#;

pub const NO_PROJECTS: &str = "No projects provided";
pub const NO_EXPERIENCE: &str = "No experience provided";
