//! Portfolio command handlers (/about, /skills, /projects, /contact).

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{Profile, Project};
use crate::error::Result;
use crate::terminal::dispatcher::CommandHandler;

/// Handle /about command.
pub struct AboutHandler {
    pub profile: Arc<Profile>,
}

#[async_trait]
impl CommandHandler for AboutHandler {
    async fn handle(&self, _args: &[String]) -> Result<String> {
        let profile = &self.profile;
        if profile.name.is_empty() && profile.bio.is_empty() {
            return Ok("No profile configured yet.".to_string());
        }

        let mut out = profile.name.clone();
        if !profile.tagline.is_empty() {
            if !out.is_empty() {
                out.push_str(" - ");
            }
            out.push_str(&profile.tagline);
        }
        if !profile.bio.is_empty() {
            if !out.is_empty() {
                out.push_str("\n\n");
            }
            out.push_str(&profile.bio);
        }
        Ok(out)
    }
}

/// Handle /skills command.
///
/// Filters match a whole category by name, or individual skills within it.
pub struct SkillsHandler {
    pub profile: Arc<Profile>,
}

#[async_trait]
impl CommandHandler for SkillsHandler {
    async fn handle(&self, args: &[String]) -> Result<String> {
        if self.profile.skills.is_empty() {
            return Ok("No skills listed yet.".to_string());
        }

        let filters: Vec<String> = args.iter().map(|a| a.to_lowercase()).collect();
        let is_match = |text: &str| {
            let text = text.to_lowercase();
            filters.iter().any(|f| text.contains(f.as_str()))
        };

        let blocks: Vec<String> = self
            .profile
            .skills
            .iter()
            .filter_map(|group| {
                let items: Vec<&str> = if filters.is_empty() || is_match(&group.category) {
                    group.items.iter().map(String::as_str).collect()
                } else {
                    group
                        .items
                        .iter()
                        .filter(|item| is_match(item))
                        .map(String::as_str)
                        .collect()
                };

                if items.is_empty() {
                    return None;
                }
                Some(format!("{}: {}", group.category, items.join(", ")))
            })
            .collect();

        if blocks.is_empty() {
            return Ok(format!("No skills matching: {}", args.join(" ")));
        }
        Ok(blocks.join("\n"))
    }
}

/// Handle /projects command.
pub struct ProjectsHandler {
    pub profile: Arc<Profile>,
}

impl ProjectsHandler {
    fn find(&self, name: &str) -> Option<&Project> {
        self.profile
            .projects
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

fn format_project_detail(project: &Project) -> String {
    let mut out = project.name.clone();
    if !project.description.is_empty() {
        out.push_str("\n  ");
        out.push_str(&project.description);
    }
    if !project.tags.is_empty() {
        out.push_str(&format!("\n  Tags: {}", project.tags.join(", ")));
    }
    if let Some(url) = &project.url {
        out.push_str(&format!("\n  Link: {url}"));
    }
    out
}

#[async_trait]
impl CommandHandler for ProjectsHandler {
    async fn handle(&self, args: &[String]) -> Result<String> {
        if !args.is_empty() {
            // Project names may contain spaces
            let name = args.join(" ");
            return Ok(match self.find(&name) {
                Some(project) => format_project_detail(project),
                None => format!("No project named '{name}'. Type /projects to list them."),
            });
        }

        if self.profile.projects.is_empty() {
            return Ok("No projects listed yet.".to_string());
        }

        let lines: Vec<String> = self
            .profile
            .projects
            .iter()
            .map(|p| {
                if p.description.is_empty() {
                    format!("  {}", p.name)
                } else {
                    format!("  {} - {}", p.name, p.description)
                }
            })
            .collect();

        Ok(format!(
            "Projects:\n{}\n\nType /projects <name> for details.",
            lines.join("\n")
        ))
    }
}

/// Handle /contact command.
pub struct ContactHandler {
    pub profile: Arc<Profile>,
}

#[async_trait]
impl CommandHandler for ContactHandler {
    async fn handle(&self, _args: &[String]) -> Result<String> {
        if self.profile.contacts.is_empty() {
            return Ok("No contact details listed yet.".to_string());
        }
        Ok(self
            .profile
            .contacts
            .iter()
            .map(|c| format!("{}: {}", c.label, c.value))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
