//! Built-in, read-only catalog of prompt templates.

use serde::Serialize;
use std::fmt;

mod data;

pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "Customer Service")]
    CustomerService,
    Analysis,
    Research,
    Education,
    Development,
    Creative,
    Translation,
    Business,
    Data,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::CustomerService => "Customer Service",
            Category::Analysis => "Analysis",
            Category::Research => "Research",
            Category::Education => "Education",
            Category::Development => "Development",
            Category::Creative => "Creative",
            Category::Translation => "Translation",
            Category::Business => "Business",
            Category::Data => "Data",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon identifier attached to a template. Rendering is the presentation
/// layer's concern (see `ux::icon_glyph`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Icon {
    Award,
    BookOpen,
    Brain,
    Briefcase,
    Calculator,
    Camera,
    Clipboard,
    Code,
    Database,
    FileText,
    Globe,
    Heart,
    Languages,
    Lightbulb,
    Lock,
    Megaphone,
    MessageSquare,
    Music,
    Palette,
    PenTool,
    Scale,
    Shield,
    Sparkles,
    Target,
    TestTube,
    TrendingUp,
    Users,
    Workflow,
    Zap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id: u32,
    pub category: Category,
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub task: &'static str,
    pub inputs: &'static [&'static str],
    /// Empty when the template has no preferred structure.
    pub structure: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    templates: &'static [Template],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn builtin() -> Self {
        Self { templates: data::BUILTIN }
    }

    pub fn all(&self) -> &'static [Template] {
        self.templates
    }

    pub fn get(&self, id: u32) -> Option<&'static Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Stable filter over the catalog. `category` is either `"All"` or an
    /// exact category name; `query` is a case-insensitive substring matched
    /// against title and description.
    pub fn search(&self, query: &str, category: &str) -> Vec<&'static Template> {
        let needle = query.to_lowercase();
        self.templates
            .iter()
            .filter(|t| category == ALL_CATEGORIES || t.category.as_str() == category)
            .filter(|t| {
                needle.is_empty()
                    || t.title.to_lowercase().contains(&needle)
                    || t.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// `"All"` followed by each category in first-seen order.
    pub fn categories(&self) -> Vec<&'static str> {
        let mut out = vec![ALL_CATEGORIES];
        for t in self.templates {
            let name = t.category.as_str();
            if !out.contains(&name) {
                out.push(name);
            }
        }
        out
    }
}
