//! The persisted portfolio document.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use portfolio_core::category::Category;
use portfolio_core::project::ProjectRecord;

/// The whole persisted data set: two insertion-ordered collections.
///
/// Both keys default to empty so a document missing one of them (or an
/// empty file body like `{}`) still loads without migration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDocument {
    #[serde(default)]
    pub personal: Vec<ProjectRecord>,
    #[serde(default)]
    pub group: Vec<ProjectRecord>,
}

impl ProjectDocument {
    /// The collection for a category.
    pub fn collection(&self, category: Category) -> &Vec<ProjectRecord> {
        match category {
            Category::Personal => &self.personal,
            Category::Group => &self.group,
        }
    }

    /// Mutable collection for a category.
    pub fn collection_mut(&mut self, category: Category) -> &mut Vec<ProjectRecord> {
        match category {
            Category::Personal => &mut self.personal,
            Category::Group => &mut self.group,
        }
    }

    /// Seed document written on first run: one example record per category.
    pub fn seeded() -> Self {
        let now = Utc::now();
        Self {
            personal: vec![ProjectRecord {
                id: Uuid::new_v4().to_string(),
                title: "Task Management App".to_string(),
                description: "A web application for managing daily tasks \
                              with priorities and categories."
                    .to_string(),
                technologies: vec![
                    "JavaScript".to_string(),
                    "React".to_string(),
                    "Node.js".to_string(),
                    "MongoDB".to_string(),
                ],
                project_link: "https://github.com/example/todo-app".to_string(),
                download_link: String::new(),
                created_at: now,
                updated_at: None,
            }],
            group: vec![ProjectRecord {
                id: Uuid::new_v4().to_string(),
                title: "Collaborative E-commerce Site".to_string(),
                description: "Team-built e-commerce platform with cart, \
                              checkout and stock management."
                    .to_string(),
                technologies: vec![
                    "PHP".to_string(),
                    "Laravel".to_string(),
                    "MySQL".to_string(),
                    "Bootstrap".to_string(),
                ],
                project_link: "https://github.com/example/ecommerce-site".to_string(),
                download_link: "https://github.com/example/ecommerce-site/archive/main.zip"
                    .to_string(),
                created_at: now,
                updated_at: None,
            }],
        }
    }
}
