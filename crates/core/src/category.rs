//! The two fixed project categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Wire token for the personal category.
pub const CATEGORY_PERSONAL: &str = "personal";

/// Wire token for the group category.
pub const CATEGORY_GROUP: &str = "group";

/// All valid category tokens.
pub const VALID_CATEGORIES: &[&str] = &[CATEGORY_PERSONAL, CATEGORY_GROUP];

/// One of the two fixed partitions a project record belongs to.
///
/// Categories are closed: any other token is a validation error, regardless
/// of how valid the rest of a request is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Personal,
    Group,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Personal => CATEGORY_PERSONAL,
            Category::Group => CATEGORY_GROUP,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CATEGORY_PERSONAL => Ok(Category::Personal),
            CATEGORY_GROUP => Ok(Category::Group),
            other => Err(CoreError::Validation(format!(
                "Invalid category '{other}'. Must be one of: {}",
                VALID_CATEGORIES.join(", ")
            ))),
        }
    }
}
