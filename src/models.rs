//! Frontend Models
//!
//! Tabs and the resource shapes served by the demo API.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ITEM_LIMIT;
use crate::error::{FetchFailure, UnknownTab};

/// Resource category shown in the tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Posts,
    Users,
    Todos,
}

impl Tab {
    /// All tabs in display order
    pub const ALL: [Tab; 3] = [Tab::Posts, Tab::Users, Tab::Todos];

    pub fn index(self) -> usize {
        match self {
            Tab::Posts => 0,
            Tab::Users => 1,
            Tab::Todos => 2,
        }
    }

    /// API path segment, also used as the `data-tab` identifier
    pub fn endpoint(self) -> &'static str {
        match self {
            Tab::Posts => "posts",
            Tab::Users => "users",
            Tab::Todos => "todos",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Posts => "📝 Posts",
            Tab::Users => "👥 Users",
            Tab::Todos => "✅ Todos",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.endpoint() == s)
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u32,
    pub user_id: u32,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    pub user_id: u32,
    pub title: String,
    pub completed: bool,
}

/// Up to [`ITEM_LIMIT`] items of one tab's shape
#[derive(Debug, Clone, PartialEq)]
pub enum ItemCollection {
    Posts(Vec<Post>),
    Users(Vec<User>),
    Todos(Vec<Todo>),
}

impl ItemCollection {
    pub fn empty(tab: Tab) -> Self {
        match tab {
            Tab::Posts => ItemCollection::Posts(Vec::new()),
            Tab::Users => ItemCollection::Users(Vec::new()),
            Tab::Todos => ItemCollection::Todos(Vec::new()),
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            ItemCollection::Posts(_) => Tab::Posts,
            ItemCollection::Users(_) => Tab::Users,
            ItemCollection::Todos(_) => Tab::Todos,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ItemCollection::Posts(items) => items.len(),
            ItemCollection::Users(items) => items.len(),
            ItemCollection::Todos(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse a JSON array response, keeping the first [`ITEM_LIMIT`] elements in order.
    ///
    /// Elements past the limit are never deserialized, so a malformed tail is ignored.
    pub fn from_json(tab: Tab, body: &str) -> Result<Self, FetchFailure> {
        let values: Vec<serde_json::Value> = serde_json::from_str(body)?;
        let head = values.into_iter().take(ITEM_LIMIT);
        Ok(match tab {
            Tab::Posts => ItemCollection::Posts(typed(head)?),
            Tab::Users => ItemCollection::Users(typed(head)?),
            Tab::Todos => ItemCollection::Todos(typed(head)?),
        })
    }
}

fn typed<T: DeserializeOwned>(
    values: impl Iterator<Item = serde_json::Value>,
) -> Result<Vec<T>, serde_json::Error> {
    values.map(serde_json::from_value).collect()
}
