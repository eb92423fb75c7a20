//! Role catalog: the read-only Role → Category → Track registry, each track
//! carrying a title, a display path, and its blueprint of required skills.

mod data;
pub mod handlers;

use serde::Serialize;

pub use data::ROLES;

/// A top-level role (e.g. "Developer") and its categories.
#[derive(Debug, Serialize)]
pub struct RoleGroup {
    pub name: &'static str,
    pub categories: &'static [CategoryGroup],
}

/// A category within a role (e.g. "Web Developer") and its tracks.
#[derive(Debug, Serialize)]
pub struct CategoryGroup {
    pub name: &'static str,
    pub tracks: &'static [Track],
}

#[derive(Debug, Serialize)]
pub struct Track {
    pub name: &'static str,
    pub title: &'static str,
    pub path: &'static str,
    pub skills: &'static [&'static str],
}

/// One resolved (role, category, track) entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleEntry {
    pub role: &'static str,
    pub category: &'static str,
    pub track: &'static str,
    pub title: &'static str,
    pub path: &'static str,
    pub skills: &'static [&'static str],
}

impl RoleEntry {
    fn new(role: &RoleGroup, category: &CategoryGroup, track: &Track) -> Self {
        Self {
            role: role.name,
            category: category.name,
            track: track.name,
            title: track.title,
            path: track.path,
            skills: track.skills,
        }
    }
}

/// Exact lookup of a role triple. `None` means the triple is unknown.
pub fn lookup(role: &str, category: &str, track: &str) -> Option<RoleEntry> {
    let role_group = ROLES.iter().find(|r| r.name == role)?;
    let category_group = role_group.categories.iter().find(|c| c.name == category)?;
    let track_entry = category_group.tracks.iter().find(|t| t.name == track)?;
    Some(RoleEntry::new(role_group, category_group, track_entry))
}

/// Every catalog entry, in declaration order.
pub fn flatten() -> Vec<RoleEntry> {
    ROLES
        .iter()
        .flat_map(|role| {
            role.categories.iter().flat_map(move |category| {
                category
                    .tracks
                    .iter()
                    .map(move |track| RoleEntry::new(role, category, track))
            })
        })
        .collect()
}
