// src/view_models.rs

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelInfo {
    pub id: String,
    pub title: String,
    pub points: u32,
    pub unlocked: bool,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeInfo {
    pub name: String,
    pub threshold: u32,
    pub earned: bool,
}

impl LevelInfo {
    pub fn label(&self) -> String {
        if self.completed {
            format!("{} ✅", self.title)
        } else if self.unlocked {
            format!("{} 🔓 (+{} pts)", self.title, self.points)
        } else {
            format!("{} 🔒", self.title)
        }
    }
}

impl BadgeInfo {
    pub fn label(&self) -> String {
        if self.earned {
            format!("🏅 {}", self.name)
        } else {
            format!("🔒 {} ({} pts)", self.name, self.threshold)
        }
    }
}
