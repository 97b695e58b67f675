use bevy::prelude::*;
use constants::layout::{
    CERTIFICATION_ROW, PROJECT_ROW, RowLayout, SKILL_CHIP_BASE_WIDTH, SKILL_CHIP_CHAR_WIDTH,
    SKILL_CHIP_ORIGIN, SKILL_CHIP_ROW_HEIGHT, SKILL_LABEL_MAX_CHARS, WORK_HISTORY_ROW,
};

use crate::content::ContentKind;

pub fn row_layout(kind: ContentKind) -> &'static RowLayout {
    match kind {
        ContentKind::Projects => &PROJECT_ROW,
        ContentKind::WorkHistory => &WORK_HISTORY_ROW,
        ContentKind::Certifications => &CERTIFICATION_ROW,
    }
}

/// World position of the `index`-th card in a row.
pub fn card_position(kind: ContentKind, index: usize) -> Vec3 {
    let row = row_layout(kind);
    Vec3::new(index as f32 * row.spacing + row.x_offset, row.y, row.z)
}

/// One skill chip on a work history card.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillChip {
    pub label: String,
    /// Centre relative to the card centre.
    pub offset: Vec3,
    pub width: f32,
}

/// Lay skills out shortest first in rows of two (up to four skills) or three.
/// The sort is stable, so equal-length skills keep their listed order.
pub fn skill_chips(skills: &[String]) -> Vec<SkillChip> {
    let mut sorted: Vec<&String> = skills.iter().collect();
    sorted.sort_by_key(|skill| skill.chars().count());

    let per_row = if skills.len() > 4 { 3 } else { 2 };
    let centring = if skills.len() < 5 { 0.5 } else { 1.0 };

    sorted
        .into_iter()
        .enumerate()
        .map(|(index, skill)| {
            let column = (index % per_row) as f32 - centring;
            let row = (index / per_row) as f32 * -SKILL_CHIP_ROW_HEIGHT;
            let chars = skill.chars().count();
            SkillChip {
                label: skill.chars().take(SKILL_LABEL_MAX_CHARS).collect(),
                offset: SKILL_CHIP_ORIGIN + Vec3::new(column, row, 0.0),
                width: SKILL_CHIP_BASE_WIDTH + chars as f32 * SKILL_CHIP_CHAR_WIDTH,
            }
        })
        .collect()
}
