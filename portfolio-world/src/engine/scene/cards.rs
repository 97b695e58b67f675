use bevy::prelude::*;
use constants::layout::SKILL_CHIP_HEIGHT;

use super::labels::spawn_world_label;
use super::layout::{card_position, row_layout, skill_chips};
use crate::constants::render_settings::{
    CARD_COLOUR, CARD_METALLIC, CARD_ROUGHNESS, CHIP_FONT_SIZE, DETAIL_FONT_SIZE,
    DETAIL_TEXT_COLOUR, HEADER_FONT_SIZE, HEADER_TEXT_COLOUR, LINK_TEXT_COLOUR,
    SKILL_CHIP_COLOUR, SKILL_CHIP_DEPTH, TITLE_FONT_SIZE, TITLE_TEXT_COLOUR,
};
use crate::content::{ContentKind, ContentUpdated, PortfolioContent};

/// A clickable card. The pick volume is an axis-aligned box around the card centre.
#[derive(Component, Debug, Clone)]
pub struct ContentCard {
    pub kind: ContentKind,
    pub url: String,
    pub half_extents: Vec3,
}

/// Marks every entity owned by one row so the row can be rebuilt as a unit.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRow(pub ContentKind);

/// Text shown on one card, anchored relative to the card centre.
struct CardText {
    text: String,
    offset: Vec3,
    font_size: f32,
    colour: Color,
}

impl CardText {
    fn new(text: &str, offset: Vec3, font_size: f32, colour: Color) -> Self {
        Self {
            text: text.to_string(),
            offset,
            font_size,
            colour,
        }
    }
}

/// Row titles stay up for the whole session, even while a row is empty.
pub fn spawn_row_headers(commands: &mut Commands) {
    for kind in ContentKind::ALL {
        spawn_world_label(
            commands,
            kind.title(),
            row_layout(kind).header,
            HEADER_FONT_SIZE,
            HEADER_TEXT_COLOUR,
        );
    }
}

/// Spawn one row of cards from the current content lists.
pub fn spawn_card_row(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    kind: ContentKind,
    content: &PortfolioContent,
) {
    let size = row_layout(kind).card_size;
    let card_mesh = meshes.add(Cuboid::from_size(size));
    let card_material = materials.add(StandardMaterial {
        base_color: CARD_COLOUR,
        metallic: CARD_METALLIC,
        perceptual_roughness: CARD_ROUGHNESS,
        ..default()
    });

    let mut cards: Vec<(String, Vec<CardText>, Vec<String>)> = Vec::new();
    match kind {
        ContentKind::Projects => {
            for project in &content.projects {
                cards.push((
                    project.url.clone(),
                    vec![
                        CardText::new(
                            &project.name,
                            Vec3::new(0.0, -0.3, 0.1),
                            TITLE_FONT_SIZE,
                            TITLE_TEXT_COLOUR,
                        ),
                        CardText::new(
                            &project.url,
                            Vec3::new(0.0, -1.1, 0.1),
                            DETAIL_FONT_SIZE,
                            LINK_TEXT_COLOUR,
                        ),
                    ],
                    Vec::new(),
                ));
            }
        }
        ContentKind::WorkHistory => {
            for item in &content.work_history {
                cards.push((
                    item.url.clone(),
                    vec![
                        CardText::new(
                            &item.company_name,
                            Vec3::new(0.0, -0.3, 0.1),
                            TITLE_FONT_SIZE,
                            TITLE_TEXT_COLOUR,
                        ),
                        CardText::new(
                            &item.role,
                            Vec3::new(0.0, -0.7, 0.1),
                            DETAIL_FONT_SIZE,
                            DETAIL_TEXT_COLOUR,
                        ),
                    ],
                    item.skills.clone(),
                ));
            }
        }
        ContentKind::Certifications => {
            for certification in &content.certifications {
                cards.push((
                    certification.url.clone(),
                    vec![
                        CardText::new(
                            &certification.name,
                            Vec3::new(0.0, 0.3, 0.1),
                            TITLE_FONT_SIZE,
                            TITLE_TEXT_COLOUR,
                        ),
                        CardText::new(
                            &certification.issuer,
                            Vec3::new(0.0, -0.3, 0.1),
                            DETAIL_FONT_SIZE,
                            DETAIL_TEXT_COLOUR,
                        ),
                    ],
                    Vec::new(),
                ));
            }
        }
    }

    let chip_material = materials.add(StandardMaterial {
        base_color: SKILL_CHIP_COLOUR,
        metallic: 1.0,
        perceptual_roughness: 0.7,
        ..default()
    });

    for (index, (url, texts, skills)) in cards.into_iter().enumerate() {
        let position = card_position(kind, index);
        let chips = skill_chips(&skills);

        commands
            .spawn((
                Mesh3d(card_mesh.clone()),
                MeshMaterial3d(card_material.clone()),
                Transform::from_translation(position),
                ContentCard {
                    kind,
                    url,
                    half_extents: size * 0.5,
                },
                CardRow(kind),
            ))
            .with_children(|parent| {
                for chip in &chips {
                    parent.spawn((
                        Mesh3d(meshes.add(Cuboid::new(
                            chip.width,
                            SKILL_CHIP_HEIGHT,
                            SKILL_CHIP_DEPTH,
                        ))),
                        MeshMaterial3d(chip_material.clone()),
                        Transform::from_translation(chip.offset),
                    ));
                }
            });

        for text in texts {
            let label = spawn_world_label(
                commands,
                text.text,
                position + text.offset,
                text.font_size,
                text.colour,
            );
            commands.entity(label).insert(CardRow(kind));
        }
        for chip in chips {
            let label = spawn_world_label(
                commands,
                chip.label,
                position + chip.offset + Vec3::Z * SKILL_CHIP_DEPTH,
                CHIP_FONT_SIZE,
                TITLE_TEXT_COLOUR,
            );
            commands.entity(label).insert(CardRow(kind));
        }
    }
}

/// Replace a row's cards and labels whenever its list is replaced.
pub fn rebuild_card_rows(
    mut commands: Commands,
    mut updates: EventReader<ContentUpdated>,
    content: Res<PortfolioContent>,
    rows: Query<(Entity, &CardRow)>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rebuilt: Vec<ContentKind> = Vec::new();

    for update in updates.read() {
        if rebuilt.contains(&update.kind) {
            continue;
        }
        rebuilt.push(update.kind);

        for (entity, row) in &rows {
            if row.0 == update.kind {
                commands.entity(entity).despawn();
            }
        }

        spawn_card_row(&mut commands, &mut meshes, &mut materials, update.kind, &content);
        info!(
            "Laid out {} {} cards",
            content.len(update.kind),
            update.kind.log_name()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::{ContentList, Project};

    fn project(id: &str) -> Project {
        Project {
            id: id.into(),
            name: format!("Project {id}"),
            url: format!("https://{id}.test"),
            image_url: None,
        }
    }

    fn row_app() -> App {
        let mut app = App::new();
        app.init_resource::<PortfolioContent>()
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .add_event::<ContentUpdated>()
            .add_systems(Update, rebuild_card_rows);
        app
    }

    fn cards(app: &mut App) -> Vec<(ContentCard, Vec3)> {
        let mut query = app.world_mut().query::<(&ContentCard, &Transform)>();
        let mut found: Vec<_> = query
            .iter(app.world())
            .map(|(card, transform)| (card.clone(), transform.translation))
            .collect();
        found.sort_by(|a, b| a.1.x.total_cmp(&b.1.x));
        found
    }

    #[test]
    fn update_spawns_cards_at_row_positions() {
        let mut app = row_app();
        app.world_mut()
            .resource_mut::<PortfolioContent>()
            .replace(ContentList::Projects(vec![project("a"), project("b")]));
        app.world_mut().send_event(ContentUpdated {
            kind: ContentKind::Projects,
        });
        app.update();

        let spawned = cards(&mut app);
        assert_eq!(spawned.len(), 2);
        assert_eq!(spawned[0].1, Vec3::new(-9.0, 2.0, -7.0));
        assert_eq!(spawned[1].1, Vec3::new(-4.0, 2.0, -7.0));
        assert_eq!(spawned[1].0.url, "https://b.test");
        assert_eq!(spawned[0].0.half_extents, Vec3::new(1.5, 2.0, 0.05));
    }

    #[test]
    fn replacement_rebuilds_the_row() {
        let mut app = row_app();
        app.world_mut()
            .resource_mut::<PortfolioContent>()
            .replace(ContentList::Projects(vec![
                project("a"),
                project("b"),
                project("c"),
            ]));
        app.world_mut().send_event(ContentUpdated {
            kind: ContentKind::Projects,
        });
        app.update();
        assert_eq!(cards(&mut app).len(), 3);

        app.world_mut()
            .resource_mut::<PortfolioContent>()
            .replace(ContentList::Projects(vec![project("z")]));
        app.world_mut().send_event(ContentUpdated {
            kind: ContentKind::Projects,
        });
        app.update();

        let spawned = cards(&mut app);
        assert_eq!(spawned.len(), 1);
        assert_eq!(spawned[0].0.url, "https://z.test");

        let mut labels = app.world_mut().query::<(&CardRow, &Text)>();
        assert_eq!(labels.iter(app.world()).count(), 2);
    }
}
