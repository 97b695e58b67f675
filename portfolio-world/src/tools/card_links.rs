use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use thiserror::Error;

use crate::activity::ActivityLog;
use crate::engine::camera::FollowCamera;
use crate::engine::scene::cards::ContentCard;

#[derive(Debug, Error)]
pub enum LinkError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("failed to launch browser: {0}")]
    Launch(#[from] std::io::Error),

    #[cfg(target_arch = "wasm32")]
    #[error("window.open failed: {0}")]
    Browser(String),
}

/// Distance along the ray to the first hit on an axis-aligned box, using the slab method.
/// A ray starting inside the box hits at distance 0.
pub fn ray_aabb_distance(
    origin: Vec3,
    direction: Vec3,
    centre: Vec3,
    half_extents: Vec3,
) -> Option<f32> {
    let inverse = direction.recip();
    let near = (centre - half_extents - origin) * inverse;
    let far = (centre + half_extents - origin) * inverse;

    let t_enter = near.min(far).max_element();
    let t_exit = near.max(far).min_element();

    if t_exit < 0.0 || t_enter > t_exit {
        return None;
    }
    Some(t_enter.max(0.0))
}

/// Nearest card hit by the ray.
pub fn pick_card<'a>(
    origin: Vec3,
    direction: Vec3,
    cards: impl IntoIterator<Item = (&'a ContentCard, Vec3)>,
) -> Option<&'a ContentCard> {
    cards
        .into_iter()
        .filter_map(|(card, centre)| {
            ray_aabb_distance(origin, direction, centre, card.half_extents).map(|t| (t, card))
        })
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, card)| card)
}

pub fn open_link_message(card: &ContentCard) -> String {
    format!("Opening {} link: {}", card.kind.link_type(), card.url)
}

/// Left click on a card logs the link and opens it in a new browser context.
pub fn handle_card_clicks(
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &Transform), With<FollowCamera>>,
    cards: Query<(&ContentCard, &GlobalTransform)>,
    mut log: ResMut<ActivityLog>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) {
        return;
    }

    let (Ok(window), Ok((camera, camera_transform))) = (windows.single(), camera_query.single())
    else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };

    // Use this frame's camera pose rather than last frame's propagated transform.
    let camera_global = GlobalTransform::from(*camera_transform);
    let Ok(ray) = camera.viewport_to_world(&camera_global, cursor_pos) else {
        return;
    };

    let candidates = cards
        .iter()
        .map(|(card, transform)| (card, transform.translation()));

    if let Some(card) = pick_card(ray.origin, *ray.direction, candidates) {
        log.push(open_link_message(card));
        if let Err(e) = open_url(&card.url) {
            warn!("Could not open {}: {}", card.url, e);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_url(url: &str) -> Result<(), LinkError> {
    use std::process::Command;

    #[cfg(target_os = "windows")]
    let mut command = {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    };
    #[cfg(target_os = "macos")]
    let mut command = Command::new("open");
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let mut command = Command::new("xdg-open");

    command.arg(url).spawn()?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn open_url(url: &str) -> Result<(), LinkError> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window().ok_or_else(|| LinkError::Browser("no window".into()))?;
    window
        .open_with_url_and_target(url, "_blank")
        .map_err(|e: JsValue| LinkError::Browser(format!("{e:?}")))?;
    Ok(())
}
