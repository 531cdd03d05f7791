//! Frame state of the 3D scene and panel placement

use std::collections::BTreeMap;

use super::camera::{project, smooth_toward, Viewport};
use super::motion::{step, CardTarget, CardTransform};
use super::SceneSettings;
use crate::deck::{Card, CardId, Deck};
use crate::review::ReviewSession;

/// Width of a card in scene units
pub const CARD_WORLD_WIDTH: f32 = 1.6;
/// CSS width of the DOM panel drawn for a card
pub const PANEL_WIDTH_PX: f32 = 320.0;
/// Stacking order of the focused card; the backdrop sits just below it
pub const FOCUS_Z_INDEX: i32 = 60;

/// A card's DOM panel placed on screen
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    pub card: Card,
    /// Centre of the panel, CSS pixels from the viewport's top-left
    pub left: f32,
    pub top: f32,
    /// CSS scale applied to a `PANEL_WIDTH_PX` wide panel
    pub scale: f32,
    pub rotation_y: f32,
    pub z_index: i32,
    pub selected: bool,
    pub flipped: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneFrame {
    camera_y: f32,
    transforms: BTreeMap<CardId, CardTransform>,
    shaking_key: u64,
}

impl SceneFrame {
    pub fn camera_y(&self) -> f32 {
        self.camera_y
    }

    pub fn transform(&self, id: CardId) -> Option<CardTransform> {
        self.transforms.get(&id).copied()
    }

    /// Move the camera and every visible card one frame toward their targets.
    ///
    /// Returns `false` once everything has settled and nothing moved.
    pub fn advance(
        &mut self,
        session: &ReviewSession,
        deck: &Deck,
        settings: &SceneSettings,
        scroll_target: f32,
        delta_time: f32,
    ) -> bool {
        let before = self.clone();

        // Remaining cards snap to their new slots after a removal
        if session.shaking_key() != self.shaking_key {
            self.transforms.clear();
            self.shaking_key = session.shaking_key();
        }

        self.camera_y = smooth_toward(
            self.camera_y,
            scroll_target,
            settings.camera_smoothing,
            delta_time,
        );

        let visible = session.visible(deck);
        self.transforms
            .retain(|id, _| visible.iter().any(|card| card.id == *id));

        for (index, card) in visible.iter().enumerate() {
            let slot = settings.layout.slot(index);
            let target = CardTarget::new(
                slot,
                session.selected() == Some(card.id),
                self.camera_y,
                settings.focus,
                session.is_removing(card.id),
            );
            let current = self
                .transforms
                .get(&card.id)
                .copied()
                .unwrap_or_else(|| CardTransform::at(slot));
            self.transforms
                .insert(card.id, step(current, &target, delta_time, settings.motion));
        }

        *self != before
    }

    /// Screen placement of every visible card in front of the camera
    pub fn panels(
        &self,
        session: &ReviewSession,
        deck: &Deck,
        settings: &SceneSettings,
        viewport: Viewport,
    ) -> Vec<Panel> {
        session
            .visible(deck)
            .into_iter()
            .enumerate()
            .filter_map(|(index, card)| {
                let transform = self
                    .transform(card.id)
                    .unwrap_or_else(|| CardTransform::at(settings.layout.slot(index)));
                let projected = project(transform.position, self.camera_y(), &settings.lens, viewport)?;
                let selected = session.selected() == Some(card.id);

                Some(Panel {
                    card: card.clone(),
                    left: projected.x,
                    top: projected.y,
                    scale: transform.scale * projected.pixels_per_unit * CARD_WORLD_WIDTH / PANEL_WIDTH_PX,
                    rotation_y: transform.rotation_y,
                    z_index: if selected {
                        FOCUS_Z_INDEX
                    } else {
                        1 + (transform.position.z * 10.0).max(0.0) as i32
                    },
                    selected,
                    flipped: session.is_flipped(card.id),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn run(frame: &mut SceneFrame, session: &ReviewSession, deck: &Deck, scroll: f32, frames: usize) {
        let settings = SceneSettings::default();
        for _ in 0..frames {
            frame.advance(session, deck, &settings, scroll, FRAME);
        }
    }

    #[test]
    fn idle_cards_rest_on_slots() {
        let deck = Deck::default();
        let session = ReviewSession::default();
        let mut frame = SceneFrame::default();
        run(&mut frame, &session, &deck, 0.0, 1);
        let settings = SceneSettings::default();
        for index in 0..deck.len() {
            assert_eq!(frame.transform(index), Some(CardTransform::at(settings.layout.slot(index))));
        }
    }

    #[test]
    fn selected_card_floats_toward_camera() {
        let deck = Deck::default();
        let session = ReviewSession::default().open_card(5, None);
        let mut frame = SceneFrame::default();
        run(&mut frame, &session, &deck, 0.0, 240);
        let t = frame.transform(5).expect("visible");
        assert!((t.position.z - 2.0).abs() < 1e-2);
        assert!((t.scale - 1.3).abs() < 1e-2);
    }

    #[test]
    fn camera_follows_scroll_target() {
        let deck = Deck::default();
        let mut frame = SceneFrame::default();
        run(&mut frame, &ReviewSession::default(), &deck, -3.0, 240);
        assert!((frame.camera_y() + 3.0).abs() < 1e-3);
    }

    #[test]
    fn removal_drops_card_and_resets_slots() {
        let deck = Deck::default();
        let marked = ReviewSession::default().open_card(3, None).mark_remembered(3);
        let mut frame = SceneFrame::default();
        run(&mut frame, &marked, &deck, 0.0, 10);
        assert!(frame.transform(3).expect("still visible").scale < 1.0);

        let token = marked.pending_for(3).expect("pending").token;
        let done = marked.fire(token).expect("current");
        run(&mut frame, &done, &deck, 0.0, 1);
        assert_eq!(frame.transform(3), None);
        let settings = SceneSettings::default();
        // card 4 moved into the fourth slot
        assert_eq!(frame.transform(4), Some(CardTransform::at(settings.layout.slot(3))));
    }

    #[test]
    fn settled_scene_reports_no_change() {
        let deck = Deck::default();
        let settings = SceneSettings::default();
        let session = ReviewSession::default().open_card(2, None);
        let mut frame = SceneFrame::default();
        assert!(frame.advance(&session, &deck, &settings, -1.0, FRAME));
        run(&mut frame, &session, &deck, -1.0, 600);
        assert!(!frame.advance(&session, &deck, &settings, -1.0, FRAME));

        let closed = session.close_card();
        assert!(frame.advance(&closed, &deck, &settings, -1.0, FRAME));
    }

    #[test]
    fn panels_cover_visible_cards() {
        let deck = Deck::default();
        let session = ReviewSession::default().open_card(0, None);
        let mut frame = SceneFrame::default();
        run(&mut frame, &session, &deck, 0.0, 30);
        let panels = frame.panels(&session, &deck, &SceneSettings::default(), Viewport::default());
        assert_eq!(panels.len(), 24);
        let focused: Vec<&Panel> = panels.iter().filter(|p| p.selected).collect();
        assert_eq!(focused.len(), 1);
        assert_eq!(focused[0].card.id, 0);
        assert_eq!(focused[0].z_index, FOCUS_Z_INDEX);
        assert!(focused[0].flipped);
        assert!(panels.iter().filter(|p| !p.selected).all(|p| p.z_index < FOCUS_Z_INDEX));
    }
}
