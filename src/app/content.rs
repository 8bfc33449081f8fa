//! Carousel stage rendering for `ResumeApp`.
//!
//! `StageSurface` is the egui implementation of `DrawSurface`: it paints
//! each projected panel as a framed card, fills it with the panel's
//! content blocks, and overlays the focus-mode arrows and exit button.

use eframe::egui;

use resume_carousel::content::view::{render_panel, Accordion};
use resume_carousel::render::{DrawSurface, FrameView, Viewport};
use resume_carousel::{ContentModel, Direction};

use super::ResumeApp;
use crate::ui;

/// Clicks collected while painting a frame, applied after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StageAction {
    Step(Direction),
    ExitFocus,
}

struct StageSurface<'a> {
    ui: &'a mut egui::Ui,
    rect: egui::Rect,
    content: Option<&'a ContentModel>,
    accordion: &'a mut Accordion,
    anchors: Vec<&'static str>,
    actions: Vec<StageAction>,
}

impl DrawSurface for StageSurface<'_> {
    fn viewport(&self) -> Viewport {
        Viewport {
            width: self.rect.width(),
            height: self.rect.height(),
        }
    }

    fn draw(&mut self, view: &FrameView) {
        let painter = self.ui.painter_at(self.rect);
        painter.rect_filled(self.rect, 0.0, egui::Color32::from_rgb(12, 14, 20));

        for t in view.panels.iter().filter(|t| t.on_screen) {
            let min = self.rect.min + egui::vec2(t.min()[0], t.min()[1]);
            let card = egui::Rect::from_min_size(min, egui::vec2(t.size[0], t.size[1]));
            let stroke_color = if t.index == view.active_tab {
                ui::ACCENT
            } else {
                ui::PANEL_STROKE
            };
            painter.rect(
                card,
                egui::Rounding::same(14.0 * t.scale),
                ui::PANEL_FILL,
                egui::Stroke::new(1.5, stroke_color),
            );

            let (Some(model), Some(&anchor)) = (self.content, self.anchors.get(t.index)) else {
                continue;
            };
            let panel = render_panel(anchor, model);
            let scale = ui::quantize_scale(t.scale);
            let inner = card.shrink(24.0 * t.scale).intersect(self.rect);
            if inner.width() <= 0.0 || inner.height() <= 0.0 {
                continue;
            }
            let accordion = &mut *self.accordion;
            self.ui.allocate_new_ui(
                egui::UiBuilder::new().max_rect(inner).id_salt(anchor),
                |ui| {
                    ui.set_clip_rect(inner);
                    egui::ScrollArea::vertical()
                        .id_salt(anchor)
                        .auto_shrink([false, false])
                        .show(ui, |ui| ui::render_blocks(ui, &panel, accordion, scale));
                },
            );
        }

        self.draw_overlay(view);
    }
}

impl StageSurface<'_> {
    fn draw_overlay(&mut self, view: &FrameView) {
        let vis = view.visibility;
        let mid_y = self.rect.center().y;
        let arrow_size = egui::vec2(44.0, 64.0);

        if vis.left_arrow {
            let r = egui::Rect::from_center_size(
                egui::pos2(self.rect.left() + 40.0, mid_y),
                arrow_size,
            );
            if self.ui.put(r, egui::Button::new("\u{25C0}")).clicked() {
                self.actions.push(StageAction::Step(Direction::Left));
            }
        }
        if vis.right_arrow {
            let r = egui::Rect::from_center_size(
                egui::pos2(self.rect.right() - 40.0, mid_y),
                arrow_size,
            );
            if self.ui.put(r, egui::Button::new("\u{25B6}")).clicked() {
                self.actions.push(StageAction::Step(Direction::Right));
            }
        }
        if vis.focus_exit_button {
            let r = egui::Rect::from_min_size(
                self.rect.right_top() + egui::vec2(-140.0, 12.0),
                egui::vec2(128.0, 28.0),
            );
            if self.ui.put(r, egui::Button::new("\u{2715} Exit focus")).clicked() {
                self.actions.push(StageAction::ExitFocus);
            }
        }
    }
}

impl ResumeApp {
    /// Advance the carousel one frame and paint it into the central panel.
    pub fn draw_stage(&mut self, ui: &mut egui::Ui) {
        let rect = ui.available_rect_before_wrap();
        let anchors = self
            .carousel
            .navigator()
            .registry()
            .iter()
            .map(|p| p.anchor)
            .collect();
        let mut surface = StageSurface {
            ui,
            rect,
            content: self.content.as_ref(),
            accordion: &mut self.accordion,
            anchors,
            actions: Vec::new(),
        };
        self.carousel.frame(&mut surface);

        for action in surface.actions {
            match action {
                StageAction::Step(direction) => self.carousel.step(direction),
                StageAction::ExitFocus => self.carousel.toggle_focus_mode(),
            }
        }
    }
}
