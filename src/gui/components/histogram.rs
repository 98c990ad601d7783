// src/gui/components/histogram.rs
//
// Overlaid bar chart of delta buckets: whole board behind, car-filtered set in
// front, the selected driver's bucket in the highlight color.

use eframe::egui::{self, pos2, vec2, Align2, FontId, Rect, Sense, Stroke};

use crate::gui::app::App;

const X_TITLE: &str = "Delta vs Leader (s)";
const Y_TITLE: &str = "Number of Drivers";

// plot insets inside the allocated rect
const LEFT: f32 = 48.0;
const RIGHT: f32 = 12.0;
const TOP: f32 = 24.0;
const BOTTOM: f32 = 40.0;

/// Minimum horizontal room per x tick label.
const TICK_SPACING: f32 = 36.0;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let theme = &app.theme;
    let hist = &app.payload.histogram;

    let size = vec2(ui.available_width(), app.state.gui.histogram_h);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;
    painter.rect_filled(rect, 4.0, theme.layer);

    let plot = Rect::from_min_max(rect.min + vec2(LEFT, TOP), rect.max - vec2(RIGHT, BOTTOM));
    let axis = Stroke::new(1.0, theme.on_layer_secondary);
    let small = FontId::proportional(11.0);

    painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis);
    painter.line_segment([plot.left_top(), plot.left_bottom()], axis);
    painter.text(
        pos2(plot.center().x, rect.bottom() - 4.0),
        Align2::CENTER_BOTTOM,
        X_TITLE,
        FontId::proportional(13.0),
        theme.on_layer_primary,
    );
    painter.text(
        rect.left_top() + vec2(6.0, 4.0),
        Align2::LEFT_TOP,
        Y_TITLE,
        FontId::proportional(13.0),
        theme.on_layer_primary,
    );

    if hist.is_empty() {
        let msg = if app.is_loading() { "Loading…" } else { "No data" };
        painter.text(plot.center(), Align2::CENTER_CENTER, msg, FontId::proportional(14.0), theme.on_layer_secondary);
        return;
    }

    let n = hist.len();
    let max = hist.max_count().max(1) as f32;
    let slot = plot.width() / n as f32;
    let bar_w = (slot * 0.85).max(1.0);
    let bar = |i: usize, count: usize| {
        let h = count as f32 / max * plot.height();
        let x = plot.left() + i as f32 * slot + (slot - bar_w) / 2.0;
        Rect::from_min_max(pos2(x, plot.bottom() - h), pos2(x + bar_w, plot.bottom()))
    };

    let full_color = if hist.filtered_empty { theme.primary } else { theme.secondary };
    for i in 0..n {
        let lit = app.payload.highlight == Some(i);

        if hist.full[i] > 0 {
            let c = if lit && hist.filtered_empty { theme.highlight } else { full_color };
            painter.rect_filled(bar(i, hist.full[i]), 0.0, c);
        }
        if hist.filtered[i] > 0 {
            let c = if lit { theme.highlight } else { theme.primary };
            painter.rect_filled(bar(i, hist.filtered[i]), 0.0, c);
        }
        if lit && hist.full[i] > 0 {
            painter.rect_stroke(bar(i, hist.full[i]), 0.0, Stroke::new(2.0, theme.highlight), egui::StrokeKind::Inside);
        }
    }

    // x ticks on bin edges, thinned to fit
    let every = ((TICK_SPACING / slot).ceil() as usize).max(1);
    for i in (0..=n).step_by(every) {
        let x = plot.left() + i as f32 * slot;
        painter.line_segment([pos2(x, plot.bottom()), pos2(x, plot.bottom() + 4.0)], axis);
        painter.text(
            pos2(x, plot.bottom() + 6.0),
            Align2::CENTER_TOP,
            format!("{:.1}", hist.edge(i)),
            small.clone(),
            theme.on_layer_secondary,
        );
    }

    // y ticks: 0, half, max
    let top = hist.max_count().max(1);
    for v in [0, top / 2, top] {
        let y = plot.bottom() - v as f32 / max * plot.height();
        painter.line_segment([pos2(plot.left() - 4.0, y), pos2(plot.left(), y)], axis);
        painter.text(pos2(plot.left() - 6.0, y), Align2::RIGHT_CENTER, v.to_string(), small.clone(), theme.on_layer_secondary);
    }

    if let Some(pos) = response.hover_pos() {
        if plot.contains(pos) {
            let i = (((pos.x - plot.left()) / slot) as usize).min(n - 1);
            let upper = if hist.overflow && i == n - 1 { s!("…") } else { format!("{:.1}", hist.edge(i + 1)) };
            let text = format!(
                "{:.1}–{} s: {} of {} drivers",
                hist.edge(i),
                upper,
                if hist.filtered_empty { hist.full[i] } else { hist.filtered[i] },
                hist.full[i],
            );
            response.on_hover_text_at_pointer(text);
        }
    }
}
