//! Skills radar chart drawn on an HTML5 canvas

use std::f64::consts::{FRAC_PI_2, TAU};

use gloo::timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::i18n::use_i18n;
use crate::models::{RadarSkill, RADAR_SKILLS_KEY};
use crate::utils::observer::use_reveal;
use crate::utils::store::{load_or_defaults, watch_key};

const CANVAS_SIZE: u32 = 400;
const LABEL_MARGIN: f64 = 40.0;
const RINGS: u32 = 5;
const HOVER_RADIUS: f64 = 20.0;
const ANIMATION_STEP: f64 = 0.02;
const FRAME_MS: u32 = 16;

/// Radar layout derived from the canvas size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub max_radius: f64,
}

impl RadarGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        RadarGeometry {
            center_x,
            center_y,
            max_radius: center_x.min(center_y) - LABEL_MARGIN,
        }
    }

    /// Axis angle for skill `index` of `count`, starting at 12 o'clock.
    pub fn angle(index: usize, count: usize) -> f64 {
        if count == 0 {
            return -FRAC_PI_2;
        }
        (index as f64 / count as f64) * TAU - FRAC_PI_2
    }

    pub fn point(&self, angle: f64, radius: f64) -> (f64, f64) {
        (
            self.center_x + angle.cos() * radius,
            self.center_y + angle.sin() * radius,
        )
    }

    /// Data point for a skill level (0-100) scaled by animation progress (0-1).
    pub fn data_point(&self, index: usize, count: usize, level: u8, progress: f64) -> (f64, f64) {
        let radius = (level as f64 * progress / 100.0) * self.max_radius;
        self.point(Self::angle(index, count), radius)
    }

    /// Index of the fully-drawn point nearest to (x, y) within the hover radius.
    pub fn hit_test(&self, skills: &[RadarSkill], x: f64, y: f64) -> Option<usize> {
        let count = skills.len();
        skills
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let (px, py) = self.data_point(i, count, s.level, 1.0);
                (i, ((x - px).powi(2) + (y - py).powi(2)).sqrt())
            })
            .filter(|(_, d)| *d < HOVER_RADIUS)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }
}

#[component]
pub fn SkillsRadar() -> impl IntoView {
    let i18n = use_i18n();
    let skills = create_rw_signal(load_or_defaults::<RadarSkill>());
    let (hovered, set_hovered) = create_signal(None::<usize>);
    let (progress, set_progress) = create_signal(0.0_f64);
    let canvas_ref = create_node_ref::<html::Canvas>();
    let visible = use_reveal(canvas_ref);

    let watcher = watch_key(RADAR_SKILLS_KEY, move || skills.set(load_or_defaults::<RadarSkill>()));
    on_cleanup(move || drop(watcher));

    // Grow the chart once it scrolls into view
    create_effect(move |started: Option<bool>| {
        let already = started.unwrap_or(false);
        if visible.get() && !already {
            spawn_local(async move {
                let mut p = 0.0;
                while p < 1.0 {
                    p = (p + ANIMATION_STEP).min(1.0);
                    // gone once the section is unmounted
                    if set_progress.try_set(p).is_some() {
                        break;
                    }
                    TimeoutFuture::new(FRAME_MS).await;
                }
            });
            return true;
        }
        already
    });

    create_effect(move |_| {
        let progress = progress.get();
        let hovered = hovered.get();
        skills.with(|skills| {
            if let Some(canvas) = canvas_ref.get() {
                draw_radar(&canvas, skills, progress, hovered);
            }
        });
    });

    let on_mouse_move = move |ev: web_sys::MouseEvent| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let rect = canvas.get_bounding_client_rect();
        let x = ev.client_x() as f64 - rect.left();
        let y = ev.client_y() as f64 - rect.top();
        let geometry = RadarGeometry::new(canvas.width() as f64, canvas.height() as f64);
        set_hovered.set(skills.with(|s| geometry.hit_test(s, x, y)));
    };

    view! {
        <div class="card radar-card">
            <h3 class="radar-title">{move || i18n.t("skills.radar_title")}</h3>
            <canvas
                node_ref=canvas_ref
                width=CANVAS_SIZE
                height=CANVAS_SIZE
                class="radar-canvas"
                on:mousemove=on_mouse_move
                on:mouseleave=move |_| set_hovered.set(None)
            />
            <div class="radar-legend">
                {move || skills.get().into_iter().map(|s| view! {
                    <span class="legend-item">
                        <span class="legend-dot" style=format!("background-color: {}", s.color)></span>
                        {s.skill} " (" {s.category} ")"
                    </span>
                }).collect_view()}
            </div>
        </div>
    }
}

fn draw_radar(canvas: &HtmlCanvasElement, skills: &[RadarSkill], progress: f64, hovered: Option<usize>) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let g = RadarGeometry::new(width, height);
    let count = skills.len();

    ctx.clear_rect(0.0, 0.0, width, height);

    // Rings with percentage labels
    ctx.set_font("12px Inter");
    ctx.set_text_align("center");
    for i in 1..=RINGS {
        let radius = g.max_radius / RINGS as f64 * i as f64;
        ctx.begin_path();
        let _ = ctx.arc(g.center_x, g.center_y, radius, 0.0, TAU);
        ctx.set_stroke_style(&format!("rgba(0, 212, 255, {:.2})", 0.1 + i as f64 * 0.05).into());
        ctx.set_line_width(1.0);
        ctx.stroke();

        ctx.set_fill_style(&"rgba(0, 212, 255, 0.6)".into());
        let _ = ctx.fill_text(&format!("{}%", i * 20), g.center_x, g.center_y - radius - 5.0);
    }

    // Axes, points and labels
    for (index, skill) in skills.iter().enumerate() {
        let angle = RadarGeometry::angle(index, count);
        let (end_x, end_y) = g.point(angle, g.max_radius);

        ctx.begin_path();
        ctx.move_to(g.center_x, g.center_y);
        ctx.line_to(end_x, end_y);
        ctx.set_stroke_style(&"rgba(0, 212, 255, 0.2)".into());
        ctx.set_line_width(1.0);
        ctx.stroke();

        let is_hovered = hovered == Some(index);
        let (data_x, data_y) = g.data_point(index, count, skill.level, progress);
        ctx.begin_path();
        let _ = ctx.arc(data_x, data_y, if is_hovered { 8.0 } else { 6.0 }, 0.0, TAU);
        ctx.set_fill_style(&skill.color.as_str().into());
        ctx.fill();
        if is_hovered {
            ctx.set_stroke_style(&skill.color.as_str().into());
            ctx.set_line_width(2.0);
            ctx.stroke();
        }

        let (label_x, label_y) = g.point(angle, g.max_radius + 20.0);
        let label_color = if is_hovered { skill.color.as_str() } else { "rgba(255, 255, 255, 0.8)" };
        ctx.set_fill_style(&label_color.into());
        ctx.set_font(if is_hovered { "bold 14px Inter" } else { "12px Inter" });
        ctx.set_text_align(if label_x > g.center_x { "left" } else { "right" });
        let _ = ctx.fill_text(&skill.skill, label_x, label_y);

        let animated_level = skill.level as f64 * progress;
        ctx.set_fill_style(&"rgba(255, 255, 255, 0.6)".into());
        ctx.set_font("10px Inter");
        let _ = ctx.fill_text(&format!("{}%", animated_level.round()), label_x, label_y + 15.0);
    }

    // Connecting polygon
    if count > 0 {
        ctx.begin_path();
        for (index, skill) in skills.iter().enumerate() {
            let (x, y) = g.data_point(index, count, skill.level, progress);
            if index == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.close_path();
        ctx.set_fill_style(&"rgba(0, 212, 255, 0.1)".into());
        ctx.fill();
        ctx.set_stroke_style(&"rgba(0, 212, 255, 0.5)".into());
        ctx.set_line_width(2.0);
        ctx.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radar(level: u8) -> RadarSkill {
        RadarSkill { level, ..Default::default() }
    }

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn test_geometry_for_default_canvas() {
        let g = RadarGeometry::new(400.0, 400.0);
        assert_eq!(g.center_x, 200.0);
        assert_eq!(g.max_radius, 160.0);
    }

    #[test]
    fn test_first_axis_points_up() {
        let g = RadarGeometry::new(400.0, 400.0);
        assert!(close(g.data_point(0, 4, 100, 1.0), (200.0, 40.0)));
        // second of four is at 3 o'clock
        assert!(close(g.data_point(1, 4, 50, 1.0), (280.0, 200.0)));
    }

    #[test]
    fn test_progress_scales_points() {
        let g = RadarGeometry::new(400.0, 400.0);
        assert!(close(g.data_point(0, 4, 100, 0.0), (200.0, 200.0)));
        assert!(close(g.data_point(0, 4, 100, 0.5), (200.0, 120.0)));
    }

    #[test]
    fn test_hit_test_picks_nearest_within_radius() {
        let g = RadarGeometry::new(400.0, 400.0);
        let skills = vec![radar(100), radar(50), radar(100), radar(100)];
        assert_eq!(g.hit_test(&skills, 205.0, 45.0), Some(0));
        assert_eq!(g.hit_test(&skills, 279.0, 201.0), Some(1));
        assert_eq!(g.hit_test(&skills, 200.0, 200.0), None);
        assert_eq!(g.hit_test(&[], 200.0, 40.0), None);
    }
}
