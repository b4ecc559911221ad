use std::f64::consts::PI;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::hooks::{guard, MotionError};
use crate::motion::easing::{staggered, Ease};
use crate::motion::progress::Progress;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strength {
    pub name: &'static str,
    pub level: u32,
    pub color: (u8, u8, u8),
}

const CELL: i32 = 170;
const HEIGHT: i32 = 210;
const RADIUS: i32 = 58;
const STROKE: u32 = 10;
const BACKGROUND: RGBColor = RGBColor(25, 42, 82);

fn arc_points(center: (i32, i32), radius: i32, sweep: f64) -> Vec<(i32, i32)> {
    let steps = ((sweep * 120.0).ceil() as usize).max(1);
    (0..=steps)
        .map(|step| {
            let angle = -PI / 2.0 + 2.0 * PI * sweep * step as f64 / steps as f64;
            (
                center.0 + (f64::from(radius) * angle.cos()).round() as i32,
                center.1 + (f64::from(radius) * angle.sin()).round() as i32,
            )
        })
        .collect()
}

fn draw_rings(
    canvas: HtmlCanvasElement,
    strengths: &[Strength],
    progress: Progress,
    stagger: f64,
) -> Result<(), MotionError> {
    let backend = CanvasBackend::with_canvas_object(canvas)
        .ok_or(MotionError::MissingElement("strength canvas context"))?;
    let root = backend.into_drawing_area();
    let plot = |e: DrawingAreaErrorKind<_>| MotionError::Js(e.to_string());

    root.fill(&BACKGROUND).map_err(plot)?;

    let center_text = ("sans-serif", 26)
        .into_font()
        .color(&WHITE)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let label_text = ("sans-serif", 15)
        .into_font()
        .color(&RGBColor(203, 213, 225))
        .pos(Pos::new(HPos::Center, VPos::Top));

    for (index, strength) in strengths.iter().enumerate() {
        let center = (CELL / 2 + CELL * index as i32, HEIGHT / 2 - 16);
        let (r, g, b) = strength.color;
        let color = RGBColor(r, g, b);
        let fill = Ease::Power2Out.apply(staggered(progress, index, strengths.len(), stagger));
        let level = f64::from(strength.level.min(100)) / 100.0;

        root.draw(&Circle::new(center, RADIUS, color.mix(0.2).stroke_width(STROKE)))
            .map_err(plot)?;
        if fill > 0.0 {
            root.draw(&PathElement::new(
                arc_points(center, RADIUS, level * fill),
                color.stroke_width(STROKE),
            ))
            .map_err(plot)?;
        }
        let shown = (f64::from(strength.level) * fill).round() as u32;
        root.draw(&Text::new(format!("{}%", shown), center, center_text.clone()))
            .map_err(plot)?;
        root.draw(&Text::new(
            strength.name,
            (center.0, center.1 + RADIUS + 18),
            label_text.clone(),
        ))
        .map_err(plot)?;
    }

    root.present().map_err(plot)?;
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct StrengthRingsProps {
    pub strengths: &'static [Strength],
    pub progress: Progress,
    /// Delay between rings as a fraction of one ring's fill time.
    #[prop_or(0.1)]
    pub stagger: f64,
}

#[function_component(StrengthRings)]
pub fn strength_rings(props: &StrengthRingsProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let strengths = props.strengths;
        let stagger = props.stagger;
        use_effect_with_deps(
            move |&progress| {
                let drawn = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .ok_or(MotionError::MissingElement("strength canvas"))
                    .and_then(|canvas| draw_rings(canvas, strengths, progress, stagger));
                guard("strength rings", drawn);
                || ()
            },
            props.progress,
        );
    }

    let width = CELL * props.strengths.len() as i32;
    html! {
        <canvas
            ref={canvas_ref}
            class="strength-rings"
            width={width.to_string()}
            height={HEIGHT.to_string()}
            aria-label={props
                .strengths
                .iter()
                .map(|s| format!("{} {}%", s.name, s.level))
                .collect::<Vec<_>>()
                .join(", ")}
            role="img"
            style="max-width: 100%; height: auto;"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_starts_at_twelve_o_clock() {
        let points = arc_points((100, 100), 50, 0.25);
        assert_eq!(points.first(), Some(&(100, 50)));
        assert_eq!(points.last(), Some(&(150, 100)));
    }
}
