//! Minimal SVG document writer.
//!
//! Emits the canvas header, a title, filled polygons and `<g>` groups, in
//! exactly the order they are called.

use std::io;

use layout::palette::Rgb;

use crate::isometric::Polygon;
use crate::render_error::RenderError;
use crate::scene::Scene;

pub struct SvgCanvas<W: std::fmt::Write> {
    out: W,
}

impl<W: std::fmt::Write> SvgCanvas<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn start(&mut self, width: i32, height: i32) -> std::fmt::Result {
        writeln!(self.out, r#"<?xml version="1.0"?>"#)?;
        writeln!(
            self.out,
            r#"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">"#
        )
    }

    pub fn title(&mut self, title: &str) -> std::fmt::Result {
        writeln!(self.out, "<title>{}</title>", escape_xml(title))
    }

    pub fn group_start(&mut self, id: &str) -> std::fmt::Result {
        writeln!(self.out, r#"<g id="{}">"#, escape_xml(id))
    }

    pub fn group_end(&mut self) -> std::fmt::Result {
        writeln!(self.out, "</g>")
    }

    pub fn polygon(&mut self, polygon: &Polygon) -> std::fmt::Result {
        write!(self.out, r#"<polygon points=""#)?;
        for (i, p) in polygon.points.iter().enumerate() {
            if i > 0 {
                self.out.write_char(' ')?;
            }
            write!(self.out, "{},{}", p.x, p.y)?;
        }
        writeln!(self.out, r#"" style="{}"/>"#, fill_style(polygon.fill))
    }

    pub fn end(&mut self) -> std::fmt::Result {
        writeln!(self.out, "</svg>")
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn fill_style(color: Rgb) -> String {
    format!("fill:{color}")
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Renders the whole scene as an SVG document.
pub fn render_svg(scene: &Scene) -> Result<String, RenderError> {
    let mut canvas = SvgCanvas::new(String::new());
    canvas.start(scene.width, scene.height)?;
    canvas.title(&scene.title)?;
    canvas.polygon(&scene.ground)?;
    for group in &scene.groups {
        canvas.group_start(&group.id)?;
        for face in group.faces.polygons() {
            canvas.polygon(face)?;
        }
        canvas.group_end()?;
    }
    canvas.end()?;
    Ok(canvas.into_inner())
}

/// Renders the scene and writes it to `out`.
pub fn write_svg<O: io::Write>(scene: &Scene, out: &mut O) -> Result<(), RenderError> {
    let doc = render_svg(scene)?;
    out.write_all(doc.as_bytes())?;
    out.flush()?;
    Ok(())
}
