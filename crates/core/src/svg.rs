//! SVG renderer: converts `RenderCommand` lists into standalone SVG strings.

use std::fmt::Write as _;

use ghostleg_protocol::{RenderCommand, TextAlign, ThemeToken};

/// Render a list of commands as an SVG document string.
///
/// `width` and `height` define the SVG viewBox dimensions.
/// `dark` selects the color palette.
pub fn render_svg(commands: &[RenderCommand], width: f64, height: f64, dark: bool) -> String {
    let mut svg = String::with_capacity(commands.len() * 120);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:system-ui,-apple-system,sans-serif">"#,
    );

    for cmd in commands {
        match cmd {
            RenderCommand::Clear { color } => {
                let fill = resolve_color(*color, dark);
                let _ = write!(
                    svg,
                    r#"<rect width="{width}" height="{height}" fill="{fill}"/>"#,
                );
            }
            RenderCommand::DrawLine {
                from,
                to,
                color,
                width: line_width,
            } => {
                let stroke = resolve_color(*color, dark);
                let _ = write!(
                    svg,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="{line_width}" stroke-linecap="round"/>"#,
                    from.x, from.y, to.x, to.y,
                );
            }
            RenderCommand::DrawText {
                text,
                position,
                color,
                font_size,
                align,
            } => {
                let fill = resolve_color(*color, dark);
                let anchor = match align {
                    TextAlign::Left => "start",
                    TextAlign::Center => "middle",
                    TextAlign::Right => "end",
                };
                let _ = write!(
                    svg,
                    r#"<text x="{}" y="{}" fill="{fill}" font-size="{font_size}" text-anchor="{anchor}">{}</text>"#,
                    position.x,
                    position.y,
                    escape_xml(text),
                );
            }
            RenderCommand::BeginGroup { id, .. } => {
                let _ = write!(svg, r#"<g id="{}">"#, escape_xml(id));
            }
            RenderCommand::EndGroup => svg.push_str("</g>"),
        }
    }

    svg.push_str("</svg>");
    svg
}

fn resolve_color(token: ThemeToken, dark: bool) -> &'static str {
    if dark {
        match token {
            ThemeToken::Background => "#181818",
            ThemeToken::LaneLine | ThemeToken::RungLine => "#ececec",
            ThemeToken::LaneLabel => "#ececec",
            ThemeToken::PathTrace => "#f44336",
            ThemeToken::ResultLabel => "#ffd600",
        }
    } else {
        match token {
            ThemeToken::Background => "#ffffff",
            ThemeToken::LaneLine | ThemeToken::RungLine => "#000000",
            ThemeToken::LaneLabel => "#1a1a2e",
            ThemeToken::PathTrace => "#e63946",
            ThemeToken::ResultLabel => "#e67e22",
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghostleg_protocol::Point;

    #[test]
    fn basic_svg_output() {
        let commands = vec![
            RenderCommand::Clear {
                color: ThemeToken::Background,
            },
            RenderCommand::DrawLine {
                from: Point::new(50.0, 50.0),
                to: Point::new(50.0, 650.0),
                color: ThemeToken::PathTrace,
                width: 3.0,
            },
        ];
        let svg = render_svg(&commands, 400.0, 720.0, true);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r##"fill="#181818""##));
        assert!(svg.contains(r#"x1="50" y1="50" x2="50" y2="650""#));
        assert!(svg.contains("#f44336"));
    }

    #[test]
    fn centered_labels_are_escaped() {
        let commands = vec![RenderCommand::DrawText {
            position: Point::new(150.0, 670.0),
            text: "Tom & <Jerry>".into(),
            color: ThemeToken::LaneLabel,
            font_size: 16.0,
            align: TextAlign::Center,
        }];
        let svg = render_svg(&commands, 400.0, 720.0, false);
        assert!(svg.contains("Tom &amp; &lt;Jerry&gt;"));
        assert!(svg.contains(r#"text-anchor="middle""#));
    }

    #[test]
    fn groups_nest_their_lines() {
        let commands = vec![
            RenderCommand::BeginGroup {
                id: "rungs".into(),
                label: None,
            },
            RenderCommand::EndGroup,
        ];
        let svg = render_svg(&commands, 10.0, 10.0, false);
        assert!(svg.contains(r#"<g id="rungs"></g>"#));
    }
}
