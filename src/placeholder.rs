use serde::Deserialize;

pub const DEFAULT_WIDTH: u32 = 200;
pub const DEFAULT_HEIGHT: u32 = 120;
pub const MAX_DIMENSION: u32 = 2000;

/// Builds the image URL served by the placeholder route.
pub fn placeholder_url(width: u32, height: u32) -> String {
    format!("/placeholder.svg?height={height}&width={width}")
}

/// Query string of `/placeholder.svg`. Values stay textual so bad input
/// falls back to defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PlaceholderQuery {
    pub width: Option<String>,
    pub height: Option<String>,
}

impl PlaceholderQuery {
    pub fn dimensions(&self) -> (u32, u32) {
        (
            parse_dimension(self.width.as_deref(), DEFAULT_WIDTH),
            parse_dimension(self.height.as_deref(), DEFAULT_HEIGHT),
        )
    }
}

fn parse_dimension(value: Option<&str>, default: u32) -> u32 {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .map(|v| v.clamp(1, MAX_DIMENSION))
        .unwrap_or(default)
}

pub fn placeholder_svg(width: u32, height: u32) -> String {
    let icon = (width.min(height) / 4).max(8);
    let cx = width / 2;
    let cy = height / 2;
    format!(
        concat!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" fill="none">"##,
            r##"<rect width="{w}" height="{h}" fill="#EAEAEA" rx="3"/>"##,
            r##"<g opacity=".5"><circle cx="{cx}" cy="{cy}" r="{r}" fill="#FAFAFA"/>"##,
            r##"<path stroke="#C9C9C9" stroke-width="2" d="M{x0} {cy}h{icon}M{cx} {y0}v{icon}"/></g>"##,
            r##"</svg>"##
        ),
        w = width,
        h = height,
        cx = cx,
        cy = cy,
        r = icon,
        icon = icon,
        x0 = cx.saturating_sub(icon / 2),
        y0 = cy.saturating_sub(icon / 2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(width: Option<&str>, height: Option<&str>) -> PlaceholderQuery {
        PlaceholderQuery {
            width: width.map(str::to_string),
            height: height.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_dimensions_use_defaults() {
        assert_eq!(PlaceholderQuery::default().dimensions(), (200, 120));
        assert_eq!(query(Some("600"), None).dimensions(), (600, 120));
    }

    #[test]
    fn test_bad_dimensions_use_defaults() {
        assert_eq!(query(Some("wide"), Some("-4")).dimensions(), (200, 120));
        assert_eq!(query(Some(""), Some("1.5")).dimensions(), (200, 120));
    }

    #[test]
    fn test_dimensions_are_clamped() {
        assert_eq!(query(Some("0"), Some("99999")).dimensions(), (1, 2000));
        assert_eq!(query(Some(" 600 "), Some("400")).dimensions(), (600, 400));
    }

    #[test]
    fn test_svg_has_requested_size() {
        let svg = placeholder_svg(600, 400);
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"width="600" height="400""#));
        assert!(svg.contains(r#"viewBox="0 0 600 400""#));
    }

    #[test]
    fn test_tiny_svg_does_not_underflow() {
        let svg = placeholder_svg(1, 1);
        assert!(svg.contains(r#"r="8""#));
    }

    #[test]
    fn test_url_format() {
        assert_eq!(
            placeholder_url(200, 120),
            "/placeholder.svg?height=120&width=200"
        );
    }
}
