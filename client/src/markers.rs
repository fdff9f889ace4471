use circuit_map_shared::Track;
use circuit_map_shared::colors::{contrast_text, marker_background, rgba_css};

pub const ICON_SIZE: f64 = 40.0;

/// Escape text for interpolation into HTML handed to Leaflet.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Rounded pill with the rank label, tinted with the track accent.
pub fn marker_icon_html(label: &str, accent: Option<&str>) -> String {
    let (r, g, b) = marker_background(accent);
    let fg = contrast_text((r, g, b));
    let bg = rgba_css(r, g, b, 1.0);
    format!(
        r#"<span style="display:flex;align-items:center;justify-content:center;width:2.5rem;height:2.5rem;border-radius:0.8rem;background:{bg};color:{fg};font-weight:700;font-size:0.9rem;box-shadow:0 10px 25px rgba(15,23,42,0.25);border:2px solid rgba(255,255,255,0.9);">{}</span>"#,
        escape_html(label)
    )
}

/// Popup body: optional image (placeholder otherwise), rank eyebrow, title,
/// location and description.
pub fn popup_html(track: &Track, rank: &str) -> String {
    let title = escape_html(track.title);
    let media = match track.image {
        Some(src) => format!(
            r#"<div class="popup__media"><img src="{}" alt="{title} overview" loading="lazy" /></div>"#,
            escape_html(src)
        ),
        None => r#"<div class="popup__placeholder" aria-hidden="true"></div>"#.to_string(),
    };
    format!(
        r#"<div class="popup">{media}<p class="popup__eyebrow">{} Favourite</p><h2 class="popup__title">{title}</h2><p class="popup__meta">{}</p><p class="popup__description">{}</p></div>"#,
        escape_html(rank),
        escape_html(track.location),
        escape_html(track.description),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use circuit_map_shared::{TRACKS, find_track};

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"Wall" & 'co'</b>"#),
            "&lt;b&gt;&quot;Wall&quot; &amp; &#39;co&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("Île Notre-Dame"), "Île Notre-Dame");
    }

    #[test]
    fn icon_uses_accent_and_label() {
        let html = marker_icon_html("#3", Some("#34d399"));
        assert!(html.contains("background:rgba(52,211,153,1)"));
        assert!(html.contains("color:#0f172a"));
        assert!(html.ends_with(">#3</span>"));
    }

    #[test]
    fn icon_without_accent_is_slate_with_white_text() {
        let html = marker_icon_html("#1", None);
        assert!(html.contains("background:rgba(15,23,42,1)"));
        assert!(html.contains("color:#ffffff"));
    }

    #[test]
    fn popup_shows_placeholder_without_image() {
        let monza = find_track(TRACKS, "monza").unwrap();
        let html = popup_html(monza, "#3");
        assert!(html.contains("popup__placeholder"));
        assert!(html.contains("#3 Favourite"));
        assert!(html.contains("Autodromo Nazionale Monza"));
        assert!(html.contains("Monza, Italy"));
        assert!(html.contains("&quot;The Temple of Speed&quot;"));
    }

    #[test]
    fn popup_renders_image_when_present() {
        let track = Track {
            image: Some("/img/spa.jpg"),
            ..TRACKS[0].clone()
        };
        let html = popup_html(&track, "#1");
        assert!(html.contains(r#"<img src="/img/spa.jpg" alt="Circuit de Monaco overview""#));
        assert!(!html.contains("popup__placeholder"));
    }
}
