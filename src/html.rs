use crate::gallery::{CardView, PlayControl, Preview};

/// Render cards to a standalone HTML page.
///
/// Styling is inline so the page needs nothing besides the image and audio
/// files it links to. Play buttons carry their audio locator in `data-audio`
/// for whatever script hosts the page; cards without audio get no button.
pub fn to_html(cards: &[CardView]) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"en\">\n");
    html.push_str("<head>\n");
    html.push_str("  <meta charset=\"utf-8\">\n");
    html.push_str("  <title>GridKey</title>\n");
    html.push_str("</head>\n");
    html.push_str(
        "<body style=\"margin: 0; min-height: 100vh; background-color: #f8fafc; padding: 20px; color: #0f172a; font-family: sans-serif;\">\n",
    );

    html.push_str(
        "  <header style=\"max-width: 1152px; margin: 0 auto; padding: 20px 0; border-bottom: 1px solid #e2e8f0; font-weight: bold; font-size: 20px;\">GridKey</header>\n",
    );

    html.push_str("  <main style=\"max-width: 1152px; margin: 40px auto 80px;\">\n");
    html.push_str("    <div style=\"text-align: center; margin-bottom: 40px;\">\n");
    html.push_str(
        "      <h1 style=\"font-size: 36px; font-weight: 800; margin-bottom: 16px;\">Compositional <span style=\"color: #2563eb;\">Building Blocks</span></h1>\n",
    );
    html.push_str(
        "      <p style=\"color: #64748b; font-size: 18px;\">A curated collection of tonal centers for rapid prototyping.</p>\n",
    );
    html.push_str("    </div>\n");
    html.push_str(
        "    <div style=\"display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 32px;\">\n",
    );

    for card in cards {
        html.push_str(&card_to_html(card));
    }

    html.push_str("    </div>\n");
    html.push_str("  </main>\n");
    html.push_str("</body>\n");
    html.push_str("</html>\n");

    html
}

fn card_to_html(card: &CardView) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        "      <article id=\"{}\" style=\"border: 1px solid #e2e8f0; border-radius: 16px; overflow: hidden; background-color: white; display: flex; flex-direction: column;\">\n",
        escape_html(&card.id)
    ));

    // Header
    html.push_str("        <div style=\"padding: 20px; border-bottom: 1px solid #f8fafc;\">\n");
    html.push_str(&format!(
        "          <div style=\"margin-bottom: 8px;\">{}{}</div>\n",
        badge(&card.key_signature, "#eff6ff", "#1d4ed8"),
        badge(card.motif_type, "#f1f5f9", "#475569"),
    ));
    html.push_str(&format!(
        "          <h3 style=\"font-size: 18px; font-weight: bold; margin: 0; color: #1e293b;\">{}</h3>\n",
        escape_html(&card.id)
    ));
    html.push_str("        </div>\n");

    // Preview and play button
    html.push_str(
        "        <div style=\"height: 192px; background-color: #f8fafc; position: relative; display: flex; align-items: center; justify-content: center;\">\n",
    );
    match &card.preview {
        Preview::Image(src) => html.push_str(&format!(
            "          <img src=\"{}\" alt=\"Score for {}\" style=\"width: 100%; height: 100%; object-fit: contain;\">\n",
            escape_html(src),
            escape_html(&card.id)
        )),
        Preview::Placeholder => html.push_str(
            "          <div style=\"color: #cbd5e1; text-align: center; font-size: 12px;\">NO PREVIEW</div>\n",
        ),
    }
    if let Some(audio) = &card.audio {
        let (label, background, color) = match card.play {
            PlayControl::Pause => ("Pause", "#2563eb", "white"),
            _ => ("Play", "white", "#1e293b"),
        };
        html.push_str(&format!(
            "          <button type=\"button\" data-audio=\"{}\" aria-pressed=\"{}\" style=\"position: absolute; bottom: 16px; right: 16px; width: 48px; height: 48px; border-radius: 50%; border: none; background-color: {}; color: {}; cursor: pointer;\">{}</button>\n",
            escape_html(audio),
            card.is_playing(),
            background,
            color,
            label
        ));
    }
    html.push_str("        </div>\n");

    // Details
    html.push_str("        <div style=\"padding: 20px; flex-grow: 1;\">\n");
    html.push_str(&field("Character", &card.character, "inherit"));
    html.push_str(&field("Suggestion", &card.suggestion, "#2563eb"));
    if let Some(constraint) = &card.constraint {
        html.push_str(&field("Constraint", constraint, "inherit"));
    }
    html.push_str("        </div>\n");

    html.push_str("      </article>\n");
    html
}

fn badge(text: &str, background: &str, color: &str) -> String {
    format!(
        "<span style=\"padding: 4px 10px; border-radius: 9999px; font-size: 11px; font-weight: 600; text-transform: uppercase; margin-right: 5px; background-color: {}; color: {};\">{}</span>",
        background,
        color,
        escape_html(text)
    )
}

fn field(label: &str, value: &str, color: &str) -> String {
    format!(
        "          <div style=\"margin-bottom: 12px;\"><span style=\"font-size: 10px; text-transform: uppercase; color: #94a3b8; font-weight: bold; display: block; margin-bottom: 4px;\">{}</span><p style=\"font-size: 14px; font-weight: 500; margin: 0; color: {};\">{}</p></div>\n",
        label,
        color,
        escape_html(value)
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::gallery::gallery_cards;

    #[test]
    fn test_page_frame() {
        let html = to_html(&[]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>GridKey</title>"));
        assert!(html.contains("Building Blocks"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_one_article_per_card() {
        let catalog = Catalog::builtin();
        let html = to_html(&gallery_cards(&catalog, None));
        assert_eq!(html.matches("<article").count(), catalog.len());
    }

    #[test]
    fn test_card_order_preserved() {
        let catalog = Catalog::builtin();
        let html = to_html(&gallery_cards(&catalog, None));
        let first = html.find("id=\"GK-CM-FREE\"").unwrap();
        let second = html.find("id=\"GK-CM-STEP\"").unwrap();
        let last = html.find("id=\"C Minor Example\"").unwrap();
        assert!(first < second && second < last);
    }

    #[test]
    fn test_image_and_placeholder() {
        let catalog = Catalog::builtin();
        let html = to_html(&gallery_cards(&catalog, None));
        assert!(html.contains("<img src=\"/images/CM%20FREE.png\" alt=\"Score for GK-CM-FREE\""));
        // Only the example card lacks an image
        assert_eq!(html.matches("NO PREVIEW").count(), 1);
    }

    #[test]
    fn test_playing_button_state() {
        let catalog = Catalog::builtin();
        let playing = catalog.get("GK-FM-FREE").unwrap().audio.clone();
        let html = to_html(&gallery_cards(&catalog, playing.as_ref()));

        assert!(html.contains("data-audio=\"/audio/FM%20FREE.mp3\" aria-pressed=\"true\""));
        assert_eq!(html.matches("aria-pressed=\"true\"").count(), 1);
        assert_eq!(html.matches(">Pause</button>").count(), 1);
    }

    #[test]
    fn test_no_button_without_audio() {
        let catalog = Catalog::from_yaml(
            "motifs:\n  - { id: Silent, key-signature: C Major, type: Free, image-file: s.png }\n",
        )
        .unwrap();
        let html = to_html(&gallery_cards(&catalog, None));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn test_constraint_only_when_present() {
        let catalog = Catalog::builtin();
        let cards = gallery_cards(&catalog, None);
        let html = to_html(&cards);
        let with_constraint = cards.iter().filter(|c| c.constraint.is_some()).count();
        assert_eq!(html.matches(">Constraint</span>").count(), with_constraint);
    }

    #[test]
    fn test_escapes_text() {
        assert_eq!(
            escape_html("<b>\"Tom's\" & co</b>"),
            "&lt;b&gt;&quot;Tom&#39;s&quot; &amp; co&lt;/b&gt;"
        );
        let catalog = Catalog::from_yaml(
            "motifs:\n  - id: \"<X&Y>\"\n    key-signature: C Major\n    type: Free\n",
        )
        .unwrap();
        let html = to_html(&gallery_cards(&catalog, None));
        assert!(html.contains("&lt;X&amp;Y&gt;"));
        assert!(!html.contains("<X&Y>"));
    }
}
