// ============================================================================
// STORY CARD VIEW - Tarjeta de una historia en la lista
// ============================================================================

use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::error::AppResult;
use crate::models::Story;

/// Renderizar story card (todo el texto va por textContent)
pub fn render_story_card(story: &Story) -> AppResult<Element> {
    let card = ElementBuilder::new("article")?
        .class("story-item")
        .attr("data-id", &story.id)?
        .build();

    let photo = ElementBuilder::new("img")?
        .class("story-item__photo")
        .attr("src", &story.photo_url)?
        .attr("alt", &format!("Foto cerita oleh {}", story.name))?
        .attr("loading", "lazy")?
        .build();
    append_child(&card, &photo)?;

    let body = ElementBuilder::new("div")?
        .class("story-item__body")
        .child(ElementBuilder::new("h3")?.class("story-item__name").text(&story.name).build())?
        .child(
            ElementBuilder::new("time")?
                .class("story-item__date")
                .attr("datetime", &story.created_at)?
                .text(story.created_date())
                .build(),
        )?
        .child(
            ElementBuilder::new("p")?
                .class("story-item__description")
                .text(&story.description)
                .build(),
        )?
        .build();

    if let (Some(lat), Some(lon)) = (story.lat, story.lon) {
        let location = ElementBuilder::new("p")?
            .class("story-item__location")
            .text(&format!("📍 {:.4}, {:.4}", lat, lon))
            .build();
        append_child(&body, &location)?;
    }

    append_child(&card, &body)?;
    Ok(card)
}
