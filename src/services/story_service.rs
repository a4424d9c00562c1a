// ============================================================================
// STORY SERVICE - Cargar y pintar la lista de historias
// ============================================================================

use crate::dom::{append_child, get_element_by_id, set_inner_html, set_text_content, ElementBuilder};
use crate::error::{AppError, AppResult};
use crate::maps;
use crate::models::{Story, StoryFilter};
use crate::state::AppState;
use crate::views::story_card::render_story_card;

pub const STORY_LIST_ID: &str = "story-list";

/// `loadStories(location)`: descarga y pinta en `#story-list`.
/// Los errores se muestran inline, nunca se propagan.
pub async fn load_stories(state: &AppState, filter: StoryFilter) {
    let Some(container) = get_element_by_id(STORY_LIST_ID) else {
        log::warn!("⚠️ [STORIES] #{} no existe en la vista", STORY_LIST_ID);
        return;
    };

    let seq = state.stories.begin();
    set_inner_html(&container, "<p class=\"loading\">Memuat cerita...</p>");

    let result = fetch_stories(state, filter).await;
    if !state.stories.is_current(seq) {
        log::debug!("📚 [STORIES] Respuesta descartada (filtro {:?} ya no es el actual)", filter);
        return;
    }

    match result {
        Ok(stories) => {
            if let Err(e) = render_stories(&container, &stories) {
                log::error!("❌ [STORIES] Error pintando lista: {}", e);
            }
            maps::show_story_markers(&stories);
        }
        Err(e) => {
            log::error!("❌ [STORIES] {}", e);
            set_inner_html(&container, "");
            if let Ok(p) = ElementBuilder::new("p") {
                let p = p.class("error-message").build();
                set_text_content(&p, &format!("Gagal memuat cerita: {}", e.user_message()));
                let _ = append_child(&container, &p);
            }
        }
    }
}

async fn fetch_stories(state: &AppState, filter: StoryFilter) -> AppResult<Vec<Story>> {
    let token = state
        .auth
        .token()
        .ok_or_else(|| AppError::Api("Silakan login terlebih dahulu.".to_string()))?;
    state.api.get_stories(&token, filter).await
}

fn render_stories(container: &web_sys::Element, stories: &[Story]) -> AppResult<()> {
    set_inner_html(container, "");

    if stories.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("empty-message")
            .text("Belum ada cerita.")
            .build();
        return append_child(container, &empty);
    }

    for story in stories {
        append_child(container, &render_story_card(story)?)?;
    }
    Ok(())
}
