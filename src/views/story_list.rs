// ============================================================================
// STORY LIST VIEW - Mapa + lista + filtros
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{add_class, get_element_by_id, on_click, remove_class};
use crate::error::AppResult;
use crate::maps;
use crate::models::StoryFilter;
use crate::services::story_service::load_stories;
use crate::state::AppState;
use crate::utils::constants::ACTIVE_CLASS;

const FILTER_ALL_ID: &str = "filter-all";
const FILTER_LOCATION_ID: &str = "filter-location";

fn set_active_button(active: &Element, inactive: &Element) {
    let _ = add_class(active, ACTIVE_CLASS);
    let _ = remove_class(inactive, ACTIVE_CLASS);
}

fn reload(state: &AppState, filter: StoryFilter) {
    let state = state.clone();
    spawn_local(async move {
        load_stories(&state, filter).await;
    });
}

pub fn wire(state: &AppState) -> AppResult<()> {
    maps::init_map(&state.config.map_config);
    reload(state, StoryFilter::All);

    let (Some(all_btn), Some(location_btn)) = (
        get_element_by_id(FILTER_ALL_ID),
        get_element_by_id(FILTER_LOCATION_ID),
    ) else {
        log::debug!("🔎 [STORY-LIST] Vista sin botones de filtro");
        return Ok(());
    };

    {
        let state = state.clone();
        let (active, inactive) = (all_btn.clone(), location_btn.clone());
        on_click(&all_btn, move |_| {
            reload(&state, StoryFilter::All);
            set_active_button(&active, &inactive);
        })?;
    }
    {
        let state = state.clone();
        let (active, inactive) = (location_btn.clone(), all_btn.clone());
        on_click(&location_btn, move |_| {
            reload(&state, StoryFilter::WithLocation);
            set_active_button(&active, &inactive);
        })?;
    }
    Ok(())
}
