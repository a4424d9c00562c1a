// ============================================================================
// VIEWS - Cableado posterior a la carga de cada fragmento
// ============================================================================

pub mod story_card;
pub mod story_list;
pub mod add_story;
pub mod login;
pub mod register;
pub mod profile;

use crate::error::AppResult;
use crate::models::View;
use crate::state::AppState;

/// Enlazar el comportamiento propio de la vista recién inyectada
pub fn wire_view(view: View, state: &AppState) -> AppResult<()> {
    match view {
        View::StoryList => story_list::wire(state),
        View::AddStory => add_story::wire(state),
        View::Login => login::wire(state),
        View::Register => register::wire(state),
        View::Profile => profile::wire(state),
        View::Home | View::About => Ok(()),
    }
}
