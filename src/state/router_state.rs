// ============================================================================
// ROUTER STATE - Estado transitorio de navegación (vida de la página)
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Contador de cargas asíncronas: solo la última puede escribir en el DOM
#[derive(Clone, Default)]
pub struct LoadSequence(Rc<Cell<u64>>);

impl LoadSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iniciar una nueva carga y devolver su número
    pub fn begin(&self) -> u64 {
        let next = self.0.get().wrapping_add(1);
        self.0.set(next);
        next
    }

    /// ¿Sigue siendo `seq` la carga más reciente?
    pub fn is_current(&self, seq: u64) -> bool {
        self.0.get() == seq
    }
}

#[derive(Clone, Default)]
pub struct RouterState {
    /// Hash completo al que volver tras el login
    redirect_to: Rc<RefCell<Option<String>>>,
    /// Secuencia de cargas de vista; solo la más reciente puede tocar el DOM
    loads: LoadSequence,
}

impl RouterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_redirect(&self, hash: String) {
        *self.redirect_to.borrow_mut() = Some(hash);
    }

    /// Consumir el destino pendiente (queda vacío)
    pub fn take_redirect(&self) -> Option<String> {
        self.redirect_to.borrow_mut().take()
    }

    pub fn peek_redirect(&self) -> Option<String> {
        self.redirect_to.borrow().clone()
    }

    pub fn begin_load(&self) -> u64 {
        self.loads.begin()
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.loads.is_current(seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_is_consumed_once() {
        let state = RouterState::new();
        assert_eq!(state.take_redirect(), None);

        state.set_redirect("#/profile?tab=notif".to_string());
        assert_eq!(state.peek_redirect().as_deref(), Some("#/profile?tab=notif"));
        assert_eq!(state.take_redirect().as_deref(), Some("#/profile?tab=notif"));
        assert_eq!(state.take_redirect(), None);
    }

    #[test]
    fn newer_load_invalidates_older_one() {
        let state = RouterState::new();
        let first = state.begin_load();
        assert!(state.is_current(first));

        let second = state.begin_load();
        assert!(!state.is_current(first));
        assert!(state.is_current(second));
    }

    #[test]
    fn clones_share_state() {
        let state = RouterState::new();
        let clone = state.clone();
        clone.set_redirect("#/add-story".to_string());
        let seq = clone.begin_load();
        assert_eq!(state.take_redirect().as_deref(), Some("#/add-story"));
        assert!(state.is_current(seq));
    }

    #[test]
    fn out_of_order_story_responses_keep_only_latest_filter() {
        let stories = LoadSequence::new();
        let location_click = stories.begin();
        let all_click = stories.begin();

        // La respuesta de "all" llega primero, luego la de "location"
        assert!(stories.is_current(all_click));
        assert!(!stories.is_current(location_click));
    }

    #[test]
    fn story_sequence_is_independent_of_view_loads() {
        let router = RouterState::new();
        let stories = LoadSequence::new();

        let view = router.begin_load();
        let list = stories.begin();
        stories.begin();

        assert!(router.is_current(view));
        assert!(!stories.is_current(list));
    }
}
