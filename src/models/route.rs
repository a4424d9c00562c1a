// ============================================================================
// ROUTE - Mapeo hash de la URL -> vista
// ============================================================================

use crate::utils::html::capitalize_first;

/// Vistas que existen como fragmento HTML en `views/`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    StoryList,
    AddStory,
    About,
    Login,
    Register,
    Profile,
}

impl View {
    /// Nombre del fragmento (`views/<name>.html`)
    pub fn name(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::StoryList => "story-list",
            View::AddStory => "add-story",
            View::About => "about",
            View::Login => "login",
            View::Register => "register",
            View::Profile => "profile",
        }
    }

    /// Título del documento: "Story-list | Dicoding Story"
    pub fn title(&self, app_title: &str) -> String {
        format!("{} | {}", capitalize_first(self.name()), app_title)
    }
}

/// Resultado de parsear el hash actual
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    View(View),
    Logout,
}

pub const HOME_HASH: &str = "#/";
pub const LOGIN_HASH: &str = "#/login";
pub const STORY_LIST_HASH: &str = "#/story-list";

/// Rutas que requieren token
pub const PROTECTED_ROUTES: &[&str] = &["#/story-list", "#/add-story", "#/profile"];

/// Hash sin query string: "#/story-list?x=1" -> "#/story-list". Hash vacío -> "#/"
pub fn route_path(hash: &str) -> &str {
    let hash = if hash.is_empty() { HOME_HASH } else { hash };
    hash.split('?').next().unwrap_or(HOME_HASH)
}

pub fn is_protected(hash: &str) -> bool {
    PROTECTED_ROUTES.contains(&route_path(hash))
}

impl Route {
    pub fn parse(hash: &str) -> Route {
        let view = match route_path(hash) {
            "#/" => View::Home,
            "#/story-list" => View::StoryList,
            "#/add-story" => View::AddStory,
            "#/about" => View::About,
            "#/login" => View::Login,
            "#/register" => View::Register,
            "#/profile" => View::Profile,
            "#/logout" => return Route::Logout,
            _ => View::Home,
        };
        Route::View(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_route() {
        let cases = [
            ("#/", View::Home),
            ("#/story-list", View::StoryList),
            ("#/add-story", View::AddStory),
            ("#/about", View::About),
            ("#/login", View::Login),
            ("#/register", View::Register),
            ("#/profile", View::Profile),
        ];
        for (hash, view) in cases {
            assert_eq!(Route::parse(hash), Route::View(view), "hash {}", hash);
        }
        assert_eq!(Route::parse("#/logout"), Route::Logout);
    }

    #[test]
    fn empty_and_unknown_hashes_fall_back_to_home() {
        assert_eq!(Route::parse(""), Route::View(View::Home));
        assert_eq!(Route::parse("#/nope"), Route::View(View::Home));
        assert_eq!(Route::parse("#"), Route::View(View::Home));
    }

    #[test]
    fn query_string_is_ignored_for_matching() {
        assert_eq!(Route::parse("#/story-list?page=2"), Route::View(View::StoryList));
        assert_eq!(route_path("#/profile?tab=notif"), "#/profile");
    }

    #[test]
    fn only_story_routes_and_profile_are_protected() {
        assert!(is_protected("#/story-list"));
        assert!(is_protected("#/add-story?draft=1"));
        assert!(is_protected("#/profile"));
        assert!(!is_protected("#/"));
        assert!(!is_protected(""));
        assert!(!is_protected("#/login"));
        assert!(!is_protected("#/about"));
    }

    #[test]
    fn title_capitalizes_view_name() {
        assert_eq!(View::StoryList.title("Dicoding Story"), "Story-list | Dicoding Story");
        assert_eq!(View::Home.title("Dicoding Story"), "Home | Dicoding Story");
    }
}
