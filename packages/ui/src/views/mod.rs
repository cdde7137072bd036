mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod recipe_grid;
pub use recipe_grid::RecipeGrid;

mod my_recipes;
pub use my_recipes::{RecipesPage, LOGGED_OUT_WELCOME, MY_RECIPES_EMPTY};

mod public_recipes;
pub use public_recipes::{CommunityPage, COMMUNITY_EMPTY};

mod search_results;
pub use search_results::{search_heading, SearchResultsPage, NO_RESULTS, SEARCH_SIGN_IN_HINT};

mod discover;
pub use discover::DiscoverPage;

mod navigation_bar;
pub use navigation_bar::{Brand, NavigationBar};

mod not_found;
pub use not_found::NotFoundView;
