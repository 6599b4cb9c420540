//! Shared building blocks for the movie search page.

mod search_input;
pub use search_input::SearchInput;

mod loader;
pub use loader::Loader;

mod movie_card;
pub use movie_card::MovieCard;

mod pagination;
pub use pagination::Pagination;

mod trending_list;
pub use trending_list::TrendingList;
