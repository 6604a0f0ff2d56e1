mod errors;
mod fields;
mod movie;
mod store;

pub use errors::CatalogError;
pub use fields::{join_list, parse_optional_text, parse_rating_list, parse_text_list, parse_year,
                 resolve_or_keep_previous};
pub use movie::MovieRecord;
pub use store::{InMemoryMovieStore, MovieStore};
