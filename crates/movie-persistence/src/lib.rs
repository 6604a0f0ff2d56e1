//! Persistencia Diesel del catálogo de películas. Este crate expone el
//! módulo `schema` y el almacén Diesel que implementa el trait `MovieStore`
//! del dominio; la implementación detallada está en `movie_persistence.rs`.

mod movie_persistence;
pub mod schema;

#[cfg(not(feature = "pg"))]
pub use movie_persistence::new_sqlite_for_test;
pub use movie_persistence::{new_from_env, DieselMovieStore};
