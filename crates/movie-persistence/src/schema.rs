// Esquema Diesel de la tabla de películas. Las columnas de lista (genres,
// ratings, cast_members) se guardan como texto JSON; `cast_members` evita la
// palabra reservada CAST de SQL.
diesel::table! {
  movies (id) {
    id -> Text,
    title -> Text,
    director -> Nullable<Text>,
    release_year -> Nullable<Integer>,
    genres -> Text,
    ratings -> Text,
    cast_members -> Text,
  }
}
