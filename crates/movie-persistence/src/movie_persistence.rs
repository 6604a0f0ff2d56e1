use crate::schema;
use crate::schema::movies::dsl as movies_dsl;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::result::Error as DieselError;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use movie_domain::{CatalogError, MovieRecord, MovieStore};
use std::sync::Arc;
use uuid::Uuid;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

#[cfg(all(feature = "pg", not(test)))]
type DbPool = Pool<ConnectionManager<PgConnection>>;
#[cfg(any(test, not(feature = "pg")))]
type DbPool = Pool<ConnectionManager<SqliteConnection>>;
#[cfg(all(feature = "pg", not(test)))]
type DbConn = PgConnection;
#[cfg(any(test, not(feature = "pg")))]
type DbConn = SqliteConnection;

/// Almacén Diesel que implementa `MovieStore`.
pub struct DieselMovieStore {
  pool: Arc<DbPool>,
}

impl DieselMovieStore {
  pub fn new(database_url: &str) -> Result<Self, CatalogError> {
    #[cfg(any(test, not(feature = "pg")))]
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    #[cfg(all(feature = "pg", not(test)))]
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder().max_size(4)
                              .build(manager)
                              .map_err(|e| CatalogError::StorageError(format!("pool: {}", e)))?;
    let store = DieselMovieStore { pool: Arc::new(pool) };
    {
      let mut conn = store.conn()?;
      #[cfg(any(test, not(feature = "pg")))]
      {
        let _ = diesel::sql_query("PRAGMA journal_mode = WAL;").execute(&mut conn);
        let _ = diesel::sql_query("PRAGMA busy_timeout = 5000;").execute(&mut conn);
      }
      conn.run_pending_migrations(MIGRATIONS)
          .map_err(|e| CatalogError::StorageError(format!("migrations: {}", e)))?;
    }
    log::debug!("movie store ready at {}", database_url);
    Ok(store)
  }

  fn conn_raw(&self) -> std::result::Result<PooledConnection<ConnectionManager<DbConn>>, r2d2::Error> {
    self.pool.get()
  }

  fn conn(&self) -> Result<PooledConnection<ConnectionManager<DbConn>>, CatalogError> {
    self.conn_raw().map_err(|e| CatalogError::StorageError(format!("pool: {}", e)))
  }
}

#[derive(Debug, Queryable, Insertable, AsChangeset)]
#[diesel(table_name = schema::movies)]
#[diesel(treat_none_as_null = true)]
struct MovieRow {
  pub id: String,
  pub title: String,
  pub director: Option<String>,
  pub release_year: Option<i32>,
  pub genres: String,
  pub ratings: String,
  pub cast_members: String,
}

fn map_db_err<T>(res: std::result::Result<T, DieselError>) -> Result<T, CatalogError> {
  res.map_err(|e| CatalogError::StorageError(format!("db: {}", e)))
}

fn map_json_err(e: serde_json::Error) -> CatalogError {
  CatalogError::StorageError(format!("json: {}", e))
}

fn to_row(record: &MovieRecord) -> Result<MovieRow, CatalogError> {
  Ok(MovieRow { id: record.id().to_string(),
                title: record.title().to_string(),
                director: record.director().map(|s| s.to_string()),
                release_year: record.release_year(),
                genres: serde_json::to_string(record.genres()).map_err(map_json_err)?,
                ratings: serde_json::to_string(record.ratings()).map_err(map_json_err)?,
                cast_members: serde_json::to_string(record.cast()).map_err(map_json_err)? })
}

fn from_row(row: MovieRow) -> Result<MovieRecord, CatalogError> {
  let id = Uuid::parse_str(&row.id).map_err(|e| CatalogError::StorageError(format!("invalid uuid: {}", e)))?;
  // La ausencia en campos de lista siempre es la lista vacía, nunca null
  let genres: Vec<String> = serde_json::from_str(&row.genres).unwrap_or_default();
  let ratings: Vec<f64> = serde_json::from_str(&row.ratings).unwrap_or_default();
  let cast: Vec<String> = serde_json::from_str(&row.cast_members).unwrap_or_default();
  MovieRecord::from_parts(id, &row.title, row.director, row.release_year, genres, ratings, cast)
}

impl MovieStore for DieselMovieStore {
  fn find_all(&self) -> Result<Vec<MovieRecord>, CatalogError> {
    let mut conn = self.conn()?;
    let rows = map_db_err(movies_dsl::movies.load::<MovieRow>(&mut conn))?;
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
      out.push(from_row(row)?);
    }
    Ok(out)
  }

  fn find_by_title(&self, title: &str) -> Result<Option<MovieRecord>, CatalogError> {
    let mut conn = self.conn()?;
    let opt = map_db_err(movies_dsl::movies.filter(movies_dsl::title.eq(title))
                                           .first::<MovieRow>(&mut conn)
                                           .optional())?;
    opt.map(from_row).transpose()
  }

  fn insert(&self, record: MovieRecord) -> Result<Uuid, CatalogError> {
    let mut conn = self.conn()?;
    let row = to_row(&record)?;
    map_db_err(diesel::insert_into(schema::movies::table).values(&row).execute(&mut conn))?;
    Ok(record.id())
  }

  fn save(&self, record: &MovieRecord) -> Result<(), CatalogError> {
    let mut conn = self.conn()?;
    let row = to_row(record)?;
    let id_s = record.id().to_string();
    let updated =
      map_db_err(diesel::update(movies_dsl::movies.filter(movies_dsl::id.eq(&id_s))).set(&row).execute(&mut conn))?;
    if updated == 0 {
      return Err(CatalogError::StorageError(format!("record {} no longer exists", id_s)));
    }
    Ok(())
  }

  fn delete_by_title(&self, title: &str) -> Result<usize, CatalogError> {
    let mut conn = self.conn()?;
    // Los títulos no son únicos: borrar sólo la primera coincidencia
    let first = map_db_err(movies_dsl::movies.filter(movies_dsl::title.eq(title))
                                             .select(movies_dsl::id)
                                             .first::<String>(&mut conn)
                                             .optional())?;
    match first {
      Some(id_s) => map_db_err(diesel::delete(movies_dsl::movies.filter(movies_dsl::id.eq(&id_s))).execute(&mut conn)),
      None => Ok(0),
    }
  }
}

/// Crea el almacén desde variables de entorno: `MOVIE_DB_URL` con
/// `DATABASE_URL` como alternativa. Sin la feature `pg` el valor por defecto
/// es un fichero SQLite local (herramienta de un solo operador).
#[cfg(all(feature = "pg", not(test)))]
pub fn new_from_env() -> Result<DieselMovieStore, CatalogError> {
  dotenvy::dotenv().ok();
  let url = std::env::var("MOVIE_DB_URL").or_else(|_| std::env::var("DATABASE_URL"))
                                         .map_err(|_| CatalogError::StorageError("MOVIE_DB_URL / DATABASE_URL not set".into()))?;
  if !(url.starts_with("postgres") || url.starts_with("postgresql://") || url.contains('@')) {
    return Err(CatalogError::StorageError("movie-persistence: MOVIE_DB_URL does not look like Postgres URL".into()));
  }
  DieselMovieStore::new(&url)
}

#[cfg(test)]
pub fn new_from_env() -> Result<DieselMovieStore, CatalogError> {
  dotenvy::dotenv().ok();
  let url = std::env::var("MOVIE_DB_URL").unwrap_or_else(|_| "file:moviedb?mode=memory&cache=shared".into());
  DieselMovieStore::new(&url)
}

#[cfg(all(not(feature = "pg"), not(test)))]
pub fn new_from_env() -> Result<DieselMovieStore, CatalogError> {
  dotenvy::dotenv().ok();
  let url = std::env::var("MOVIE_DB_URL").or_else(|_| std::env::var("DATABASE_URL"))
                                         .unwrap_or_else(|_| "movie_catalog.db".into());
  DieselMovieStore::new(&url)
}

// Test helper: construct a DieselMovieStore backed by an explicit SQLite
// database path, bypassing environment parsing.
#[cfg(not(feature = "pg"))]
pub fn new_sqlite_for_test(database_url: &str) -> Result<DieselMovieStore, CatalogError> {
  DieselMovieStore::new(database_url)
}
