// Archivo: ops.rs
// Las cuatro operaciones sobre registros (listar, alta, edición, borrado)
// construidas sobre la coerción de campos y el `MovieStore`. Los errores de
// validación se informan en una línea y la operación termina sin persistir
// nada; los fallos del almacén se propagan con `?` (fatales por diseño).
use crate::Console;
use colored::Colorize;
use movie_domain::{join_list, parse_optional_text, parse_rating_list, parse_text_list, parse_year,
                   resolve_or_keep_previous, CatalogError, MovieRecord, MovieStore};

const NOT_FOUND: &str = "Movie not found. Please check spelling and try again.";

fn report_validation(console: &mut dyn Console, err: &CatalogError) {
    console.say(&format!("\n{}\n", err.to_string().red()));
}

pub fn list_movies(store: &dyn MovieStore, console: &mut dyn Console) -> Result<(), CatalogError> {
    let movies = store.find_all()?;
    log::debug!("listing {} movies", movies.len());
    console.say(&format!("\n{}\n", "All movies:".yellow()));
    for movie in movies {
        console.say(&format!("{} {}", "Title:".green(), movie.title()));
        console.say(&format!("{} {}", "Director:".green(), movie.director().unwrap_or("-")));
        let year = movie.release_year().map(|y| y.to_string()).unwrap_or_else(|| "-".into());
        console.say(&format!("{} {}", "Release Year:".green(), year));
        console.say(&format!("{} {}", "Genres:".green(), join_list(movie.genres())));
        console.say(&format!("{} {}", "Ratings:".green(), join_list(movie.ratings())));
        console.say(&format!("{} {}\n", "Cast:".green(), join_list(movie.cast())));
    }
    Ok(())
}

pub fn add_movie(store: &dyn MovieStore, console: &mut dyn Console) -> Result<(), CatalogError> {
    console.say("");
    let title = console.prompt(&format!("{} ", "Enter movie title:".cyan()))?;
    let director_raw = console.prompt(&format!("{} ", "Enter movie director:".cyan()))?;
    let year_raw = console.prompt(&format!("{} ",
                                           "Enter movie release year (optional, press 'Enter' to skip):".cyan()))?;
    let genres_raw = console.prompt(&format!("{} ",
                                             "Enter movie genres separated by commas (optional, press 'Enter' to skip):".cyan()))?;
    let ratings_raw = console.prompt(&format!("{} ",
                                              "Enter movie ratings with a decimal point '.' separated by commas (optional, press 'Enter' to skip):".cyan()))?;
    let cast_raw = console.prompt(&format!("{} ",
                                           "Enter movie cast separated by commas (optional, press 'Enter' to skip):".cyan()))?;

    let release_year = match parse_year(&year_raw) {
        Ok(year) => year,
        Err(e) => {
            report_validation(console, &e);
            return Ok(());
        }
    };
    let ratings = match parse_rating_list(&ratings_raw) {
        Ok(ratings) => ratings,
        Err(e) => {
            report_validation(console, &e);
            return Ok(());
        }
    };
    let record = match MovieRecord::new(&title,
                                        parse_optional_text(&director_raw),
                                        release_year,
                                        parse_text_list(&genres_raw),
                                        ratings,
                                        parse_text_list(&cast_raw)) {
        Ok(record) => record,
        Err(e @ CatalogError::ValidationError(_)) => {
            report_validation(console, &e);
            return Ok(());
        }
        Err(e) => return Err(e),
    };
    let id = store.insert(record)?;
    log::debug!("inserted movie {}", id);
    console.say(&format!("\n{}\n", "New movie added successfully.".green()));
    Ok(())
}

pub fn update_movie(store: &dyn MovieStore, console: &mut dyn Console) -> Result<(), CatalogError> {
    let title = console.prompt(&format!("{} ",
                                        "Enter the title of the movie you want to update:".magenta()))?;
    let mut movie = match store.find_by_title(&title)? {
        Some(movie) => movie,
        None => {
            console.say(&format!("\n{}\n", NOT_FOUND.red()));
            return Ok(());
        }
    };

    console.say(&format!("\n{}", "Enter new data for the movie:".magenta()));
    console.say(&"Leave fields empty and press 'Enter' to keep existing values.".yellow().to_string());
    console.say(&format!("{}\n", "The original information is showcased within brackets [].".yellow()));
    // Las listas se reescriben completas: lo que no se repite, se pierde.
    console.say(&"To add or remove elements from genres, ratings, or cast, rewrite the entire list separated by commas.".cyan().to_string());
    console.say(&"For example: To add 'Drama' to genres: Action, Fantasy, Adventure - Write: Action, Fantasy, Adventure, Drama".cyan().to_string());
    console.say(&format!("{}\n", "To remove 'Adventure' from genres, write: Action, Fantasy".cyan()));

    let new_title = edit_field(console, "New title", movie.title())?;
    let new_director = edit_field(console, "New director", movie.director().unwrap_or(""))?;
    let previous_year = movie.release_year().map(|y| y.to_string()).unwrap_or_default();
    let new_year_raw = edit_field(console, "New release year", &previous_year)?;
    let new_genres_raw = edit_field(console, "New genres", &join_list(movie.genres()))?;
    let new_ratings_raw = edit_field(console, "New ratings", &join_list(movie.ratings()))?;
    let new_cast_raw = edit_field(console, "New cast", &join_list(movie.cast()))?;

    let release_year = match parse_year(&new_year_raw) {
        Ok(year) => year,
        Err(e) => {
            report_validation(console, &e);
            return Ok(());
        }
    };
    let ratings = match parse_rating_list(&new_ratings_raw) {
        Ok(ratings) => ratings,
        Err(e) => {
            report_validation(console, &e);
            return Ok(());
        }
    };
    if let Err(e) = movie.set_title(&new_title) {
        report_validation(console, &e);
        return Ok(());
    }
    movie.set_director(parse_optional_text(&new_director));
    movie.set_release_year(release_year);
    movie.set_genres(parse_text_list(&new_genres_raw));
    movie.set_ratings(ratings);
    movie.set_cast(parse_text_list(&new_cast_raw));

    store.save(&movie)?;
    log::debug!("updated movie {}", movie.id());
    console.say(&format!("\n{}\n", "Movie updated successfully.".green()));
    Ok(())
}

/// Prompt de edición `[anterior] - etiqueta:`; en blanco conserva el valor.
fn edit_field(console: &mut dyn Console, label: &str, previous: &str) -> Result<String, CatalogError> {
    let raw = console.prompt(&format!("[{}] - {}: ", previous, label.magenta()))?;
    Ok(resolve_or_keep_previous(&raw, previous))
}

pub fn delete_movie(store: &dyn MovieStore, console: &mut dyn Console) -> Result<(), CatalogError> {
    let title = console.prompt(&format!("{} ",
                                        "Enter the title of the movie you want to delete:".red()))?;
    let movie = match store.find_by_title(&title)? {
        Some(movie) => movie,
        None => {
            console.say(&format!("\n{}\n", NOT_FOUND.red()));
            return Ok(());
        }
    };

    let question = format!("Are you sure you want to delete the movie \"{}\"? (Y/N):", movie.title());
    let confirm = console.prompt(&format!("\n{} ", question.red()))?;
    if confirm.trim().eq_ignore_ascii_case("y") {
        let deleted = store.delete_by_title(&title)?;
        if deleted == 0 {
            // Confirmado pero 0 filas: alguien borró el registro entre medias.
            console.say(&format!("\n{}\n", "Error occurred while deleting the movie.".red()));
        } else {
            log::debug!("deleted movie '{}'", movie.title());
            console.say(&format!("\n{}\n", "Movie deleted successfully.".green()));
        }
    } else {
        console.say(&format!("\n{}\n", "Deletion canceled.".yellow()));
    }
    Ok(())
}
