// Archivo: menu.rs
// Bucle de interacción: pinta el menú de cinco opciones, lee la elección y
// despacha a la operación correspondiente hasta que el operador elige salir.
use crate::{ops, Console};
use colored::Colorize;
use movie_domain::{CatalogError, MovieStore};

pub fn run(store: &dyn MovieStore, console: &mut dyn Console) -> Result<(), CatalogError> {
    loop {
        render_menu(console);
        let choice = console.prompt(&format!("{} ", "Enter your choice:".yellow()))?;
        match choice.trim() {
            "1" => ops::list_movies(store, console)?,
            "2" => ops::add_movie(store, console)?,
            "3" => ops::update_movie(store, console)?,
            "4" => ops::delete_movie(store, console)?,
            "5" => {
                console.say(&format!("\n{}\n", "Exiting...".green()));
                break;
            }
            _ => {
                console.say(&format!("\n{}\n",
                                     "Invalid choice. Please enter a number from 1 to 5.".red()));
            }
        }
    }
    Ok(())
}

fn render_menu(console: &mut dyn Console) {
    console.say(&format!("\n{}", "=======================================".yellow()));
    console.say(&"            Movie Database             ".yellow().to_string());
    console.say(&format!("{}\n", "=======================================".yellow()));
    console.say(&format!("{}\n", "Choose a number (1-5) and press 'Enter'".yellow()));
    console.say(&"1. View all movies".green().to_string());
    console.say(&"2. Add a new movie".cyan().to_string());
    console.say(&"3. Update a movie".magenta().to_string());
    console.say(&"4. Delete a movie".red().to_string());
    console.say(&format!("{}\n", "5. Exit".blue()));
}
