use movie_console::StdConsole;
use std::error::Error;

/// Gestor de catálogo de películas por consola para un único operador.
///
/// Opciones del menú:
/// 1) Ver todas las películas
/// 2) Añadir una película
/// 3) Editar una película (en blanco conserva el valor anterior)
/// 4) Borrar una película (con confirmación)
/// 5) Salir
///
/// La salida limpia es únicamente la opción 5 (código 0); cualquier fallo
/// del almacén o de consola se propaga y termina con código distinto de 0.
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    // Inicializar el almacén (aplica migraciones embebidas si procede)
    let store = movie_persistence::new_from_env().map_err(|e| Box::new(e) as Box<dyn Error>)?;
    log::info!("movie store ready");
    let mut console = StdConsole::new();
    movie_console::run(&store, &mut console)?;
    Ok(())
}
